//! Store access facade.
//!
//! [`RecordStore`] is the single entry point collaborators use to read and
//! update the normalized state. It is constructed once at process start and
//! threaded explicitly into whatever needs it; there is no ambient global
//! store.
//!
//! Internally the state lives in a `tokio::sync::watch` channel: each
//! dispatch runs the pure reducer and publishes the complete new state in
//! one step, so an observer can only ever see a fully-applied transition.

use crate::reducer::{reduce, Action, State, StoreError};
use tokio::sync::watch;

/// Handle to the normalized store.
pub struct RecordStore {
    tx: watch::Sender<State>,
}

impl RecordStore {
    /// Creates a store holding the empty initial state.
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(State::default());
        Self { tx }
    }

    /// Threads `action` through the reducer and republishes the resulting
    /// state to all observers.
    ///
    /// Dispatches are processed one at a time; two `AddEntry` dispatches
    /// for the same patient both apply, in dispatch order.
    ///
    /// # Errors
    ///
    /// Returns the reducer's [`StoreError`] unchanged. A contract violation
    /// (an entry for a patient that was never loaded) indicates a
    /// coordination bug upstream, so it is logged loudly here rather than
    /// swallowed; the published state is unchanged in that case.
    pub fn dispatch(&self, action: Action) -> Result<(), StoreError> {
        let current = self.tx.borrow().clone();
        match reduce(&current, action) {
            Ok(next) => {
                self.tx.send_replace(next);
                Ok(())
            }
            Err(err) => {
                tracing::error!(error = %err, "store dispatch rejected; state unchanged");
                Err(err)
            }
        }
    }

    /// Returns a read-only snapshot of the current state.
    pub fn snapshot(&self) -> State {
        self.tx.borrow().clone()
    }

    /// Subscribes to state snapshots. Every value seen by the receiver is
    /// the result of a whole transition.
    pub fn subscribe(&self) -> watch::Receiver<State> {
        self.tx.subscribe()
    }
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::{Entry, HealthCheckEntry};
    use crate::patient::{Gender, Patient};
    use medrec_types::HealthCheckRating;

    fn full_patient(id: &str) -> Patient {
        Patient {
            id: id.into(),
            name: "Alice".into(),
            ssn: Some("010101-123A".into()),
            date_of_birth: None,
            gender: Gender::Female,
            occupation: "Engineer".into(),
            entries: vec![],
        }
    }

    fn health_check(id: &str, rating: u8) -> Entry {
        Entry::HealthCheck(HealthCheckEntry {
            id: id.into(),
            date: "2023-03-01".into(),
            specialist: "MD House".into(),
            description: "control visit".into(),
            diagnosis_codes: None,
            health_check_rating: HealthCheckRating::try_from(rating).expect("rating in range"),
        })
    }

    #[test]
    fn test_dispatch_publishes_to_observers() {
        let store = RecordStore::new();
        let rx = store.subscribe();

        store
            .dispatch(Action::AddPatient(full_patient("p1")))
            .expect("dispatch should succeed");

        assert!(rx.borrow().patients.contains_key("p1"));
        assert_eq!(store.snapshot().patients.len(), 1);
    }

    #[test]
    fn test_failed_dispatch_leaves_published_state_unchanged() {
        let store = RecordStore::new();
        store
            .dispatch(Action::AddPatient(full_patient("p1")))
            .expect("seed should succeed");
        let before = store.snapshot();

        store
            .dispatch(Action::AddEntry {
                patient_id: "ghost".into(),
                entry: health_check("e1", 0),
            })
            .expect_err("unknown patient should be rejected");

        assert_eq!(store.snapshot(), before);
    }

    #[test]
    fn test_two_entry_scenario_appends_in_order() {
        let store = RecordStore::new();
        store
            .dispatch(Action::AddPatient(full_patient("p1")))
            .expect("seed should succeed");

        let first = health_check("e1", 2);
        let second = health_check("e2", 1);
        for entry in [first.clone(), second.clone()] {
            store
                .dispatch(Action::AddEntry {
                    patient_id: "p1".into(),
                    entry,
                })
                .expect("append should succeed");
        }

        let snapshot = store.snapshot();
        assert_eq!(snapshot.patients["p1"].entries, vec![first, second]);
    }

    #[test]
    fn test_snapshot_is_detached_from_later_dispatches() {
        let store = RecordStore::new();
        let before = store.snapshot();

        store
            .dispatch(Action::AddPatient(full_patient("p1")))
            .expect("dispatch should succeed");

        assert!(before.patients.is_empty());
    }
}
