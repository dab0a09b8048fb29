//! Session orchestration.
//!
//! A [`Session`] ties the record service client to the store: it decides
//! when a fetch is needed, threads fetched data through the reducer, and
//! enforces the submission rule: an entry is dispatched into the store
//! only after the service has persisted it and assigned its durable id.
//! A failed submission never reaches the store.

use medrec_client::{RecordApi, RemoteError};
use medrec_core::{
    build_entry, Action, Entry, EntryForm, NoticeBoard, RecordStore, StoreError, ValidationFailure,
};

/// Failures surfaced by session operations.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("entry validation failed: {0}")]
    Validation(#[from] ValidationFailure),
    #[error("record service error: {0}")]
    Remote(#[from] RemoteError),
    #[error("store rejected the update: {0}")]
    Store(#[from] StoreError),
}

/// One user's working session against the record service.
pub struct Session<A> {
    api: A,
    store: RecordStore,
    notices: NoticeBoard,
}

impl<A: RecordApi> Session<A> {
    pub fn new(api: A, store: RecordStore, notices: NoticeBoard) -> Self {
        Self {
            api,
            store,
            notices,
        }
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn notices(&self) -> &NoticeBoard {
        &self.notices
    }

    /// Fetches the patient list and merges it into the store. Already
    /// loaded records keep their stored value (state-wins merge).
    pub async fn load_patient_list(&mut self) -> Result<(), SessionError> {
        let patients = self.api.fetch_patient_list().await?;
        tracing::info!(count = patients.len(), "patient list loaded");
        self.store.dispatch(Action::SetPatientList(patients))?;
        Ok(())
    }

    /// Makes sure the full record for `id` is in the store, fetching it
    /// when the patient is unknown or only partially loaded (no ssn).
    pub async fn ensure_patient(&mut self, id: &str) -> Result<(), SessionError> {
        let fully_loaded = self
            .store
            .snapshot()
            .patients
            .get(id)
            .is_some_and(|patient| patient.is_fully_loaded());
        if fully_loaded {
            return Ok(());
        }

        match self.api.fetch_patient(id).await {
            Ok(patient) => {
                tracing::info!(patient_id = %id, "patient record loaded");
                self.store.dispatch(Action::UpdatePatient(patient))?;
                Ok(())
            }
            Err(err) => {
                self.notices.post(format!("Error: {err}"));
                Err(err.into())
            }
        }
    }

    /// Makes sure the diagnosis catalogue is loaded, fetching it when the
    /// mapping is empty.
    pub async fn ensure_diagnoses(&mut self) -> Result<(), SessionError> {
        if !self.store.snapshot().diagnoses.is_empty() {
            return Ok(());
        }

        let diagnoses = self.api.fetch_diagnosis_list().await?;
        tracing::info!(count = diagnoses.len(), "diagnosis catalogue loaded");
        self.store.dispatch(Action::SetDiagnosisList(diagnoses))?;
        Ok(())
    }

    /// Builds an entry from raw form values, persists it, and appends the
    /// service's returned entry to the patient's history.
    ///
    /// On any remote failure a transient notice is posted and nothing is
    /// dispatched; the store never holds an entry the service did not
    /// accept.
    ///
    /// # Errors
    ///
    /// [`SessionError::Validation`] for field-level form problems,
    /// [`SessionError::Remote`] when the service rejects or is unreachable.
    pub async fn submit_entry(
        &mut self,
        patient_id: &str,
        form: &EntryForm,
    ) -> Result<Entry, SessionError> {
        let entry = build_entry(form)?;
        self.ensure_patient(patient_id).await?;

        match self.api.create_entry(patient_id, &entry).await {
            Ok(saved) => {
                self.store.dispatch(Action::AddEntry {
                    patient_id: patient_id.to_owned(),
                    entry: saved.clone(),
                })?;
                Ok(saved)
            }
            Err(err) => {
                self.notices.post(format!("Error: {err}"));
                Err(err.into())
            }
        }
    }
}
