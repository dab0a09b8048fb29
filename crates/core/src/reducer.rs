//! Normalized state and the pure reducer.
//!
//! [`State`] keys patients by id and diagnoses by code so the same entity
//! is never held twice. [`reduce`] is a pure transition function: it never
//! mutates the previous state value and returns a fresh one, so every
//! published snapshot is internally consistent.

use crate::diagnosis::Diagnosis;
use crate::entry::Entry;
use crate::patient::Patient;
use medrec_types::DiagnosisCode;
use std::collections::HashMap;

/// The normalized view of everything fetched so far.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct State {
    pub patients: HashMap<String, Patient>,
    pub diagnoses: HashMap<DiagnosisCode, Diagnosis>,
}

/// A typed state transition.
///
/// The set is closed; every consumption site matches exhaustively, so a new
/// action kind is a compile error at each of them rather than a silently
/// ignored runtime tag.
#[derive(Clone, Debug)]
pub enum Action {
    /// Merge a (possibly partial) patient list into the store. Ids already
    /// present keep their stored value: state wins over the incoming list,
    /// preserving any richer already-loaded record.
    SetPatientList(Vec<Patient>),
    /// Insert or overwrite one patient.
    AddPatient(Patient),
    /// Insert or overwrite one patient. Same transition as [`Action::AddPatient`],
    /// kept distinct for call-site clarity.
    UpdatePatient(Patient),
    /// Replace the diagnosis catalogue wholesale.
    SetDiagnosisList(Vec<Diagnosis>),
    /// Append one entry to an already-loaded patient.
    AddEntry { patient_id: String, entry: Entry },
}

/// Contract violations raised by the reducer.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StoreError {
    /// `AddEntry` targeted a patient id that is not loaded. The caller is
    /// expected to have loaded the patient first; a phantom patient is
    /// never created.
    #[error("no patient with id {0:?} is loaded")]
    UnknownPatient(String),
}

/// Applies `action` to `state`, returning the next state.
///
/// # Errors
///
/// Returns [`StoreError::UnknownPatient`] when `AddEntry` targets an id
/// absent from the store; `state` itself is left untouched either way.
pub fn reduce(state: &State, action: Action) -> Result<State, StoreError> {
    let mut next = state.clone();

    match action {
        Action::SetPatientList(patients) => {
            for patient in patients {
                next.patients.entry(patient.id.clone()).or_insert(patient);
            }
        }
        Action::AddPatient(patient) | Action::UpdatePatient(patient) => {
            next.patients.insert(patient.id.clone(), patient);
        }
        Action::SetDiagnosisList(diagnoses) => {
            next.diagnoses = diagnoses
                .into_iter()
                .map(|diagnosis| (diagnosis.code.clone(), diagnosis))
                .collect();
        }
        Action::AddEntry { patient_id, entry } => {
            let patient = next
                .patients
                .get_mut(&patient_id)
                .ok_or(StoreError::UnknownPatient(patient_id))?;
            patient.entries.push(entry);
        }
    }

    Ok(next)
}
