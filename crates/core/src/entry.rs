//! The medical entry variant family.
//!
//! An [`Entry`] is one clinical event recorded for a patient: a health
//! check, a hospital visit, or an occupational healthcare visit. The three
//! shapes are mutually exclusive and selected by the `type` discriminant on
//! the wire, which maps onto a closed Rust enum so every consumption site
//! is exhaustively matched at compile time.
//!
//! Diagnosis codes on an entry are weak references into the diagnosis
//! catalogue: lookup-only, never ownership, and a dangling code is
//! tolerated for display.

use medrec_types::{DiagnosisCode, HealthCheckRating};
use serde::{Deserialize, Serialize};

/// Discharge details of a hospital visit. Both fields are required
/// together, never independently.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct Discharge {
    pub date: String,
    pub criteria: String,
}

/// Sick leave granted during an occupational healthcare visit.
///
/// Only ever constructed with both dates present; a half-filled range is
/// dropped by the form builder before it gets here.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SickLeave {
    pub start_date: String,
    pub end_date: String,
}

/// A routine health check.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HealthCheckEntry {
    pub id: String,
    pub date: String,
    pub specialist: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnosis_codes: Option<Vec<DiagnosisCode>>,
    pub health_check_rating: HealthCheckRating,
}

/// A hospital visit ending in a discharge.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HospitalEntry {
    pub id: String,
    pub date: String,
    pub specialist: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnosis_codes: Option<Vec<DiagnosisCode>>,
    pub discharge: Discharge,
}

/// A visit arranged through the patient's employer.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OccupationalHealthcareEntry {
    pub id: String,
    pub date: String,
    pub specialist: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnosis_codes: Option<Vec<DiagnosisCode>>,
    pub employer_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sick_leave: Option<SickLeave>,
}

/// One clinical event in a patient's history.
///
/// Internally tagged on the wire: the `type` field selects the variant and
/// no entry may carry fields belonging to another variant.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(tag = "type")]
pub enum Entry {
    HealthCheck(HealthCheckEntry),
    Hospital(HospitalEntry),
    OccupationalHealthcare(OccupationalHealthcareEntry),
}

/// The entry discriminant, separated from the payload for places that need
/// to talk about the kind alone (form dispatch, rendering labels).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryKind {
    HealthCheck,
    Hospital,
    OccupationalHealthcare,
}

impl EntryKind {
    /// Convert to the wire discriminant string.
    pub fn to_wire(self) -> &'static str {
        match self {
            EntryKind::HealthCheck => "HealthCheck",
            EntryKind::Hospital => "Hospital",
            EntryKind::OccupationalHealthcare => "OccupationalHealthcare",
        }
    }

    /// Parse from the wire discriminant string.
    pub fn from_wire(s: &str) -> Option<Self> {
        match s {
            "HealthCheck" => Some(EntryKind::HealthCheck),
            "Hospital" => Some(EntryKind::Hospital),
            "OccupationalHealthcare" => Some(EntryKind::OccupationalHealthcare),
            _ => None,
        }
    }
}

impl Entry {
    pub fn kind(&self) -> EntryKind {
        match self {
            Entry::HealthCheck(_) => EntryKind::HealthCheck,
            Entry::Hospital(_) => EntryKind::Hospital,
            Entry::OccupationalHealthcare(_) => EntryKind::OccupationalHealthcare,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Entry::HealthCheck(e) => &e.id,
            Entry::Hospital(e) => &e.id,
            Entry::OccupationalHealthcare(e) => &e.id,
        }
    }

    pub fn date(&self) -> &str {
        match self {
            Entry::HealthCheck(e) => &e.date,
            Entry::Hospital(e) => &e.date,
            Entry::OccupationalHealthcare(e) => &e.date,
        }
    }

    pub fn specialist(&self) -> &str {
        match self {
            Entry::HealthCheck(e) => &e.specialist,
            Entry::Hospital(e) => &e.specialist,
            Entry::OccupationalHealthcare(e) => &e.specialist,
        }
    }

    pub fn description(&self) -> &str {
        match self {
            Entry::HealthCheck(e) => &e.description,
            Entry::Hospital(e) => &e.description,
            Entry::OccupationalHealthcare(e) => &e.description,
        }
    }

    /// Diagnosis codes recorded on this entry, if any.
    ///
    /// `None` means "no diagnoses recorded"; an entry never carries an
    /// empty list on the wire.
    pub fn diagnosis_codes(&self) -> Option<&[DiagnosisCode]> {
        let codes = match self {
            Entry::HealthCheck(e) => &e.diagnosis_codes,
            Entry::Hospital(e) => &e.diagnosis_codes,
            Entry::OccupationalHealthcare(e) => &e.diagnosis_codes,
        };
        codes.as_deref()
    }
}
