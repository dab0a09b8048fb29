//! Patient demographics and record entity.
//!
//! A [`Patient`] is owned exclusively by the normalized store and is only
//! ever mutated by replacing the whole record (copy-on-write). The record
//! service returns partial records from its list endpoint (no `ssn`); the
//! full record is fetched lazily per patient.

use crate::entry::Entry;
use serde::{Deserialize, Serialize};

/// Administrative gender as recorded by the service.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    /// Symbol used when rendering the patient header.
    pub fn symbol(self) -> &'static str {
        match self {
            Gender::Male => "\u{2642}",
            Gender::Female => "\u{2640}",
            Gender::Other => "\u{26b2}",
        }
    }
}

/// One patient record as held in the store.
///
/// `ssn` is absent on partial records coming from the list endpoint;
/// its presence marks a fully-loaded record. `entries` is in chronological
/// addition order: entries are appended, never reordered or deleted.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    /// Unique identifier, immutable after creation. Assigned by the service.
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    pub gender: Gender,
    pub occupation: String,
    /// Omitted entirely by the list endpoint.
    #[serde(default)]
    pub entries: Vec<Entry>,
}

impl Patient {
    /// Whether the full record (including `ssn`) has been loaded.
    pub fn is_fully_loaded(&self) -> bool {
        self.ssn.is_some()
    }
}
