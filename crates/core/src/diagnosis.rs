//! Diagnosis catalogue entity.

use medrec_types::DiagnosisCode;
use serde::{Deserialize, Serialize};

/// One diagnosis from the service's catalogue.
///
/// Immutable once loaded; keyed by [`DiagnosisCode`] in the store.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct Diagnosis {
    pub code: DiagnosisCode,
    pub name: String,
}
