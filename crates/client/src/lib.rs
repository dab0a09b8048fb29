//! Record service boundary.
//!
//! This crate owns the contract with the remote record service and its HTTP
//! implementation. The core never talks to the network directly; it goes
//! through the [`RecordApi`] trait so the transport stays a thin,
//! replaceable collaborator (and a hand-rolled stub in tests).

pub mod http;

use async_trait::async_trait;
use medrec_core::{Diagnosis, Entry, Patient};

pub use http::HttpRecordService;

/// Errors surfaced by the record service boundary.
///
/// On entry creation any of these means "do not dispatch": a failed
/// submission must never be inserted into the store speculatively.
#[derive(Debug, thiserror::Error)]
pub enum RemoteError {
    /// The service has no record for the requested id.
    #[error("record not found")]
    NotFound,
    /// Transport-level failure (connection, timeout, malformed body).
    #[error("network failure: {0}")]
    Network(#[from] reqwest::Error),
    /// The service rejected the payload; carries the server's message.
    #[error("server rejected the request: {0}")]
    ServerValidation(String),
    /// Any other non-success response.
    #[error("unexpected response status: {0}")]
    UnexpectedStatus(u16),
}

/// Abstract contract with the remote record service.
#[async_trait]
pub trait RecordApi {
    /// Fetches one full patient record.
    async fn fetch_patient(&self, id: &str) -> Result<Patient, RemoteError>;

    /// Fetches the (possibly partial) patient list.
    async fn fetch_patient_list(&self) -> Result<Vec<Patient>, RemoteError>;

    /// Fetches the diagnosis catalogue.
    async fn fetch_diagnosis_list(&self) -> Result<Vec<Diagnosis>, RemoteError>;

    /// Persists a locally built entry for `patient_id`.
    ///
    /// The service assigns the durable entry id; the returned entry is the
    /// one to dispatch into the store.
    async fn create_entry(&self, patient_id: &str, entry: &Entry) -> Result<Entry, RemoteError>;
}
