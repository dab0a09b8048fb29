//! # medrec core
//!
//! Core domain logic for the medrec patient record client:
//! - The entity model: [`Patient`], [`Diagnosis`] and the closed [`Entry`]
//!   variant family (health check, hospital, occupational healthcare).
//! - The entry form builder: [`build_entry`] turns raw form values into a
//!   well-typed entry or a structured [`ValidationFailure`].
//! - The normalized store: a pure [`reduce`] function over typed
//!   [`Action`]s, fronted by the [`RecordStore`] facade.
//! - Transient user notices and startup-resolved configuration.
//!
//! **No transport concerns**: HTTP access to the record service lives in
//! `medrec-client`; presentation lives in the `medrec` binary.

pub mod config;
pub mod diagnosis;
pub mod entry;
pub mod form;
pub mod notice;
pub mod patient;
pub mod reducer;
pub mod store;

pub use config::{AppConfig, ConfigError};
pub use diagnosis::Diagnosis;
pub use entry::{
    Discharge, Entry, EntryKind, HealthCheckEntry, HospitalEntry, OccupationalHealthcareEntry,
    SickLeave,
};
pub use form::{build_entry, EntryForm, ValidationFailure};
pub use notice::NoticeBoard;
pub use patient::{Gender, Patient};
pub use reducer::{reduce, Action, State, StoreError};
pub use store::RecordStore;

pub use medrec_types::{CodeError, DiagnosisCode, HealthCheckRating, RatingError};
