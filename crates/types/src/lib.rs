//! Validated domain primitives for medrec.
//!
//! These types guarantee their invariants at construction time so the rest
//! of the system never has to re-check them:
//! - [`DiagnosisCode`]: an ICD-style diagnosis code with a conservative
//!   character set, used as the key of the diagnosis mapping and as a weak
//!   reference from entries.
//! - [`HealthCheckRating`]: the closed 0..=3 rating scale recorded by a
//!   health check entry.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Errors that can occur when parsing a diagnosis code.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CodeError {
    /// The input was empty or contained only whitespace.
    #[error("diagnosis code cannot be empty")]
    Empty,
    /// The input exceeded the maximum permitted length.
    #[error("diagnosis code exceeds {0} characters")]
    TooLong(usize),
    /// The input contained characters outside the permitted set.
    #[error("diagnosis code contains invalid characters (only alphanumeric, '.', '-' allowed)")]
    InvalidCharacters,
}

/// A validated diagnosis code such as `M24.2` or `Z57.1`.
///
/// The input is trimmed of surrounding whitespace during construction.
/// Codes are restricted to a conservative ASCII set (alphanumeric plus
/// `.` and `-`) and a bounded length, which covers ICD-style codes without
/// committing to any single terminology's grammar.
///
/// Entries reference diagnoses by code only; a code that resolves to no
/// loaded diagnosis record is a tolerated dangling reference, never an
/// error.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DiagnosisCode(String);

impl DiagnosisCode {
    const MAX_LEN: usize = 16;

    /// Parses a diagnosis code from raw text.
    ///
    /// # Errors
    ///
    /// Returns a [`CodeError`] if the trimmed input is empty, too long, or
    /// contains characters outside the permitted set.
    pub fn parse(input: impl AsRef<str>) -> Result<Self, CodeError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(CodeError::Empty);
        }
        if trimmed.len() > Self::MAX_LEN {
            return Err(CodeError::TooLong(Self::MAX_LEN));
        }

        let ok = trimmed
            .bytes()
            .all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'z' | b'A'..=b'Z' | b'.' | b'-'));
        if !ok {
            return Err(CodeError::InvalidCharacters);
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DiagnosisCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for DiagnosisCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for DiagnosisCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for DiagnosisCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// Errors that can occur when converting a raw rating value.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RatingError {
    /// The value was outside the 0..=3 scale.
    #[error("health check rating must be between 0 and 3, got {0}")]
    OutOfRange(u8),
}

/// Outcome scale of a health check, from best (0) to worst (3).
///
/// The wire representation is the bare integer, matching the record
/// service's JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum HealthCheckRating {
    /// 0, in good health.
    Healthy,
    /// 1, low risk.
    LowRisk,
    /// 2, high risk.
    HighRisk,
    /// 3, critical risk.
    CriticalRisk,
}

impl HealthCheckRating {
    /// Returns the integer wire value.
    pub fn as_u8(self) -> u8 {
        match self {
            HealthCheckRating::Healthy => 0,
            HealthCheckRating::LowRisk => 1,
            HealthCheckRating::HighRisk => 2,
            HealthCheckRating::CriticalRisk => 3,
        }
    }

    /// Display colour used when rendering the rating.
    ///
    /// Mirrors the record viewer convention: green, yellow, red, grey in
    /// increasing order of severity.
    pub fn colour(self) -> &'static str {
        match self {
            HealthCheckRating::Healthy => "green",
            HealthCheckRating::LowRisk => "yellow",
            HealthCheckRating::HighRisk => "red",
            HealthCheckRating::CriticalRisk => "grey",
        }
    }
}

impl TryFrom<u8> for HealthCheckRating {
    type Error = RatingError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(HealthCheckRating::Healthy),
            1 => Ok(HealthCheckRating::LowRisk),
            2 => Ok(HealthCheckRating::HighRisk),
            3 => Ok(HealthCheckRating::CriticalRisk),
            other => Err(RatingError::OutOfRange(other)),
        }
    }
}

impl fmt::Display for HealthCheckRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}

impl Serialize for HealthCheckRating {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(self.as_u8())
    }
}

impl<'de> Deserialize<'de> for HealthCheckRating {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = u8::deserialize(deserializer)?;
        Self::try_from(value).map_err(serde::de::Error::custom)
    }
}
