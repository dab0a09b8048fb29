//! Runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into
//! services. Nothing reads process-wide environment variables during
//! operation, which keeps behaviour consistent across async tasks and test
//! harnesses.

use std::time::Duration;

/// How long a transient notice stays visible. Matches the record viewer's
/// five-second auto-clear.
const DEFAULT_NOTICE_TTL: Duration = Duration::from_secs(5);

const DEFAULT_API_BASE_URL: &str = "http://localhost:3001/api";

/// Errors raised while resolving configuration.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("api base url cannot be empty")]
    EmptyApiBaseUrl,
    #[error("invalid notice ttl: {0:?}")]
    InvalidNoticeTtl(String),
}

/// Application configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct AppConfig {
    api_base_url: String,
    notice_ttl: Duration,
}

impl AppConfig {
    /// Creates a configuration from explicit values.
    ///
    /// The base URL is trimmed and any trailing slashes are removed so
    /// endpoint paths can be joined with a single `/`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiBaseUrl`] when the URL is empty or
    /// whitespace-only.
    pub fn new(api_base_url: impl AsRef<str>, notice_ttl: Duration) -> Result<Self, ConfigError> {
        let trimmed = api_base_url.as_ref().trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(ConfigError::EmptyApiBaseUrl);
        }

        Ok(Self {
            api_base_url: trimmed.to_owned(),
            notice_ttl,
        })
    }

    /// Resolves configuration from the environment:
    /// `MEDREC_API_URL` (default `http://localhost:3001/api`) and
    /// `MEDREC_NOTICE_TTL_SECS` (default 5).
    ///
    /// Call this once in `main`; services receive the resolved value.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when a variable is present but invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_base_url =
            std::env::var("MEDREC_API_URL").unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_owned());

        let notice_ttl = match std::env::var("MEDREC_NOTICE_TTL_SECS") {
            Ok(raw) => {
                let secs = raw
                    .trim()
                    .parse::<u64>()
                    .map_err(|_| ConfigError::InvalidNoticeTtl(raw.clone()))?;
                Duration::from_secs(secs)
            }
            Err(_) => DEFAULT_NOTICE_TTL,
        };

        Self::new(api_base_url, notice_ttl)
    }

    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    pub fn notice_ttl(&self) -> Duration {
        self.notice_ttl
    }
}
