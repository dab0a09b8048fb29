//! HTTP implementation of the record service contract.
//!
//! Paths mirror the record service's REST surface:
//! `GET /patients`, `GET /patients/{id}`, `GET /diagnosis`,
//! `POST /patients/{id}/entries`. The base URL comes from [`AppConfig`],
//! resolved once at startup.

use crate::{RecordApi, RemoteError};
use async_trait::async_trait;
use medrec_core::{AppConfig, Diagnosis, Entry, Patient};
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;

/// reqwest-backed [`RecordApi`].
#[derive(Clone, Debug)]
pub struct HttpRecordService {
    base_url: String,
    http: reqwest::Client,
}

impl HttpRecordService {
    pub fn new(cfg: &AppConfig) -> Self {
        Self {
            base_url: cfg.api_base_url().to_owned(),
            http: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Maps non-success statuses into the boundary taxonomy, then decodes
    /// the JSON body.
    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, RemoteError> {
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(RemoteError::NotFound);
        }
        if status.is_client_error() {
            // Validation rejections carry the server's message in the body.
            let message = response.text().await.unwrap_or_default();
            let message = if message.trim().is_empty() {
                status.to_string()
            } else {
                message
            };
            return Err(RemoteError::ServerValidation(message));
        }
        if !status.is_success() {
            return Err(RemoteError::UnexpectedStatus(status.as_u16()));
        }

        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl RecordApi for HttpRecordService {
    async fn fetch_patient(&self, id: &str) -> Result<Patient, RemoteError> {
        tracing::debug!(patient_id = %id, "fetching patient record");
        let response = self.http.get(self.url(&format!("/patients/{id}"))).send().await?;
        Self::decode(response).await
    }

    async fn fetch_patient_list(&self) -> Result<Vec<Patient>, RemoteError> {
        tracing::debug!("fetching patient list");
        let response = self.http.get(self.url("/patients")).send().await?;
        Self::decode(response).await
    }

    async fn fetch_diagnosis_list(&self) -> Result<Vec<Diagnosis>, RemoteError> {
        tracing::debug!("fetching diagnosis catalogue");
        let response = self.http.get(self.url("/diagnosis")).send().await?;
        Self::decode(response).await
    }

    async fn create_entry(&self, patient_id: &str, entry: &Entry) -> Result<Entry, RemoteError> {
        tracing::debug!(patient_id = %patient_id, kind = entry.kind().to_wire(), "submitting entry");
        let response = self
            .http
            .post(self.url(&format!("/patients/{patient_id}/entries")))
            .json(entry)
            .send()
            .await?;
        Self::decode(response).await
    }
}
