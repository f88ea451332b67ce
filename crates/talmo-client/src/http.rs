//! Client for the prediction backend's schema, predict, and health endpoints.

use std::collections::{BTreeMap, HashSet};

use serde::Deserialize;
use talmo_core::{FieldDescriptor, PredictionResult};
use thiserror::Error;
use tracing::info;

const FALLBACK_PREDICT_MESSAGE: &str = "prediction request failed";

/// Schema fetch/parse failure. The caller should suggest checking the API
/// address and that the backend is running.
#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("schema endpoint returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("schema response contained no fields")]
    Empty,
    #[error("schema repeats field id '{0}'")]
    DuplicateField(String),
}

/// Prediction call failure. `Server` carries the backend's own error
/// message when the response body provided one.
#[derive(Error, Debug)]
pub enum RequestError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned {status}: {message}")]
    Server { status: u16, message: String },
}

/// HTTP client for the prediction API.
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Deserialize)]
struct SchemaResponse {
    #[serde(default)]
    fields: Vec<FieldDescriptor>,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

#[derive(Deserialize)]
struct HealthResponse {
    status: String,
}

impl ApiClient {
    /// Create a client for the given API base URL.
    ///
    /// `base_url` should be like `http://127.0.0.1:9999`; trailing slashes
    /// are stripped.
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the form field descriptors.
    ///
    /// Fails if the response is not a 2xx, the `fields` list is missing or
    /// empty, or a field id appears twice.
    pub async fn fetch_schema(&self) -> Result<Vec<FieldDescriptor>, SchemaError> {
        let url = format!("{}/api/schema/kr", self.base_url);
        info!(url = %url, "fetching form schema");
        let resp = self.client.get(&url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(SchemaError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let schema: SchemaResponse = resp.json().await?;
        if schema.fields.is_empty() {
            return Err(SchemaError::Empty);
        }
        let mut seen = HashSet::new();
        for field in &schema.fields {
            if !seen.insert(field.id.as_str()) {
                return Err(SchemaError::DuplicateField(field.id.clone()));
            }
        }
        info!(count = schema.fields.len(), "schema loaded");
        Ok(schema.fields)
    }

    /// Submit a filled payload and await the prediction result.
    ///
    /// On a non-2xx response the server's `{"error": "..."}` message is
    /// surfaced when present, with a generic fallback otherwise.
    pub async fn predict(
        &self,
        payload: &BTreeMap<String, String>,
    ) -> Result<PredictionResult, RequestError> {
        let url = format!("{}/api/predict/kr", self.base_url);
        info!(url = %url, fields = payload.len(), "submitting prediction request");
        let resp = self.client.post(&url).json(payload).send().await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(RequestError::Server {
                status: status.as_u16(),
                message: server_message(&body),
            });
        }

        let result: PredictionResult = resp.json().await?;
        info!(
            label = %result.current.label,
            probability_percent = result.current.probability_percent,
            "prediction received"
        );
        Ok(result)
    }

    /// Probe the backend's health endpoint, returning its reported status.
    pub async fn health(&self) -> Result<String, RequestError> {
        let url = format!("{}/api/health", self.base_url);
        info!(url = %url, "checking API health");
        let resp = self.client.get(&url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(RequestError::Server {
                status: status.as_u16(),
                message: server_message(&body),
            });
        }
        let health: HealthResponse = resp.json().await?;
        Ok(health.status)
    }
}

/// Extract the backend's error message from a failure body, falling back
/// to a generic message when the body is not `{"error": "..."}`.
fn server_message(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .unwrap_or_else(|| FALLBACK_PREDICT_MESSAGE.to_string())
}
