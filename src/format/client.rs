//! HTTP client for the commit message generation endpoint.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::FormatError;

/// Well-known local endpoint of the message generation service.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000/generate_commit_message";

/// Request body sent to the generation service.
#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    diff: &'a str,
}

/// Response body returned by the generation service.
///
/// A missing `message` key deserializes to `None` and is surfaced to callers
/// as an empty message rather than an error.
#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    message: Option<String>,
}

/// Turns a diff into a candidate commit message.
#[async_trait]
pub trait Formatter {
    async fn format(&self, diff: &str) -> Result<String, FormatError>;
}

/// Formatter backed by the HTTP generation service.
///
/// One attempt, no retry: transport failures, non-2xx responses, and
/// malformed bodies all abort the workflow.
pub struct HttpFormatter {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpFormatter {
    /// Formatter pointed at the default local endpoint.
    pub fn new() -> Self {
        Self::with_endpoint(DEFAULT_ENDPOINT)
    }

    /// Formatter pointed at a non-default endpoint (used by tests).
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

impl Default for HttpFormatter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Formatter for HttpFormatter {
    async fn format(&self, diff: &str) -> Result<String, FormatError> {
        debug!(
            "Requesting commit message for {} bytes of diff from {}",
            diff.len(),
            self.endpoint
        );

        let response = self
            .client
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .json(&GenerateRequest { diff })
            .send()
            .await
            .map_err(FormatError::RequestFailed)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FormatError::BadStatus(status));
        }

        let body: GenerateResponse = response.json().await.map_err(FormatError::InvalidBody)?;
        Ok(body.message.unwrap_or_default())
    }
}
