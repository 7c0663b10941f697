//! Pass-through to the provider's translate endpoint.

use thiserror::Error;
use tracing::info;

use crate::request::TranslationRequest;

/// The translate call could not be completed: either the provider was
/// unreachable or it answered with a non-success status.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("Failed to reach translation provider: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Translation provider error ({status}): {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
}

/// Sends validated requests to `POST {base}/translate` and returns the
/// response body verbatim.
pub struct TranslationForwarder {
    client: reqwest::Client,
    base_url: String,
}

impl TranslationForwarder {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Forwards the four request fields as the JSON payload and returns the
    /// translated text with no transformation or re-encoding.
    pub async fn translate(&self, request: &TranslationRequest) -> Result<String, UpstreamError> {
        let url = format!("{}/translate", self.base_url);
        let response = self.client.post(&url).json(request).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(UpstreamError::Status { status, body });
        }

        let translated = response.text().await?;
        info!("Content translated ({} bytes)", translated.len());
        Ok(translated)
    }
}
