//! HTTP transport with explicit failure classification.
//!
//! The gateway never inspects error message text; the transport buckets
//! every failure as timeout, unreachable, status, or malformed, and the
//! gateway maps those buckets onto the generation error taxonomy.

use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;
use tracing::debug;

use crate::api_types::{ChatCompletionRequest, ChatCompletionResponse};
use crate::config::GatewayConfig;
use crm_core::GenerateError;

/// Classified transport-level failures.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The request exceeded the configured time budget.
    #[error("request timed out")]
    Timeout,

    /// The provider could not be reached at all.
    #[error("provider unreachable: {0}")]
    Unreachable(String),

    /// The provider answered with a non-success status.
    #[error("provider returned status {status}")]
    Status {
        status: u16,
        payload: serde_json::Value,
    },

    /// The provider answered 2xx but the body did not parse.
    #[error("malformed provider response: {0}")]
    Malformed(String),
}

/// A single chat-completion exchange with the provider.
///
/// Object-safe so tests can substitute a scripted transport.
#[async_trait]
pub trait ChatTransport: Send + Sync {
    async fn execute(
        &self,
        request: &ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, TransportError>;
}

/// Production transport backed by reqwest.
pub struct HttpTransport {
    client: Client,
    api_url: String,
    api_key: String,
}

impl HttpTransport {
    /// Build a transport from the gateway configuration.
    pub fn new(config: &GatewayConfig) -> Result<Self, GenerateError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                GenerateError::Configuration(format!("failed to create HTTP client: {e}"))
            })?;

        Ok(Self {
            client,
            api_url: config.api_url.clone(),
            api_key: config.api_key.clone(),
        })
    }
}

#[async_trait]
impl ChatTransport for HttpTransport {
    async fn execute(
        &self,
        request: &ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, TransportError> {
        let url = format!("{}/v1/chat/completions", self.api_url);

        debug!(model = %request.model, messages = request.messages.len(), "sending chat completion request");

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(classify_send_error)?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            let payload = serde_json::from_str(&error_text)
                .unwrap_or_else(|_| serde_json::json!({ "message": error_text }));
            return Err(TransportError::Status {
                status: status.as_u16(),
                payload,
            });
        }

        response
            .json()
            .await
            .map_err(|e| TransportError::Malformed(e.to_string()))
    }
}

fn classify_send_error(err: reqwest::Error) -> TransportError {
    if err.is_timeout() {
        TransportError::Timeout
    } else {
        TransportError::Unreachable(err.to_string())
    }
}
