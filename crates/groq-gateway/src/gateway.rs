//! GroqGateway implementation.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::api_types::{ApiErrorBody, ChatCompletionRequest};
use crate::config::GatewayConfig;
use crate::transport::{ChatTransport, HttpTransport, TransportError};
use crm_core::{GenerateError, GenerationRequest, GenerationResult, Generator};

/// A [`Generator`] backed by the Groq chat-completions API.
///
/// Makes at most one upstream attempt per request, bounded by the
/// configured timeout. Pair with
/// [`Generator::generate_or_fallback`] when the caller must always
/// receive usable text.
pub struct GroqGateway {
    transport: Arc<dyn ChatTransport>,
    config: GatewayConfig,
}

impl GroqGateway {
    /// Create a gateway with the production HTTP transport.
    pub fn new(config: GatewayConfig) -> Result<Self, GenerateError> {
        let transport = Arc::new(HttpTransport::new(&config)?);
        info!(
            model = %config.model,
            configured = config.is_configured(),
            "GroqGateway initialized"
        );
        Ok(Self { transport, config })
    }

    /// Create a gateway from environment variables.
    ///
    /// See [`GatewayConfig::from_env`] for the variables involved.
    pub fn from_env() -> Result<Self, GenerateError> {
        Self::new(GatewayConfig::from_env())
    }

    /// Create a gateway with a custom transport. Used by tests.
    pub fn with_transport(config: GatewayConfig, transport: Arc<dyn ChatTransport>) -> Self {
        Self { transport, config }
    }

    /// Get the configuration.
    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }
}

#[async_trait]
impl Generator for GroqGateway {
    async fn generate(&self, request: GenerationRequest) -> Result<GenerationResult, GenerateError> {
        // Credential check comes first so a misconfigured deployment
        // never produces a network call.
        if !self.config.is_configured() {
            return Err(GenerateError::Configuration(
                "GROQ_API_KEY is not set".to_string(),
            ));
        }

        let wire_request = ChatCompletionRequest {
            model: request
                .model
                .unwrap_or_else(|| self.config.model.clone()),
            messages: request.messages,
        };

        let completion = self
            .transport
            .execute(&wire_request)
            .await
            .map_err(classify)?;

        let reply = completion
            .choices
            .first()
            .and_then(|choice| choice.message.content.as_deref())
            .unwrap_or("")
            .trim()
            .to_string();

        if let Some(usage) = &completion.usage {
            debug!(%usage, "provider token usage");
        }

        Ok(GenerationResult::provider(reply, completion.usage))
    }

    fn name(&self) -> &str {
        "GroqGateway"
    }
}

/// Map classified transport failures onto the generation taxonomy.
///
/// Timeouts and unreachable/decommissioned providers are recoverable
/// (the caller's fallback path applies); other status responses surface
/// with the provider payload attached.
fn classify(err: TransportError) -> GenerateError {
    match err {
        TransportError::Timeout => GenerateError::Timeout,
        TransportError::Unreachable(msg) => GenerateError::Unavailable(msg),
        TransportError::Malformed(msg) => GenerateError::Unavailable(msg),
        TransportError::Status { status, payload } => {
            if is_decommissioned(&payload) {
                GenerateError::Unavailable("model decommissioned".to_string())
            } else {
                GenerateError::Provider { status, payload }
            }
        }
    }
}

fn is_decommissioned(payload: &serde_json::Value) -> bool {
    serde_json::from_value::<ApiErrorBody>(payload.clone())
        .is_ok_and(|body| body.error.code.as_deref() == Some("model_decommissioned"))
}
