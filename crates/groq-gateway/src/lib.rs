//! Groq-backed generation gateway.
//!
//! This crate provides the [`Generator`] implementation that talks to the
//! Groq chat-completions API, plus the prompt rendering that turns CRM
//! snapshots into natural-language context.
//!
//! # Guarantees
//!
//! - At most one upstream attempt per request, bounded by a 60-second
//!   timeout; no retries.
//! - Failure classification comes from the HTTP client (timeout /
//!   transport / status bucket), never from sniffing error message text.
//! - Combined with [`Generator::generate_or_fallback`], a caller always
//!   receives usable text for timeouts and provider outages.
//!
//! # Example
//!
//! ```rust,no_run
//! use crm_core::{ChatMessage, FallbackTemplate, GenerationRequest, Generator};
//! use groq_gateway::GroqGateway;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let gateway = GroqGateway::from_env()?;
//!     let request = GenerationRequest::new(vec![ChatMessage::user("Summarize this account")]);
//!     let result = gateway
//!         .generate_or_fallback(request, FallbackTemplate::ServiceBusy)
//!         .await?;
//!     println!("{}", result.reply);
//!     Ok(())
//! }
//! ```

mod api_types;
mod config;
mod gateway;
pub mod prompt;
mod transport;

pub use api_types::{ApiErrorBody, ChatCompletionRequest, ChatCompletionResponse};
pub use config::GatewayConfig;
pub use gateway::GroqGateway;
pub use transport::{ChatTransport, HttpTransport, TransportError};

// Re-export core types for convenience
pub use crm_core::{
    async_trait, ChatMessage, FallbackTemplate, GenerateError, GenerationRequest,
    GenerationResult, Generator,
};
