//! Mock generator implementations for engagement flows.
//!
//! This crate provides mock implementations of the `Generator` trait for testing:
//! - `ScriptedGenerator` - Replies with a canned message and records requests
//! - `FailingGenerator` - Fails every call with a chosen error
//!
//! For production text generation, use the `groq-gateway` crate instead.
//!
//! # Example
//!
//! ```rust
//! use mock_gateway::{ChatMessage, GenerationRequest, Generator, ScriptedGenerator};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), mock_gateway::GenerateError> {
//!     let gateway = ScriptedGenerator::new("Thanks for reaching out!");
//!
//!     let request = GenerationRequest::new(vec![ChatMessage::user("Hello!")]);
//!
//!     let result = gateway.generate(request).await?;
//!     println!("Reply: {}", result.reply);
//!     Ok(())
//! }
//! ```

mod failing;
mod scripted;

// Re-export core types for convenience
pub use crm_core::{
    async_trait, ChatMessage, FallbackTemplate, GenerateError, GenerationRequest,
    GenerationResult, Generator,
};

pub use failing::FailingGenerator;
pub use scripted::ScriptedGenerator;
