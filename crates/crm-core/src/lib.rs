//! Core types and the generation contract for the Meridian CRM engine.
//!
//! This crate provides the shared foundation for the engagement scoring
//! pipeline and the text-generation gateway. It defines:
//!
//! - [`ContactSnapshot`] / [`DealRecord`] / [`ActivityRecord`] - read-only
//!   projections of relationship history supplied by the persistence layer
//! - [`EngagementMetrics`] / [`ScoreResult`] / [`Priority`] - derived
//!   scoring output types
//! - [`Generator`] - the trait all generation backends implement
//! - [`GenerateError`] - the failure taxonomy for generation operations
//! - [`FallbackTemplate`] - deterministic replies for degraded mode
//!
//! # Example
//!
//! ```rust
//! use crm_core::{async_trait, GenerateError, GenerationRequest, GenerationResult, Generator};
//!
//! struct CannedGenerator;
//!
//! #[async_trait]
//! impl Generator for CannedGenerator {
//!     async fn generate(&self, _request: GenerationRequest) -> Result<GenerationResult, GenerateError> {
//!         Ok(GenerationResult::provider("Hello!", None))
//!     }
//!
//!     fn name(&self) -> &str {
//!         "CannedGenerator"
//!     }
//! }
//! ```

mod contact;
mod error;
mod fallback;
mod message;
mod score;
mod trait_def;

pub use contact::{ActivityKind, ActivityRecord, ContactSnapshot, DealRecord, DealStage};
pub use error::GenerateError;
pub use fallback::FallbackTemplate;
pub use message::{ChatMessage, GenerationRequest, GenerationResult};
pub use score::{EngagementMetrics, Priority, ScoreResult};
pub use trait_def::Generator;

// Re-export async_trait for implementors
pub use async_trait::async_trait;
