//! The Generator trait definition.

use async_trait::async_trait;

use crate::error::GenerateError;
use crate::fallback::FallbackTemplate;
use crate::message::{GenerationRequest, GenerationResult};

/// A trait for producing text replies from a structured prompt.
///
/// Implementations range from mock generators used in tests to the real
/// provider gateway. This trait is object-safe and can be used with
/// `Box<dyn Generator>` or `Arc<dyn Generator>`.
#[async_trait]
pub trait Generator: Send + Sync {
    /// Send the request to the provider and return its reply.
    ///
    /// At most one upstream attempt is made per request; implementations
    /// must not retry.
    async fn generate(&self, request: GenerationRequest) -> Result<GenerationResult, GenerateError>;

    /// Get a human-readable name for this generator implementation.
    fn name(&self) -> &str;

    /// Like [`Generator::generate`], but recovers timeouts and provider
    /// unavailability into a deterministic fallback reply.
    ///
    /// Configuration and unclassified provider errors still surface as
    /// errors; every other outcome yields usable text.
    async fn generate_or_fallback(
        &self,
        request: GenerationRequest,
        template: FallbackTemplate,
    ) -> Result<GenerationResult, GenerateError> {
        match self.generate(request).await {
            Ok(result) => Ok(result),
            Err(err) if err.is_recoverable() => Ok(GenerationResult::fallback(template.render())),
            Err(err) => Err(err),
        }
    }
}
