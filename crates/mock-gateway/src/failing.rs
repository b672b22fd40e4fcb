//! Failing generator implementation - fails every call.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crm_core::{GenerateError, GenerationRequest, GenerationResult, Generator};

/// A generator that fails every call with a fixed error.
///
/// Useful for exercising fallback and error-mapping paths without a
/// provider in the loop.
#[derive(Debug)]
pub struct FailingGenerator {
    error: GenerateError,
    calls: AtomicUsize,
}

impl FailingGenerator {
    /// Create a generator that always returns the given error.
    pub fn new(error: GenerateError) -> Self {
        Self {
            error,
            calls: AtomicUsize::new(0),
        }
    }

    /// Create a generator that simulates an upstream timeout.
    pub fn timing_out() -> Self {
        Self::new(GenerateError::Timeout)
    }

    /// Create a generator that simulates a missing credential.
    pub fn unconfigured() -> Self {
        Self::new(GenerateError::Configuration(
            "GROQ_API_KEY is not set".to_string(),
        ))
    }

    /// How many times `generate` has been called.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Generator for FailingGenerator {
    async fn generate(
        &self,
        _request: GenerationRequest,
    ) -> Result<GenerationResult, GenerateError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(self.error.clone())
    }

    fn name(&self) -> &str {
        "FailingGenerator"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crm_core::{ChatMessage, FallbackTemplate};

    fn request() -> GenerationRequest {
        GenerationRequest::new(vec![ChatMessage::user("hello")])
    }

    #[tokio::test]
    async fn test_always_fails_with_configured_error() {
        let gateway = FailingGenerator::timing_out();

        let err = gateway.generate(request()).await.unwrap_err();
        assert!(matches!(err, GenerateError::Timeout));
        assert_eq!(gateway.call_count(), 1);
    }

    #[tokio::test]
    async fn test_recoverable_error_resolves_to_fallback() {
        let gateway = FailingGenerator::new(GenerateError::Unavailable(
            "provider offline".to_string(),
        ));

        let result = gateway
            .generate_or_fallback(request(), FallbackTemplate::ServiceBusy)
            .await
            .unwrap();
        assert!(result.fallback);
        assert!(!result.reply.is_empty());
    }

    #[tokio::test]
    async fn test_configuration_error_is_not_recovered() {
        let gateway = FailingGenerator::unconfigured();

        let err = gateway
            .generate_or_fallback(request(), FallbackTemplate::ServiceBusy)
            .await
            .unwrap_err();
        assert!(matches!(err, GenerateError::Configuration(_)));
    }
}
