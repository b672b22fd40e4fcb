//! Error taxonomy for generation operations.

use thiserror::Error;

/// Errors that can occur while talking to a generation provider.
#[derive(Debug, Clone, Error)]
pub enum GenerateError {
    /// No provider credential is configured. Raised before any network
    /// call is attempted; user-actionable, never retried.
    #[error("generation is not configured: {0}")]
    Configuration(String),

    /// The provider did not answer within the request time budget.
    #[error("provider request timed out")]
    Timeout,

    /// The provider could not be reached, or rejected the request in a
    /// way that marks it unusable (e.g. a decommissioned model).
    #[error("provider unavailable: {0}")]
    Unavailable(String),

    /// Any other upstream failure, with the provider's raw error payload
    /// attached for diagnostics.
    #[error("provider error (status {status})")]
    Provider {
        status: u16,
        payload: serde_json::Value,
    },
}

impl GenerateError {
    /// Whether this failure is recovered locally into a fallback reply.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, GenerateError::Timeout | GenerateError::Unavailable(_))
    }
}
