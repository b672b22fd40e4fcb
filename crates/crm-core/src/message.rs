//! Generation request and response types.

use serde::{Deserialize, Serialize};

/// A role-tagged chat message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Role: "system", "user", or "assistant"
    pub role: String,
    /// Message content
    pub content: String,
}

impl ChatMessage {
    /// Create a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    /// Create a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }

    /// Create an assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: "assistant".to_string(),
            content: content.into(),
        }
    }
}

/// A structured prompt for the generation provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Ordered message list sent to the provider.
    pub messages: Vec<ChatMessage>,
    /// Model override; the gateway's configured default applies when None.
    pub model: Option<String>,
}

impl GenerationRequest {
    /// Create a request with the gateway's default model.
    pub fn new(messages: Vec<ChatMessage>) -> Self {
        Self {
            messages,
            model: None,
        }
    }

    /// Override the model for this request.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }
}

/// Outcome of a generation call.
///
/// `fallback` is true when `reply` is a locally rendered placeholder
/// rather than provider output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationResult {
    /// Reply text. An empty string is a valid provider reply.
    pub reply: String,
    /// Provider-defined usage metadata, passed through opaquely.
    pub usage: Option<serde_json::Value>,
    /// Whether the reply came from the local fallback path.
    #[serde(default)]
    pub fallback: bool,
}

impl GenerationResult {
    /// A genuine provider reply.
    pub fn provider(reply: impl Into<String>, usage: Option<serde_json::Value>) -> Self {
        Self {
            reply: reply.into(),
            usage,
            fallback: false,
        }
    }

    /// A locally rendered fallback reply.
    pub fn fallback(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            usage: None,
            fallback: true,
        }
    }
}
