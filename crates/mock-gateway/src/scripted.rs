//! Scripted generator implementation - replays a canned reply.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crm_core::{GenerateError, GenerationRequest, GenerationResult, Generator};

/// A generator that always answers with the same canned reply.
///
/// Records every request it receives, so tests can assert on the exact
/// prompts a handler assembled.
#[derive(Debug, Default)]
pub struct ScriptedGenerator {
    reply: String,
    usage: Option<serde_json::Value>,
    calls: AtomicUsize,
    requests: Mutex<Vec<GenerationRequest>>,
}

impl ScriptedGenerator {
    /// Create a generator that answers with the given reply.
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            ..Self::default()
        }
    }

    /// Attach usage metadata to every result.
    pub fn with_usage(mut self, usage: serde_json::Value) -> Self {
        self.usage = Some(usage);
        self
    }

    /// How many times `generate` has been called.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// All requests received so far, in order.
    pub async fn requests(&self) -> Vec<GenerationRequest> {
        self.requests.lock().await.clone()
    }

    /// The most recent request, if any.
    pub async fn last_request(&self) -> Option<GenerationRequest> {
        self.requests.lock().await.last().cloned()
    }
}

#[async_trait]
impl Generator for ScriptedGenerator {
    async fn generate(&self, request: GenerationRequest) -> Result<GenerationResult, GenerateError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().await.push(request);
        Ok(GenerationResult::provider(
            self.reply.clone(),
            self.usage.clone(),
        ))
    }

    fn name(&self) -> &str {
        "ScriptedGenerator"
    }
}
