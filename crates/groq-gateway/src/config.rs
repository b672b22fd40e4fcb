//! Configuration for the Groq gateway.

use std::env;
use std::time::Duration;

/// Default model when neither the request nor the environment names one.
pub const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";

/// Default upper bound on the upstream wait.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Configuration for [`GroqGateway`](crate::GroqGateway).
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Groq API base URL.
    pub api_url: String,

    /// API key for authentication. May be empty; the gateway checks it
    /// per request and fails fast with a configuration error.
    pub api_key: String,

    /// Default model name.
    pub model: String,

    /// Upper bound on the upstream wait per request.
    pub timeout: Duration,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.groq.com/openai".to_string(),
            api_key: String::new(),
            model: DEFAULT_MODEL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl GatewayConfig {
    /// Create configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `GROQ_API_KEY` - API key (left empty when unset; generation
    ///   requests then fail fast with a configuration error)
    /// - `GROQ_API_URL` - API base URL (default: https://api.groq.com/openai)
    /// - `GROQ_MODEL` - default model name
    /// - `GROQ_TIMEOUT_SECS` - request timeout in seconds (default: 60)
    pub fn from_env() -> Self {
        let api_key = env::var("GROQ_API_KEY").unwrap_or_default();

        let api_url = env::var("GROQ_API_URL")
            .unwrap_or_else(|_| "https://api.groq.com/openai".to_string());

        let model = env::var("GROQ_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let timeout = env::var("GROQ_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_TIMEOUT);

        Self {
            api_url,
            api_key,
            model,
            timeout,
        }
    }

    /// Whether a usable credential is present.
    pub fn is_configured(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    /// Create a new config builder.
    pub fn builder() -> GatewayConfigBuilder {
        GatewayConfigBuilder::default()
    }
}

/// Builder for [`GatewayConfig`].
#[derive(Debug, Default)]
pub struct GatewayConfigBuilder {
    config: GatewayConfig,
}

impl GatewayConfigBuilder {
    /// Set the API key.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.config.api_key = key.into();
        self
    }

    /// Set the API base URL.
    pub fn api_url(mut self, url: impl Into<String>) -> Self {
        self.config.api_url = url.into();
        self
    }

    /// Set the default model name.
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.config.model = model.into();
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Build the configuration.
    pub fn build(self) -> GatewayConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GatewayConfig::default();
        assert_eq!(config.api_url, "https://api.groq.com/openai");
        assert!(config.api_key.is_empty());
        assert!(!config.is_configured());
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.timeout, Duration::from_secs(60));
    }

    #[test]
    fn test_builder_all_options() {
        let config = GatewayConfig::builder()
            .api_key("gsk-test")
            .api_url("https://groq.test")
            .model("llama-3.1-8b-instant")
            .timeout(Duration::from_secs(5))
            .build();

        assert_eq!(config.api_key, "gsk-test");
        assert!(config.is_configured());
        assert_eq!(config.api_url, "https://groq.test");
        assert_eq!(config.model, "llama-3.1-8b-instant");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_blank_key_is_not_configured() {
        let config = GatewayConfig::builder().api_key("   ").build();
        assert!(!config.is_configured());
    }

    // Environment-based tests are combined into a single test to avoid
    // race conditions when tests run in parallel (env vars are process-global).
    #[test]
    fn test_from_env_scenarios() {
        use std::sync::Mutex;
        static ENV_LOCK: Mutex<()> = Mutex::new(());
        let _guard = ENV_LOCK.lock().unwrap();

        fn clear_all_groq_vars() {
            std::env::remove_var("GROQ_API_KEY");
            std::env::remove_var("GROQ_API_URL");
            std::env::remove_var("GROQ_MODEL");
            std::env::remove_var("GROQ_TIMEOUT_SECS");
        }

        // Scenario 1: nothing set, defaults apply, key empty.
        clear_all_groq_vars();
        let config = GatewayConfig::from_env();
        assert!(!config.is_configured());
        assert_eq!(config.api_url, "https://api.groq.com/openai");
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.timeout, Duration::from_secs(60));

        // Scenario 2: all vars set.
        std::env::set_var("GROQ_API_KEY", "gsk-env");
        std::env::set_var("GROQ_API_URL", "https://groq.env");
        std::env::set_var("GROQ_MODEL", "mixtral-8x7b");
        std::env::set_var("GROQ_TIMEOUT_SECS", "10");

        let config = GatewayConfig::from_env();
        assert_eq!(config.api_key, "gsk-env");
        assert_eq!(config.api_url, "https://groq.env");
        assert_eq!(config.model, "mixtral-8x7b");
        assert_eq!(config.timeout, Duration::from_secs(10));

        // Scenario 3: unparsable timeout falls back to the default.
        std::env::set_var("GROQ_TIMEOUT_SECS", "soon");
        let config = GatewayConfig::from_env();
        assert_eq!(config.timeout, Duration::from_secs(60));

        clear_all_groq_vars();
    }
}
