//! Configuration loaded from environment variables.

use std::env;
use std::net::SocketAddr;

/// API server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address.
    pub addr: SocketAddr,
    /// Path to a JSON contact book loaded into the in-memory directory.
    pub contacts_path: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Description | Default |
    /// |----------|-------------|---------|
    /// | `CRM_API_ADDR` | Server bind address | `127.0.0.1:8080` |
    /// | `CRM_CONTACTS_PATH` | JSON contact book path | (none) |
    ///
    /// The Groq gateway reads its own `GROQ_*` variables separately.
    pub fn from_env() -> Result<Self, ConfigError> {
        let addr = env::var("CRM_API_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:8080".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidAddr)?;

        let contacts_path = env::var("CRM_CONTACTS_PATH").ok();

        Ok(Self {
            addr,
            contacts_path,
        })
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid CRM_API_ADDR format")]
    InvalidAddr,
}
