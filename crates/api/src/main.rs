//! HTTP boundary for the Meridian CRM engagement engine.
//!
//! Exposes chat, outreach drafting, lead scoring, and next-action triage
//! over JSON. Persistence stays behind the `ContactDirectory` trait; the
//! bundled in-memory directory loads a JSON contact book at startup.

mod config;
mod directory;
mod error;
mod routes;
mod state;

use std::sync::Arc;

use groq_gateway::GroqGateway;
use tracing::{info, warn};

use crate::config::Config;
use crate::directory::InMemoryDirectory;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    // Load configuration
    let config = Config::from_env()?;
    info!(addr = %config.addr, "Starting CRM engagement API");

    // Build the generation gateway
    let gateway = GroqGateway::from_env()?;
    if !gateway.config().is_configured() {
        warn!("GROQ_API_KEY is not set; AI endpoints will answer 400 until it is");
    }

    // Load the contact directory
    let directory = match &config.contacts_path {
        Some(path) => match InMemoryDirectory::from_json_file(path) {
            Ok(directory) => directory,
            Err(err) => {
                warn!(path = %path, "failed to load contact book, starting empty: {}", err);
                InMemoryDirectory::new()
            }
        },
        None => {
            info!("CRM_CONTACTS_PATH not set, starting with an empty directory");
            InMemoryDirectory::new()
        }
    };

    // Build application state
    let state = AppState::new(Arc::new(gateway), Arc::new(directory));

    // Build router
    let app = routes::router().with_state(state);

    // Start server
    info!(addr = %config.addr, "CRM engagement API listening");
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
