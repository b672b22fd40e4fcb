//! Route handlers for the CRM engagement API.

pub mod ai;
pub mod health;

use axum::routing::{get, post};
use axum::Router;

use crate::state::AppState;

/// Build the router with all routes.
pub fn router() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(health::health))
        // AI endpoints
        .route("/api/v1/ai/chat", post(ai::chat))
        .route("/api/v1/ai/generate-reply", post(ai::generate_reply))
        .route("/api/v1/ai/lead-score", post(ai::lead_score))
        .route("/api/v1/ai/contact/:id/next-action", get(ai::next_action))
}
