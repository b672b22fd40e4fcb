//! Error types for the HTTP boundary.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::directory::DirectoryError;
use crm_core::GenerateError;

/// Errors that can occur while serving a request.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request body failed validation.
    #[error("{0}")]
    Validation(String),

    /// A referenced record does not exist.
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: String },

    /// Text generation failed.
    #[error(transparent)]
    Generate(#[from] GenerateError),

    /// Directory lookup failed.
    #[error(transparent)]
    Directory(#[from] DirectoryError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            ApiError::Validation(msg) => (
                StatusCode::BAD_REQUEST,
                serde_json::json!({ "error": msg }),
            ),
            ApiError::NotFound { .. } => (
                StatusCode::NOT_FOUND,
                serde_json::json!({ "error": self.to_string() }),
            ),
            ApiError::Generate(GenerateError::Configuration(msg)) => (
                StatusCode::BAD_REQUEST,
                serde_json::json!({
                    "error": msg,
                    "hint": "set GROQ_API_KEY to enable AI generation",
                }),
            ),
            ApiError::Generate(GenerateError::Provider { status, payload }) => {
                tracing::error!(status, "provider rejected generation request");
                (
                    StatusCode::BAD_GATEWAY,
                    serde_json::json!({
                        "error": "AI provider rejected the request",
                        "providerStatus": status,
                        "providerError": payload,
                    }),
                )
            }
            ApiError::Generate(err) => {
                // Timeout and Unavailable are recovered into fallbacks by
                // the handlers; reaching here means a route skipped that.
                tracing::error!("generation error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    serde_json::json!({ "error": err.to_string() }),
                )
            }
            ApiError::Directory(err) => {
                tracing::error!("directory error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    serde_json::json!({ "error": err.to_string() }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

/// Result type for API handlers.
pub type Result<T> = std::result::Result<T, ApiError>;
