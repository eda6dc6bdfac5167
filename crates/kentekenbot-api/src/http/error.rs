//! Application error type mapping to HTTP status codes.
//!
//! The chat widget only understands `{ "error": "..." }`. Client mistakes get
//! a 400 naming the problem; everything else collapses into one opaque 500
//! whose detail only reaches the logs.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use kentekenbot_types::error::ConversationError;

/// User-facing message for every internal failure.
pub const INTERNAL_ERROR_MESSAGE: &str =
    "Er is een fout opgetreden bij het verwerken van het verzoek.";

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// The request body could not be used.
    InvalidRequest(String),
    /// The conversation pipeline failed.
    Conversation(ConversationError),
}

impl From<ConversationError> for AppError {
    fn from(e: ConversationError) -> Self {
        AppError::Conversation(e)
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidRequest(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::InvalidRequest(detail)
            | AppError::Conversation(ConversationError::InvalidRequest(detail)) => {
                tracing::info!(detail = %detail, "rejected malformed request");
                (StatusCode::BAD_REQUEST, format!("Ongeldig verzoek: {detail}"))
            }
            AppError::Conversation(err) => {
                tracing::error!(error = %err, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_ERROR_MESSAGE.to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
