//! API error types with IntoResponse
//!
//! Client errors carry `{"message": ...}`, server errors `{"error": ...}`.
//! The underlying cause of a server error is logged, never returned.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Missing required parameter (400)
    BadRequest { message: &'static str },

    /// No matching document, or an update that changed nothing (404)
    NotFound { message: &'static str },

    /// Store failure, malformed id or body (500, logged)
    Internal {
        message: &'static str,
        detail: String,
    },
}

impl ApiError {
    /// Internal error with a client-facing message and a logged cause.
    pub fn internal(message: &'static str, cause: impl std::fmt::Display) -> Self {
        Self::Internal {
            message,
            detail: cause.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            Self::BadRequest { message } => (StatusCode::BAD_REQUEST, json!({ "message": message })),
            Self::NotFound { message } => (StatusCode::NOT_FOUND, json!({ "message": message })),
            Self::Internal { message, detail } => {
                tracing::error!(%detail, "{}", message);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": message }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
