//! Unified error types for the todo service.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Fatal errors raised during service startup.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// MongoDB driver error.
    #[error("database error: {0}")]
    Database(#[from] mongodb::error::Error),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Per-request errors returned by the HTTP handlers.
///
/// Client errors map to 400 with a structured JSON body; decode and
/// driver errors map to an opaque 500 and are logged server-side.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Path identifier is not a valid ObjectId hex string.
    #[error("invalid todo id")]
    InvalidId,

    /// Todo body was empty on creation.
    #[error("todo body cannot be empty")]
    EmptyBody,

    /// Request body failed to decode as JSON.
    #[error("decode error: {0}")]
    Decode(#[from] axum::extract::rejection::JsonRejection),

    /// MongoDB driver error.
    #[error("database error: {0}")]
    Database(#[from] mongodb::error::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::InvalidId | ApiError::EmptyBody => {
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            ApiError::Decode(err) => {
                error!("decode error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
            ApiError::Database(err) => {
                error!("database error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, ServiceError>;
