use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_helpers::ErrorResponse;
use thiserror::Error;

/// Result type for orthonormalization operations
pub type OrthonormalResult<T> = Result<T, OrthonormalError>;

/// Errors that can occur in the orthonormal domain
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OrthonormalError {
    /// Malformed or semantically invalid input (empty set, mismatched
    /// dimensions, zero vector present)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Every input vector collapsed to zero during orthonormalization
    /// (fully dependent set). Only detectable after computation.
    #[error("Degenerate input: {0}")]
    DegenerateInput(String),

    /// Unexpected computational fault (e.g. numeric overflow)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for OrthonormalError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            OrthonormalError::InvalidInput(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new("InvalidInput", msg.clone()),
            ),
            OrthonormalError::DegenerateInput(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new("DegenerateInput", msg.clone()),
            ),
            OrthonormalError::Internal(msg) => {
                // Opaque to the client; the cause only goes to the logs
                tracing::error!("Internal error during computation: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new("InternalError", "Internal error"),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
