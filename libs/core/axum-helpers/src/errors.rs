use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Standard error response structure.
///
/// Returned for all error responses across the workspace's services:
/// - `error`: machine-readable error identifier (e.g., "InvalidInput")
/// - `message`: human-readable error message
/// - `details`: optional structured details (e.g., validation field errors)
///
/// # JSON Example
///
/// ```json
/// {
///   "error": "InvalidInput",
///   "message": "Vector at index 1 is a zero vector",
///   "details": null
/// }
/// ```
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Machine-readable error identifier for programmatic handling
    pub error: String,
    /// Human-readable error message
    pub message: String,
    /// Optional structured error details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            details: None,
        }
    }
}

/// Handler for 404 Not Found errors.
///
/// Use as the router's fallback so unknown routes answer JSON rather than an
/// empty body.
pub async fn not_found() -> Response {
    let body = Json(ErrorResponse::new(
        "NotFound",
        "The requested resource was not found",
    ));

    (StatusCode::NOT_FOUND, body).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_serializes_without_null_details() {
        let body = serde_json::to_value(ErrorResponse::new("NotFound", "missing")).unwrap();
        assert_eq!(body["error"], "NotFound");
        assert_eq!(body["message"], "missing");
        assert!(body.get("details").is_none());
    }

    #[tokio::test]
    async fn test_not_found_returns_404() {
        let response = not_found().await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
