//! Service info and health endpoints

use axum::{routing::get, Json, Router};
use serde::Serialize;
use serde_json::{json, Value};

#[derive(Serialize)]
struct HealthResponse {
    status: String,
    service: String,
    version: String,
}

/// Root endpoint: confirms the API is running and lists its endpoints
async fn root() -> Json<Value> {
    Json(json!({
        "message": "Orthonormal Basis Finder API",
        "status": "running",
        "endpoints": {
            "POST /api/orthonormal": "Find orthonormal basis from vectors",
            "POST /api/check-orthonormal": "Check if vectors are orthonormal",
            "GET /swagger-ui": "Interactive API documentation"
        }
    }))
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: "basis-api".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

pub fn router() -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
}
