//! API routes module

pub mod health;

use axum::Router;

/// Create all API routes (nested under `/api` by the router assembly)
pub fn routes() -> Router {
    domain_orthonormal::handlers::router()
}
