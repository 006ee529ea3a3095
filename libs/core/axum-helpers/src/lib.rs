//! # Axum Helpers
//!
//! Shared plumbing for the workspace's Axum services.
//!
//! ## Modules
//!
//! - **[`server`]**: router assembly (API docs, CORS, tracing, compression),
//!   server startup with graceful shutdown
//! - **[`errors`]**: the JSON error response shape shared by all services
//! - **[`extractors`]**: custom extractors (validated JSON)
//! - **[`cors`]**: CORS layer construction from [`core_config::cors::CorsConfig`]
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum::Router;
//! use axum_helpers::server::{create_app, create_router};
//! use core_config::{cors::CorsConfig, server::ServerConfig};
//! use utoipa::OpenApi;
//!
//! #[derive(OpenApi)]
//! #[openapi(paths())]
//! struct ApiDoc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api_routes = Router::new(); // Add your routes
//!     let router = create_router::<ApiDoc>(api_routes, &CorsConfig::permissive());
//!     create_app(router, &ServerConfig::default()).await?;
//!     Ok(())
//! }
//! ```

pub mod cors;
pub mod errors;
pub mod extractors;
pub mod server;

// Re-export the common surface
pub use cors::cors_layer;
pub use errors::ErrorResponse;
pub use extractors::ValidatedJson;
pub use server::{create_app, create_router, shutdown_signal};
