use axum::http::Method;
use core_config::cors::CorsConfig;
use std::time::Duration;
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Build a CORS layer from configuration.
///
/// With an explicit origin list the layer allows:
/// - the configured origins only
/// - common HTTP methods (GET, POST, PUT, DELETE, PATCH, OPTIONS)
/// - Content-Type, Authorization and Accept headers
/// - credentials, with a 1 hour preflight max age
///
/// A permissive configuration yields `CorsLayer::permissive()` (any origin,
/// no credentials) - the right default for a public computation API.
pub fn cors_layer(config: &CorsConfig) -> CorsLayer {
    if config.is_permissive() {
        return CorsLayer::permissive();
    }

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(config.origins().iter().cloned()))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
            Method::OPTIONS,
        ])
        .allow_headers([
            axum::http::header::CONTENT_TYPE,
            axum::http::header::AUTHORIZATION,
            axum::http::header::ACCEPT,
        ])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600))
}
