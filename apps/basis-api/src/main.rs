//! Basis API - REST server for Gram-Schmidt orthonormalization

use axum_helpers::server::{create_app, create_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use tracing::info;

mod api;
mod config;
mod openapi;

use config::Config;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    // Build REST router: domain routes under /api, service routes at the root
    let api_routes = api::routes();
    let router = create_router::<openapi::ApiDoc>(api_routes, &config.cors);
    let app = router.merge(api::health::router());

    info!("Starting Basis API on {}", config.server.address());

    create_app(app, &config.server)
        .await
        .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Basis API shutdown complete");
    Ok(())
}
