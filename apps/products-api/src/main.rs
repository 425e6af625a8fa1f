//! Products API - REST server for the product catalog

use axum_helpers::server::{create_production_app, create_router, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use std::time::Duration;
use tracing::info;

mod api;
mod config;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Before any fallible operation
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    info!(
        app = config.app.name,
        version = config.app.version,
        "Connecting to PostgreSQL"
    );

    let db = database::postgres::connect_from_config_with_retry(config.database.clone(), None)
        .await
        .map_err(|e| eyre::eyre!("PostgreSQL connection failed: {}", e))?;

    if config.run_migrations {
        database::postgres::run_migrations::<migration::Migrator>(&db, config.app.name)
            .await
            .map_err(|e| eyre::eyre!("Migrations failed: {}", e))?;
    }

    let state = AppState { config, db };

    // Sub-routers carry their own state; create_router only adds layers
    let api_routes = api::routes(&state)
        .merge(health_router(state.config.app))
        .merge(api::ready_router(state.clone()));

    let app = create_router(api_routes, &state.config.server);

    info!(
        port = state.config.server.port,
        "Starting Products API with graceful shutdown (30s cleanup window)"
    );

    let server_config = state.config.server.clone();
    create_production_app(app, &server_config, Duration::from_secs(30), async move {
        info!("Shutting down: closing database connections");
        match state.db.close().await {
            Ok(()) => info!("PostgreSQL connection closed successfully"),
            Err(e) => tracing::error!("Error closing PostgreSQL: {}", e),
        }
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Products API shutdown complete");
    Ok(())
}
