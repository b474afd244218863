//! Products API - REST server

use std::time::Duration;

use axum_helpers::server::{create_production_app, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use migration::Migrator;
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    info!("Connecting to PostgreSQL");

    let db = database::postgres::connect_from_config_with_retry(config.postgres.clone(), None)
        .await?;
    database::postgres::run_migrations::<Migrator>(&db, config.app.name).await?;

    let state = AppState {
        config: config.clone(),
        db: db.clone(),
    };

    // Build the REST router: domain routes under /api, docs, health probes
    let api_routes = api::routes(&state);
    let router = axum_helpers::create_router::<openapi::ApiDoc>(api_routes).await?;
    let app = router
        .merge(health_router(state.config.app.clone()))
        .merge(api::ready::router(state.clone()));

    info!("Starting Products API on port {}", config.server.port);

    create_production_app(app, &config.server, Duration::from_secs(30), async move {
        axum_helpers::close_postgres(db, "products").await;
    })
    .await?;

    info!("Products API shutdown complete");
    Ok(())
}
