use axum_helpers::server::create_production_app;
use clap::Parser;
use core_config::tracing::{init_tracing, install_color_eyre};
use std::time::Duration;
use tracing::info;

mod api;
mod cli;
mod config;
mod openapi;
mod state;

use cli::Cli;
use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output
    install_color_eyre();

    let cli = Cli::parse();
    let config = Config::load(cli)?;

    init_tracing(&config.environment);

    // Single attempt; an unreachable server aborts startup
    let mongo_client = database::mongodb::connect_from_config(&config.mongodb).await?;
    let db = mongo_client.database(config.mongodb.database());

    let state = AppState {
        config,
        mongo_client,
        db,
    };

    let app = api::app(&state);
    let AppState {
        config,
        mongo_client,
        ..
    } = state;

    info!("Starting Hotel API with graceful shutdown (30s timeout)");

    create_production_app(
        app,
        &config.server,
        Duration::from_secs(30),
        async move {
            info!("Shutting down: closing MongoDB connections");
            mongo_client.shutdown().await;
            info!("MongoDB connection closed successfully");
        },
    )
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Hotel API shutdown complete");
    Ok(())
}
