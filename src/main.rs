// ABOUTME: Entry point for the corkboard binary.
// ABOUTME: Loads .env configuration, initializes tracing, and starts the HTTP server.

use std::sync::Arc;

use corkboard_core::FixtureStore;
use corkboard_server::{AppState, DeployMode, ServerConfig, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = ServerConfig::from_env()?;

    // Less verbose logging on production; RUST_LOG overrides either default.
    let default_filter = match config.mode {
        DeployMode::Production => "corkboard=info,corkboard_server=info,tower_http=info",
        DeployMode::Development => "corkboard=debug,corkboard_server=debug,tower_http=debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.parse().unwrap()),
        )
        .init();

    let state = Arc::new(AppState::new(FixtureStore::seed()));
    let app = create_router(state, &config);

    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    tracing::info!("corkboard listening on {}", config.bind);
    axum::serve(listener, app).await?;

    Ok(())
}
