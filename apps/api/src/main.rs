mod config;
mod db;
mod errors;
mod gemini;
mod generation;
mod models;
mod profiles;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::create_pool;
use crate::gemini::GeminiClient;
use crate::profiles::repository::PgProfileRepository;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (panics on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Souschef API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL-backed profile storage
    let pool = create_pool(&config.database_url).await?;
    let profiles = Arc::new(PgProfileRepository::new(pool));

    // Initialize Gemini client (the key itself is never logged)
    let gemini = GeminiClient::new(config.gemini_api_key.clone());
    info!("Gemini client initialized");

    // Build app state
    let state = AppState { profiles, gemini };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
