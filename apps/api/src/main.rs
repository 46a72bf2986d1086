mod booking;
mod catalog;
mod config;
mod envelope;
mod errors;
mod llm_client;
mod recommendation;
mod routes;
mod state;
mod support;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::catalog::Catalog;
use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Rungroj Carrent API v{}", env!("CARGO_PKG_VERSION"));

    // Static fleet, shared read-only
    let catalog = Arc::new(Catalog::fleet());
    info!("Catalog loaded: {} vehicles", catalog.len());

    // Initialize LLM client
    let llm = LlmClient::new(config.llm_settings())?;
    info!(
        "LLM client initialized (model: {}, timeout: {:?})",
        llm.model(),
        config.llm_timeout
    );

    let state = AppState::new(catalog, Arc::new(llm), config.clone());

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict to the site origin once it is fixed

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
