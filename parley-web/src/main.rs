use clap::Parser;
use tracing::{info, warn};

use parley_mt::MachineTranslator;
use parley_web::{AppState, ServerConfig, router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env before clap reads environment fallbacks
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("Failed to load .env: {}", e);
        }
    }

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive("info".parse()?),
        )
        .init();

    let config = ServerConfig::parse();

    info!("Starting parley translation server");

    let state = AppState::initialize(&config.gateway_config());
    if state.translator.is_available() {
        info!(
            provider = state.translator.provider_name(),
            "Real translations enabled"
        );
    } else {
        warn!(
            reason = state.translator.unavailable_reason().unwrap_or("unknown"),
            "Provider not configured or failed to initialize. Only mock translations will be provided."
        );
    }

    let app = router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    info!("Server running at http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}
