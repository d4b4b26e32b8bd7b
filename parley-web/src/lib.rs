//! HTTP front-end for the parley translation gateway
//!
//! Serves `POST /translate` and `GET /health` on top of the translator the
//! gateway selected at startup.

use axum::{
    Router,
    routing::{get, post},
};
use parley_mt::{GatewayConfig, MachineTranslator};
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;


pub use config::ServerConfig;
pub use error::ApiError;

/// State shared by every request; built once and never mutated
#[derive(Clone)]
pub struct AppState {
    pub translator: Arc<dyn MachineTranslator>,
}

impl AppState {
    /// Run the gateway's one-time provider initialization
    pub fn initialize(config: &GatewayConfig) -> Self {
        Self {
            translator: parley_mt::initialize(config),
        }
    }
}

/// Build the application router with CORS, tracing and panic handling
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/translate", post(handlers::translate))
        .route("/health", get(handlers::health))
        .layer(CatchPanicLayer::custom(error::panic_response))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
