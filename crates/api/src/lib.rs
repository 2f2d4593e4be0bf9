//! HTTP server for the adaptive accessibility pipeline.
//!
//! Exposes `POST /process` (the pipeline), `POST /adapt` (static demo plans)
//! and `GET /health`, with permissive CORS for the browser extension.

pub mod config;
pub mod error;
pub mod providers;
pub mod routes;
pub mod state;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};

pub use config::{ConfigError, ProviderMode, ServerConfig};
pub use error::ApiError;
pub use providers::{mock_providers, remote_providers};
pub use state::AppState;

/// Build the application with all routes and middleware.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    routes::router().layer(cors).with_state(state)
}
