//! Adaptive accessibility server.

use api::{app, AppState, ServerConfig};
use orchestrator::{Pipeline, PipelineConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load configuration
    let config = ServerConfig::from_env()?;
    info!(addr = %config.addr, providers = ?config.providers, "Starting adaptation server");

    // Build the pipeline once; every request shares it
    let providers = config.providers.build()?;
    let pipeline = Pipeline::new(providers, PipelineConfig::from_env());
    info!(prompt_hash = pipeline.gateway().prompt_hash(), "Pipeline ready");

    let app = app(AppState::new(pipeline));

    // Start server
    info!(addr = %config.addr, "Adaptation server listening");
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
