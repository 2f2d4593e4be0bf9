//! Run one adaptation request through the pipeline with offline providers.
//!
//! Useful for checking prompt changes without network access: the reasoning
//! engine answers with a fixed plan and content is produced locally.
//!
//! Run with: cargo run -p orchestrator --example offline_request
//!
//! Configuration via .env file or environment variables:
//!   RUST_LOG                      - Log filter (default: orchestrator=debug)
//!   ADAPT_REASONING_PROMPT_FILE   - Instruction file (default: REASONING_PROMPT.md)

use std::sync::Arc;

use mock_providers::{
    ExtractiveSummarizer, FixedTranscriber, ScriptedReasoner, SilentSpeech, StaticImage,
};
use orchestrator::{AdaptRequest, Pipeline, PipelineConfig, Providers};
use tracing_subscriber::EnvFilter;

const PLAN: &str = r#"{
  "mode": "suggest",
  "ui_actions": {"font_scale": 1.3, "line_spacing": 1.6, "simplify_layout": true},
  "content_actions": {"summary": {"enabled": true, "length": "short"}, "audio": {"enabled": true}},
  "reason": "reading difficulty mentioned",
  "confidence": 0.8
}"#;

const PAGE: &str = "Photosynthesis is the process plants use to turn light into chemical energy. \
    Chlorophyll in the leaves absorbs light, and the plant combines carbon dioxide and water \
    into glucose, releasing oxygen as a by-product.";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::from_path("../../.env");

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("orchestrator=debug")),
        )
        .init();

    let providers = Providers::new(
        Arc::new(FixedTranscriber::new("")),
        Arc::new(ScriptedReasoner::new(PLAN)),
        Arc::new(ExtractiveSummarizer::new()),
        Arc::new(SilentSpeech::new()),
        Arc::new(StaticImage::default()),
    );
    let pipeline = Pipeline::new(providers, PipelineConfig::from_env());
    println!("Prompt fingerprint: {}", pipeline.gateway().prompt_hash());

    let body = serde_json::json!({
        "request_type": "explicit",
        "payload": {
            "user_text": "I'm dyslexic, this page is hard to read",
            "interaction_signals": {"idle_time": 12, "misclick_count": 1},
            "page_text": {"content": PAGE}
        }
    });
    let request = AdaptRequest::from_slice(body.to_string().as_bytes())?;

    let response = pipeline.handle(&request).await?;
    println!("{}", serde_json::to_string_pretty(&response)?);

    Ok(())
}
