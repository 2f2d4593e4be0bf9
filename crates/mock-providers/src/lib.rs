//! Mock providers for the adaptation pipeline.
//!
//! This crate provides deterministic implementations of the provider traits
//! for tests and offline runs:
//! - `ScriptedReasoner` - Answers every prompt with fixed text
//! - `FixedTranscriber` - Returns a fixed transcript for any non-empty audio
//! - `ExtractiveSummarizer` - Leading words of the page
//! - `SilentSpeech` - A valid, empty WAV clip
//! - `StaticImage` - A fixed image
//! - `FailingProvider` - Fails every call with a chosen error
//! - `Delayed` - Wraps another provider with artificial delay
//!
//! For production providers, use the `llm-providers` crate instead.
//!
//! # Example
//!
//! ```rust
//! use mock_providers::{ReasoningEngine, ScriptedReasoner};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), mock_providers::ProviderError> {
//!     let engine = ScriptedReasoner::new(r#"{"ui_actions": {"font_scale": 1.4}}"#);
//!
//!     let raw = engine.reason("any prompt").await?;
//!     println!("Plan: {}", raw);
//!     Ok(())
//! }
//! ```

mod delayed;
mod failing;
mod image;
mod scripted;
mod speech;
mod summarizer;
mod transcriber;

// Re-export adapt-core types for convenience
pub use adapt_core::{
    async_trait, GeneratedImage, ImageGenerator, ProviderError, ReasoningEngine, SpeechAudio,
    SpeechSynthesizer, SummaryLength, Summarizer, Transcriber,
};

// Export mock implementations
pub use delayed::Delayed;
pub use failing::FailingProvider;
pub use image::StaticImage;
pub use scripted::ScriptedReasoner;
pub use speech::SilentSpeech;
pub use summarizer::ExtractiveSummarizer;
pub use transcriber::FixedTranscriber;
