//! Core types and provider traits for the adaptive accessibility pipeline.
//!
//! This crate provides the shared vocabulary for every crate in the
//! workspace. It defines:
//!
//! - [`AdaptRequest`] / [`AdaptResponse`] - The request and response contract
//! - [`FrictionHint`] - Semantic friction tags derived from telemetry and text
//! - [`Transcriber`], [`ReasoningEngine`], [`Summarizer`], [`SpeechSynthesizer`],
//!   [`ImageGenerator`] - The external collaborators the pipeline consumes
//! - [`ProviderError`] / [`ValidationError`] - Error types for providers and ingress
//!
//! # Example
//!
//! ```rust
//! use adapt_core::{async_trait, ProviderError, ReasoningEngine};
//!
//! struct CannedEngine;
//!
//! #[async_trait]
//! impl ReasoningEngine for CannedEngine {
//!     async fn reason(&self, _prompt: &str) -> Result<String, ProviderError> {
//!         Ok(r#"{"ui_actions": {"font_scale": 1.2}}"#.to_string())
//!     }
//!
//!     fn name(&self) -> &str {
//!         "CannedEngine"
//!     }
//! }
//! ```

mod audio;
mod error;
mod hints;
mod prompt;
mod providers;
mod request;
mod response;

pub use audio::decode_audio_payload;
pub use error::{ProviderError, ValidationError};
pub use hints::{FrictionHint, FrictionHints};
pub use prompt::{char_prefix, hash_prompt};
pub use providers::{
    GeneratedImage, ImageGenerator, ReasoningEngine, SpeechAudio, SpeechSynthesizer,
    SummaryLength, Summarizer, Transcriber,
};
pub use request::{AdaptRequest, InteractionSignals, PageText, RequestPayload, RequestType, UserAudio};
pub use response::{
    AdaptResponse, AudioAction, ContentActions, Contrast, FlashcardAction, Mode, SummaryAction,
    UiActions,
};

// Re-export async_trait for convenience
pub use async_trait::async_trait;
