//! HTTP providers for the adaptation pipeline.
//!
//! This crate implements the provider traits against OpenAI-compatible
//! endpoints:
//! - [`ChatEngine`] - `/v1/chat/completions`, as reasoning engine and summarizer
//! - [`HttpTranscriber`] - `/v1/audio/transcriptions`
//! - [`HttpSpeech`] - `/v1/audio/speech`
//! - [`HttpImageGenerator`] - `/v1/images/generations`
//! - [`PlaceholderImageGenerator`] - used when no image model is configured
//!
//! # Example
//!
//! ```rust,ignore
//! use llm_providers::{ChatEngine, LlmConfig};
//! use adapt_core::ReasoningEngine;
//!
//! let config = LlmConfig::builder()
//!     .api_key("your-api-key")
//!     .model("gpt-4o-mini")
//!     .build();
//!
//! let engine = ChatEngine::new(config)?;
//! let raw = engine.reason("Return {} and nothing else.").await?;
//! ```

mod api_types;
mod chat;
mod client;
mod config;
mod image;
mod speech;
mod transcription;

pub use api_types::{
    ApiError, ApiErrorDetails, ChatCompletionRequest, ChatCompletionResponse, ChatMessage,
    ImageData, ImageRequest, ImageResponse, SpeechRequest, TranscriptionResponse,
};
pub use chat::{build_summary_prompt, ChatEngine, SUMMARY_PAGE_CHARS};
pub use client::{status_error, HttpClient};
pub use config::{
    LlmConfig, LlmConfigBuilder, DEFAULT_API_URL, DEFAULT_MODEL, DEFAULT_REQUEST_TIMEOUT,
    DEFAULT_SPEECH_FORMAT, DEFAULT_SPEECH_MODEL, DEFAULT_SPEECH_VOICE,
    DEFAULT_TRANSCRIPTION_MODEL,
};
pub use image::{
    build_flashcard_prompt, image_generator, HttpImageGenerator, PlaceholderImageGenerator,
    PLACEHOLDER_IMAGE_BASE64,
};
pub use speech::HttpSpeech;
pub use transcription::HttpTranscriber;
