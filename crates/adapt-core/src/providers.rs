//! External collaborator traits.
//!
//! The pipeline never talks to a model directly. Each collaborator sits
//! behind one of these object-safe traits so that production clients,
//! offline stand-ins and test doubles are interchangeable as
//! `Arc<dyn Trait>`.

use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::ProviderError;

/// Speech-to-text for the optional spoken request.
#[async_trait]
pub trait Transcriber: Send + Sync {
    /// Transcribe base64-encoded audio (bare or data-URL form).
    ///
    /// Empty input yields an empty transcript, never an error.
    async fn transcribe(&self, audio_base64: &str) -> Result<String, ProviderError>;

    /// Get a human-readable name for this provider.
    fn name(&self) -> &str;
}

/// The generative reasoning engine that proposes an action plan.
#[async_trait]
pub trait ReasoningEngine: Send + Sync {
    /// Run a single prompt and return the raw text output.
    ///
    /// The output is expected to contain a JSON action plan but may be
    /// arbitrary text; callers must parse defensively.
    async fn reason(&self, prompt: &str) -> Result<String, ProviderError>;

    /// Get a human-readable name for this provider.
    fn name(&self) -> &str;
}

/// Requested summary size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SummaryLength {
    /// Roughly 80-120 words.
    #[default]
    Short,
    /// Roughly 150-250 words.
    Medium,
}

impl SummaryLength {
    /// Target word range communicated to the summarization engine.
    pub fn target_words(&self) -> &'static str {
        match self {
            Self::Short => "80-120 words",
            Self::Medium => "150-250 words",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Short => "short",
            Self::Medium => "medium",
        }
    }
}

impl fmt::Display for SummaryLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Plain-text summarization of page content.
#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Summarize `page_text` to the requested length.
    ///
    /// Implementations bound the page text to a prefix of their choosing and
    /// return plain prose (no markdown, headings or bullets).
    async fn summarize(&self, page_text: &str, length: SummaryLength) -> Result<String, ProviderError>;

    /// Get a human-readable name for this provider.
    fn name(&self) -> &str;
}

/// Synthesized speech, already base64-encoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeechAudio {
    /// Container format, e.g. `wav`.
    pub audio_format: String,
    /// Base64-encoded audio bytes.
    pub audio_base64: String,
}

/// Text-to-speech.
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    async fn synthesize(&self, text: &str) -> Result<SpeechAudio, ProviderError>;

    /// Get a human-readable name for this provider.
    fn name(&self) -> &str;
}

/// A generated flashcard image. May legitimately be a placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedImage {
    /// Base64-encoded image bytes (or a placeholder token).
    pub image_base64: String,
}

/// Text-to-image.
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    async fn generate(&self, text: &str) -> Result<GeneratedImage, ProviderError>;

    /// Get a human-readable name for this provider.
    fn name(&self) -> &str;
}
