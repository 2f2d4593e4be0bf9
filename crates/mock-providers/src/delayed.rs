//! Delayed provider - wraps another provider with artificial delay.

use std::time::Duration;

use adapt_core::{
    async_trait, GeneratedImage, ImageGenerator, ProviderError, ReasoningEngine, SpeechAudio,
    SpeechSynthesizer, SummaryLength, Summarizer, Transcriber,
};
use tokio::time::sleep;

/// A provider that wraps another provider and adds artificial delay.
///
/// Implements whichever provider traits the inner provider implements.
/// Useful for testing timeout handling and concurrent content branches.
pub struct Delayed<P> {
    inner: P,
    delay: Duration,
}

impl<P> Delayed<P> {
    /// Create a new Delayed wrapping the given provider with the specified delay.
    pub fn new(inner: P, delay: Duration) -> Self {
        Self { inner, delay }
    }

    /// Create a provider with a delay in milliseconds.
    pub fn with_millis(inner: P, millis: u64) -> Self {
        Self::new(inner, Duration::from_millis(millis))
    }

    /// Create a provider with a delay in seconds.
    pub fn with_secs(inner: P, secs: u64) -> Self {
        Self::new(inner, Duration::from_secs(secs))
    }

    /// The wrapped provider.
    pub fn inner(&self) -> &P {
        &self.inner
    }
}

#[async_trait]
impl<P: Transcriber> Transcriber for Delayed<P> {
    async fn transcribe(&self, audio_base64: &str) -> Result<String, ProviderError> {
        sleep(self.delay).await;
        self.inner.transcribe(audio_base64).await
    }

    fn name(&self) -> &str {
        "Delayed"
    }
}

#[async_trait]
impl<P: ReasoningEngine> ReasoningEngine for Delayed<P> {
    async fn reason(&self, prompt: &str) -> Result<String, ProviderError> {
        sleep(self.delay).await;
        self.inner.reason(prompt).await
    }

    fn name(&self) -> &str {
        "Delayed"
    }
}

#[async_trait]
impl<P: Summarizer> Summarizer for Delayed<P> {
    async fn summarize(&self, page_text: &str, length: SummaryLength) -> Result<String, ProviderError> {
        sleep(self.delay).await;
        self.inner.summarize(page_text, length).await
    }

    fn name(&self) -> &str {
        "Delayed"
    }
}

#[async_trait]
impl<P: SpeechSynthesizer> SpeechSynthesizer for Delayed<P> {
    async fn synthesize(&self, text: &str) -> Result<SpeechAudio, ProviderError> {
        sleep(self.delay).await;
        self.inner.synthesize(text).await
    }

    fn name(&self) -> &str {
        "Delayed"
    }
}

#[async_trait]
impl<P: ImageGenerator> ImageGenerator for Delayed<P> {
    async fn generate(&self, text: &str) -> Result<GeneratedImage, ProviderError> {
        sleep(self.delay).await;
        self.inner.generate(text).await
    }

    fn name(&self) -> &str {
        "Delayed"
    }
}
