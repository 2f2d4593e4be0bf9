//! Failing provider - every call fails with the same kind of error.

use std::sync::atomic::{AtomicUsize, Ordering};

use adapt_core::{
    async_trait, GeneratedImage, ImageGenerator, ProviderError, ReasoningEngine, SpeechAudio,
    SpeechSynthesizer, SummaryLength, Summarizer, Transcriber,
};

/// A provider that implements every provider trait and always fails.
///
/// `ProviderError` is not `Clone`, so the error is rebuilt per call.
#[derive(Debug)]
pub struct FailingProvider {
    make_error: fn() -> ProviderError,
    calls: AtomicUsize,
}

impl FailingProvider {
    pub fn new(make_error: fn() -> ProviderError) -> Self {
        Self {
            make_error,
            calls: AtomicUsize::new(0),
        }
    }

    /// Fails with a retryable network error.
    pub fn network() -> Self {
        Self::new(|| ProviderError::Network("connection refused".to_string()))
    }

    /// Fails with a permanent 400 API error.
    pub fn rejected() -> Self {
        Self::new(|| ProviderError::Api {
            status: 400,
            message: "bad request".to_string(),
        })
    }

    /// Fails with empty output.
    pub fn empty() -> Self {
        Self::new(|| ProviderError::EmptyOutput)
    }

    /// Number of calls received so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn fail<T>(&self) -> Result<T, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err((self.make_error)())
    }
}

#[async_trait]
impl Transcriber for FailingProvider {
    async fn transcribe(&self, _audio_base64: &str) -> Result<String, ProviderError> {
        self.fail()
    }

    fn name(&self) -> &str {
        "FailingProvider"
    }
}

#[async_trait]
impl ReasoningEngine for FailingProvider {
    async fn reason(&self, _prompt: &str) -> Result<String, ProviderError> {
        self.fail()
    }

    fn name(&self) -> &str {
        "FailingProvider"
    }
}

#[async_trait]
impl Summarizer for FailingProvider {
    async fn summarize(&self, _page_text: &str, _length: SummaryLength) -> Result<String, ProviderError> {
        self.fail()
    }

    fn name(&self) -> &str {
        "FailingProvider"
    }
}

#[async_trait]
impl SpeechSynthesizer for FailingProvider {
    async fn synthesize(&self, _text: &str) -> Result<SpeechAudio, ProviderError> {
        self.fail()
    }

    fn name(&self) -> &str {
        "FailingProvider"
    }
}

#[async_trait]
impl ImageGenerator for FailingProvider {
    async fn generate(&self, _text: &str) -> Result<GeneratedImage, ProviderError> {
        self.fail()
    }

    fn name(&self) -> &str {
        "FailingProvider"
    }
}
