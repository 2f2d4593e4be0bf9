//! Content transformations: summary, audio and flashcards.
//!
//! Each branch is gated on its own flag and on non-empty page content. The
//! branches are independent and run concurrently. Audio and flashcards both
//! work from a short summary, which is computed at most once per request.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use adapt_core::{
    AudioAction, ContentActions, FlashcardAction, GeneratedImage, ImageGenerator, ProviderError,
    SpeechAudio, SpeechSynthesizer, SummaryAction, SummaryLength, Summarizer,
};
use tokio::sync::OnceCell;
use tracing::{debug, warn};

use crate::config::PipelineConfig;
use crate::error::{bounded, PipelineError, Stage};
use crate::providers::Providers;
use crate::shaper::ContentRequest;

/// Runs the enabled content branches against the page.
pub struct ContentOrchestrator {
    summarizer: Arc<dyn Summarizer>,
    speech: Arc<dyn SpeechSynthesizer>,
    images: Arc<dyn ImageGenerator>,
    timeout: Duration,
    isolate_failures: bool,
}

impl ContentOrchestrator {
    pub fn new(providers: &Providers, config: &PipelineConfig) -> Self {
        Self {
            summarizer: providers.summarizer.clone(),
            speech: providers.speech.clone(),
            images: providers.images.clone(),
            timeout: config.content_timeout,
            isolate_failures: config.isolate_content_failures,
        }
    }

    /// Produce the three content actions.
    ///
    /// Without page content every action is disabled and no provider is
    /// called. A failing branch is reported as disabled when failures are
    /// isolated, and aborts the request otherwise.
    pub async fn run(
        &self,
        request: ContentRequest,
        page_text: Option<&str>,
    ) -> Result<ContentActions, PipelineError> {
        let Some(page) = page_text.filter(|p| !p.trim().is_empty()) else {
            if request.any() {
                debug!("Content actions requested without page content; disabling all");
            }
            return Ok(ContentActions::disabled());
        };

        let short_summary = OnceCell::new();

        let (summary, audio, flashcards) = tokio::join!(
            self.gated(
                request.summary,
                Stage::Summary,
                self.summary_branch(page, request.summary_length, &short_summary),
            ),
            self.gated(
                request.audio,
                Stage::Audio,
                self.audio_branch(page, &short_summary),
            ),
            self.gated(
                request.flashcards,
                Stage::Flashcards,
                self.flashcard_branch(page, &short_summary),
            ),
        );

        Ok(ContentActions {
            summary: self
                .settle(summary)?
                .map(SummaryAction::with_text)
                .unwrap_or_default(),
            audio: self
                .settle(audio)?
                .map(AudioAction::with_audio)
                .unwrap_or_default(),
            flashcards: self
                .settle(flashcards)?
                .map(FlashcardAction::with_image)
                .unwrap_or_default(),
        })
    }

    /// Run `branch` only when enabled, bounded by the content timeout.
    async fn gated<T, F>(&self, enabled: bool, stage: Stage, branch: F) -> Result<Option<T>, PipelineError>
    where
        F: Future<Output = Result<T, ProviderError>>,
    {
        if !enabled {
            return Ok(None);
        }
        bounded(stage, self.timeout, branch).await.map(Some)
    }

    fn settle<T>(&self, result: Result<Option<T>, PipelineError>) -> Result<Option<T>, PipelineError> {
        match result {
            Ok(value) => Ok(value),
            Err(e) if self.isolate_failures => {
                warn!(
                    stage = %e.stage(),
                    error = %e,
                    retryable = e.is_retryable(),
                    "CONTENT_BRANCH_FAILED"
                );
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    async fn summary_branch(
        &self,
        page: &str,
        length: SummaryLength,
        short_summary: &OnceCell<String>,
    ) -> Result<String, ProviderError> {
        match length {
            SummaryLength::Short => self.short_summary(page, short_summary).await.cloned(),
            SummaryLength::Medium => self.summarize(page, SummaryLength::Medium).await,
        }
    }

    async fn audio_branch(
        &self,
        page: &str,
        short_summary: &OnceCell<String>,
    ) -> Result<SpeechAudio, ProviderError> {
        let summary = self.short_summary(page, short_summary).await?;
        let audio = self.speech.synthesize(summary).await?;
        if audio.audio_base64.is_empty() {
            return Err(ProviderError::EmptyOutput);
        }
        debug!(
            provider = self.speech.name(),
            format = %audio.audio_format,
            audio_len = audio.audio_base64.len(),
            "Synthesized audio"
        );
        Ok(audio)
    }

    async fn flashcard_branch(
        &self,
        page: &str,
        short_summary: &OnceCell<String>,
    ) -> Result<GeneratedImage, ProviderError> {
        let summary = self.short_summary(page, short_summary).await?;
        let image = self.images.generate(summary).await?;
        if image.image_base64.is_empty() {
            return Err(ProviderError::EmptyOutput);
        }
        debug!(
            provider = self.images.name(),
            image_len = image.image_base64.len(),
            "Generated flashcard image"
        );
        Ok(image)
    }

    async fn short_summary<'a>(
        &self,
        page: &str,
        cell: &'a OnceCell<String>,
    ) -> Result<&'a String, ProviderError> {
        cell.get_or_try_init(|| self.summarize(page, SummaryLength::Short))
            .await
    }

    /// Summaries must have content; an empty one is a provider failure.
    async fn summarize(&self, page: &str, length: SummaryLength) -> Result<String, ProviderError> {
        let text = self.summarizer.summarize(page, length).await?;
        let text = text.trim();
        if text.is_empty() {
            return Err(ProviderError::EmptyOutput);
        }
        debug!(
            provider = self.summarizer.name(),
            length = %length,
            summary_len = text.len(),
            "Summarized page"
        );
        Ok(text.to_string())
    }
}
