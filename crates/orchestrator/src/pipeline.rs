//! The end-to-end adaptation pipeline.

use std::sync::Arc;
use std::time::Duration;

use adapt_core::{AdaptRequest, AdaptResponse, RequestPayload, Transcriber};
use tracing::{debug, info};

use crate::assembler::assemble_response;
use crate::config::PipelineConfig;
use crate::content::ContentOrchestrator;
use crate::error::{bounded, PipelineError, Stage};
use crate::gateway::{PromptContext, ReasoningGateway};
use crate::hints::{derive_condition_hints, derive_signal_hints, merge_hints};
use crate::mode::resolve_mode;
use crate::plan::parse_plan_or_fallback;
use crate::providers::Providers;
use crate::shaper::shape_plan;

/// Turns one adaptation request into one response.
///
/// Holds no per-request state, so a single instance serves concurrent
/// requests.
pub struct Pipeline {
    transcriber: Arc<dyn Transcriber>,
    transcription_timeout: Duration,
    gateway: ReasoningGateway,
    content: ContentOrchestrator,
}

impl Pipeline {
    pub fn new(providers: Providers, config: PipelineConfig) -> Self {
        info!(providers = ?providers, "Building adaptation pipeline");

        Self {
            gateway: ReasoningGateway::from_config(providers.reasoner.clone(), &config),
            content: ContentOrchestrator::new(&providers, &config),
            transcriber: providers.transcriber,
            transcription_timeout: config.transcription_timeout,
        }
    }

    /// The reasoning gateway in use.
    pub fn gateway(&self) -> &ReasoningGateway {
        &self.gateway
    }

    /// Run the pipeline for a validated request.
    ///
    /// Transcribe, derive hints, resolve the mode, reason, parse, shape,
    /// transform content, assemble. Only provider failures abort; unreadable
    /// engine output falls back to the fixed plan.
    pub async fn handle(&self, request: &AdaptRequest) -> Result<AdaptResponse, PipelineError> {
        let payload = &request.payload;
        let page_text = request.page_content();

        info!(
            request_type = %request.request_type,
            has_text = payload.user_text.is_some(),
            has_audio = payload.user_audio.is_some(),
            has_signals = payload.interaction_signals.is_some(),
            page_len = page_text.map_or(0, str::len),
            "ADAPT_REQUEST"
        );

        let transcript = self.transcribe(payload).await?;
        let user_text = transcript.as_deref().or(payload.user_text.as_deref());

        let hints = merge_hints(
            derive_signal_hints(payload.interaction_signals.as_ref()),
            derive_condition_hints(user_text),
        );
        debug!(hints = ?hints, "FRICTION_HINTS");

        let mode = resolve_mode(request.request_type);

        let ctx = PromptContext {
            request_type: request.request_type,
            mode,
            user_text,
            signals: payload.interaction_signals.as_ref(),
            page_text,
            hints: &hints,
        };
        let raw = self.gateway.infer(&ctx).await?;

        let plan = parse_plan_or_fallback(&raw);
        if let Some(proposed) = plan.mode.as_ref().and_then(|m| m.as_str()) {
            if proposed != mode.as_str() {
                debug!(proposed, resolved = mode.as_str(), "Ignoring engine-proposed mode");
            }
        }

        let shaped = shape_plan(&plan);
        info!(
            reason = plan.reason_text().unwrap_or_default(),
            confidence = plan.confidence_value(),
            summary = shaped.content.summary,
            audio = shaped.content.audio,
            flashcards = shaped.content.flashcards,
            "PLAN_SHAPED"
        );

        let content_actions = self.content.run(shaped.content, page_text).await?;
        let response = assemble_response(mode, shaped.ui_actions, content_actions);

        info!(
            mode = response.mode.as_str(),
            summary = response.content_actions.summary.enabled,
            audio = response.content_actions.audio.enabled,
            flashcards = response.content_actions.flashcards.enabled,
            "ADAPT_RESPONSE"
        );

        Ok(response)
    }

    /// Transcribe spoken input. An empty transcript keeps the typed text.
    async fn transcribe(&self, payload: &RequestPayload) -> Result<Option<String>, PipelineError> {
        let Some(audio) = payload.user_audio.as_ref() else {
            return Ok(None);
        };
        if audio.base64.trim().is_empty() {
            return Ok(None);
        }

        debug!(
            provider = self.transcriber.name(),
            audio_len = audio.base64.len(),
            "Transcribing user audio"
        );

        let transcript = bounded(
            Stage::Transcription,
            self.transcription_timeout,
            self.transcriber.transcribe(&audio.base64),
        )
        .await?;

        let transcript = transcript.trim();
        if transcript.is_empty() {
            debug!("Empty transcript; keeping typed text");
            return Ok(None);
        }

        Ok(Some(transcript.to_string()))
    }
}
