//! Reasoning gateway: builds the instruction prompt and calls the engine.

use std::env;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use adapt_core::{
    char_prefix, hash_prompt, FrictionHints, InteractionSignals, Mode, ReasoningEngine,
    RequestType,
};
use tracing::{debug, info, trace};

use crate::config::PipelineConfig;
use crate::error::{bounded, PipelineError, Stage};

/// Default path for the reasoning prompt file.
pub const DEFAULT_REASONING_PROMPT_FILE: &str = "REASONING_PROMPT.md";

/// Default reasoning instructions (fallback if no override is found).
///
/// The UI bounds stated here are the same bounds the shaper clamps to.
pub const DEFAULT_REASONING_PROMPT: &str = r#"You are an accessibility reasoning engine.

IMPORTANT:
- Mentions of medical or neurological conditions are CONTEXT, not commands.
- Do NOT assume severity.
- Prefer suggestion mode unless the user explicitly requests changes.

TASK:
1. Use the derived context and the user message to infer accessibility friction.
2. Do NOT change the provided mode.
3. Decide UI adaptations using ONLY the allowed UI actions.
4. Decide content modality changes ONLY if page content is provided.
5. Return STRICT JSON in the schema below.
6. Do NOT add explanations outside the JSON.

INTERPRETATION RULES:
- possible_motor_difficulty:
  Prefer increased spacing, simplified layout, reduced precision.
- possible_low_vision:
  Prefer larger font, higher contrast, audio if content exists.
- possible_cognitive_load:
  Prefer simplified layout, hiding distractions, summaries.
- possible_reading_difficulty:
  Prefer summaries and audio if content exists.

CONTENT MODALITY DECISION RULES:
- Enable "summary" if:
  * the user explicitly asks to summarize, simplify, or shorten, OR
  * cognitive or reading difficulty is indicated AND page content exists.
- Enable "audio" if:
  * the user explicitly asks to listen, OR
  * visual or reading difficulty is indicated AND page content exists.
- Enable "flashcards" ONLY if:
  * the user explicitly asks for flashcards or key points.
- If page content is empty:
  * Do NOT enable summary, audio, or flashcards.

UI ACTION CONSTRAINTS:
- font_scale in [0.8, 2.0]
- line_spacing in [0.8, 2.5]

JSON SCHEMA:
{
  "mode": "apply | suggest",
  "ui_actions": {
    "font_scale": float,
    "line_spacing": float,
    "contrast": "normal | high",
    "simplify_layout": boolean,
    "hide_distractions": boolean,
    "highlight_focus": boolean
  },
  "content_actions": {
    "summary": { "enabled": boolean, "length": "short | medium" },
    "audio": { "enabled": boolean },
    "flashcards": { "enabled": boolean }
  },
  "reason": string,
  "confidence": float
}

Return JSON ONLY."#;

/// Load the reasoning instructions.
///
/// Priority:
/// 1. `ADAPT_REASONING_PROMPT` env var (if set)
/// 2. Contents of prompt file (`ADAPT_REASONING_PROMPT_FILE` or default `REASONING_PROMPT.md`)
/// 3. Embedded default prompt
pub fn load_reasoning_prompt() -> String {
    if let Ok(prompt) = env::var("ADAPT_REASONING_PROMPT") {
        info!("Using reasoning prompt from ADAPT_REASONING_PROMPT env var");
        return prompt;
    }

    let prompt_file = env::var("ADAPT_REASONING_PROMPT_FILE")
        .unwrap_or_else(|_| DEFAULT_REASONING_PROMPT_FILE.to_string());

    if let Some(prompt) = load_prompt_file(&prompt_file) {
        info!("Loaded reasoning prompt from {}", prompt_file);
        return prompt;
    }

    info!("Using embedded default reasoning prompt");
    DEFAULT_REASONING_PROMPT.to_string()
}

/// Returns `Some(content)` if the file exists and is non-empty.
fn load_prompt_file(path: impl AsRef<Path>) -> Option<String> {
    let content = std::fs::read_to_string(path).ok()?;
    let trimmed = content.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Per-request inputs placed in the prompt.
#[derive(Debug, Clone, Copy)]
pub struct PromptContext<'a> {
    pub request_type: RequestType,
    /// Already resolved; the engine is told not to change it.
    pub mode: Mode,
    pub user_text: Option<&'a str>,
    pub signals: Option<&'a InteractionSignals>,
    pub page_text: Option<&'a str>,
    pub hints: &'a FrictionHints,
}

/// Builds prompts and invokes the reasoning engine. No retries.
pub struct ReasoningGateway {
    engine: Arc<dyn ReasoningEngine>,
    instructions: String,
    prompt_hash: String,
    page_prompt_chars: usize,
    timeout: Duration,
}

impl ReasoningGateway {
    /// Create a gateway with explicit instructions.
    pub fn new(
        engine: Arc<dyn ReasoningEngine>,
        instructions: impl Into<String>,
        page_prompt_chars: usize,
        timeout: Duration,
    ) -> Self {
        let instructions = instructions.into();
        let prompt_hash = hash_prompt(&instructions);

        info!(
            engine = engine.name(),
            "Reasoning prompt fingerprint: {}", prompt_hash
        );

        Self {
            engine,
            instructions,
            prompt_hash,
            page_prompt_chars,
            timeout,
        }
    }

    /// Create a gateway from pipeline configuration.
    ///
    /// Uses the configured instructions, or [`load_reasoning_prompt`].
    pub fn from_config(engine: Arc<dyn ReasoningEngine>, config: &PipelineConfig) -> Self {
        let instructions = config
            .reasoning_prompt
            .clone()
            .unwrap_or_else(load_reasoning_prompt);
        Self::new(
            engine,
            instructions,
            config.page_prompt_chars,
            config.reasoning_timeout,
        )
    }

    /// Get the instruction fingerprint.
    pub fn prompt_hash(&self) -> &str {
        &self.prompt_hash
    }

    /// Assemble the full prompt: instructions followed by the request inputs.
    pub fn build_prompt(&self, ctx: &PromptContext<'_>) -> String {
        format!(
            "{}\n\n{}",
            self.instructions,
            format_reasoning_input(ctx, self.page_prompt_chars)
        )
    }

    /// Ask the engine for a plan and return its raw text.
    pub async fn infer(&self, ctx: &PromptContext<'_>) -> Result<String, PipelineError> {
        let prompt = self.build_prompt(ctx);
        debug!(
            engine = self.engine.name(),
            prompt_len = prompt.len(),
            "Sending reasoning prompt"
        );

        let raw = bounded(Stage::Reasoning, self.timeout, self.engine.reason(&prompt)).await?;

        trace!(
            raw_response = %raw,
            response_len = raw.len(),
            "REASONING_RAW_RESPONSE"
        );

        Ok(raw)
    }
}

/// Format the request inputs section of the prompt.
pub fn format_reasoning_input(ctx: &PromptContext<'_>, page_prompt_chars: usize) -> String {
    let user_text = ctx.user_text.unwrap_or("null");

    let signals = ctx
        .signals
        .and_then(|s| serde_json::to_string(s).ok())
        .unwrap_or_else(|| "null".to_string());

    let page = match ctx.page_text {
        Some(text) if !text.trim().is_empty() => char_prefix(text, page_prompt_chars),
        _ => "None",
    };

    let hints: Vec<&str> = ctx.hints.iter().map(|h| h.as_str()).collect();
    let hints = serde_json::to_string(&hints).unwrap_or_else(|_| "[]".to_string());

    format!(
        "INPUTS:\n\
         - Request type: {}\n\
         - Mode (already decided): {}\n\
         - User message: {}\n\
         - Interaction signals: {}\n\
         - Page content (may be empty): {}\n\
         \n\
         DERIVED ACCESSIBILITY CONTEXT:\n\
         {}",
        ctx.request_type.as_str(),
        ctx.mode.as_str(),
        user_text,
        signals,
        page,
        hints
    )
}
