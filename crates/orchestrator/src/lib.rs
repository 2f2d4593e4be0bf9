//! Accessibility adaptation pipeline.
//!
//! This crate provides the [`Pipeline`] type, which turns an adaptation
//! request into a response describing UI adjustments and optional content
//! transformations.
//!
//! # Architecture
//!
//! ```text
//! AdaptRequest (validated by the api crate)
//!          ↓
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        PIPELINE                             │
//! │                                                             │
//! │  1. Transcribe spoken input (replaces typed text)           │
//! │         ↓                                                   │
//! │  2. Derive friction hints (signals + condition keywords)    │
//! │         ↓                                                   │
//! │  3. Resolve mode (explicit → apply, implicit → suggest)     │
//! │         ↓                                                   │
//! │  4. Reasoning gateway (one engine call, no retries)         │
//! │         ↓                                                   │
//! │  5. Parse plan (fallback plan on unreadable output)         │
//! │         ↓                                                   │
//! │  6. Shape plan (allow-list, clamp, coerce)                  │
//! │         ↓                                                   │
//! │  7. Content branches, concurrently:                         │
//! │     • summary    → summarizer                               │
//! │     • audio      → short summary → speech                   │
//! │     • flashcards → short summary → image                    │
//! │         ↓                                                   │
//! │  8. Assemble response                                       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use orchestrator::{Pipeline, PipelineConfig, Providers};
//! use adapt_core::AdaptRequest;
//!
//! let pipeline = Pipeline::new(providers, PipelineConfig::from_env());
//!
//! let request = AdaptRequest::from_slice(br#"{"request_type":"explicit","payload":{"user_text":"I have low vision"}}"#)?;
//! let response = pipeline.handle(&request).await?;
//! println!("{}", serde_json::to_string_pretty(&response)?);
//! ```

mod assembler;
mod config;
mod content;
mod error;
mod gateway;
mod hints;
mod mode;
mod pipeline;
mod plan;
mod providers;
mod shaper;

// Public exports
pub use assembler::assemble_response;
pub use config::{
    PipelineConfig, PipelineConfigBuilder, DEFAULT_CONTENT_TIMEOUT, DEFAULT_PAGE_PROMPT_CHARS,
    DEFAULT_REASONING_TIMEOUT, DEFAULT_TRANSCRIPTION_TIMEOUT,
};
pub use content::ContentOrchestrator;
pub use error::{PipelineError, Stage};
pub use gateway::{
    format_reasoning_input, load_reasoning_prompt, PromptContext, ReasoningGateway,
    DEFAULT_REASONING_PROMPT, DEFAULT_REASONING_PROMPT_FILE,
};
pub use hints::{
    derive_condition_hints, derive_signal_hints, merge_hints, IDLE_THRESHOLD_SECS,
    LONG_PAUSE_THRESHOLD_SECS, MISCLICK_THRESHOLD, ZOOM_THRESHOLD,
};
pub use mode::resolve_mode;
pub use pipeline::Pipeline;
pub use plan::{
    parse_plan, parse_plan_or_fallback, ActionPlan, PlanContentActions, PlanParseError,
    PlanSummary, PlanToggle, PlanUiActions, PARSE_FAILED_REASON,
};
pub use providers::Providers;
pub use shaper::{shape_plan, ContentRequest, ShapedPlan, FONT_SCALE_RANGE, LINE_SPACING_RANGE};

// Re-export commonly used types from dependencies
pub use adapt_core::{AdaptRequest, AdaptResponse, ProviderError};
