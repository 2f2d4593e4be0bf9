//! The reasoning engine's action plan and its safe parser.
//!
//! The plan is deliberately loose: every leaf is kept as raw JSON so that a
//! wrongly-typed field never sinks an otherwise usable plan. Validation and
//! coercion happen later, in the shaper. Unknown keys are dropped here.

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{json, Value};
use thiserror::Error;
use tracing::{debug, warn};

/// Reason attached to the fallback plan.
pub const PARSE_FAILED_REASON: &str = "LLM output parsing failed";

/// The action plan proposed by the reasoning engine, before shaping.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActionPlan {
    /// Advisory only; the resolved mode always wins.
    #[serde(default)]
    pub mode: Option<Value>,
    #[serde(default, deserialize_with = "lenient_section")]
    pub ui_actions: Option<PlanUiActions>,
    #[serde(default, deserialize_with = "lenient_section")]
    pub content_actions: Option<PlanContentActions>,
    #[serde(default)]
    pub reason: Option<Value>,
    /// No range is enforced on the engine's confidence.
    #[serde(default)]
    pub confidence: Option<Value>,
}

/// Proposed UI adaptations, unvalidated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanUiActions {
    #[serde(default)]
    pub font_scale: Option<Value>,
    #[serde(default)]
    pub line_spacing: Option<Value>,
    #[serde(default)]
    pub contrast: Option<Value>,
    #[serde(default)]
    pub simplify_layout: Option<Value>,
    #[serde(default)]
    pub hide_distractions: Option<Value>,
    #[serde(default)]
    pub highlight_focus: Option<Value>,
}

/// Proposed content transformations, unvalidated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanContentActions {
    #[serde(default, deserialize_with = "lenient_section")]
    pub summary: Option<PlanSummary>,
    #[serde(default, deserialize_with = "lenient_section")]
    pub audio: Option<PlanToggle>,
    #[serde(default, deserialize_with = "lenient_section")]
    pub flashcards: Option<PlanToggle>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanSummary {
    #[serde(default)]
    pub enabled: Option<Value>,
    #[serde(default)]
    pub length: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanToggle {
    #[serde(default)]
    pub enabled: Option<Value>,
}

impl ActionPlan {
    /// The fixed plan used whenever engine output cannot be parsed.
    ///
    /// Identity UI values and every content action disabled.
    pub fn fallback() -> Self {
        Self {
            mode: Some(json!("suggest")),
            ui_actions: Some(PlanUiActions {
                font_scale: Some(json!(1.0)),
                line_spacing: Some(json!(1.0)),
                contrast: Some(json!("normal")),
                simplify_layout: Some(json!(false)),
                hide_distractions: Some(json!(false)),
                highlight_focus: Some(json!(false)),
            }),
            content_actions: Some(PlanContentActions {
                summary: Some(PlanSummary {
                    enabled: Some(json!(false)),
                    length: Some(json!("short")),
                }),
                audio: Some(PlanToggle {
                    enabled: Some(json!(false)),
                }),
                flashcards: Some(PlanToggle {
                    enabled: Some(json!(false)),
                }),
            }),
            reason: Some(json!(PARSE_FAILED_REASON)),
            confidence: Some(json!(0.0)),
        }
    }

    /// The engine's stated reason, if it gave a string.
    pub fn reason_text(&self) -> Option<&str> {
        self.reason.as_ref().and_then(Value::as_str)
    }

    /// The engine's confidence, if it gave a number.
    pub fn confidence_value(&self) -> Option<f64> {
        self.confidence.as_ref().and_then(Value::as_f64)
    }
}

/// Why engine output could not be read as a plan.
#[derive(Debug, Error)]
pub enum PlanParseError {
    #[error("not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("expected a JSON object, got {0}")]
    NotAnObject(&'static str),
}

/// Parse raw engine output into a plan.
///
/// Tolerates markdown fences and surrounding prose, but the payload itself
/// must be a JSON object.
pub fn parse_plan(raw: &str) -> Result<ActionPlan, PlanParseError> {
    let json_str = extract_json(raw);
    let value: Value = serde_json::from_str(json_str)?;

    match value {
        Value::Object(_) => Ok(serde_json::from_value(value)?),
        Value::Array(_) => Err(PlanParseError::NotAnObject("an array")),
        Value::String(_) => Err(PlanParseError::NotAnObject("a string")),
        Value::Number(_) => Err(PlanParseError::NotAnObject("a number")),
        Value::Bool(_) => Err(PlanParseError::NotAnObject("a boolean")),
        Value::Null => Err(PlanParseError::NotAnObject("null")),
    }
}

/// Parse raw engine output, substituting [`ActionPlan::fallback`] on failure.
///
/// Never fails.
pub fn parse_plan_or_fallback(raw: &str) -> ActionPlan {
    match parse_plan(raw) {
        Ok(plan) => {
            debug!(
                reason = plan.reason_text().unwrap_or(""),
                confidence = ?plan.confidence_value(),
                "PLAN_PARSED"
            );
            plan
        }
        Err(e) => {
            warn!(
                error = %e,
                raw_len = raw.len(),
                "PLAN_PARSE_FAILED"
            );
            ActionPlan::fallback()
        }
    }
}

/// Treat a section that is not a JSON object as absent.
fn lenient_section<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Option::<Value>::deserialize(deserializer)? {
        Some(value @ Value::Object(_)) => serde_json::from_value(value)
            .map(Some)
            .map_err(D::Error::custom),
        _ => Ok(None),
    }
}

/// Locate the JSON payload in a response that may contain markdown or prose.
fn extract_json(response: &str) -> &str {
    let trimmed = response.trim();

    if trimmed.starts_with('{') {
        return extract_balanced_object(trimmed);
    }

    if let Some(start) = trimmed.find("```json") {
        let body = &trimmed[start + "```json".len()..];
        if let Some(end) = body.find("```") {
            return extract_balanced_object(body[..end].trim());
        }
    }

    if let Some(start) = trimmed.find("```") {
        let after_fence = &trimmed[start + 3..];
        // Skip the optional language tag
        let body_start = after_fence.find('\n').map(|i| i + 1).unwrap_or(0);
        if let Some(end) = after_fence[body_start..].find("```") {
            return extract_balanced_object(after_fence[body_start..body_start + end].trim());
        }
    }

    if let Some(start) = trimmed.find('{') {
        return extract_balanced_object(&trimmed[start..]);
    }

    trimmed
}

/// Cut a string that starts with `{` at its matching closing brace.
///
/// Engines sometimes emit trailing braces or commentary after the object.
/// Braces inside string literals are ignored. Unbalanced input is returned
/// unchanged so the JSON parser reports the real error.
fn extract_balanced_object(s: &str) -> &str {
    if !s.starts_with('{') {
        return s;
    }

    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (i, ch) in s.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }

        match ch {
            '\\' if in_string => escaped = true,
            '"' => in_string = !in_string,
            '{' if !in_string => depth += 1,
            '}' if !in_string => {
                depth -= 1;
                if depth == 0 {
                    return &s[..=i];
                }
            }
            _ => {}
        }
    }

    s
}
