//! Projection of a loose action plan onto the strict response contract.
//!
//! The shaper is an allow-list: it reads only the fields it knows, converts
//! what it can, clamps numeric ranges and drops everything else. It never
//! fails.

use std::ops::RangeInclusive;

use adapt_core::{Contrast, SummaryLength, UiActions};
use serde_json::Value;

use crate::plan::{ActionPlan, PlanContentActions, PlanUiActions};

/// Allowed `font_scale` range.
pub const FONT_SCALE_RANGE: RangeInclusive<f64> = 0.8..=2.0;

/// Allowed `line_spacing` range.
pub const LINE_SPACING_RANGE: RangeInclusive<f64> = 0.8..=2.5;

/// Content transformations the plan asks for, after validation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContentRequest {
    pub summary: bool,
    /// Consumed by the summary branch only; not part of the response.
    pub summary_length: SummaryLength,
    pub audio: bool,
    pub flashcards: bool,
}

impl ContentRequest {
    pub fn any(&self) -> bool {
        self.summary || self.audio || self.flashcards
    }
}

/// A plan that conforms to the response contract.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShapedPlan {
    pub ui_actions: UiActions,
    pub content: ContentRequest,
}

/// Shape an action plan.
pub fn shape_plan(plan: &ActionPlan) -> ShapedPlan {
    ShapedPlan {
        ui_actions: plan
            .ui_actions
            .as_ref()
            .map(shape_ui_actions)
            .unwrap_or_default(),
        content: plan
            .content_actions
            .as_ref()
            .map(shape_content_actions)
            .unwrap_or_default(),
    }
}

fn shape_ui_actions(ui: &PlanUiActions) -> UiActions {
    UiActions {
        font_scale: clamped(ui.font_scale.as_ref(), FONT_SCALE_RANGE),
        line_spacing: clamped(ui.line_spacing.as_ref(), LINE_SPACING_RANGE),
        contrast: ui.contrast.as_ref().and_then(contrast),
        simplify_layout: ui.simplify_layout.as_ref().and_then(coerce_bool),
        hide_distractions: ui.hide_distractions.as_ref().and_then(coerce_bool),
        highlight_focus: ui.highlight_focus.as_ref().and_then(coerce_bool),
    }
}

fn shape_content_actions(content: &PlanContentActions) -> ContentRequest {
    let summary = content.summary.as_ref();

    ContentRequest {
        summary: enabled(summary.and_then(|s| s.enabled.as_ref())),
        summary_length: summary
            .and_then(|s| s.length.as_ref())
            .map(summary_length)
            .unwrap_or_default(),
        audio: enabled(content.audio.as_ref().and_then(|a| a.enabled.as_ref())),
        flashcards: enabled(content.flashcards.as_ref().and_then(|f| f.enabled.as_ref())),
    }
}

/// Convert to a finite number and clamp into `range`. Unconvertible values are omitted.
fn clamped(value: Option<&Value>, range: RangeInclusive<f64>) -> Option<f64> {
    let n = to_number(value?)?;
    Some(n.clamp(*range.start(), *range.end()))
}

fn to_number(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    n.is_finite().then_some(n)
}

/// Exactly `normal` or `high`; case variants and anything else are dropped.
fn contrast(value: &Value) -> Option<Contrast> {
    match value.as_str()? {
        "normal" => Some(Contrast::Normal),
        "high" => Some(Contrast::High),
        _ => None,
    }
}

fn coerce_bool(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => n.as_f64().map(|n| n != 0.0),
        Value::String(s) => match s.trim().to_lowercase().as_str() {
            "true" | "yes" | "on" | "1" => Some(true),
            "false" | "no" | "off" | "0" | "" => Some(false),
            _ => None,
        },
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn enabled(value: Option<&Value>) -> bool {
    value.and_then(coerce_bool).unwrap_or(false)
}

fn summary_length(value: &Value) -> SummaryLength {
    match value.as_str() {
        Some("medium") => SummaryLength::Medium,
        _ => SummaryLength::Short,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::{parse_plan, parse_plan_or_fallback};

    fn shape(raw: &str) -> ShapedPlan {
        shape_plan(&parse_plan(raw).unwrap())
    }

    #[test]
    fn test_in_range_values_pass_through() {
        let shaped = shape(r#"{"ui_actions": {"font_scale": 1.3, "line_spacing": 1.6}}"#);
        assert_eq!(shaped.ui_actions.font_scale, Some(1.3));
        assert_eq!(shaped.ui_actions.line_spacing, Some(1.6));
    }

    #[test]
    fn test_out_of_range_values_clamped() {
        let high = shape(r#"{"ui_actions": {"font_scale": 5, "line_spacing": 9.9}}"#);
        assert_eq!(high.ui_actions.font_scale, Some(2.0));
        assert_eq!(high.ui_actions.line_spacing, Some(2.5));

        let low = shape(r#"{"ui_actions": {"font_scale": 0.1, "line_spacing": -3}}"#);
        assert_eq!(low.ui_actions.font_scale, Some(0.8));
        assert_eq!(low.ui_actions.line_spacing, Some(0.8));
    }

    #[test]
    fn test_numeric_strings_converted() {
        let shaped = shape(r#"{"ui_actions": {"font_scale": " 1.25 ", "line_spacing": "3"}}"#);
        assert_eq!(shaped.ui_actions.font_scale, Some(1.25));
        assert_eq!(shaped.ui_actions.line_spacing, Some(2.5));
    }

    #[test]
    fn test_non_numeric_values_omitted() {
        let shaped = shape(
            r#"{"ui_actions": {"font_scale": "large", "line_spacing": true}}"#,
        );
        assert_eq!(shaped.ui_actions.font_scale, None);
        assert_eq!(shaped.ui_actions.line_spacing, None);

        let nested = shape(r#"{"ui_actions": {"font_scale": [1.2], "line_spacing": {"v": 1}}}"#);
        assert_eq!(nested.ui_actions.font_scale, None);
        assert_eq!(nested.ui_actions.line_spacing, None);
    }

    #[test]
    fn test_contrast_allow_list() {
        assert_eq!(
            shape(r#"{"ui_actions": {"contrast": "high"}}"#).ui_actions.contrast,
            Some(Contrast::High)
        );
        assert_eq!(
            shape(r#"{"ui_actions": {"contrast": "normal"}}"#).ui_actions.contrast,
            Some(Contrast::Normal)
        );
        assert_eq!(shape(r#"{"ui_actions": {"contrast": "HIGH"}}"#).ui_actions.contrast, None);
        assert_eq!(shape(r#"{"ui_actions": {"contrast": "inverted"}}"#).ui_actions.contrast, None);
        assert_eq!(shape(r#"{"ui_actions": {"contrast": 1}}"#).ui_actions.contrast, None);
    }

    #[test]
    fn test_booleans_coerced_or_omitted() {
        let shaped = shape(
            r#"{"ui_actions": {"simplify_layout": "yes", "hide_distractions": 0, "highlight_focus": "maybe"}}"#,
        );
        assert_eq!(shaped.ui_actions.simplify_layout, Some(true));
        assert_eq!(shaped.ui_actions.hide_distractions, Some(false));
        assert_eq!(shaped.ui_actions.highlight_focus, None);

        let absent = shape(r#"{"ui_actions": {}}"#);
        assert_eq!(absent.ui_actions, UiActions::default());
    }

    #[test]
    fn test_missing_content_defaults_disabled() {
        let shaped = shape(r#"{"ui_actions": {"font_scale": 1.1}}"#);
        assert_eq!(shaped.content, ContentRequest::default());
        assert!(!shaped.content.any());
        assert_eq!(shaped.content.summary_length, SummaryLength::Short);
    }

    #[test]
    fn test_content_flags() {
        let shaped = shape(
            r#"{"content_actions": {
                "summary": {"enabled": true, "length": "medium"},
                "audio": {"enabled": "true"},
                "flashcards": {"enabled": null}
            }}"#,
        );
        assert!(shaped.content.summary);
        assert_eq!(shaped.content.summary_length, SummaryLength::Medium);
        assert!(shaped.content.audio);
        assert!(!shaped.content.flashcards);
    }

    #[test]
    fn test_summary_length_defaults_short() {
        for length in [r#""long""#, r#""Medium""#, "3", "null"] {
            let raw = format!(
                r#"{{"content_actions": {{"summary": {{"enabled": true, "length": {}}}}}}}"#,
                length
            );
            assert_eq!(shape(&raw).content.summary_length, SummaryLength::Short);
        }
    }

    #[test]
    fn test_fallback_shapes_to_identity() {
        let shaped = shape_plan(&parse_plan_or_fallback("not a json object"));
        assert_eq!(
            shaped.ui_actions,
            UiActions {
                font_scale: Some(1.0),
                line_spacing: Some(1.0),
                contrast: Some(Contrast::Normal),
                simplify_layout: Some(false),
                hide_distractions: Some(false),
                highlight_focus: Some(false),
            }
        );
        assert_eq!(shaped.content, ContentRequest::default());
    }

    #[test]
    fn test_clamped_range_property() {
        for raw in [-1e9, -1.0, 0.0, 0.79, 0.8, 1.0, 1.99, 2.0, 2.01, 2.5, 2.51, 1e9] {
            let plan = format!(
                r#"{{"ui_actions": {{"font_scale": {}, "line_spacing": {}}}}}"#,
                raw, raw
            );
            let shaped = shape(&plan);
            let font = shaped.ui_actions.font_scale.unwrap();
            let spacing = shaped.ui_actions.line_spacing.unwrap();
            assert!(FONT_SCALE_RANGE.contains(&font), "font_scale {} from {}", font, raw);
            assert!(LINE_SPACING_RANGE.contains(&spacing), "line_spacing {} from {}", spacing, raw);
        }
    }
}
