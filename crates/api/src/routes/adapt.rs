//! Demo endpoint returning one of two fixed adaptation plans.
//!
//! Lets the browser extension exercise its UI without running the pipeline.

use std::collections::BTreeMap;

use adapt_core::{Contrast, Mode, UiActions};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

/// Demo request. Only `state` affects the answer.
#[derive(Debug, Default, Deserialize)]
pub struct DemoRequest {
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub signals: Option<BTreeMap<String, Value>>,
}

/// The friction states with a canned plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoState {
    Readability,
    Overload,
}

impl DemoState {
    /// Unknown or absent labels resolve to `Readability`.
    pub fn from_label(label: Option<&str>) -> Self {
        match label {
            Some("overload") => Self::Overload,
            _ => Self::Readability,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Readability => "readability",
            Self::Overload => "overload",
        }
    }

    fn plan(self) -> DemoPlan {
        match self {
            Self::Readability => DemoPlan {
                mode: Mode::Apply,
                confidence: 0.85,
                ui_actions: UiActions {
                    font_scale: Some(1.4),
                    line_spacing: Some(1.8),
                    contrast: Some(Contrast::High),
                    simplify_layout: Some(false),
                    hide_distractions: Some(false),
                    highlight_focus: Some(true),
                },
                explanation: "Readability adaptations: increased font size to 1.4x, line spacing 1.8, high contrast, key sentence highlighting.",
                state: self.as_str(),
            },
            Self::Overload => DemoPlan {
                mode: Mode::Apply,
                confidence: 0.82,
                ui_actions: UiActions {
                    font_scale: Some(1.1),
                    line_spacing: Some(1.6),
                    contrast: Some(Contrast::Normal),
                    simplify_layout: Some(true),
                    hide_distractions: Some(true),
                    highlight_focus: Some(false),
                },
                explanation: "Overload reduction: simplified layout, increased spacing, distractions hidden.",
                state: self.as_str(),
            },
        }
    }
}

/// A canned plan plus the state it was chosen for.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DemoPlan {
    pub mode: Mode,
    pub confidence: f64,
    pub ui_actions: UiActions,
    pub explanation: &'static str,
    pub state: &'static str,
}

/// Demo adaptation endpoint.
pub async fn adapt(Json(request): Json<DemoRequest>) -> Json<DemoPlan> {
    let state = DemoState::from_label(request.state.as_deref());
    debug!(
        requested = request.state.as_deref().unwrap_or("none"),
        resolved = state.as_str(),
        url = request.url.as_deref().unwrap_or(""),
        signals = request.signals.as_ref().map_or(0, BTreeMap::len),
        "Serving demo plan"
    );
    Json(state.plan())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_state_is_readability() {
        assert_eq!(DemoState::from_label(None), DemoState::Readability);
        assert_eq!(DemoState::from_label(Some("sleepy")), DemoState::Readability);
        assert_eq!(DemoState::from_label(Some("overload")), DemoState::Overload);
    }

    #[tokio::test]
    async fn test_overload_plan() {
        let request = DemoRequest {
            state: Some("overload".to_string()),
            ..Default::default()
        };
        let Json(plan) = adapt(Json(request)).await;
        assert_eq!(plan.state, "overload");
        assert_eq!(plan.ui_actions.simplify_layout, Some(true));
        assert_eq!(plan.confidence, 0.82);
    }
}
