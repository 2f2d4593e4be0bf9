//! The inbound adaptation request.

use std::collections::BTreeMap;
use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::ValidationError;

/// Whether the user asked for the adaptation or it was inferred from behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestType {
    /// The user issued a command.
    Explicit,
    /// The client detected friction from interaction telemetry.
    Implicit,
}

impl RequestType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Explicit => "explicit",
            Self::Implicit => "implicit",
        }
    }
}

impl fmt::Display for RequestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single adaptation request. Immutable once received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdaptRequest {
    pub request_type: RequestType,
    pub payload: RequestPayload,
}

impl AdaptRequest {
    /// Parse and validate a JSON request body.
    pub fn from_slice(body: &[u8]) -> Result<Self, ValidationError> {
        Ok(serde_json::from_slice(body)?)
    }

    /// Non-empty page content, if any.
    ///
    /// Whitespace-only content counts as absent.
    pub fn page_content(&self) -> Option<&str> {
        self.payload
            .page_text
            .as_ref()
            .map(|page| page.content.as_str())
            .filter(|content| !content.trim().is_empty())
    }
}

/// Everything the client attached to the request. All parts are optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequestPayload {
    #[serde(default)]
    pub user_text: Option<String>,
    #[serde(default)]
    pub user_audio: Option<UserAudio>,
    #[serde(default)]
    pub page_text: Option<PageText>,
    #[serde(default)]
    pub interaction_signals: Option<InteractionSignals>,
}

/// Spoken input as an opaque base64-encoded waveform container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAudio {
    pub base64: String,
}

/// Text content of the page the user is looking at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageText {
    pub content: String,
}

/// Interaction telemetry from the client.
///
/// Absence of a field means "no signal", not "false". Fields outside the
/// canonical set (older clients send `misclick_count`, `zoom_count`,
/// `long_pause_seconds`) are kept verbatim in [`legacy`](Self::legacy).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InteractionSignals {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constant_mouse_clicking: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequent_zooming: Option<bool>,
    /// Longest pause, in seconds.
    #[serde(default, deserialize_with = "lenient_seconds", skip_serializing_if = "Option::is_none")]
    pub long_pauses: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scroll_erratic: Option<bool>,
    /// Idle time, in seconds.
    #[serde(default, deserialize_with = "lenient_seconds", skip_serializing_if = "Option::is_none")]
    pub idle_time: Option<f64>,
    #[serde(flatten)]
    pub legacy: BTreeMap<String, Value>,
}

impl InteractionSignals {
    /// Look up a non-canonical field and read it as a number.
    ///
    /// Numbers and numeric strings convert; anything else is `None`.
    pub fn legacy_number(&self, key: &str) -> Option<f64> {
        match self.legacy.get(key)? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        }
    }
}

/// Accept seconds as a JSON number or a numeric string.
fn lenient_seconds<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => n
            .as_f64()
            .map(Some)
            .ok_or_else(|| D::Error::custom("seconds out of range")),
        Some(Value::String(s)) => s
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(|_| D::Error::custom(format!("expected seconds, got {:?}", s))),
        Some(other) => Err(D::Error::custom(format!("expected seconds, got {}", other))),
    }
}
