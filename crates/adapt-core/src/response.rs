//! The outbound, contract-bound response.

use serde::{Deserialize, Serialize};

use crate::providers::{GeneratedImage, SpeechAudio};

/// Whether adaptations take effect immediately or are only proposed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    Apply,
    Suggest,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Apply => "apply",
            Self::Suggest => "suggest",
        }
    }
}

/// Display contrast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Contrast {
    Normal,
    High,
}

/// UI adaptations. Every field is independently optional and absent when
/// the reasoning engine left it unspecified or proposed something invalid.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UiActions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_scale: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_spacing: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contrast: Option<Contrast>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub simplify_layout: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hide_distractions: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlight_focus: Option<bool>,
}

/// Summary of the page, when enabled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryAction {
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl SummaryAction {
    pub fn disabled() -> Self {
        Self::default()
    }

    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            enabled: true,
            text: Some(text.into()),
        }
    }
}

/// Spoken rendition of a short page summary, when enabled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioAction {
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_format: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_base64: Option<String>,
}

impl AudioAction {
    pub fn disabled() -> Self {
        Self::default()
    }

    pub fn with_audio(audio: SpeechAudio) -> Self {
        Self {
            enabled: true,
            audio_format: Some(audio.audio_format),
            audio_base64: Some(audio.audio_base64),
        }
    }
}

/// Flashcard image of a short page summary, when enabled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlashcardAction {
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_base64: Option<String>,
}

impl FlashcardAction {
    pub fn disabled() -> Self {
        Self::default()
    }

    pub fn with_image(image: GeneratedImage) -> Self {
        Self {
            enabled: true,
            image_base64: Some(image.image_base64),
        }
    }
}

/// All three content actions. Each key is always present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentActions {
    pub summary: SummaryAction,
    pub audio: AudioAction,
    pub flashcards: FlashcardAction,
}

impl ContentActions {
    /// Every content action disabled.
    pub fn disabled() -> Self {
        Self::default()
    }

    /// Whether any content action carries a result.
    pub fn any_enabled(&self) -> bool {
        self.summary.enabled || self.audio.enabled || self.flashcards.enabled
    }
}

/// The final response returned to the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdaptResponse {
    pub mode: Mode,
    pub ui_actions: UiActions,
    pub content_actions: ContentActions,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_disabled_actions_serialize_enabled_only() {
        let response = AdaptResponse {
            mode: Mode::Suggest,
            ui_actions: UiActions::default(),
            content_actions: ContentActions::disabled(),
        };

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(
            value,
            json!({
                "mode": "suggest",
                "ui_actions": {},
                "content_actions": {
                    "summary": {"enabled": false},
                    "audio": {"enabled": false},
                    "flashcards": {"enabled": false}
                }
            })
        );
    }

    #[test]
    fn test_enabled_actions_carry_only_their_fields() {
        let actions = ContentActions {
            summary: SummaryAction::with_text("A short summary."),
            audio: AudioAction::with_audio(SpeechAudio {
                audio_format: "wav".to_string(),
                audio_base64: "UklGRg==".to_string(),
            }),
            flashcards: FlashcardAction::with_image(GeneratedImage {
                image_base64: "iVBORw0=".to_string(),
            }),
        };

        let value = serde_json::to_value(&actions).unwrap();
        assert_eq!(value["summary"], json!({"enabled": true, "text": "A short summary."}));
        assert_eq!(
            value["audio"],
            json!({"enabled": true, "audio_format": "wav", "audio_base64": "UklGRg=="})
        );
        assert_eq!(value["flashcards"], json!({"enabled": true, "image_base64": "iVBORw0="}));
        assert!(actions.any_enabled());
    }

    #[test]
    fn test_ui_actions_omit_absent_fields() {
        let ui = UiActions {
            font_scale: Some(1.4),
            contrast: Some(Contrast::High),
            ..Default::default()
        };
        let value = serde_json::to_value(&ui).unwrap();
        assert_eq!(value, json!({"font_scale": 1.4, "contrast": "high"}));
    }
}
