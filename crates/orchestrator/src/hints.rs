//! Friction hint derivation from telemetry and from free text.
//!
//! Both derivers are total: missing or unreadable values simply produce no
//! hint. The result is contextual signal for the reasoning engine, not a
//! diagnosis, and is never echoed back to the client.

use adapt_core::{FrictionHint, FrictionHints, InteractionSignals};

/// Pause length, in seconds, that suggests cognitive load.
pub const LONG_PAUSE_THRESHOLD_SECS: f64 = 15.0;

/// Idle time, in seconds, that suggests cognitive load.
pub const IDLE_THRESHOLD_SECS: f64 = 20.0;

/// Legacy misclick count that suggests motor difficulty.
pub const MISCLICK_THRESHOLD: f64 = 5.0;

/// Legacy zoom count that suggests low vision.
pub const ZOOM_THRESHOLD: f64 = 3.0;

const COGNITIVE_KEYWORDS: &[&str] = &["adhd", "attention deficit", "add"];
const READING_KEYWORDS: &[&str] = &["dyslexia", "reading disorder"];
const MOTOR_KEYWORDS: &[&str] = &["parkinson", "motor disorder", "tremor", "dystonia"];
const LOW_VISION_KEYWORDS: &[&str] = &["low vision", "visually impaired", "poor eyesight"];

/// Derive hints from interaction telemetry.
pub fn derive_signal_hints(signals: Option<&InteractionSignals>) -> FrictionHints {
    let mut hints = FrictionHints::new();
    let Some(signals) = signals else {
        return hints;
    };

    if signals.constant_mouse_clicking == Some(true) {
        hints.insert(FrictionHint::PossibleMotorDifficulty);
    }

    if signals.frequent_zooming == Some(true) {
        hints.insert(FrictionHint::PossibleLowVision);
    }

    if meets(signals.long_pauses, LONG_PAUSE_THRESHOLD_SECS) {
        hints.insert(FrictionHint::PossibleCognitiveLoad);
    }

    if signals.scroll_erratic == Some(true) {
        hints.insert(FrictionHint::PossibleCognitiveLoad);
    }

    if meets(signals.idle_time, IDLE_THRESHOLD_SECS) {
        hints.insert(FrictionHint::PossibleCognitiveLoad);
    }

    // Older clients
    if meets(signals.legacy_number("misclick_count"), MISCLICK_THRESHOLD) {
        hints.insert(FrictionHint::PossibleMotorDifficulty);
    }
    if meets(signals.legacy_number("zoom_count"), ZOOM_THRESHOLD) {
        hints.insert(FrictionHint::PossibleLowVision);
    }
    if meets(signals.legacy_number("long_pause_seconds"), LONG_PAUSE_THRESHOLD_SECS) {
        hints.insert(FrictionHint::PossibleCognitiveLoad);
    }

    hints
}

/// Derive hints from conditions the user mentioned in their own words.
///
/// Case-insensitive substring matching. Mentioning a condition is context,
/// not a claim about the user.
pub fn derive_condition_hints(user_text: Option<&str>) -> FrictionHints {
    let mut hints = FrictionHints::new();
    let Some(text) = user_text.filter(|t| !t.is_empty()) else {
        return hints;
    };

    let text = text.to_lowercase();
    let groups = [
        (COGNITIVE_KEYWORDS, FrictionHint::PossibleCognitiveLoad),
        (READING_KEYWORDS, FrictionHint::PossibleReadingDifficulty),
        (MOTOR_KEYWORDS, FrictionHint::PossibleMotorDifficulty),
        (LOW_VISION_KEYWORDS, FrictionHint::PossibleLowVision),
    ];

    for (keywords, hint) in groups {
        if keywords.iter().any(|k| text.contains(k)) {
            hints.insert(hint);
        }
    }

    hints
}

/// Union of telemetry and text hints.
pub fn merge_hints(signal_hints: FrictionHints, condition_hints: FrictionHints) -> FrictionHints {
    let mut merged = signal_hints;
    merged.extend(condition_hints);
    merged
}

fn meets(value: Option<f64>, threshold: f64) -> bool {
    value.is_some_and(|v| v >= threshold)
}
