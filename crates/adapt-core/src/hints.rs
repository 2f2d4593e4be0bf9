//! Friction hints: contextual signal, never a diagnosis.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A semantic friction tag inferred from telemetry or from text the user wrote.
///
/// Hints describe friction the user may be experiencing. They are prompt
/// context for the reasoning engine and must never be surfaced as a medical
/// claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrictionHint {
    PossibleMotorDifficulty,
    PossibleLowVision,
    PossibleCognitiveLoad,
    PossibleReadingDifficulty,
}

impl FrictionHint {
    /// Wire name of the hint.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PossibleMotorDifficulty => "possible_motor_difficulty",
            Self::PossibleLowVision => "possible_low_vision",
            Self::PossibleCognitiveLoad => "possible_cognitive_load",
            Self::PossibleReadingDifficulty => "possible_reading_difficulty",
        }
    }
}

impl fmt::Display for FrictionHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A deduplicated set of hints. Ordered so prompts render deterministically.
pub type FrictionHints = BTreeSet<FrictionHint>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names_match_serde() {
        for hint in [
            FrictionHint::PossibleMotorDifficulty,
            FrictionHint::PossibleLowVision,
            FrictionHint::PossibleCognitiveLoad,
            FrictionHint::PossibleReadingDifficulty,
        ] {
            let json = serde_json::to_string(&hint).unwrap();
            assert_eq!(json, format!("\"{}\"", hint.as_str()));
        }
    }
}
