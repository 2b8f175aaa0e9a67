//! Feedback classification.
//!
//! Maps a rule outcome to the three-way state a renderer uses to pick its
//! visual treatment.

use serde::{Deserialize, Serialize};

/// Semantic feedback state for a field or requirement line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayState {
    /// Nothing typed yet
    #[default]
    Neutral,
    Valid,
    Invalid,
}

impl DisplayState {
    pub fn is_valid(&self) -> bool {
        matches!(self, DisplayState::Valid)
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, DisplayState::Invalid)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayState::Neutral => "neutral",
            DisplayState::Valid => "valid",
            DisplayState::Invalid => "invalid",
        }
    }
}

impl std::fmt::Display for DisplayState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a rule outcome.
///
/// An empty value is always neutral, whatever the rule says.
pub fn classify(is_empty: bool, passes: bool) -> DisplayState {
    if is_empty {
        DisplayState::Neutral
    } else if passes {
        DisplayState::Valid
    } else {
        DisplayState::Invalid
    }
}
