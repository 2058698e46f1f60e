//! Segmentation mode for the API

use crate::api::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which automata produce raw candidates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentationMode {
    /// Character DFA only; POS tags corroborate during filtering
    #[default]
    Character,
    /// Token DFA over the tagged stream only
    Token,
    /// Character DFA candidates followed by token DFA candidates
    ///
    /// Both lists are merged before filtering, so a mention found by both
    /// automata is counted once per automaton ("San Francisco" scans to 2).
    Hybrid,
}

impl SegmentationMode {
    /// Get the mode name
    pub fn name(&self) -> &'static str {
        match self {
            SegmentationMode::Character => "character",
            SegmentationMode::Token => "token",
            SegmentationMode::Hybrid => "hybrid",
        }
    }

    /// Whether the character DFA runs when POS evidence is available
    pub(crate) fn uses_char_dfa(&self) -> bool {
        matches!(self, SegmentationMode::Character | SegmentationMode::Hybrid)
    }

    /// Whether the token DFA runs when POS evidence is available
    pub(crate) fn uses_token_dfa(&self) -> bool {
        matches!(self, SegmentationMode::Token | SegmentationMode::Hybrid)
    }
}

impl fmt::Display for SegmentationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for SegmentationMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "character" | "char" => Ok(SegmentationMode::Character),
            "token" => Ok(SegmentationMode::Token),
            "hybrid" | "both" => Ok(SegmentationMode::Hybrid),
            _ => Err(Error::Configuration(format!(
                "Unknown segmentation mode: {s}"
            ))),
        }
    }
}
