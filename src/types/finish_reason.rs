use serde::{Deserialize, Serialize};
use std::fmt;

/// Reasons why the model stopped producing a candidate.
///
/// The API grows new reasons over time; anything unrecognized lands on
/// [`FinishReason::Other`] rather than failing deserialization.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FinishReason {
    /// The model reached a natural stopping point.
    Stop,

    /// The response hit the configured output-token cap.
    MaxTokens,

    /// The candidate was filtered for safety.
    Safety,

    /// The candidate was filtered for reciting training data.
    Recitation,

    /// Any reason this crate does not model.
    #[serde(other)]
    Other,
}

impl FinishReason {
    /// Whether this reason means the text was withheld by a filter.
    pub fn is_filtered(&self) -> bool {
        matches!(self, FinishReason::Safety | FinishReason::Recitation)
    }
}

impl fmt::Display for FinishReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FinishReason::Stop => write!(f, "STOP"),
            FinishReason::MaxTokens => write!(f, "MAX_TOKENS"),
            FinishReason::Safety => write!(f, "SAFETY"),
            FinishReason::Recitation => write!(f, "RECITATION"),
            FinishReason::Other => write!(f, "OTHER"),
        }
    }
}
