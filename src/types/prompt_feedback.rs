use serde::{Deserialize, Serialize};

/// Feedback about the prompt itself, returned when the service refuses to
/// generate anything for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    /// Why the prompt was blocked, e.g. "SAFETY".  Absent when the prompt
    /// was accepted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_reason: Option<String>,
}

impl PromptFeedback {
    /// Whether the prompt was blocked outright.
    pub fn is_blocked(&self) -> bool {
        self.block_reason.is_some()
    }
}
