use serde::{Deserialize, Serialize};

use crate::types::{Content, FinishReason};

/// One generated completion within a response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// The generated content.  Absent when the candidate was filtered
    /// before any text was produced.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<Content>,

    /// Why generation stopped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<FinishReason>,
}

impl Candidate {
    /// The concatenated text of this candidate, if any was produced.
    pub fn text(&self) -> Option<String> {
        let content = self.content.as_ref()?;
        if content.parts.is_empty() {
            return None;
        }
        Some(content.text())
    }
}
