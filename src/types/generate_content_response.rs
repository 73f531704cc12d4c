use serde::{Deserialize, Serialize};

use crate::types::{Candidate, PromptFeedback, UsageMetadata};
use crate::{Error, Result};

/// The response body of a `models/{model}:generateContent` call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    /// Generated completions.  Empty when the prompt was blocked.
    #[serde(default)]
    pub candidates: Vec<Candidate>,

    /// Present when the service has something to say about the prompt,
    /// notably when it refused it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt_feedback: Option<PromptFeedback>,

    /// Token accounting.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage_metadata: Option<UsageMetadata>,
}

impl GenerateContentResponse {
    /// Extract the text of the first candidate.
    ///
    /// Fails with [`Error::Blocked`] when the prompt was refused, the
    /// candidate list is empty, or the first candidate carries no text
    /// (e.g. it was filtered for safety).
    pub fn text(&self) -> Result<String> {
        if let Some(feedback) = &self.prompt_feedback
            && let Some(reason) = &feedback.block_reason
        {
            return Err(Error::blocked(format!("prompt was blocked: {reason}")));
        }
        let Some(candidate) = self.candidates.first() else {
            return Err(Error::blocked("response contained no candidates"));
        };
        match candidate.text() {
            Some(text) => Ok(text),
            None => match candidate.finish_reason {
                Some(reason) if reason.is_filtered() => Err(Error::blocked(format!(
                    "response was filtered: {reason}"
                ))),
                _ => Err(Error::blocked("response contained no text")),
            },
        }
    }
}
