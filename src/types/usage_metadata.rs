use serde::{Deserialize, Serialize};

/// Token accounting for one generation call.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    /// Tokens consumed by the prompt.
    #[serde(default)]
    pub prompt_token_count: u32,

    /// Tokens produced across all candidates.
    #[serde(default)]
    pub candidates_token_count: u32,

    /// Prompt plus candidates.
    #[serde(default)]
    pub total_token_count: u32,
}
