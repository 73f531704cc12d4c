use serde::{Deserialize, Serialize};

use crate::types::{Content, GenerationConfig};

/// The request body for a `models/{model}:generateContent` call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    /// The conversation so far.  This crate always sends a single user
    /// content holding the fully rendered prompt.
    pub contents: Vec<Content>,

    /// Sampling parameters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

impl GenerateContentRequest {
    /// Create a request carrying a single user prompt.
    pub fn from_prompt(prompt: impl Into<String>) -> Self {
        Self {
            contents: vec![Content::user(prompt)],
            generation_config: None,
        }
    }

    /// Attach sampling parameters.
    pub fn with_generation_config(mut self, generation_config: GenerationConfig) -> Self {
        self.generation_config = Some(generation_config);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, to_value};

    #[test]
    fn request_serialization() {
        let request = GenerateContentRequest::from_prompt("Write a haiku about Rust")
            .with_generation_config(
                GenerationConfig::new()
                    .with_temperature(0.7)
                    .unwrap()
                    .with_max_output_tokens(2000),
            );

        let json = to_value(&request).unwrap();
        assert_eq!(
            json,
            json!({
                "contents": [{
                    "role": "user",
                    "parts": [{"text": "Write a haiku about Rust"}]
                }],
                "generationConfig": {
                    "temperature": 0.7,
                    "maxOutputTokens": 2000
                }
            })
        );
    }

    #[test]
    fn request_wire_string_keeps_exact_decimals() {
        let request = GenerateContentRequest::from_prompt("hi").with_generation_config(
            GenerationConfig::new()
                .with_temperature(0.7)
                .unwrap()
                .with_max_output_tokens(2000),
        );

        let body = serde_json::to_string(&request).unwrap();
        assert_eq!(
            body,
            r#"{"contents":[{"role":"user","parts":[{"text":"hi"}]}],"generationConfig":{"temperature":0.7,"maxOutputTokens":2000}}"#
        );
    }

    #[test]
    fn request_without_config_omits_field() {
        let request = GenerateContentRequest::from_prompt("hello");
        let json = to_value(&request).unwrap();

        assert_eq!(
            json,
            json!({
                "contents": [{
                    "role": "user",
                    "parts": [{"text": "hello"}]
                }]
            })
        );
    }
}
