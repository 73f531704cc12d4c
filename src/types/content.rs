use serde::{Deserialize, Serialize};

/// A single piece of content within a [`Content`] block.
///
/// The Generative Language API supports several part kinds; this crate only
/// ever sends and reads text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Part {
    /// The text of this part.
    pub text: String,
}

impl Part {
    /// Create a new text part.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl From<String> for Part {
    fn from(text: String) -> Self {
        Part::new(text)
    }
}

impl From<&str> for Part {
    fn from(text: &str) -> Self {
        Part::new(text)
    }
}

/// A role-tagged group of parts, one element of a request's `contents` array
/// or a candidate's returned content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Content {
    /// "user" or "model".  The API omits it in some responses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    /// The parts making up this content, in order.
    pub parts: Vec<Part>,
}

impl Content {
    /// Create a user-role content with a single text part.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Some("user".to_string()),
            parts: vec![Part::new(text)],
        }
    }

    /// Create a model-role content with a single text part.
    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: Some("model".to_string()),
            parts: vec![Part::new(text)],
        }
    }

    /// Concatenate the text of every part.
    pub fn text(&self) -> String {
        self.parts
            .iter()
            .map(|part| part.text.as_str())
            .collect::<Vec<_>>()
            .join("")
    }
}
