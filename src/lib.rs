// Public modules
pub mod assistant;
pub mod chat;
pub mod client;
pub mod error;
pub mod observability;
pub mod prompt;
pub mod types;

// Re-exports
pub use assistant::CodeAssistant;
pub use client::{Gemini, TextGenerator};
pub use error::{Error, Result};
pub use types::*;
