// Public modules
pub mod candidate;
pub mod chat_message;
pub mod content;
pub mod finish_reason;
pub mod generate_content_request;
pub mod generate_content_response;
pub mod generation_config;
pub mod model;
pub mod prompt_feedback;
pub mod usage_metadata;

// Re-exports
pub use candidate::Candidate;
pub use chat_message::{ChatMessage, Role};
pub use content::{Content, Part};
pub use finish_reason::FinishReason;
pub use generate_content_request::GenerateContentRequest;
pub use generate_content_response::GenerateContentResponse;
pub use generation_config::GenerationConfig;
pub use model::ModelChoice;
pub use prompt_feedback::PromptFeedback;
pub use usage_metadata::UsageMetadata;
