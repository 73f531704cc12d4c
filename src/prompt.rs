//! The fixed prompt templates and generation parameters.
//!
//! Both templates are deterministic: the user's text is embedded verbatim
//! into otherwise constant wording.  Changing the wording changes model
//! behavior, so the templates are pinned here with tests over their layout.

use crate::types::GenerationConfig;

/// Sampling temperature for code generation.
pub const CODE_TEMPERATURE: f64 = 0.7;

/// Sampling temperature for the follow-up review.
pub const REVIEW_TEMPERATURE: f64 = 0.6;

/// Output-token cap applied to both calls.
pub const MAX_OUTPUT_TOKENS: u32 = 2000;

/// The generation parameters for a code-generation call.
pub fn code_generation_config() -> GenerationConfig {
    GenerationConfig {
        temperature: Some(CODE_TEMPERATURE),
        max_output_tokens: Some(MAX_OUTPUT_TOKENS),
    }
}

/// The generation parameters for a code-review call.
pub fn code_review_config() -> GenerationConfig {
    GenerationConfig {
        temperature: Some(REVIEW_TEMPERATURE),
        max_output_tokens: Some(MAX_OUTPUT_TOKENS),
    }
}

/// Render the code-generation prompt around the user's requirement.
pub fn code_generation_prompt(request: &str) -> String {
    format!(
        "Generate a Python code that precisely matches the following requirement:\n\
         {request}\n\
         \n\
         Guidelines:\n\
         - Write clean, pythonic code\n\
         - Include type hints\n\
         - Add docstrings\n\
         - Handle potential errors\n\
         - Use best practices\n\
         - Ensure the code is functional and demonstrates the described functionality"
    )
}

/// Render the review prompt around previously generated `code` and the
/// original request it was generated for.
pub fn code_review_prompt(code: &str, context: &str) -> String {
    format!(
        "You are an AI code assistant. Analyze the following Python code generated for the context: '{context}'\n\
         \n\
         Code:\n\
         ```python\n\
         {code}\n\
         ```\n\
         \n\
         Provide a detailed response that includes:\n\
         1. Code Quality Assessment\n\
         2. Potential Improvements or Optimizations\n\
         3. Best Practices Alignment\n\
         4. Possible Edge Cases or Error Handling Suggestions\n\
         5. Learning Insights or Coding Patterns Used\n\
         \n\
         Be constructive, educational, and provide specific, actionable feedback."
    )
}
