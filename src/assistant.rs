//! The code assistant: prompt templates bound to a selected model.
//!
//! [`CodeAssistant`] is the layer the chat loop talks to.  It owns the
//! template rendering and the error-as-text contract: the public
//! `generate_*` methods always return displayable text, converting any
//! failure into the prefixed error strings that flow into the transcript
//! like ordinary output.  The `try_*` forms expose the tagged results for
//! callers that need to tell success from failure.

use crate::client::{Gemini, TextGenerator};
use crate::error::Result;
use crate::observability;
use crate::prompt;
use crate::types::ModelChoice;

/// A code-generation assistant speaking to one backend model.
#[derive(Debug)]
pub struct CodeAssistant<G: TextGenerator = Gemini> {
    generator: G,
    choice: ModelChoice,
}

impl CodeAssistant<Gemini> {
    /// Create an assistant backed by the live API.
    ///
    /// The credential is resolved here, once; a missing or empty key fails
    /// with a configuration error before any request is made.
    pub fn new(choice: ModelChoice, api_key: Option<String>) -> Result<Self> {
        Ok(Self {
            generator: Gemini::new(api_key)?,
            choice,
        })
    }
}

impl<G: TextGenerator> CodeAssistant<G> {
    /// Create an assistant over a custom generator.
    ///
    /// # Example
    ///
    /// ```
    /// use geminius::types::{GenerationConfig, ModelChoice};
    /// use geminius::{CodeAssistant, Result, TextGenerator};
    ///
    /// struct CannedGenerator;
    ///
    /// #[async_trait::async_trait]
    /// impl TextGenerator for CannedGenerator {
    ///     async fn generate_text(
    ///         &self,
    ///         _model_id: &str,
    ///         _prompt: &str,
    ///         _config: GenerationConfig,
    ///     ) -> Result<String> {
    ///         Ok("def reverse(s: str) -> str:\n    return s[::-1]".to_string())
    ///     }
    /// }
    ///
    /// # tokio_test::block_on(async {
    /// let assistant = CodeAssistant::with_generator(CannedGenerator, ModelChoice::Gemini15Flash);
    /// let code = assistant.generate_code("reverse a string").await;
    /// assert!(code.contains("s[::-1]"));
    /// # })
    /// ```
    pub fn with_generator(generator: G, choice: ModelChoice) -> Self {
        Self { generator, choice }
    }

    /// The model this assistant speaks to.
    pub fn model(&self) -> ModelChoice {
        self.choice
    }

    /// The generator this assistant speaks through.
    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// Generate code for the user's requirement; tagged form.
    pub async fn try_generate_code(&self, prompt: &str) -> Result<String> {
        observability::ASSISTANT_CODE_CALLS.click();
        let full_prompt = prompt::code_generation_prompt(prompt);
        let result = self
            .generator
            .generate_text(
                self.choice.backend_id(),
                &full_prompt,
                prompt::code_generation_config(),
            )
            .await;
        if result.is_err() {
            observability::ASSISTANT_ERRORS.click();
        }
        result
    }

    /// Generate code for the user's requirement.
    ///
    /// Never fails: errors come back as text, prefixed
    /// `Error generating code: `.
    pub async fn generate_code(&self, prompt: &str) -> String {
        match self.try_generate_code(prompt).await {
            Ok(text) => text,
            Err(e) => format!("Error generating code: {e}"),
        }
    }

    /// Review previously generated code in the context of the request it
    /// was generated for; tagged form.
    pub async fn try_generate_assistant_response(
        &self,
        code: &str,
        context: &str,
    ) -> Result<String> {
        observability::ASSISTANT_REVIEW_CALLS.click();
        let full_prompt = prompt::code_review_prompt(code, context);
        let result = self
            .generator
            .generate_text(
                self.choice.backend_id(),
                &full_prompt,
                prompt::code_review_config(),
            )
            .await;
        if result.is_err() {
            observability::ASSISTANT_ERRORS.click();
        }
        result
    }

    /// Review previously generated code.
    ///
    /// Never fails: errors come back as text, prefixed
    /// `Error generating assistant response: `.
    pub async fn generate_assistant_response(&self, code: &str, context: &str) -> String {
        match self.try_generate_assistant_response(code, context).await {
            Ok(text) => text,
            Err(e) => format!("Error generating assistant response: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::types::GenerationConfig;
    use std::sync::Mutex;

    /// Records every call and answers with a fixed reply.
    struct RecordingGenerator {
        reply: Result<String>,
        calls: Mutex<Vec<(String, String, GenerationConfig)>>,
    }

    impl RecordingGenerator {
        fn replying(reply: &str) -> Self {
            Self {
                reply: Ok(reply.to_string()),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn failing(error: Error) -> Self {
            Self {
                reply: Err(error),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<(String, String, GenerationConfig)> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait::async_trait]
    impl TextGenerator for RecordingGenerator {
        async fn generate_text(
            &self,
            model_id: &str,
            prompt: &str,
            config: GenerationConfig,
        ) -> Result<String> {
            self.calls
                .lock()
                .unwrap()
                .push((model_id.to_string(), prompt.to_string(), config));
            self.reply.clone()
        }
    }

    #[tokio::test]
    async fn generate_code_returns_model_text() {
        let assistant = CodeAssistant::with_generator(
            RecordingGenerator::replying("def reverse(s):\n    return s[::-1]"),
            ModelChoice::Gemini15Flash,
        );
        let code = assistant.generate_code("reverse a string").await;
        assert_eq!(code, "def reverse(s):\n    return s[::-1]");
    }

    #[tokio::test]
    async fn generate_code_renders_errors_as_text() {
        let assistant = CodeAssistant::with_generator(
            RecordingGenerator::failing(Error::connection("connection refused", None)),
            ModelChoice::Gemini15Flash,
        );
        let code = assistant.generate_code("reverse a string").await;
        assert_eq!(
            code,
            "Error generating code: Connection error: connection refused"
        );
    }

    #[tokio::test]
    async fn generate_assistant_response_renders_errors_as_text() {
        let assistant = CodeAssistant::with_generator(
            RecordingGenerator::failing(Error::rate_limit("quota exhausted", Some(30))),
            ModelChoice::Gemini15Pro,
        );
        let review = assistant
            .generate_assistant_response("def f(): pass", "a no-op")
            .await;
        assert!(review.starts_with("Error generating assistant response: "));
        assert!(review.contains("quota exhausted"));
    }

    #[tokio::test]
    async fn try_forms_keep_the_error_tagged() {
        let assistant = CodeAssistant::with_generator(
            RecordingGenerator::failing(Error::blocked("prompt was blocked: SAFETY")),
            ModelChoice::Gemini15Flash,
        );
        let err = assistant.try_generate_code("anything").await.unwrap_err();
        assert!(err.is_blocked());
    }

    #[tokio::test]
    async fn experimental_choice_calls_the_flash_exp_backend() {
        let assistant = CodeAssistant::with_generator(
            RecordingGenerator::replying("ok"),
            ModelChoice::Gemini20Experimental,
        );
        assistant.generate_code("anything").await;
        let calls = assistant.generator.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "gemini-2.0-flash-exp");
    }

    #[tokio::test]
    async fn each_operation_uses_its_own_parameters() {
        let assistant = CodeAssistant::with_generator(
            RecordingGenerator::replying("ok"),
            ModelChoice::Gemini15Flash,
        );
        assistant.generate_code("reverse a string").await;
        assistant
            .generate_assistant_response("def f(): pass", "reverse a string")
            .await;

        let calls = assistant.generator.calls();
        assert_eq!(calls.len(), 2);

        let (_, code_prompt, code_config) = &calls[0];
        assert!(code_prompt.contains("reverse a string"));
        assert!(code_prompt.contains("Guidelines:"));
        assert_eq!(code_config.temperature, Some(0.7));
        assert_eq!(code_config.max_output_tokens, Some(2000));

        let (_, review_prompt, review_config) = &calls[1];
        assert!(review_prompt.contains("def f(): pass"));
        assert!(review_prompt.contains("'reverse a string'"));
        assert_eq!(review_config.temperature, Some(0.6));
        assert_eq!(review_config.max_output_tokens, Some(2000));
    }

    #[test]
    fn missing_credential_is_a_configuration_error() {
        let err = CodeAssistant::new(ModelChoice::Gemini15Flash, Some("".to_string()))
            .unwrap_err();
        assert!(err.is_configuration());
    }
}
