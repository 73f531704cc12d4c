//! One user turn: prompt in, code and insights out.
//!
//! A turn drives the assistant twice, once to generate code for the prompt
//! and once to review that code, and records the exchange in the session.
//! Because the assistant's public methods return text even on failure, a
//! turn cannot fail; error text flows into the transcript like any other
//! output and the session always stays usable.

use std::time::Instant;

use crate::assistant::CodeAssistant;
use crate::chat::render::Renderer;
use crate::chat::session::ChatSession;
use crate::client::TextGenerator;
use crate::observability;
use crate::types::ChatMessage;

/// Run one turn against the assistant, appending the user prompt and both
/// assistant outputs (code, then insights) to the session.
pub async fn take_turn<G: TextGenerator>(
    assistant: &CodeAssistant<G>,
    session: &mut ChatSession,
    prompt: &str,
    renderer: &mut dyn Renderer,
) {
    observability::CHAT_TURNS.click();
    let start = Instant::now();

    session.push(ChatMessage::user(prompt));

    let code = assistant.generate_code(prompt).await;
    renderer.print_code(&code);

    // The review sees whatever the first call produced, error text included.
    let insights = assistant.generate_assistant_response(&code, prompt).await;
    renderer.print_insights(&insights);

    session.push(ChatMessage::assistant(code));
    session.push(ChatMessage::assistant(insights));

    observability::CHAT_TURN_DURATION.add(start.elapsed().as_secs_f64());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, Result};
    use crate::types::{GenerationConfig, ModelChoice, Role};
    use std::sync::Mutex;

    /// Answers the first call with `code`, every later call with `insights`.
    struct ScriptedGenerator {
        code: Result<String>,
        insights: Result<String>,
        calls: Mutex<usize>,
    }

    impl ScriptedGenerator {
        fn new(code: Result<String>, insights: Result<String>) -> Self {
            Self {
                code,
                insights,
                calls: Mutex::new(0),
            }
        }
    }

    #[async_trait::async_trait]
    impl TextGenerator for ScriptedGenerator {
        async fn generate_text(
            &self,
            _model_id: &str,
            _prompt: &str,
            _config: GenerationConfig,
        ) -> Result<String> {
            let mut calls = self.calls.lock().unwrap();
            *calls += 1;
            if *calls == 1 {
                self.code.clone()
            } else {
                self.insights.clone()
            }
        }
    }

    /// Captures rendered output for assertions.
    #[derive(Default)]
    struct CapturingRenderer {
        code: Vec<String>,
        insights: Vec<String>,
        errors: Vec<String>,
        info: Vec<String>,
    }

    impl Renderer for CapturingRenderer {
        fn print_code(&mut self, code: &str) {
            self.code.push(code.to_string());
        }

        fn print_insights(&mut self, text: &str) {
            self.insights.push(text.to_string());
        }

        fn print_error(&mut self, error: &str) {
            self.errors.push(error.to_string());
        }

        fn print_info(&mut self, info: &str) {
            self.info.push(info.to_string());
        }
    }

    #[tokio::test]
    async fn successful_turn_appends_three_messages() {
        let generator = ScriptedGenerator::new(
            Ok("def reverse(s):\n    return s[::-1]".to_string()),
            Ok("Clean and idiomatic.".to_string()),
        );
        let assistant = CodeAssistant::with_generator(generator, ModelChoice::Gemini15Flash);
        let mut session = ChatSession::new();
        session.set_model(ModelChoice::Gemini15Flash);
        let mut renderer = CapturingRenderer::default();

        take_turn(
            &assistant,
            &mut session,
            "write a function that reverses a string",
            &mut renderer,
        )
        .await;

        let transcript = session.transcript();
        assert_eq!(transcript.len(), 3);
        assert_eq!(transcript[0].role, Role::User);
        assert_eq!(
            transcript[0].content,
            "write a function that reverses a string"
        );
        assert_eq!(transcript[1].role, Role::Assistant);
        assert_eq!(transcript[1].content, "def reverse(s):\n    return s[::-1]");
        assert_eq!(transcript[2].role, Role::Assistant);
        assert_eq!(transcript[2].content, "Clean and idiomatic.");

        assert_eq!(renderer.code, vec!["def reverse(s):\n    return s[::-1]"]);
        assert_eq!(renderer.insights, vec!["Clean and idiomatic."]);
    }

    #[tokio::test]
    async fn failed_generation_becomes_transcript_text() {
        let generator = ScriptedGenerator::new(
            Err(Error::connection("connection refused", None)),
            Ok("There is no code to review here.".to_string()),
        );
        let assistant = CodeAssistant::with_generator(generator, ModelChoice::Gemini15Flash);
        let mut session = ChatSession::new();
        session.set_model(ModelChoice::Gemini15Flash);
        let mut renderer = CapturingRenderer::default();

        take_turn(&assistant, &mut session, "reverse a string", &mut renderer).await;

        let transcript = session.transcript();
        assert_eq!(transcript.len(), 3);
        assert_eq!(
            transcript[1].content,
            "Error generating code: Connection error: connection refused"
        );
        // The review call still ran and its output was recorded.
        assert_eq!(transcript[2].content, "There is no code to review here.");
        assert!(renderer.errors.is_empty());
    }

    #[tokio::test]
    async fn review_receives_the_error_text_as_its_code() {
        struct EchoGenerator {
            prompts: Mutex<Vec<String>>,
        }

        #[async_trait::async_trait]
        impl TextGenerator for EchoGenerator {
            async fn generate_text(
                &self,
                _model_id: &str,
                prompt: &str,
                _config: GenerationConfig,
            ) -> Result<String> {
                let mut prompts = self.prompts.lock().unwrap();
                prompts.push(prompt.to_string());
                if prompts.len() == 1 {
                    Err(Error::timeout("deadline exceeded", Some(60.0)))
                } else {
                    Ok("review".to_string())
                }
            }
        }

        let generator = EchoGenerator {
            prompts: Mutex::new(Vec::new()),
        };
        let assistant = CodeAssistant::with_generator(generator, ModelChoice::Gemini15Pro);
        let mut session = ChatSession::new();
        let mut renderer = CapturingRenderer::default();

        take_turn(&assistant, &mut session, "sort a list", &mut renderer).await;

        let prompts = assistant.generator().prompts.lock().unwrap().clone();
        assert_eq!(prompts.len(), 2);
        // The second prompt embeds the first call's error text verbatim.
        assert!(prompts[1].contains("Error generating code: Timeout error: deadline exceeded"));
    }

    #[tokio::test]
    async fn both_calls_failing_still_appends_three_messages() {
        let generator = ScriptedGenerator::new(
            Err(Error::internal_server("backend unavailable")),
            Err(Error::internal_server("backend unavailable")),
        );
        let assistant = CodeAssistant::with_generator(generator, ModelChoice::Gemini15Flash);
        let mut session = ChatSession::new();
        let mut renderer = CapturingRenderer::default();

        take_turn(&assistant, &mut session, "anything", &mut renderer).await;

        let transcript = session.transcript();
        assert_eq!(transcript.len(), 3);
        assert!(transcript[1].content.starts_with("Error generating code: "));
        assert!(
            transcript[2]
                .content
                .starts_with("Error generating assistant response: ")
        );
    }

    #[tokio::test]
    async fn switching_models_after_a_turn_clears_the_exchange() {
        let generator = ScriptedGenerator::new(Ok("code".to_string()), Ok("review".to_string()));
        let assistant = CodeAssistant::with_generator(generator, ModelChoice::Gemini15Flash);
        let mut session = ChatSession::new();
        session.set_model(ModelChoice::Gemini15Flash);
        let mut renderer = CapturingRenderer::default();

        take_turn(&assistant, &mut session, "first prompt", &mut renderer).await;
        assert_eq!(session.message_count(), 3);

        session.set_model(ModelChoice::Gemini20Experimental);
        assert_eq!(session.message_count(), 0);
    }
}
