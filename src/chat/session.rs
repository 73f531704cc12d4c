//! Core chat session state.
//!
//! This module provides the `ChatSession` struct which owns the ordered
//! conversation transcript and the currently selected model.

use crate::observability;
use crate::types::{ChatMessage, ModelChoice, Role};

/// A chat session: the transcript plus the selected model.
///
/// The session is single-owner state; the interaction loop holds it `&mut`
/// and nothing else writes to it.  The one invariant worth stating: changing
/// the selected model clears the transcript in the same call, so a
/// transcript never mixes output from two models.
#[derive(Debug, Default)]
pub struct ChatSession {
    model: Option<ModelChoice>,
    messages: Vec<ChatMessage>,
}

/// A point-in-time summary of the session, for `/stats`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionStats {
    /// The selected model, if one has been chosen.
    pub model: Option<ModelChoice>,
    /// The number of messages in the transcript.
    pub message_count: usize,
    /// The number of user turns taken since the last reset.
    pub turn_count: usize,
}

impl ChatSession {
    /// Creates an empty session with no model selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects a model, clearing the transcript if the selection changed.
    ///
    /// Returns true when the selection changed (and the transcript was
    /// cleared); reselecting the current model leaves everything intact.
    pub fn set_model(&mut self, choice: ModelChoice) -> bool {
        if self.model == Some(choice) {
            return false;
        }
        observability::CHAT_MODEL_SWITCHES.click();
        self.model = Some(choice);
        self.messages.clear();
        true
    }

    /// Returns the currently selected model.
    pub fn model(&self) -> Option<ModelChoice> {
        self.model
    }

    /// Appends a message to the transcript.
    pub fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    /// Returns the transcript in insertion order.
    pub fn transcript(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Drop every message.  The model selection survives.
    pub fn clear(&mut self) {
        self.messages.clear();
    }

    /// Returns the number of messages in the transcript.
    pub fn message_count(&self) -> usize {
        self.messages.len()
    }

    /// Summarize the session as it stands.
    pub fn stats(&self) -> SessionStats {
        SessionStats {
            model: self.model,
            message_count: self.message_count(),
            turn_count: self
                .messages
                .iter()
                .filter(|m| m.role == Role::User)
                .count(),
        }
    }
}
