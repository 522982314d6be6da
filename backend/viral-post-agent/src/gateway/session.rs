//! Chat sessions reconstructed from a message history
use crate::error::{GatewayError, Result};
use crate::models::{ChatMessage, ChatRole};
use crate::providers::{Content, GenerateContentRequest, GenerateContentResponse, GenerativeModel};

/// A conversation with a fixed system instruction and prior turns.
///
/// The session is rebuilt for every call; nothing is kept between calls.
pub struct ChatSession<'a> {
    backend: &'a dyn GenerativeModel,
    model: &'a str,
    system_instruction: &'a str,
    history: Vec<Content>,
}

impl<'a> ChatSession<'a> {
    pub fn new(
        backend: &'a dyn GenerativeModel,
        model: &'a str,
        system_instruction: &'a str,
        history: &[ChatMessage],
    ) -> Self {
        // The API expects the conversation to open with a user turn, so
        // greetings shown before the first question are not sent.
        let history = history
            .iter()
            .skip_while(|m| m.role == ChatRole::Model)
            .map(|m| Content::with_role(m.role.as_str(), m.text.clone()))
            .collect();

        Self {
            backend,
            model,
            system_instruction,
            history,
        }
    }

    pub fn history(&self) -> &[Content] {
        &self.history
    }

    /// Send one new user turn on top of the session history
    pub async fn send_message(&self, message: &str) -> Result<GenerateContentResponse> {
        let mut contents = self.history.clone();
        contents.push(Content::user_text(message));

        let request = GenerateContentRequest {
            contents,
            ..Default::default()
        }
        .with_system_instruction(self.system_instruction);

        self.backend.generate_content(self.model, &request).await
    }
}

/// Split a history into the prior turns and the new user message
pub fn split_latest_user_turn(history: &[ChatMessage]) -> Result<(&[ChatMessage], &str)> {
    match history.split_last() {
        Some((last, prior)) if last.role == ChatRole::User && !last.text.trim().is_empty() => {
            Ok((prior, last.text.as_str()))
        }
        Some(_) => Err(GatewayError::InvalidInput(
            "chat history must end with a non-empty user message".to_string(),
        )),
        None => Err(GatewayError::InvalidInput(
            "chat history is empty".to_string(),
        )),
    }
}
