//! Strategist chat panel
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::error;

use super::RequestOutcome;
use crate::gateway::AiGateway;
use crate::models::{ChatMessage, Conversation};

pub const GREETING: &str =
    "Ready to strategize? Ask me anything about going viral or optimizing your content.";

pub const CONNECTION_ERROR_REPLY: &str = "Error connecting to strategist. Check your connection.";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatPanelState {
    pub conversation: Conversation,
    pub typing: bool,
}

struct ChatPanelInner {
    state: ChatPanelState,
    /// Indices of canned error replies, which are shown but never sent back
    failed_replies: Vec<usize>,
}

impl ChatPanelInner {
    /// The conversation as the model should see it
    fn model_history(&self) -> Vec<ChatMessage> {
        self.state
            .conversation
            .messages()
            .iter()
            .enumerate()
            .filter(|(i, _)| !self.failed_replies.contains(i))
            .map(|(_, m)| m.clone())
            .collect()
    }
}

pub struct ChatPanel {
    gateway: Arc<AiGateway>,
    inner: RwLock<ChatPanelInner>,
}

impl ChatPanel {
    pub fn new(gateway: Arc<AiGateway>) -> Self {
        let mut conversation = Conversation::new();
        conversation.push(ChatMessage::model(GREETING));

        Self {
            gateway,
            inner: RwLock::new(ChatPanelInner {
                state: ChatPanelState {
                    conversation,
                    typing: false,
                },
                failed_replies: Vec::new(),
            }),
        }
    }

    pub async fn snapshot(&self) -> ChatPanelState {
        self.inner.read().await.state.clone()
    }

    /// Send a user message and append the strategist's reply.
    ///
    /// Ignored while a reply is pending or when the input is blank.
    pub async fn send(&self, input: &str) -> RequestOutcome {
        let history = {
            let mut inner = self.inner.write().await;
            if input.trim().is_empty() || inner.state.typing {
                return RequestOutcome::Skipped;
            }
            inner.state.conversation.push(ChatMessage::user(input));
            inner.state.typing = true;
            inner.model_history()
        };

        let (reply, outcome) = match self.gateway.chat(&history).await {
            Ok(reply) => (reply, RequestOutcome::Applied),
            Err(e) => {
                error!(error = %e, "Strategist chat failed");
                (CONNECTION_ERROR_REPLY.to_string(), RequestOutcome::Failed)
            }
        };

        let mut inner = self.inner.write().await;
        if outcome == RequestOutcome::Failed {
            let index = inner.state.conversation.len();
            inner.failed_replies.push(index);
        }
        inner.state.conversation.push(ChatMessage::model(reply));
        inner.state.typing = false;
        outcome
    }
}
