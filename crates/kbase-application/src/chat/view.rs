use kbase_core::{Message, SessionList};

/// A consistent read-only snapshot of the chat store for rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatView {
    pub messages: Vec<Message>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub sessions: SessionList,
    pub active_session_id: Option<String>,
}

impl ChatView {
    /// Whether the conversation has not started yet.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// The most recent assistant message, if any.
    pub fn last_assistant_message(&self) -> Option<&Message> {
        self.messages.iter().rev().find(|m| !m.is_user())
    }
}
