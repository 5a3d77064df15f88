//! Active conversation state.

use crate::message::Message;
use serde::{Deserialize, Serialize};

/// The conversation currently shown to the user.
///
/// Insertion order of `messages` is display order. `error` holds the display
/// string of the most recent failed request and is cleared on the next send.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatState {
    pub messages: Vec<Message>,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl ChatState {
    /// An empty, idle conversation.
    pub fn new() -> Self {
        Self::default()
    }

    /// A conversation restored from saved messages, idle and error-free.
    pub fn with_messages(messages: Vec<Message>) -> Self {
        Self {
            messages,
            is_loading: false,
            error: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// The most recent assistant message, if any.
    pub fn last_assistant_message(&self) -> Option<&Message> {
        self.messages.iter().rev().find(|m| !m.is_user())
    }
}
