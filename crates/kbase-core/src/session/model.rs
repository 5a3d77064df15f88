//! Session domain model.

use crate::message::Message;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Number of characters of the first message kept in a session title.
pub const SESSION_TITLE_MAX_CHARS: usize = 30;

/// A named, timestamped snapshot of a past conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatSession {
    /// Stable session identifier (`session-<uuid>`)
    pub id: String,
    /// Title derived from the first message
    pub title: String,
    /// Full message sequence at the time of the snapshot
    pub messages: Vec<Message>,
    /// When the snapshot was taken
    pub timestamp: DateTime<Utc>,
}

impl ChatSession {
    /// Builds a snapshot of `messages`.
    ///
    /// Reuses `existing_id` when the conversation was saved before, otherwise
    /// mints a fresh identifier. Returns `None` for an empty conversation.
    pub fn snapshot(messages: &[Message], existing_id: Option<&str>) -> Option<Self> {
        let first = messages.first()?;
        let id = existing_id
            .map(str::to_string)
            .unwrap_or_else(Self::new_id);

        Some(Self {
            id,
            title: session_title(first.content()),
            messages: messages.to_vec(),
            timestamp: Utc::now(),
        })
    }

    /// Mints a new session identifier.
    pub fn new_id() -> String {
        format!("session-{}", Uuid::new_v4())
    }
}

/// Derives a session title from the first message's text.
///
/// Keeps the first 30 characters and appends `...` when the text is longer.
pub fn session_title(content: &str) -> String {
    let mut chars = content.chars();
    let head: String = chars.by_ref().take(SESSION_TITLE_MAX_CHARS).collect();
    if chars.next().is_some() {
        format!("{head}...")
    } else {
        head
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_unchanged_up_to_limit() {
        let exact = "a".repeat(30);
        assert_eq!(session_title(&exact), exact);
        assert_eq!(session_title("What is the PTO policy?"), "What is the PTO policy?");
        assert_eq!(session_title(""), "");
    }

    #[test]
    fn test_title_truncated_past_limit() {
        let long = format!("{}b", "a".repeat(30));
        assert_eq!(session_title(&long), format!("{}...", "a".repeat(30)));
    }

    #[test]
    fn test_title_counts_characters_not_bytes() {
        let text = "休暇".repeat(20);
        let title = session_title(&text);
        assert_eq!(title.chars().count(), 33);
        assert!(title.ends_with("..."));
    }

    #[test]
    fn test_snapshot_of_empty_conversation_is_none() {
        assert!(ChatSession::snapshot(&[], None).is_none());
        assert!(ChatSession::snapshot(&[], Some("session-1")).is_none());
    }

    #[test]
    fn test_snapshot_reuses_existing_id() {
        let messages = vec![Message::user("How do I reset my password?")];
        let session = ChatSession::snapshot(&messages, Some("session-42")).unwrap();
        assert_eq!(session.id, "session-42");
        assert_eq!(session.title, "How do I reset my password?");
        assert_eq!(session.messages, messages);
    }

    #[test]
    fn test_snapshot_mints_id_when_unsaved() {
        let messages = vec![Message::user("hello")];
        let a = ChatSession::snapshot(&messages, None).unwrap();
        let b = ChatSession::snapshot(&messages, None).unwrap();
        assert!(a.id.starts_with("session-"));
        assert_ne!(a.id, b.id);
    }
}
