//! Chat message types.
//!
//! Messages are immutable once built. New messages come from
//! [`Message::user`] and [`Message::assistant`]; deserialization goes through
//! the same check, so a user message can never carry citations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents the author of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// Message typed by the user.
    User,
    /// Answer produced by the knowledge base assistant.
    Assistant,
}

/// Delivery status of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageStatus {
    Sending,
    Sent,
    Error,
}

/// A reference to the source document backing an assistant answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Citation {
    /// Unique citation identifier (`cit-xxxxxxxxx`)
    pub id: String,
    /// Identifier of the cited document (e.g. `doc-1`)
    pub document_id: String,
    /// Title of the cited document
    pub title: String,
    /// Page within the document (1-based)
    pub page: u32,
    /// Short excerpt shown in the citation preview
    pub snippet: String,
    /// Full text of the cited document
    pub document_content: String,
}

/// A single entry in a conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "MessageRecord")]
pub struct Message {
    id: String,
    role: MessageRole,
    content: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    citations: Vec<Citation>,
    timestamp: DateTime<Utc>,
    status: MessageStatus,
}

/// Unchecked wire form of [`Message`].
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct MessageRecord {
    id: String,
    role: MessageRole,
    content: String,
    #[serde(default)]
    citations: Vec<Citation>,
    timestamp: DateTime<Utc>,
    status: MessageStatus,
}

impl TryFrom<MessageRecord> for Message {
    type Error = String;

    fn try_from(record: MessageRecord) -> Result<Self, Self::Error> {
        if record.role == MessageRole::User && !record.citations.is_empty() {
            return Err(format!("user message '{}' must not carry citations", record.id));
        }
        Ok(Self {
            id: record.id,
            role: record.role,
            content: record.content,
            citations: record.citations,
            timestamp: record.timestamp,
            status: record.status,
        })
    }
}

impl Message {
    /// Builds a user message with status `Sent`.
    pub fn user(content: impl Into<String>) -> Self {
        Self::build(MessageRole::User, content.into(), Vec::new())
    }

    /// Builds an assistant message carrying the given citations.
    pub fn assistant(content: impl Into<String>, citations: Vec<Citation>) -> Self {
        Self::build(MessageRole::Assistant, content.into(), citations)
    }

    fn build(role: MessageRole, content: String, citations: Vec<Citation>) -> Self {
        Self {
            id: format!("msg-{}", Uuid::new_v4()),
            role,
            content,
            citations,
            timestamp: Utc::now(),
            status: MessageStatus::Sent,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn role(&self) -> MessageRole {
        self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Citations in display order. Always empty for user messages.
    pub fn citations(&self) -> &[Citation] {
        &self.citations
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn status(&self) -> MessageStatus {
        self.status
    }

    pub fn is_user(&self) -> bool {
        self.role == MessageRole::User
    }
}
