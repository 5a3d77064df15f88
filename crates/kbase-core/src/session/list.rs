//! Ordered session collection.

use super::model::ChatSession;
use serde::{Deserialize, Serialize};

/// Saved sessions, most recently created first.
///
/// Identifiers are unique within the list. Re-saving an existing session
/// replaces it in place and keeps its position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionList {
    sessions: Vec<ChatSession>,
}

impl SessionList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a session by identifier.
    pub fn upsert(&mut self, session: ChatSession) {
        match self.sessions.iter().position(|s| s.id == session.id) {
            Some(index) => self.sessions[index] = session,
            None => self.sessions.insert(0, session),
        }
    }

    pub fn find(&self, session_id: &str) -> Option<&ChatSession> {
        self.sessions.iter().find(|s| s.id == session_id)
    }

    pub fn get(&self, index: usize) -> Option<&ChatSession> {
        self.sessions.get(index)
    }

    pub fn first(&self) -> Option<&ChatSession> {
        self.sessions.first()
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ChatSession> {
        self.sessions.iter()
    }

    pub fn as_slice(&self) -> &[ChatSession] {
        &self.sessions
    }
}

impl<'a> IntoIterator for &'a SessionList {
    type Item = &'a ChatSession;
    type IntoIter = std::slice::Iter<'a, ChatSession>;

    fn into_iter(self) -> Self::IntoIter {
        self.sessions.iter()
    }
}
