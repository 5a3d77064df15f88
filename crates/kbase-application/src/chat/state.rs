use kbase_core::{ChatSession, ChatState, Message, SessionList};

/// Everything the chat store owns: the active conversation, saved sessions,
/// and which session (if any) the active conversation was saved as.
///
/// Transitions here are synchronous and free of I/O; [`super::ChatStore`]
/// only sequences them around the answering call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatStoreState {
    pub conversation: ChatState,
    pub sessions: SessionList,
    /// `None` exactly when the active conversation has never been saved.
    pub active_session_id: Option<String>,
}

impl ChatStoreState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the user's message and enters the pending state.
    pub fn begin_send(&mut self, message: Message) {
        self.conversation.messages.push(message);
        self.conversation.is_loading = true;
        self.conversation.error = None;
    }

    /// Records a successful answer. Loading is cleared after the append.
    pub fn complete_send(&mut self, answer: Message) {
        self.conversation.messages.push(answer);
        self.conversation.is_loading = false;
    }

    /// Records a failed request. Loading is cleared after the error is set.
    pub fn fail_send(&mut self, display_error: impl Into<String>) {
        self.conversation.error = Some(display_error.into());
        self.conversation.is_loading = false;
    }

    /// Snapshots the active conversation into the session list.
    ///
    /// Returns the session id, or `None` (leaving the list untouched) when
    /// the conversation is empty.
    pub fn save_current_session(&mut self) -> Option<String> {
        let session = ChatSession::snapshot(
            &self.conversation.messages,
            self.active_session_id.as_deref(),
        )?;
        let id = session.id.clone();
        self.sessions.upsert(session);
        self.active_session_id = Some(id.clone());
        Some(id)
    }

    /// Archives the active conversation and starts an empty one.
    pub fn create_new_chat(&mut self) {
        self.save_current_session();
        self.conversation = ChatState::new();
        self.active_session_id = None;
    }

    /// Archives the active conversation, then activates `session_id`.
    ///
    /// Returns `false` if no such session exists; the conversation is then
    /// left as it was.
    pub fn load_session(&mut self, session_id: &str) -> bool {
        self.save_current_session();

        let Some(session) = self.sessions.find(session_id) else {
            return false;
        };
        self.conversation = ChatState::with_messages(session.messages.clone());
        self.active_session_id = Some(session.id.clone());
        true
    }
}
