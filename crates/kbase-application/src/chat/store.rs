use super::state::ChatStoreState;
use super::view::ChatView;
use kbase_core::error::Result;
use kbase_core::{AnsweringService, ChatSession, Message, SessionList};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Error shown to the user when the answering service fails.
pub const SEND_FAILURE_MESSAGE: &str = "Failed to get response. Please try again.";

/// Holds the active conversation and saved sessions.
///
/// `ChatStore` is responsible for:
/// - Sending user messages and recording the assistant's answer or the error
/// - Archiving the active conversation as a session
/// - Starting new conversations and switching between saved ones
///
/// Clones share the same state. The lock is never held while waiting on the
/// answering service, so readers observe `is_loading` during a request.
/// The store does not reject overlapping sends; callers check
/// [`ChatStore::is_loading`] before sending.
#[derive(Clone)]
pub struct ChatStore {
    answering: Arc<dyn AnsweringService>,
    state: Arc<RwLock<ChatStoreState>>,
}

impl ChatStore {
    /// Creates a store with an empty conversation and no saved sessions.
    pub fn new(answering: Arc<dyn AnsweringService>) -> Self {
        Self::with_state(answering, ChatStoreState::new())
    }

    /// Creates a store starting from an existing state.
    pub fn with_state(answering: Arc<dyn AnsweringService>, state: ChatStoreState) -> Self {
        Self {
            answering,
            state: Arc::new(RwLock::new(state)),
        }
    }

    /// Sends a user message and waits for the answer.
    ///
    /// The user message is appended and loading is set before the service is
    /// called. On success the assistant message is appended; on failure the
    /// conversation error is set to [`SEND_FAILURE_MESSAGE`]. Loading is
    /// cleared last in both cases.
    ///
    /// # Returns
    ///
    /// - `Ok(Message)`: The assistant message that was appended
    /// - `Err(_)`: The service error, already recorded on the conversation
    pub async fn send_message(&self, content: impl Into<String>) -> Result<Message> {
        let content = content.into();
        {
            let mut state = self.state.write().await;
            state.begin_send(Message::user(content.clone()));
        }
        tracing::debug!(chars = content.chars().count(), "Sending message");

        let result = self.answering.answer(&content).await;

        let mut state = self.state.write().await;
        match &result {
            Ok(answer) => {
                tracing::debug!(citations = answer.citations().len(), "Received answer");
                state.complete_send(answer.clone());
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to get response");
                state.fail_send(SEND_FAILURE_MESSAGE);
            }
        }
        result
    }

    /// Saves the active conversation as a session.
    ///
    /// # Returns
    ///
    /// The session id, or `None` if the conversation is empty (nothing saved).
    pub async fn save_current_session(&self) -> Option<String> {
        let mut state = self.state.write().await;
        let saved = state.save_current_session();
        if let Some(id) = &saved {
            tracing::info!(session_id = %id, "Saved session");
        }
        saved
    }

    /// Archives the active conversation and starts an empty one.
    pub async fn create_new_chat(&self) {
        let mut state = self.state.write().await;
        state.create_new_chat();
        tracing::info!(sessions = state.sessions.len(), "Started new chat");
    }

    /// Same as [`ChatStore::create_new_chat`].
    pub async fn clear_chat(&self) {
        self.create_new_chat().await;
    }

    /// Archives the active conversation, then switches to `session_id`.
    ///
    /// # Returns
    ///
    /// `true` if the session was found and activated. For an unknown id the
    /// active conversation is unchanged, though it has still been archived.
    pub async fn load_session(&self, session_id: &str) -> bool {
        let mut state = self.state.write().await;
        let found = state.load_session(session_id);
        if found {
            tracing::info!(session_id, "Loaded session");
        } else {
            tracing::warn!(session_id, "Session not found");
        }
        found
    }

    pub async fn messages(&self) -> Vec<Message> {
        self.state.read().await.conversation.messages.clone()
    }

    pub async fn is_loading(&self) -> bool {
        self.state.read().await.conversation.is_loading
    }

    pub async fn error(&self) -> Option<String> {
        self.state.read().await.conversation.error.clone()
    }

    pub async fn sessions(&self) -> SessionList {
        self.state.read().await.sessions.clone()
    }

    pub async fn session(&self, session_id: &str) -> Option<ChatSession> {
        self.state.read().await.sessions.find(session_id).cloned()
    }

    pub async fn active_session_id(&self) -> Option<String> {
        self.state.read().await.active_session_id.clone()
    }

    /// Returns every observable field from a single read.
    pub async fn view(&self) -> ChatView {
        let state = self.state.read().await;
        ChatView {
            messages: state.conversation.messages.clone(),
            is_loading: state.conversation.is_loading,
            error: state.conversation.error.clone(),
            sessions: state.sessions.clone(),
            active_session_id: state.active_session_id.clone(),
        }
    }
}
