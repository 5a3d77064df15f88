use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use kbase_application::{ChatStore, SEND_FAILURE_MESSAGE};
use kbase_core::error::Result;
use kbase_core::{AnsweringService, KbaseError, Message, MessageRole};
use kbase_interaction::{FixedResponsePolicy, MockAnsweringService};
use tokio::sync::{Mutex, oneshot};

fn answering_store() -> ChatStore {
    ChatStore::new(Arc::new(MockAnsweringService::new(Arc::new(
        FixedResponsePolicy::instant(),
    ))))
}

fn failing_store() -> ChatStore {
    ChatStore::new(Arc::new(MockAnsweringService::new(Arc::new(
        FixedResponsePolicy::failing(),
    ))))
}

/// Answers only once the test releases the gate.
struct GatedService {
    gate: Mutex<Option<oneshot::Receiver<()>>>,
}

#[async_trait]
impl AnsweringService for GatedService {
    async fn answer(&self, query: &str) -> Result<Message> {
        let receiver = self.gate.lock().await.take();
        if let Some(receiver) = receiver {
            let _ = receiver.await;
        }
        Ok(Message::assistant(format!("echo: {query}"), Vec::new()))
    }
}

/// Fails the first call, answers every later one.
struct FailOnceService {
    failed: AtomicBool,
}

#[async_trait]
impl AnsweringService for FailOnceService {
    async fn answer(&self, query: &str) -> Result<Message> {
        if !self.failed.swap(true, Ordering::SeqCst) {
            return Err(KbaseError::service_unavailable("unreachable"));
        }
        Ok(Message::assistant(format!("echo: {query}"), Vec::new()))
    }
}

#[tokio::test]
async fn test_pto_question_end_to_end() {
    let store = answering_store();

    let answer = store.send_message("What is the PTO policy?").await.unwrap();

    let messages = store.messages().await;
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].role(), MessageRole::User);
    assert_eq!(messages[0].content(), "What is the PTO policy?");
    assert_eq!(messages[1].role(), MessageRole::Assistant);
    assert_eq!(messages[1], answer);
    assert_eq!(messages[1].citations().len(), 1);
    assert_eq!(messages[1].citations()[0].document_id, "doc-1");
    assert!(!store.is_loading().await);
    assert!(store.error().await.is_none());
}

#[tokio::test]
async fn test_failed_send_sets_error_and_clears_loading() {
    let store = failing_store();

    let err = store.send_message("What is the PTO policy?").await.unwrap_err();
    assert!(err.is_service_unavailable());

    let view = store.view().await;
    assert_eq!(view.messages.len(), 1, "no assistant message on failure");
    assert_eq!(view.error.as_deref(), Some(SEND_FAILURE_MESSAGE));
    assert!(!view.is_loading);
}

#[tokio::test]
async fn test_error_cleared_on_next_attempt() {
    let store = ChatStore::new(Arc::new(FailOnceService {
        failed: AtomicBool::new(false),
    }));

    assert!(store.send_message("first").await.is_err());
    assert_eq!(store.error().await.as_deref(), Some(SEND_FAILURE_MESSAGE));

    store.send_message("second").await.unwrap();
    let view = store.view().await;
    assert!(view.error.is_none());
    let contents: Vec<_> = view.messages.iter().map(|m| m.content()).collect();
    assert_eq!(contents, vec!["first", "second", "echo: second"]);
}

#[tokio::test]
async fn test_loading_true_while_request_pending() {
    let (release, gate) = oneshot::channel();
    let store = ChatStore::new(Arc::new(GatedService {
        gate: Mutex::new(Some(gate)),
    }));

    let sender = store.clone();
    let pending = tokio::spawn(async move { sender.send_message("hello").await });

    // Wait until the user message has been recorded.
    for _ in 0..100 {
        if store.is_loading().await {
            break;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }

    let view = store.view().await;
    assert!(view.is_loading);
    assert_eq!(view.messages.len(), 1);
    assert!(view.error.is_none());

    release.send(()).unwrap();
    pending.await.unwrap().unwrap();

    let view = store.view().await;
    assert!(!view.is_loading);
    assert_eq!(view.messages.len(), 2);
    assert_eq!(view.messages[1].content(), "echo: hello");
}

#[tokio::test]
async fn test_save_on_empty_conversation_never_mutates_sessions() {
    let store = answering_store();

    assert!(store.save_current_session().await.is_none());
    assert!(store.sessions().await.is_empty());
    assert!(store.active_session_id().await.is_none());
}

#[tokio::test]
async fn test_clear_chat_twice_saves_no_empty_sessions() {
    let store = answering_store();

    store.clear_chat().await;
    assert_eq!(store.sessions().await.len(), 0);
    store.clear_chat().await;
    assert_eq!(store.sessions().await.len(), 0);

    store.send_message("Remote work guidelines?").await.unwrap();
    store.clear_chat().await;
    assert_eq!(store.sessions().await.len(), 1);
    store.clear_chat().await;
    assert_eq!(store.sessions().await.len(), 1);
}

#[tokio::test]
async fn test_new_chat_archives_previous_conversation() {
    let store = answering_store();

    store.send_message("What is the PTO policy?").await.unwrap();
    store.send_message("And the remote work policy?").await.unwrap();
    store.create_new_chat().await;

    let view = store.view().await;
    assert!(view.messages.is_empty());
    assert!(view.active_session_id.is_none());

    let first = view.sessions.first().expect("archived session");
    assert_eq!(first.title, "What is the PTO policy?");
    let user_messages: Vec<_> = first
        .messages
        .iter()
        .filter(|m| m.is_user())
        .map(|m| m.content())
        .collect();
    assert_eq!(
        user_messages,
        vec!["What is the PTO policy?", "And the remote work policy?"]
    );
    assert_eq!(first.messages.len(), 4);
}

#[tokio::test]
async fn test_long_first_message_truncates_title() {
    let store = answering_store();

    let question = "Could you explain how the annual performance review works?";
    store.send_message(question).await.unwrap();
    store.create_new_chat().await;

    let sessions = store.sessions().await;
    let title = &sessions.first().unwrap().title;
    assert_eq!(title, &format!("{}...", &question[..30]));
}

#[tokio::test]
async fn test_load_unknown_session_persists_current_and_keeps_it_active() {
    let store = answering_store();

    store.send_message("IT Password requirements").await.unwrap();
    let before = store.messages().await;

    assert!(!store.load_session("session-does-not-exist").await);

    assert_eq!(store.messages().await, before);
    let sessions = store.sessions().await;
    assert_eq!(sessions.len(), 1);
    assert_eq!(sessions.first().unwrap().messages, before);
    assert_eq!(
        store.active_session_id().await.as_deref(),
        Some(sessions.first().unwrap().id.as_str())
    );

    // Saving again updates the same session instead of creating a duplicate.
    store.send_message("Health benefits overview").await.unwrap();
    store.create_new_chat().await;
    assert_eq!(store.sessions().await.len(), 1);
    assert_eq!(store.sessions().await.first().unwrap().messages.len(), 4);
}

#[tokio::test]
async fn test_switch_between_sessions() {
    let store = answering_store();

    store.send_message("What is the PTO policy?").await.unwrap();
    store.create_new_chat().await;
    store.send_message("Travel expense policy?").await.unwrap();
    store.create_new_chat().await;

    let sessions = store.sessions().await;
    assert_eq!(sessions.len(), 2);
    let travel_id = sessions.get(0).unwrap().id.clone();
    let pto_id = sessions.get(1).unwrap().id.clone();

    assert!(store.load_session(&pto_id).await);
    assert_eq!(store.active_session_id().await.as_deref(), Some(pto_id.as_str()));
    assert_eq!(store.messages().await[0].content(), "What is the PTO policy?");

    // Continue the loaded conversation, then switch away: it is updated in place.
    store.send_message("How much can I carry over?").await.unwrap();
    assert!(store.load_session(&travel_id).await);

    let sessions = store.sessions().await;
    assert_eq!(sessions.len(), 2);
    assert_eq!(sessions.get(1).unwrap().id, pto_id);
    assert_eq!(sessions.get(1).unwrap().messages.len(), 4);
    assert_eq!(store.messages().await[0].content(), "Travel expense policy?");
}
