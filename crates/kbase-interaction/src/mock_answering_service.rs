//! MockAnsweringService - canned answers from the static knowledge base.
//!
//! Classifies the query by keyword, waits for the policy's latency, and
//! either fails or answers with citations for the topic's document.

use crate::knowledge_base::{self, Document};
use crate::policy::RandomResponsePolicy;
use async_trait::async_trait;
use kbase_core::error::{KbaseError, Result};
use kbase_core::{AnsweringService, Citation, Message, ResponsePolicy, classify};
use rand::Rng;
use rand::distributions::Alphanumeric;
use std::sync::Arc;

/// Message carried by the error when a simulated call fails.
pub const CONNECTION_ERROR_MESSAGE: &str =
    "Failed to connect to the knowledge base. Please try again.";

/// Highest synthetic page number a citation can point at.
pub const MAX_CITATION_PAGE: u32 = 5;

/// Answering service backed by [`knowledge_base`].
#[derive(Clone)]
pub struct MockAnsweringService {
    policy: Arc<dyn ResponsePolicy>,
}

impl MockAnsweringService {
    /// Creates a service with the given latency/failure policy.
    pub fn new(policy: Arc<dyn ResponsePolicy>) -> Self {
        Self { policy }
    }

    fn cite(document: &Document) -> Citation {
        let mut rng = rand::thread_rng();
        Citation {
            id: format!("cit-{}", random_suffix(&mut rng)),
            document_id: document.id.to_string(),
            title: document.title.to_string(),
            page: rng.gen_range(1..=MAX_CITATION_PAGE),
            snippet: document.snippet(),
            document_content: document.content.to_string(),
        }
    }
}

impl Default for MockAnsweringService {
    fn default() -> Self {
        Self::new(Arc::new(RandomResponsePolicy::default()))
    }
}

/// Nine random lower-case base-36 characters.
fn random_suffix(rng: &mut impl Rng) -> String {
    rng.sample_iter(&Alphanumeric)
        .take(9)
        .map(|b| (b as char).to_ascii_lowercase())
        .collect()
}

#[async_trait]
impl AnsweringService for MockAnsweringService {
    async fn answer(&self, query: &str) -> Result<Message> {
        let latency = self.policy.latency();
        tokio::time::sleep(latency).await;

        if self.policy.should_fail() {
            tracing::warn!(
                latency_ms = latency.as_millis() as u64,
                "Simulated knowledge base connection failure"
            );
            return Err(KbaseError::service_unavailable(CONNECTION_ERROR_MESSAGE));
        }

        let topic = classify(query);
        let response = knowledge_base::response_for(topic);
        let citations = response
            .document_ids
            .iter()
            .filter_map(|id| knowledge_base::find_document(id))
            .map(Self::cite)
            .collect::<Vec<_>>();

        tracing::debug!(
            topic = %topic,
            citations = citations.len(),
            latency_ms = latency.as_millis() as u64,
            "Answered query"
        );

        Ok(Message::assistant(response.text, citations))
    }
}
