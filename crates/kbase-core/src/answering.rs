//! Answering service contracts.
//!
//! The chat store talks to an [`AnsweringService`]; simulated latency and
//! failure injection come from a [`ResponsePolicy`] so tests can replace
//! randomness with fixed values.

use crate::error::Result;
use crate::message::Message;
use async_trait::async_trait;
use std::time::Duration;

/// A backend that answers a free-text query with an assistant message.
#[async_trait]
pub trait AnsweringService: Send + Sync {
    /// Answers `query`.
    ///
    /// # Returns
    ///
    /// - `Ok(Message)`: An assistant message, possibly with citations
    /// - `Err(KbaseError::ServiceUnavailable)`: The backend could not be reached
    async fn answer(&self, query: &str) -> Result<Message>;
}

/// Supplies the delay and failure decision for one answering call.
pub trait ResponsePolicy: Send + Sync {
    /// How long the call waits before completing.
    fn latency(&self) -> Duration;

    /// Whether the call fails instead of answering.
    fn should_fail(&self) -> bool;
}
