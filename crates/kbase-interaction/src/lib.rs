//! Answering backends for the knowledge base chat.

pub mod knowledge_base;
pub mod mock_answering_service;
pub mod policy;

pub use knowledge_base::{DOCUMENTS, Document, SUGGESTED_QUESTIONS};
pub use mock_answering_service::{CONNECTION_ERROR_MESSAGE, MockAnsweringService};
pub use policy::{FixedResponsePolicy, RandomResponsePolicy};
