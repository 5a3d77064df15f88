pub mod answering;
pub mod config;
pub mod conversation;
pub mod error;
pub mod message;
pub mod session;
pub mod topic;

// Re-export common error type
pub use error::KbaseError;

pub use answering::{AnsweringService, ResponsePolicy};
pub use conversation::ChatState;
pub use message::{Citation, Message, MessageRole, MessageStatus};
pub use session::{ChatSession, SessionList};
pub use topic::{Topic, classify};
