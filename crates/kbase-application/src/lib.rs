pub mod chat;

pub use chat::{ChatStore, ChatStoreState, ChatView, SEND_FAILURE_MESSAGE};
