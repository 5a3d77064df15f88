//! Chat session state management.
//!
//! - `state`: Pure conversation/session transitions (`ChatStoreState`)
//! - `store`: Async store sequencing those transitions around the answering service (`ChatStore`)
//! - `view`: Read-only snapshot for rendering (`ChatView`)

mod state;
mod store;
mod view;

pub use state::ChatStoreState;
pub use store::{ChatStore, SEND_FAILURE_MESSAGE};
pub use view::ChatView;
