//! Session domain module.
//!
//! A session is a saved snapshot of a past conversation. This module holds
//! the snapshot model and the ordered collection sessions are kept in.
//!
//! # Module Structure
//!
//! - `model`: Saved conversation snapshot (`ChatSession`) and title derivation
//! - `list`: Most-recent-first session collection (`SessionList`)

mod list;
mod model;

pub use list::SessionList;
pub use model::{ChatSession, SESSION_TITLE_MAX_CHARS, session_title};
