//! Simulated popup services
//!
//! - `chat`: local message log with a delayed canned reply
//! - `sync`: "sync now" busy flag and the recent activity feed

pub mod chat;
pub mod sync;

pub use chat::{ChatMessage, ChatPanel, ReplyListener};
pub use sync::{ActivityEntry, SyncItem, SyncListener, SyncPanel, SyncService, SyncStatus};
