//! Settings state for the popup
//!
//! - `types`: the persisted record and its typed partial update
//! - `store`: the in-memory container that persists on every change

mod store;
mod types;

pub use store::SettingsStore;
pub use types::{SettingsPatch, StoredSettings, DEFAULT_USED_MESSAGES};
