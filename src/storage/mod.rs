//! Durable key-value storage for the settings slot
//!
//! This module provides:
//! - `KeyValueStore`: the string-keyed backend abstraction
//! - `MemoryStore`: process-local backend (no data directory, tests)
//! - `FileStore`: JSON map file written atomically
//! - `TauriStore`: the `tauri-plugin-store` backend (desktop feature)
//! - `SettingsSlot`: the persistence adapter for `StoredSettings`

mod file;
mod memory;
mod slot;
#[cfg(feature = "desktop")]
mod tauri_store;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use slot::{SettingsSlot, SETTINGS_KEY};
#[cfg(feature = "desktop")]
pub use tauri_store::{open_app_store, TauriStore};

use std::sync::Arc;

use crate::config::NexusConfig;
use crate::error::StorageError;

/// A string-keyed durable store holding string values
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove a key, returning whether it existed
    fn remove(&self, key: &str) -> Result<bool, StorageError>;
}

/// Open the file-backed store under the configured data directory,
/// or an in-memory store when there is no usable directory
pub fn open_fallback_store(config: &NexusConfig) -> Arc<dyn KeyValueStore> {
    let Some(data_dir) = config.data_dir.as_ref() else {
        tracing::warn!("No data directory available, settings will not survive a restart");
        return Arc::new(MemoryStore::new());
    };

    match FileStore::open(data_dir.join(&config.store_file)) {
        Ok(store) => {
            tracing::info!(path = %store.path().display(), "Using settings file");
            Arc::new(store)
        }
        Err(e) => {
            tracing::error!("Failed to open settings file in {:?}: {}. Using memory store.", data_dir, e);
            Arc::new(MemoryStore::new())
        }
    }
}
