//! Process-local key-value store

use std::collections::HashMap;
use std::sync::RwLock;

use super::KeyValueStore;
use crate::error::StorageError;
use crate::utils::{acquire_read_lock, acquire_write_lock};

/// In-memory store; contents are lost when the process exits
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with one entry
    #[cfg(test)]
    pub(crate) fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        acquire_write_lock(&store.entries).insert(key.to_string(), value.to_string());
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(acquire_read_lock(&self.entries).get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        acquire_write_lock(&self.entries).insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<bool, StorageError> {
        Ok(acquire_write_lock(&self.entries).remove(key).is_some())
    }
}
