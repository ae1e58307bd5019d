//! `tauri-plugin-store` backend

use std::sync::Arc;

use serde_json::Value;
use tauri::{AppHandle, Runtime};
use tauri_plugin_store::{Store, StoreExt};

use super::{open_fallback_store, KeyValueStore};
use crate::config::NexusConfig;
use crate::error::StorageError;

/// Key-value store backed by a plugin store file in the app data directory
pub struct TauriStore<R: Runtime> {
    store: Arc<Store<R>>,
}

impl<R: Runtime> TauriStore<R> {
    pub fn new(store: Arc<Store<R>>) -> Self {
        Self { store }
    }
}

impl<R: Runtime> KeyValueStore for TauriStore<R> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match self.store.get(key) {
            None => Ok(None),
            Some(Value::String(raw)) => Ok(Some(raw)),
            // Written by something other than this adapter; hand back its JSON
            Some(other) => Ok(Some(other.to_string())),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.store.set(key, Value::String(value.to_string()));
        self.store
            .save()
            .map_err(|e| StorageError::Backend(e.to_string()))
    }

    fn remove(&self, key: &str) -> Result<bool, StorageError> {
        let existed = self.store.delete(key);
        if existed {
            self.store
                .save()
                .map_err(|e| StorageError::Backend(e.to_string()))?;
        }
        Ok(existed)
    }
}

/// Open the plugin store for the popup, falling back to the file store
pub fn open_app_store<R: Runtime>(
    app: &AppHandle<R>,
    config: &NexusConfig,
) -> Arc<dyn KeyValueStore> {
    match app.store(config.store_file.as_str()) {
        Ok(store) => Arc::new(TauriStore::new(store)),
        Err(e) => {
            tracing::error!("Failed to open plugin store: {}. Using fallback.", e);
            open_fallback_store(config)
        }
    }
}
