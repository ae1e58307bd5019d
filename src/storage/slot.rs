//! Persistence adapter for the settings record

use std::sync::Arc;

use super::KeyValueStore;
use crate::error::StorageError;
use crate::settings::StoredSettings;

/// Key of the single settings slot
pub const SETTINGS_KEY: &str = "nexus_settings";

/// Reads and writes `StoredSettings` in one slot of a key-value store.
///
/// Neither operation fails from the caller's point of view: a bad read
/// yields the default record and a failed write is logged and dropped.
#[derive(Clone)]
pub struct SettingsSlot {
    store: Arc<dyn KeyValueStore>,
}

impl SettingsSlot {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Load the stored record, or the default one if missing or malformed
    pub fn load(&self) -> StoredSettings {
        match self.try_load() {
            Ok(Some(settings)) => {
                tracing::debug!(key = SETTINGS_KEY, plan = %settings.selected_plan, "Loaded settings");
                settings
            }
            Ok(None) => {
                tracing::debug!(key = SETTINGS_KEY, "No stored settings, using defaults");
                StoredSettings::default()
            }
            Err(e) => {
                tracing::warn!(key = SETTINGS_KEY, "Failed to load settings, using defaults: {}", e);
                StoredSettings::default()
            }
        }
    }

    /// Persist the record; failures are logged and otherwise ignored
    pub fn save(&self, settings: &StoredSettings) {
        if let Err(e) = self.try_save(settings) {
            tracing::warn!(key = SETTINGS_KEY, "Failed to save settings: {}", e);
        }
    }

    fn try_load(&self) -> Result<Option<StoredSettings>, StorageError> {
        let Some(raw) = self.store.get(SETTINGS_KEY)? else {
            return Ok(None);
        };
        Ok(Some(serde_json::from_str(&raw)?))
    }

    fn try_save(&self, settings: &StoredSettings) -> Result<(), StorageError> {
        let raw = serde_json::to_string(settings)?;
        self.store.set(SETTINGS_KEY, &raw)
    }
}
