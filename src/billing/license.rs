//! License activation form
//!
//! The only acceptance rule is length: a key of at least
//! `MIN_LICENSE_KEY_LEN` characters activates the license.

use serde::Serialize;

use crate::settings::{SettingsPatch, SettingsStore, StoredSettings};

pub const MIN_LICENSE_KEY_LEN: usize = 16;

/// Feedback shown under the license input
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivationStatus {
    #[default]
    Idle,
    Valid,
    Invalid,
}

pub fn is_acceptable_key(key: &str) -> bool {
    key.chars().count() >= MIN_LICENSE_KEY_LEN
}

/// State of the license input
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LicenseForm {
    key: String,
    show_key: bool,
    status: ActivationStatus,
}

impl LicenseForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the typed key; any previous feedback is cleared
    pub fn edit(&mut self, key: impl Into<String>) {
        self.key = key.into();
        self.status = ActivationStatus::Idle;
    }

    pub fn toggle_visibility(&mut self) -> bool {
        self.show_key = !self.show_key;
        self.show_key
    }

    /// Submit the typed key.
    ///
    /// An acceptable key activates the license with one store update; a short
    /// key only flips the status to `Invalid`.
    pub fn submit(&mut self, store: &SettingsStore) -> ActivationStatus {
        if is_acceptable_key(&self.key) {
            store.update(SettingsPatch::activation(self.key.clone()));
            self.status = ActivationStatus::Valid;
            tracing::info!("License activated");
        } else {
            self.status = ActivationStatus::Invalid;
            tracing::debug!(length = self.key.chars().count(), "License key rejected");
        }
        self.status
    }
}

/// Result of an activation attempt as returned to the frontend
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivationOutcome {
    pub status: ActivationStatus,
    pub settings: StoredSettings,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StorageError;
    use crate::storage::{KeyValueStore, MemoryStore, SettingsSlot};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[derive(Default)]
    struct CountingStore {
        inner: MemoryStore,
        writes: AtomicUsize,
    }

    impl KeyValueStore for CountingStore {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.inner.get(key)
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            self.writes.fetch_add(1, Ordering::SeqCst);
            self.inner.set(key, value)
        }

        fn remove(&self, key: &str) -> Result<bool, StorageError> {
            self.inner.remove(key)
        }
    }

    fn store() -> (SettingsStore, Arc<CountingStore>) {
        let backend = Arc::new(CountingStore::default());
        (SettingsStore::initialize(SettingsSlot::new(backend.clone())), backend)
    }

    #[test]
    fn test_short_key_is_invalid() {
        let (store, backend) = store();
        let mut form = LicenseForm::new();
        form.edit("ABCD-EFGH-IJKL-");
        assert_eq!(form.key.len(), 15);

        assert_eq!(form.submit(&store), ActivationStatus::Invalid);
        assert!(!store.current().is_activated);
        assert_eq!(store.current().license_key, "");
        assert_eq!(backend.writes.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_sixteen_chars_activate() {
        let (store, backend) = store();
        let mut form = LicenseForm::new();
        form.edit("ABCD-EFGH-IJKL-M");

        assert_eq!(form.submit(&store), ActivationStatus::Valid);
        let current = store.current();
        assert!(current.is_activated);
        assert_eq!(current.license_key, "ABCD-EFGH-IJKL-M");
        assert_eq!(backend.writes.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_edit_resets_status() {
        let (store, _backend) = store();
        let mut form = LicenseForm::new();
        assert_eq!(form.status, ActivationStatus::Idle);

        form.edit("short");
        form.submit(&store);
        assert_eq!(form.status, ActivationStatus::Invalid);

        form.edit("shorter");
        assert_eq!(form.status, ActivationStatus::Idle);
    }

    #[test]
    fn test_invalid_after_activation_keeps_license() {
        let (store, _backend) = store();
        let mut form = LicenseForm::new();
        form.edit("0123456789ABCDEF");
        form.submit(&store);

        form.edit("nope");
        assert_eq!(form.submit(&store), ActivationStatus::Invalid);
        assert!(store.current().is_activated);
        assert_eq!(store.current().license_key, "0123456789ABCDEF");
    }

    #[test]
    fn test_length_counts_characters() {
        // 16 characters, more than 16 bytes
        assert!(is_acceptable_key("ÇÇÇÇ-ÇÇÇÇ-ÇÇÇÇ-Ç"));
        assert!(!is_acceptable_key("ÇÇÇÇÇÇÇÇ"));
    }

    #[test]
    fn test_toggle_visibility() {
        let mut form = LicenseForm::new();
        assert!(!form.show_key);
        assert!(form.toggle_visibility());
        assert!(!form.toggle_visibility());
    }

    #[test]
    fn test_form_serialization() {
        let mut form = LicenseForm::new();
        form.edit("ABCD");
        form.toggle_visibility();
        let json = serde_json::to_value(&form).unwrap();
        assert_eq!(json["key"], "ABCD");
        assert_eq!(json["showKey"], true);
        assert_eq!(json["status"], "idle");
    }

    #[test]
    fn test_status_serializes_lowercase() {
        assert_eq!(serde_json::to_value(ActivationStatus::Valid).unwrap(), "valid");
        assert_eq!(serde_json::to_value(ActivationStatus::Idle).unwrap(), "idle");
    }
}
