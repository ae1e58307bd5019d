//! In-memory settings container with write-through persistence

use std::sync::RwLock;

use super::types::{SettingsPatch, StoredSettings};
use crate::storage::SettingsSlot;
use crate::utils::{acquire_read_lock, acquire_write_lock};

/// Current settings of the popup.
///
/// Every `update` merges the patch, replaces the current value and issues
/// exactly one write to the slot. Values are not validated here.
pub struct SettingsStore {
    current: RwLock<StoredSettings>,
    slot: SettingsSlot,
}

impl SettingsStore {
    /// Load the slot and make the result the current value
    pub fn initialize(slot: SettingsSlot) -> Self {
        let current = slot.load();
        tracing::info!(
            plan = %current.selected_plan,
            activated = current.is_activated,
            used = current.used_messages,
            "Settings initialized"
        );

        Self {
            current: RwLock::new(current),
            slot,
        }
    }

    /// Snapshot of the current settings
    pub fn current(&self) -> StoredSettings {
        acquire_read_lock(&self.current).clone()
    }

    /// Merge `patch` into the current value, persist it and return it
    pub fn update(&self, patch: SettingsPatch) -> StoredSettings {
        let mut current = acquire_write_lock(&self.current);
        self.commit(&mut current, patch)
    }

    /// Count one consumed message
    pub fn record_message(&self) -> StoredSettings {
        let mut current = acquire_write_lock(&self.current);
        let used = current.used_messages.saturating_add(1);
        self.commit(&mut current, SettingsPatch::used_messages(used))
    }

    /// Saved while the caller holds the lock, so the slot sees writes in the
    /// same order as memory
    fn commit(&self, current: &mut StoredSettings, patch: SettingsPatch) -> StoredSettings {
        let merged = current.merged(patch);
        *current = merged.clone();

        self.slot.save(&merged);
        tracing::debug!(plan = %merged.selected_plan, used = merged.used_messages, "Settings updated");

        merged
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::billing::PlanId;
    use crate::error::StorageError;
    use crate::storage::{KeyValueStore, MemoryStore, SETTINGS_KEY};
    use std::sync::{Arc, Mutex};

    /// Records every write it receives
    #[derive(Default)]
    struct RecordingStore {
        inner: MemoryStore,
        writes: Mutex<Vec<String>>,
    }

    impl RecordingStore {
        fn writes(&self) -> Vec<StoredSettings> {
            self.writes
                .lock()
                .unwrap()
                .iter()
                .map(|raw| serde_json::from_str(raw).unwrap())
                .collect()
        }
    }

    impl KeyValueStore for RecordingStore {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.inner.get(key)
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            self.writes.lock().unwrap().push(value.to_string());
            self.inner.set(key, value)
        }

        fn remove(&self, key: &str) -> Result<bool, StorageError> {
            self.inner.remove(key)
        }
    }

    /// Accepts reads, refuses every write
    struct ReadOnlyStore(MemoryStore);

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.0.get(key)
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Backend("quota exceeded".to_string()))
        }

        fn remove(&self, _key: &str) -> Result<bool, StorageError> {
            Ok(false)
        }
    }

    fn recording_store() -> (SettingsStore, Arc<RecordingStore>) {
        let backend = Arc::new(RecordingStore::default());
        let store = SettingsStore::initialize(SettingsSlot::new(backend.clone()));
        (store, backend)
    }

    #[test]
    fn test_initialize_without_stored_value() {
        let (store, backend) = recording_store();
        assert_eq!(
            store.current(),
            StoredSettings {
                selected_plan: PlanId::Free,
                is_activated: false,
                license_key: String::new(),
                used_messages: 3,
            }
        );
        // Loading never writes
        assert!(backend.writes().is_empty());
    }

    #[test]
    fn test_initialize_from_stored_value() {
        let raw = r#"{"selectedPlan":"pro","isActivated":true,"licenseKey":"ABCD-EFGH-IJKL-MNOP","usedMessages":40}"#;
        let backend = Arc::new(MemoryStore::with_entry(SETTINGS_KEY, raw));
        let store = SettingsStore::initialize(SettingsSlot::new(backend));

        let current = store.current();
        assert_eq!(current.selected_plan, PlanId::Pro);
        assert_eq!(current.used_messages, 40);
        assert!(current.is_activated);
    }

    #[test]
    fn test_update_writes_merged_record_once() {
        let (store, backend) = recording_store();

        let updated = store.update(SettingsPatch::plan(PlanId::Plus));

        let writes = backend.writes();
        assert_eq!(writes.len(), 1);
        assert_eq!(writes[0], updated);
        assert_eq!(
            writes[0],
            StoredSettings {
                selected_plan: PlanId::Plus,
                ..StoredSettings::default()
            }
        );
    }

    #[test]
    fn test_update_keeps_absent_fields() {
        let (store, _backend) = recording_store();
        store.update(SettingsPatch::activation("ABCD-EFGH-IJKL-MNOP"));
        let after = store.update(SettingsPatch::plan(PlanId::Premium));

        assert_eq!(after.selected_plan, PlanId::Premium);
        assert!(after.is_activated);
        assert_eq!(after.license_key, "ABCD-EFGH-IJKL-MNOP");
        assert_eq!(after.used_messages, 3);
        assert_eq!(store.current(), after);
    }

    #[test]
    fn test_every_update_persists() {
        let (store, backend) = recording_store();
        store.update(SettingsPatch::default());
        store.update(SettingsPatch::used_messages(10));
        store.update(SettingsPatch::used_messages(10));
        assert_eq!(backend.writes().len(), 3);
    }

    #[test]
    fn test_updates_survive_reload() {
        let backend = Arc::new(MemoryStore::new());
        let store = SettingsStore::initialize(SettingsSlot::new(backend.clone()));
        let saved = store.update(SettingsPatch::activation("0123456789ABCDEF"));

        let reloaded = SettingsStore::initialize(SettingsSlot::new(backend));
        assert_eq!(reloaded.current(), saved);
    }

    #[test]
    fn test_failed_write_keeps_memory_authoritative() {
        let backend = Arc::new(ReadOnlyStore(MemoryStore::new()));
        let store = SettingsStore::initialize(SettingsSlot::new(backend.clone()));

        let updated = store.update(SettingsPatch::plan(PlanId::Pro));
        assert_eq!(store.current(), updated);

        // Nothing reached the backend, so a reload starts from defaults
        let reloaded = SettingsStore::initialize(SettingsSlot::new(backend));
        assert_eq!(reloaded.current(), StoredSettings::default());
    }

    #[test]
    fn test_record_message_increments_and_persists() {
        let (store, backend) = recording_store();
        store.record_message();
        let after = store.record_message();

        assert_eq!(after.used_messages, 5);
        assert_eq!(backend.writes().len(), 2);
        assert_eq!(backend.writes()[1].used_messages, 5);
    }

    #[test]
    fn test_record_message_keeps_other_fields() {
        let (store, backend) = recording_store();
        store.update(SettingsPatch::plan(PlanId::Plus));
        store.update(SettingsPatch::activation("ABCD-EFGH-IJKL-MNOP"));

        let after = store.record_message();
        assert_eq!(after, store.current());
        assert_eq!(after.selected_plan, PlanId::Plus);
        assert!(after.is_activated);
        assert_eq!(backend.writes().last(), Some(&after));
    }

    #[test]
    fn test_record_message_saturates() {
        let (store, _backend) = recording_store();
        store.update(SettingsPatch::used_messages(u32::MAX));
        assert_eq!(store.record_message().used_messages, u32::MAX);
    }

    #[test]
    fn test_concurrent_updates_are_not_lost() {
        let (store, backend) = recording_store();
        let store = Arc::new(store);

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = store.clone();
                std::thread::spawn(move || {
                    for _ in 0..25 {
                        store.record_message();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(store.current().used_messages, 3 + 200);
        assert_eq!(backend.writes().len(), 200);
        assert_eq!(backend.writes().last().unwrap().used_messages, 203);
    }
}
