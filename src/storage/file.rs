//! File-backed key-value store
//!
//! All entries live in one JSON object on disk. Every write replaces the
//! file atomically so a crash never leaves a half-written map behind.

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use super::KeyValueStore;
use crate::error::StorageError;
use crate::utils::{acquire_read_lock, acquire_write_lock};

type Entries = BTreeMap<String, String>;

/// JSON map file store
pub struct FileStore {
    path: PathBuf,
    entries: RwLock<Entries>,
}

impl FileStore {
    /// Open the store at `path`, creating its parent directory if needed.
    ///
    /// An unreadable or corrupt file is treated as empty; it gets replaced on
    /// the next write.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let entries = match Self::read_entries(&path) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!("Ignoring unreadable store file {:?}: {}", path, e);
                Entries::new()
            }
        };

        tracing::debug!(path = ?path, entries = entries.len(), "Opened file store");

        Ok(Self {
            path,
            entries: RwLock::new(entries),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(path: &Path) -> Result<Entries, StorageError> {
        if !path.exists() {
            return Ok(Entries::new());
        }

        let file = File::open(path)?;
        let entries = serde_json::from_reader(BufReader::new(file))?;
        Ok(entries)
    }

    /// Atomically write the map to disk
    fn atomic_write(&self, entries: &Entries) -> Result<(), StorageError> {
        // Write to temporary file first
        let temp_path = self.path.with_extension("tmp");

        let file = File::create(&temp_path)?;
        let mut writer = BufWriter::new(file);

        serde_json::to_writer_pretty(&mut writer, entries)?;
        writer.flush()?;
        writer.get_ref().sync_all()?;

        fs::rename(&temp_path, &self.path)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(acquire_read_lock(&self.entries).get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = acquire_write_lock(&self.entries);
        let previous = entries.insert(key.to_string(), value.to_string());

        if let Err(e) = self.atomic_write(&entries) {
            // Keep memory in step with disk
            match previous {
                Some(old) => entries.insert(key.to_string(), old),
                None => entries.remove(key),
            };
            return Err(e);
        }
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<bool, StorageError> {
        let mut entries = acquire_write_lock(&self.entries);
        let Some(previous) = entries.remove(key) else {
            return Ok(false);
        };

        if let Err(e) = self.atomic_write(&entries) {
            entries.insert(key.to_string(), previous);
            return Err(e);
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_path(dir: &TempDir) -> PathBuf {
        dir.path().join("nested").join("nexus.json")
    }

    #[test]
    fn test_values_survive_reopen() {
        let dir = TempDir::new().unwrap();
        let path = store_path(&dir);

        {
            let store = FileStore::open(&path).unwrap();
            store.set("nexus_settings", r#"{"selectedPlan":"pro"}"#).unwrap();
            store.set("other", "1").unwrap();
        }

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(
            reopened.get("nexus_settings").unwrap().as_deref(),
            Some(r#"{"selectedPlan":"pro"}"#)
        );
        assert_eq!(reopened.get("other").unwrap().as_deref(), Some("1"));
    }

    #[test]
    fn test_no_temp_file_left_behind() {
        let dir = TempDir::new().unwrap();
        let path = store_path(&dir);
        let store = FileStore::open(&path).unwrap();

        store.set("k", "v").unwrap();
        assert!(path.exists());
        assert!(!path.with_extension("tmp").exists());
    }

    #[test]
    fn test_corrupt_file_opens_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nexus.json");
        fs::write(&path, "{not json").unwrap();

        let store = FileStore::open(&path).unwrap();
        assert_eq!(store.get("nexus_settings").unwrap(), None);

        store.set("nexus_settings", "{}").unwrap();
        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get("nexus_settings").unwrap().as_deref(), Some("{}"));
    }

    #[test]
    fn test_remove_persists() {
        let dir = TempDir::new().unwrap();
        let path = store_path(&dir);
        let store = FileStore::open(&path).unwrap();

        store.set("k", "v").unwrap();
        assert!(store.remove("k").unwrap());
        assert!(!store.remove("k").unwrap());

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get("k").unwrap(), None);
    }
}
