//! JSON file store.
//!
//! The whole store is one flat JSON object of string keys to string values.
//! Every mutation rewrites the file, so the file always reflects the latest
//! successful write.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::KeyValueStore;
use crate::error::StorageResult;

/// A store persisted to a single JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl JsonFileStore {
    /// Open the store at `path`. A missing file is an empty store; it is
    /// created on the first write.
    pub fn open(path: impl Into<PathBuf>) -> StorageResult<Self> {
        let path = path.into();
        let entries = if path.exists() {
            let text = fs::read_to_string(&path)?;
            if text.trim().is_empty() {
                BTreeMap::new()
            } else {
                serde_json::from_str(&text)?
            }
        } else {
            BTreeMap::new()
        };
        log::debug!("opened {} with {} keys", path.display(), entries.len());
        Ok(Self { path, entries })
    }

    /// Start an empty store at `path`, overwriting whatever the file held.
    pub fn create(path: impl Into<PathBuf>) -> StorageResult<Self> {
        let store = Self {
            path: path.into(),
            entries: BTreeMap::new(),
        };
        store.flush()?;
        log::debug!("created empty store at {}", store.path.display());
        Ok(store)
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> StorageResult<()> {
        let json = serde_json::to_string_pretty(&self.entries)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }

    fn remove(&mut self, key: &str) -> StorageResult<()> {
        if self.entries.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }
}
