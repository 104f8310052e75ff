//! In-memory and disabled stores.

use std::collections::HashMap;

use super::KeyValueStore;
use crate::error::{StorageError, StorageResult};

/// A `HashMap`-backed store. Nothing survives the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store holds no keys.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> StorageResult<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// A store that rejects every operation, modelling disabled local storage.
#[derive(Debug, Clone)]
pub struct DisabledStore {
    reason: String,
}

impl DisabledStore {
    /// Create a disabled store that reports `reason` on every failure.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    fn error(&self) -> StorageError {
        StorageError::Unavailable(self.reason.clone())
    }
}

impl Default for DisabledStore {
    fn default() -> Self {
        Self::new("storage is disabled")
    }
}

impl KeyValueStore for DisabledStore {
    fn get(&self, _key: &str) -> StorageResult<Option<String>> {
        Err(self.error())
    }

    fn set(&mut self, _key: &str, _value: &str) -> StorageResult<()> {
        Err(self.error())
    }

    fn remove(&mut self, _key: &str) -> StorageResult<()> {
        Err(self.error())
    }
}
