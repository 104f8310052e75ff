//! Key-value persistence.
//!
//! [`KeyValueStore`] is the narrow adapter contract (string keys, string
//! values, plus a liveness probe). [`Persistence`] wraps an adapter with an
//! in-memory shadow so that the game keeps working for the rest of the
//! session once the adapter fails; the failure is queued as a single warning
//! and the adapter is never written again.

pub mod file;
pub mod memory;

use std::collections::HashMap;

use crate::error::{StorageError, StorageResult};

pub use file::JsonFileStore;
pub use memory::{DisabledStore, MemoryStore};

/// Key written and removed by the default liveness probe.
pub const PROBE_KEY: &str = "__test__";

/// A local string key-value store.
pub trait KeyValueStore {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> StorageResult<()>;

    /// Remove `key`. Removing an absent key is not an error.
    fn remove(&mut self, key: &str) -> StorageResult<()>;

    /// Check that the store accepts writes by writing and removing a probe key.
    fn probe_availability(&mut self) -> StorageResult<()> {
        self.set(PROBE_KEY, "test")?;
        self.remove(PROBE_KEY)
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> StorageResult<()> {
        (**self).remove(key)
    }

    fn probe_availability(&mut self) -> StorageResult<()> {
        (**self).probe_availability()
    }
}

/// Best-effort persistence over a [`KeyValueStore`].
///
/// Every write also lands in an in-memory shadow map, and successful reads
/// are cached there. The first adapter error switches to degraded mode:
/// writes stay in the shadow, and the error is held until
/// [`Persistence::take_warning`] collects it. Keys the shadow has never seen
/// are still read from the adapter, so a store that can be read but not
/// written keeps its saved progress.
#[derive(Debug)]
pub struct Persistence<S> {
    store: S,
    /// `None` marks a key removed while degraded.
    shadow: HashMap<String, Option<String>>,
    degraded: bool,
    pending_warning: Option<StorageError>,
}

impl<S: KeyValueStore> Persistence<S> {
    /// Wrap an adapter. The adapter is assumed healthy until it fails.
    pub fn new(store: S) -> Self {
        Self {
            store,
            shadow: HashMap::new(),
            degraded: false,
            pending_warning: None,
        }
    }

    /// Run the adapter's liveness probe, degrading if it fails.
    pub fn probe(&mut self) -> bool {
        if self.degraded {
            return false;
        }
        match self.store.probe_availability() {
            Ok(()) => true,
            Err(e) => {
                self.degrade(e);
                false
            }
        }
    }

    /// Read a value.
    pub fn get(&mut self, key: &str) -> Option<String> {
        if self.degraded {
            if let Some(entry) = self.shadow.get(key) {
                return entry.clone();
            }
            let value = self.store.get(key).ok().flatten();
            self.shadow.insert(key.to_string(), value.clone());
            return value;
        }
        match self.store.get(key) {
            Ok(value) => {
                self.shadow.insert(key.to_string(), value.clone());
                value
            }
            Err(e) => {
                self.degrade(e);
                self.shadow.get(key).cloned().flatten()
            }
        }
    }

    /// Write a value.
    pub fn set(&mut self, key: &str, value: &str) {
        self.shadow.insert(key.to_string(), Some(value.to_string()));
        if self.degraded {
            return;
        }
        if let Err(e) = self.store.set(key, value) {
            self.degrade(e);
        }
    }

    /// Remove a value.
    pub fn remove(&mut self, key: &str) {
        self.shadow.insert(key.to_string(), None);
        if self.degraded {
            return;
        }
        if let Err(e) = self.store.remove(key) {
            self.degrade(e);
        }
    }

    /// Whether the adapter has failed and writes are memory-only.
    pub fn is_degraded(&self) -> bool {
        self.degraded
    }

    /// Collect the queued degradation warning. Yields at most one error per
    /// session.
    pub fn take_warning(&mut self) -> Option<StorageError> {
        self.pending_warning.take()
    }

    /// Borrow the wrapped adapter.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Unwrap the adapter.
    pub fn into_inner(self) -> S {
        self.store
    }

    fn degrade(&mut self, error: StorageError) {
        if self.degraded {
            return;
        }
        log::warn!("persistence degraded to in-memory only: {error}");
        self.degraded = true;
        self.pending_warning = Some(error);
    }
}
