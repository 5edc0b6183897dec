//! Persistent key-value store
//!
//! String keys to JSON values, stored together as one JSON object. Callers
//! decide what shape their values take.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde_json::Value;
use tracing::warn;

use super::file_io::{read_json, write_json_atomic};
use crate::error::OnboardResult;

/// A synchronous key-value store
pub trait KeyValueStore: Send {
    /// Read the value stored under `key`
    fn get(&self, key: &str) -> Option<Value>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&mut self, key: &str, value: Value) -> OnboardResult<()>;

    /// Remove `key` if present
    fn remove(&mut self, key: &str) -> OnboardResult<()>;
}

/// Key-value store backed by a single JSON object on disk
///
/// The file is re-read on every `get` so that separate processes see each
/// other's writes.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store over the given file (it need not exist yet)
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Path of the backing file
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    fn load(&self) -> BTreeMap<String, Value> {
        match read_json(&self.path) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Ignoring unreadable preference file");
                BTreeMap::new()
            }
        }
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<Value> {
        self.load().remove(key)
    }

    fn set(&mut self, key: &str, value: Value) -> OnboardResult<()> {
        let mut entries = self.load();
        entries.insert(key.to_string(), value);
        write_json_atomic(&self.path, &entries)
    }

    fn remove(&mut self, key: &str) -> OnboardResult<()> {
        let mut entries = self.load();
        if entries.remove(key).is_some() {
            write_json_atomic(&self.path, &entries)?;
        }
        Ok(())
    }
}

/// In-memory key-value store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, Value>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<Value> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: Value) -> OnboardResult<()> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> OnboardResult<()> {
        self.entries.remove(key);
        Ok(())
    }
}
