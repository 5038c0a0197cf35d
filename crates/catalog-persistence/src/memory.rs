use std::collections::BTreeMap;

use crate::StorageBackend;
use crate::error::{PersistenceError, Result};

/// In-memory storage, mostly for tests.
///
/// Reads and writes can be switched to fail to exercise error handling.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: BTreeMap<String, String>,
    fail_reads: bool,
    fail_writes: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-populated with one key.
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut storage = Self::new();
        storage.entries.insert(key.into(), value.into());
        storage
    }

    pub fn set_fail_reads(&mut self, fail: bool) {
        self.fail_reads = fail;
    }

    pub fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl StorageBackend for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        if self.fail_reads {
            return Err(PersistenceError::Unavailable {
                key: key.to_string(),
                reason: "reads disabled".to_string(),
            });
        }
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        if self.fail_writes {
            return Err(PersistenceError::Unavailable {
                key: key.to_string(),
                reason: "writes disabled".to_string(),
            });
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        if self.fail_writes {
            return Err(PersistenceError::Unavailable {
                key: key.to_string(),
                reason: "writes disabled".to_string(),
            });
        }
        self.entries.remove(key);
        Ok(())
    }
}
