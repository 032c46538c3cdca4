//! In-memory key-value store for tests and embedding hosts

use ahash::AHashMap;

use crate::core::error::Result;
use crate::store::KeyValueStore;

/// Map-backed store with the same contract as [`super::FileStore`]
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: AHashMap<String, serde_json::Value>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<serde_json::Value>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: serde_json::Value) -> Result<()> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }
}
