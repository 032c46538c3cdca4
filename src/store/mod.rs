//! Write-through key-value persistence
//!
//! Every tracked entity is serialized in full on each mutation; reads at
//! startup substitute a documented default when a key is absent or fails to
//! parse. Last write wins - there is no transaction spanning keys.

pub mod file;
pub mod keys;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::core::error::Result;

/// Key-value store scoped to one character's data
///
/// `get` returns `None` for absent keys; `set` is synchronous and immediate.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<serde_json::Value>>;
    fn set(&mut self, key: &str, value: serde_json::Value) -> Result<()>;
}

/// Read a typed value from the store, substituting the default when the key
/// is absent or its stored form no longer parses
///
/// Parse failure is a silent-recovery path, not an error: stale or
/// hand-edited data degrades to the default instead of blocking startup.
pub fn load_or_default<T, S>(store: &S, key: &str, default: T) -> T
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    match store.get(key) {
        Ok(Some(value)) => match serde_json::from_value(value) {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!("Stored value for '{}' failed to parse: {}", key, e);
                default
            }
        },
        Ok(None) => default,
        Err(e) => {
            tracing::warn!("Failed to read '{}': {}", key, e);
            default
        }
    }
}

/// Serialize a value and write it through to the store
pub fn persist<T, S>(store: &mut S, key: &str, value: &T) -> Result<()>
where
    T: Serialize,
    S: KeyValueStore + ?Sized,
{
    store.set(key, serde_json::to_value(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_or_default_absent_key() {
        let store = MemoryStore::new();
        let value: Vec<String> = load_or_default(&store, keys::ORACLE_KNOWN, Vec::new());
        assert!(value.is_empty());
    }

    #[test]
    fn test_load_or_default_parse_failure() {
        let mut store = MemoryStore::new();
        store
            .set(keys::ORACLE_KNOWN, serde_json::json!({"not": "a list"}))
            .unwrap();
        let value: Vec<String> = load_or_default(&store, keys::ORACLE_KNOWN, Vec::new());
        assert!(value.is_empty());
    }

    #[test]
    fn test_persist_then_load() {
        let mut store = MemoryStore::new();
        persist(&mut store, keys::ORACLE_KNOWN, &vec!["Bless".to_string()]).unwrap();
        let value: Vec<String> = load_or_default(&store, keys::ORACLE_KNOWN, Vec::new());
        assert_eq!(value, vec!["Bless".to_string()]);
    }
}
