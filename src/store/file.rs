//! File-backed key-value store
//!
//! Each key is one JSON file under the base directory. Writes go through a
//! temp file and an atomic rename so a crash mid-write leaves the previous
//! value intact rather than a truncated file.

use std::fs;
use std::path::{Path, PathBuf};

use crate::core::error::Result;
use crate::store::KeyValueStore;

/// One-JSON-file-per-key store rooted at a base directory
pub struct FileStore {
    base_dir: PathBuf,
}

impl FileStore {
    /// Open a store at `base_dir`, creating the directory if needed
    pub fn open(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir)?;
        Ok(Self { base_dir })
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.base_dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<serde_json::Value>> {
        let path = self.key_path(key);

        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&path)?;
        match serde_json::from_str(&content) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                // Unreadable files count as absent; the caller substitutes
                // its default rather than failing startup.
                tracing::warn!("Ignoring malformed store file {}: {}", path.display(), e);
                Ok(None)
            }
        }
    }

    fn set(&mut self, key: &str, value: serde_json::Value) -> Result<()> {
        let path = self.key_path(key);
        let temp_path = path.with_extension("json.tmp");

        let content = serde_json::to_string_pretty(&value)?;
        fs::write(&temp_path, content)?;
        fs::rename(&temp_path, &path)?;

        tracing::debug!("Persisted '{}' to {}", key, path.display());

        Ok(())
    }
}
