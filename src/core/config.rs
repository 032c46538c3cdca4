//! Sheet configuration with documented defaults
//!
//! Slot maxima and asset locations are collected here so a character build
//! can override them from a TOML file without touching code.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::core::error::{Result, SheetError};
use crate::core::types::SpellLevel;

/// Configuration for a character sheet
#[derive(Debug, Clone)]
pub struct SheetConfig {
    /// Maximum daily casting slots per spell level
    ///
    /// These are fixed by the character build; the *current* slot counts
    /// live in the persisted pool and reset to these maxima on rest.
    pub slot_max: BTreeMap<SpellLevel, u32>,

    /// Directory for the file-backed key-value store
    pub data_dir: PathBuf,

    /// Location of the spell catalog (file path or URL)
    pub catalog_source: String,

    /// Location of the backstory fragment (file path or URL)
    pub backstory_source: String,
}

impl Default for SheetConfig {
    fn default() -> Self {
        // Slot progression for a mid-level oracle: 5/4/3/2
        let mut slot_max = BTreeMap::new();
        slot_max.insert(1, 5);
        slot_max.insert(2, 4);
        slot_max.insert(3, 3);
        slot_max.insert(4, 2);

        Self {
            slot_max,
            data_dir: PathBuf::from("sheet-data"),
            catalog_source: "spells-all.json".into(),
            backstory_source: "backstory.html".into(),
        }
    }
}

impl SheetConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.slot_max.is_empty() {
            return Err(SheetError::Config("slot_max must not be empty".into()));
        }

        if self.slot_max.contains_key(&0) {
            return Err(SheetError::Config(
                "cantrips (level 0) are at-will and take no slots".into(),
            ));
        }

        Ok(())
    }

    /// Load configuration from a TOML file, falling back to defaults for
    /// any key the file omits
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let toml: toml::Value = content
            .parse()
            .map_err(|e| SheetError::Config(format!("Invalid TOML: {}", e)))?;

        let mut config = Self::default();

        if let Some(slots) = toml.get("slots").and_then(|v| v.as_table()) {
            let mut slot_max = BTreeMap::new();
            for (level_str, max) in slots {
                let level: SpellLevel = level_str
                    .parse()
                    .map_err(|_| SheetError::Config(format!("Bad slot level '{}'", level_str)))?;
                let max = max
                    .as_integer()
                    .filter(|m| *m >= 0)
                    .ok_or_else(|| {
                        SheetError::Config(format!("Bad slot max for level {}", level))
                    })?;
                slot_max.insert(level, max as u32);
            }
            config.slot_max = slot_max;
        }

        if let Some(data_dir) = toml.get("data_dir").and_then(|v| v.as_str()) {
            config.data_dir = PathBuf::from(data_dir);
        }

        if let Some(catalog) = toml.get("catalog_source").and_then(|v| v.as_str()) {
            config.catalog_source = catalog.to_string();
        }

        if let Some(backstory) = toml.get("backstory_source").and_then(|v| v.as_str()) {
            config.backstory_source = backstory.to_string();
        }

        config.validate()?;
        Ok(config)
    }
}
