//! Static spell catalog
//!
//! Loaded once at startup from `spells-all.json` and read-only afterward.
//! A failed load leaves the catalog empty; dependent views simply render no
//! results (no retry).

use std::path::Path;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::core::error::Result;
use crate::core::types::{CasterKind, SpellLevel};

/// One catalog entry, immutable after load
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Spell {
    /// Unique key; known/prepared lists reference spells by name
    pub name: String,
    pub school: String,
    /// Spell level per class name; a class absent here cannot cast the spell
    pub level: AHashMap<String, SpellLevel>,
    /// Reference link to the rules text
    pub url: String,
}

impl Spell {
    /// The spell's level for a class, if that class can cast it
    pub fn level_for(&self, class: &str) -> Option<SpellLevel> {
        self.level.get(class).copied()
    }

    /// The spell's level for one of the modeled caster kinds
    pub fn level_for_caster(&self, caster: CasterKind) -> Option<SpellLevel> {
        self.level_for(caster.catalog_name())
    }
}

/// The full spell list plus a by-name index
#[derive(Debug, Clone, Default)]
pub struct SpellCatalog {
    spells: Vec<Spell>,
    by_name: AHashMap<String, usize>,
}

impl SpellCatalog {
    /// An empty catalog (the state after a failed load)
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_spells(spells: Vec<Spell>) -> Self {
        let by_name = spells
            .iter()
            .enumerate()
            .map(|(i, spell)| (spell.name.clone(), i))
            .collect();
        Self { spells, by_name }
    }

    /// Parse the catalog from its JSON wire format: a flat array of spells
    ///
    /// The shape is trusted; there is no schema validation beyond what serde
    /// needs to build the structs.
    pub fn from_json_str(content: &str) -> Result<Self> {
        let spells: Vec<Spell> = serde_json::from_str(content)?;
        tracing::debug!("Loaded {} spells", spells.len());
        Ok(Self::from_spells(spells))
    }

    /// Load the catalog from a file on disk
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Look a spell up by its unique name
    pub fn find(&self, name: &str) -> Option<&Spell> {
        self.by_name.get(name).map(|&i| &self.spells[i])
    }

    pub fn spells(&self) -> &[Spell] {
        &self.spells
    }

    pub fn len(&self) -> usize {
        self.spells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spells.is_empty()
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    /// Small catalog used across the spell tests
    pub fn sample_catalog() -> SpellCatalog {
        let json = r#"[
            {
                "name": "Bless",
                "school": "Enchantment",
                "level": {"Oracle": 1, "Cleric": 1},
                "url": "https://example.test/bless"
            },
            {
                "name": "Fireball",
                "school": "Evocation",
                "level": {"Wizard": 3, "Sorcerer": 3},
                "url": "https://example.test/fireball"
            },
            {
                "name": "Mage Armor",
                "school": "Conjuration",
                "level": {"Wizard": 1},
                "url": "https://example.test/mage-armor"
            },
            {
                "name": "Cure Light Wounds",
                "school": "Conjuration (Healing)",
                "level": {"Oracle": 1, "Cleric": 1},
                "url": "https://example.test/clw"
            }
        ]"#;
        SpellCatalog::from_json_str(json).unwrap()
    }
}
