//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for known/prepared spell entries
///
/// Entries are addressed by id rather than list position, so removal and
/// toggle operations stay unambiguous while the list mutates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntryId(pub Uuid);

impl EntryId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EntryId {
    fn default() -> Self {
        Self::new()
    }
}

/// The six ability scores
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Ability {
    Str,
    Dex,
    Con,
    Int,
    Wis,
    Cha,
}

impl Ability {
    pub const ALL: [Ability; 6] = [
        Ability::Str,
        Ability::Dex,
        Ability::Con,
        Ability::Int,
        Ability::Wis,
        Ability::Cha,
    ];

    /// Position of this ability in fixed-size ability tables
    pub fn index(&self) -> usize {
        match self {
            Ability::Str => 0,
            Ability::Dex => 1,
            Ability::Con => 2,
            Ability::Int => 3,
            Ability::Wis => 4,
            Ability::Cha => 5,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Ability::Str => "Strength",
            Ability::Dex => "Dexterity",
            Ability::Con => "Constitution",
            Ability::Int => "Intelligence",
            Ability::Wis => "Wisdom",
            Ability::Cha => "Charisma",
        }
    }
}

/// Saving throw categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SaveKind {
    Fortitude,
    Reflex,
    Will,
}

impl SaveKind {
    pub const ALL: [SaveKind; 3] = [SaveKind::Fortitude, SaveKind::Reflex, SaveKind::Will];

    /// The ability that governs this save
    pub fn governing_ability(&self) -> Ability {
        match self {
            SaveKind::Fortitude => Ability::Con,
            SaveKind::Reflex => Ability::Dex,
            SaveKind::Will => Ability::Wis,
        }
    }
}

/// The two spellcasting classes the sheet models
///
/// Oracle is a spontaneous caster drawing on per-level slot pools;
/// Wizard prepares individual spells from a spellbook each day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CasterKind {
    Oracle,
    Wizard,
}

impl CasterKind {
    /// Class name as it appears in the spell catalog's level map
    pub fn catalog_name(&self) -> &'static str {
        match self {
            CasterKind::Oracle => "Oracle",
            CasterKind::Wizard => "Wizard",
        }
    }
}

/// Spell level (0 = cantrip/orison)
pub type SpellLevel = u8;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_governing_abilities() {
        assert_eq!(SaveKind::Fortitude.governing_ability(), Ability::Con);
        assert_eq!(SaveKind::Reflex.governing_ability(), Ability::Dex);
        assert_eq!(SaveKind::Will.governing_ability(), Ability::Wis);
    }

    #[test]
    fn test_entry_ids_are_unique() {
        assert_ne!(EntryId::new(), EntryId::new());
    }

    #[test]
    fn test_caster_catalog_names() {
        assert_eq!(CasterKind::Oracle.catalog_name(), "Oracle");
        assert_eq!(CasterKind::Wizard.catalog_name(), "Wizard");
    }
}
