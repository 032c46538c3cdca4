//! Known spells, prepared spells, and daily slot pools
//!
//! This is the mutable spell state for one character. Entries carry stable
//! ids so removal and toggling address a specific entry even after earlier
//! removals reshuffled positions. Persistence is the controller's job; the
//! operations here only mutate state.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::core::types::{CasterKind, EntryId, SpellLevel};
use crate::spells::catalog::SpellCatalog;
use crate::spells::grouping::{group_by_level, GroupLevel, LevelGroup};

/// A spell the character knows
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnownEntry {
    pub id: EntryId,
    pub name: String,
}

/// A prepared wizard spell and whether it has been cast today
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreparedEntry {
    pub id: EntryId,
    pub name: String,
    pub used: bool,
}

/// One level's consumable daily casting resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub current: u32,
    pub max: u32,
}

/// Per-level slot pools for the spontaneous caster
///
/// `current <= max` is a soft constraint: manual adjustment may push the
/// current count past the maximum.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotPool {
    slots: BTreeMap<SpellLevel, Slot>,
}

impl SlotPool {
    /// A pool at full capacity for the given maxima
    pub fn from_max(max: &BTreeMap<SpellLevel, u32>) -> Self {
        let slots = max
            .iter()
            .map(|(&level, &max)| (level, Slot { current: max, max }))
            .collect();
        Self { slots }
    }

    pub fn get(&self, level: SpellLevel) -> Option<Slot> {
        self.slots.get(&level).copied()
    }

    /// Levels in ascending order with their slot state
    pub fn levels(&self) -> impl Iterator<Item = (SpellLevel, Slot)> + '_ {
        self.slots.iter().map(|(&level, &slot)| (level, slot))
    }

    /// Spend one slot; a pool at zero stays at zero (no error)
    pub fn use_slot(&mut self, level: SpellLevel) -> bool {
        match self.slots.get_mut(&level) {
            Some(slot) if slot.current > 0 => {
                slot.current -= 1;
                true
            }
            _ => false,
        }
    }

    /// Manual override: set the current count outright, bypassing the max cap
    pub fn adjust(&mut self, level: SpellLevel, value: u32) {
        if let Some(slot) = self.slots.get_mut(&level) {
            slot.current = value;
        }
    }

    /// Restore every level to its maximum
    pub fn rest(&mut self) {
        for slot in self.slots.values_mut() {
            slot.current = slot.max;
        }
    }
}

/// All mutable spell state for one character
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Spellbook {
    pub oracle_known: Vec<KnownEntry>,
    pub wizard_known: Vec<KnownEntry>,
    pub prepared: Vec<PreparedEntry>,
    pub slots: SlotPool,
}

impl Spellbook {
    pub fn known(&self, caster: CasterKind) -> &[KnownEntry] {
        match caster {
            CasterKind::Oracle => &self.oracle_known,
            CasterKind::Wizard => &self.wizard_known,
        }
    }

    fn known_mut(&mut self, caster: CasterKind) -> &mut Vec<KnownEntry> {
        match caster {
            CasterKind::Oracle => &mut self.oracle_known,
            CasterKind::Wizard => &mut self.wizard_known,
        }
    }

    /// Add a spell to a caster's known list
    ///
    /// Duplicates are permitted; they render as repeated entries.
    pub fn add_known(&mut self, caster: CasterKind, name: impl Into<String>) -> EntryId {
        let id = EntryId::new();
        self.known_mut(caster).push(KnownEntry { id, name: name.into() });
        id
    }

    /// Remove a known entry by id; false if no entry carries that id
    pub fn remove_known(&mut self, caster: CasterKind, id: EntryId) -> bool {
        let list = self.known_mut(caster);
        let before = list.len();
        list.retain(|entry| entry.id != id);
        list.len() < before
    }

    /// Prepare a spell by name
    ///
    /// The name is not checked against the catalog: an unmatched entry is
    /// kept but never renders, since rendering requires a catalog lookup.
    pub fn prepare(&mut self, name: impl Into<String>) -> EntryId {
        let id = EntryId::new();
        self.prepared.push(PreparedEntry { id, name: name.into(), used: false });
        id
    }

    /// Flip a prepared spell's used flag; false if the id is unknown
    pub fn toggle_used(&mut self, id: EntryId) -> bool {
        match self.prepared.iter_mut().find(|entry| entry.id == id) {
            Some(entry) => {
                entry.used = !entry.used;
                true
            }
            None => false,
        }
    }

    /// Remove a prepared entry by id; false if the id is unknown
    pub fn remove_prepared(&mut self, id: EntryId) -> bool {
        let before = self.prepared.len();
        self.prepared.retain(|entry| entry.id != id);
        self.prepared.len() < before
    }

    /// Daily reset: every pool back to max, every used flag cleared
    pub fn rest(&mut self) {
        self.slots.rest();
        for entry in &mut self.prepared {
            entry.used = false;
        }
    }

    /// A caster's known spells grouped by that caster's spell level
    ///
    /// Entries missing from the catalog are omitted (not deleted); entries
    /// whose spell has no level for this caster land in the "?" group.
    pub fn grouped_known(
        &self,
        caster: CasterKind,
        catalog: &SpellCatalog,
    ) -> Vec<LevelGroup<&KnownEntry>> {
        let entries = self
            .known(caster)
            .iter()
            .filter_map(|entry| {
                let spell = catalog.find(&entry.name)?;
                let level = match spell.level_for_caster(caster) {
                    Some(level) => GroupLevel::Level(level),
                    None => GroupLevel::Unknown,
                };
                Some((level, entry))
            })
            .collect();
        group_by_level(entries)
    }

    /// Prepared spells grouped by wizard spell level
    pub fn grouped_prepared(&self, catalog: &SpellCatalog) -> Vec<LevelGroup<&PreparedEntry>> {
        let entries = self
            .prepared
            .iter()
            .filter_map(|entry| {
                let spell = catalog.find(&entry.name)?;
                let level = match spell.level_for_caster(CasterKind::Wizard) {
                    Some(level) => GroupLevel::Level(level),
                    None => GroupLevel::Unknown,
                };
                Some((level, entry))
            })
            .collect();
        group_by_level(entries)
    }
}
