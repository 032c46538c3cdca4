//! Level grouping for known and prepared spell lists
//!
//! Entries are grouped by their resolved level for the relevant caster
//! class. Entries whose spell lacks a level for that class fall into a
//! sentinel "unknown" group that sorts after all numeric levels.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::core::types::SpellLevel;

/// A group's resolved level, or the "?" sentinel
///
/// Variant order gives the sort: numeric levels ascend, unknown last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum GroupLevel {
    Level(SpellLevel),
    Unknown,
}

impl GroupLevel {
    /// Header label: "1", "2", ... or "?"
    pub fn label(&self) -> String {
        match self {
            GroupLevel::Level(level) => level.to_string(),
            GroupLevel::Unknown => "?".to_string(),
        }
    }
}

/// One rendered group: a level header and its entries in list order
#[derive(Debug, Clone)]
pub struct LevelGroup<T> {
    pub level: GroupLevel,
    pub entries: Vec<T>,
}

/// Group pre-resolved entries, ascending by level with "?" last
///
/// Entry order within a group follows the input order, so duplicates render
/// as repeated rows rather than collapsing.
pub fn group_by_level<T>(entries: Vec<(GroupLevel, T)>) -> Vec<LevelGroup<T>> {
    let mut groups: BTreeMap<GroupLevel, Vec<T>> = BTreeMap::new();
    for (level, entry) in entries {
        groups.entry(level).or_default().push(entry);
    }
    groups
        .into_iter()
        .map(|(level, entries)| LevelGroup { level, entries })
        .collect()
}
