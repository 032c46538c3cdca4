//! Spell catalog, browser filtering, and per-character spell state
//!
//! The catalog is immutable reference data loaded once at startup. Known
//! lists, prepared spells, and slot pools are mutable character state backed
//! by the persisted store.

pub mod catalog;
pub mod filter;
pub mod grouping;
pub mod manager;

pub use catalog::{Spell, SpellCatalog};
pub use filter::SpellFilter;
pub use grouping::{group_by_level, GroupLevel, LevelGroup};
pub use manager::{KnownEntry, PreparedEntry, Slot, SlotPool, Spellbook};
