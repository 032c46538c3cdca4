//! Top-level sheet controller
//!
//! Owns the persisted store and all mutable character state, so there is no
//! hidden module-level state and every write-through happens in one place.
//! The UI event layer calls in; each mutation persists the affected entity
//! immediately (no batching, no debounce).

use ahash::AHashMap;

use crate::core::config::SheetConfig;
use crate::core::error::Result;
use crate::core::types::{CasterKind, EntryId, SpellLevel};
use crate::spells::catalog::SpellCatalog;
use crate::spells::grouping::LevelGroup;
use crate::spells::manager::{KnownEntry, PreparedEntry, SlotPool, Spellbook};
use crate::stats::conditions::ConditionList;
use crate::stats::engine::coerce_int;
use crate::store::{keys, load_or_default, persist, KeyValueStore};

/// All persisted mutable state for one character
#[derive(Debug, Clone, Default)]
pub struct SheetState {
    pub spellbook: Spellbook,
    pub conditions: ConditionList,
    /// Free-form field values and notes, keyed by field identifier
    pub fields: AHashMap<String, serde_json::Value>,
}

/// The character sheet: store, config, catalog, and state under one owner
pub struct Sheet<S: KeyValueStore> {
    store: S,
    config: SheetConfig,
    catalog: SpellCatalog,
    state: SheetState,
}

impl<S: KeyValueStore> Sheet<S> {
    /// Hydrate the sheet from the store
    ///
    /// Every key falls back to its documented default when absent or
    /// unparseable; a fresh store yields a fresh character.
    pub fn load(store: S, config: SheetConfig) -> Self {
        let spellbook = Spellbook {
            oracle_known: load_or_default(&store, keys::ORACLE_KNOWN, Vec::new()),
            wizard_known: load_or_default(&store, keys::WIZARD_KNOWN, Vec::new()),
            prepared: load_or_default(&store, keys::PREPARED_SPELLS, Vec::new()),
            slots: load_or_default(&store, keys::ORACLE_SLOTS, SlotPool::from_max(&config.slot_max)),
        };
        let conditions = load_or_default(&store, keys::CONDITIONS, ConditionList::new());
        let fields = load_or_default(&store, keys::FIELDS, AHashMap::new());

        Self {
            store,
            config,
            catalog: SpellCatalog::new(),
            state: SheetState { spellbook, conditions, fields },
        }
    }

    /// Attach the catalog once it has loaded
    pub fn set_catalog(&mut self, catalog: SpellCatalog) {
        self.catalog = catalog;
    }

    pub fn catalog(&self) -> &SpellCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &SheetConfig {
        &self.config
    }

    pub fn state(&self) -> &SheetState {
        &self.state
    }

    // --- Known spells ---

    pub fn add_known(&mut self, caster: CasterKind, name: impl Into<String>) -> Result<EntryId> {
        let id = self.state.spellbook.add_known(caster, name);
        self.persist_known(caster)?;
        Ok(id)
    }

    pub fn remove_known(&mut self, caster: CasterKind, id: EntryId) -> Result<bool> {
        let removed = self.state.spellbook.remove_known(caster, id);
        if removed {
            self.persist_known(caster)?;
        }
        Ok(removed)
    }

    pub fn grouped_known(&self, caster: CasterKind) -> Vec<LevelGroup<&KnownEntry>> {
        self.state.spellbook.grouped_known(caster, &self.catalog)
    }

    // --- Prepared spells ---

    pub fn prepare(&mut self, name: impl Into<String>) -> Result<EntryId> {
        let id = self.state.spellbook.prepare(name);
        self.persist_prepared()?;
        Ok(id)
    }

    pub fn toggle_used(&mut self, id: EntryId) -> Result<bool> {
        let toggled = self.state.spellbook.toggle_used(id);
        if toggled {
            self.persist_prepared()?;
        }
        Ok(toggled)
    }

    pub fn remove_prepared(&mut self, id: EntryId) -> Result<bool> {
        let removed = self.state.spellbook.remove_prepared(id);
        if removed {
            self.persist_prepared()?;
        }
        Ok(removed)
    }

    pub fn grouped_prepared(&self) -> Vec<LevelGroup<&PreparedEntry>> {
        self.state.spellbook.grouped_prepared(&self.catalog)
    }

    // --- Slots ---

    pub fn use_slot(&mut self, level: SpellLevel) -> Result<bool> {
        let used = self.state.spellbook.slots.use_slot(level);
        if used {
            self.persist_slots()?;
        }
        Ok(used)
    }

    pub fn adjust_slot(&mut self, level: SpellLevel, value: u32) -> Result<()> {
        self.state.spellbook.slots.adjust(level, value);
        self.persist_slots()
    }

    /// Daily reset: slots to max, used flags cleared
    ///
    /// State is fully updated before anything is persisted, and both keys
    /// are written before returning.
    pub fn rest(&mut self) -> Result<()> {
        self.state.spellbook.rest();
        self.persist_slots()?;
        self.persist_prepared()?;
        Ok(())
    }

    // --- Conditions ---

    pub fn add_condition(&mut self, entry: impl Into<String>) -> Result<()> {
        self.state.conditions.add(entry);
        self.persist_conditions()
    }

    pub fn remove_condition(&mut self, index: usize) -> Result<()> {
        self.state.conditions.remove(index);
        self.persist_conditions()
    }

    /// Tick every timed condition down one round
    pub fn advance_round(&mut self) -> Result<()> {
        self.state.conditions.advance_round();
        self.persist_conditions()
    }

    // --- Field bag ---

    /// Store a field value or free-text note by its field identifier
    pub fn set_field(&mut self, field_id: impl Into<String>, value: serde_json::Value) -> Result<()> {
        self.state.fields.insert(field_id.into(), value);
        persist(&mut self.store, keys::FIELDS, &self.state.fields)
    }

    pub fn field(&self, field_id: &str) -> Option<&serde_json::Value> {
        self.state.fields.get(field_id)
    }

    /// A field's value as an integer, under the silent coercion policy
    ///
    /// Absent fields, non-numeric text, and odd JSON shapes all read as 0.
    pub fn field_int(&self, field_id: &str) -> i32 {
        match self.state.fields.get(field_id) {
            Some(serde_json::Value::Number(n)) => {
                n.as_i64().map(|v| v as i32).unwrap_or(0)
            }
            Some(serde_json::Value::String(s)) => coerce_int(s),
            _ => 0,
        }
    }

    // --- Persistence ---

    fn persist_known(&mut self, caster: CasterKind) -> Result<()> {
        match caster {
            CasterKind::Oracle => {
                persist(&mut self.store, keys::ORACLE_KNOWN, &self.state.spellbook.oracle_known)
            }
            CasterKind::Wizard => {
                persist(&mut self.store, keys::WIZARD_KNOWN, &self.state.spellbook.wizard_known)
            }
        }
    }

    fn persist_prepared(&mut self) -> Result<()> {
        persist(&mut self.store, keys::PREPARED_SPELLS, &self.state.spellbook.prepared)
    }

    fn persist_slots(&mut self) -> Result<()> {
        persist(&mut self.store, keys::ORACLE_SLOTS, &self.state.spellbook.slots)
    }

    fn persist_conditions(&mut self) -> Result<()> {
        persist(&mut self.store, keys::CONDITIONS, &self.state.conditions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn fresh_sheet() -> Sheet<MemoryStore> {
        Sheet::load(MemoryStore::new(), SheetConfig::default())
    }

    #[test]
    fn test_fresh_sheet_has_defaults() {
        let sheet = fresh_sheet();
        assert!(sheet.state().spellbook.oracle_known.is_empty());
        assert_eq!(sheet.state().spellbook.slots.get(1).unwrap().current, 5);
        assert!(sheet.state().conditions.entries().is_empty());
    }

    #[test]
    fn test_field_int_coercion() {
        let mut sheet = fresh_sheet();
        sheet.set_field("str_base", serde_json::json!(14)).unwrap();
        sheet.set_field("dex_base", serde_json::json!("12")).unwrap();
        sheet.set_field("notes", serde_json::json!("not a number")).unwrap();

        assert_eq!(sheet.field_int("str_base"), 14);
        assert_eq!(sheet.field_int("dex_base"), 12);
        assert_eq!(sheet.field_int("notes"), 0);
        assert_eq!(sheet.field_int("absent"), 0);
    }

    #[test]
    fn test_mutations_survive_reload() {
        let mut sheet = fresh_sheet();
        sheet.add_known(CasterKind::Oracle, "Bless").unwrap();
        sheet.use_slot(1).unwrap();
        sheet.add_condition("Shaken (2 rounds)").unwrap();

        // Same backing store, fresh controller
        let Sheet { store, .. } = sheet;
        let reloaded = Sheet::load(store, SheetConfig::default());

        assert_eq!(reloaded.state().spellbook.oracle_known.len(), 1);
        assert_eq!(reloaded.state().spellbook.slots.get(1).unwrap().current, 4);
        assert_eq!(reloaded.state().conditions.entries(), ["Shaken (2 rounds)"]);
    }
}
