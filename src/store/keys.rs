//! Well-known store keys for each persisted entity

/// Spell names the oracle knows, in insertion order
pub const ORACLE_KNOWN: &str = "oracle_known";

/// Spell names in the wizard's spellbook, in insertion order
pub const WIZARD_KNOWN: &str = "wizard_known";

/// Prepared wizard spells with their used flags
pub const PREPARED_SPELLS: &str = "prepared_spells";

/// Current oracle slot counts per spell level
pub const ORACLE_SLOTS: &str = "oracle_slots";

/// Active conditions and status effects (free text)
pub const CONDITIONS: &str = "conditions";

/// Free-form bag of field values and notes, keyed by field identifier
pub const FIELDS: &str = "fields";
