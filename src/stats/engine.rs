//! Derived-stat recomputation
//!
//! Pure functions over an explicit input struct: the UI layer marshals field
//! values in, totals come back out. Nothing here reads a display surface or
//! fails - unparseable input has already been coerced to zero.

use serde::{Deserialize, Serialize};

use crate::core::types::{Ability, SaveKind};

/// Flat +3 bonus for class skills with at least one rank invested
const CLASS_SKILL_BONUS: i32 = 3;

/// Silent numeric coercion: any field that fails to parse is zero
///
/// This is the documented recovery policy for free-text numeric fields, not
/// an error condition.
pub fn coerce_int(raw: &str) -> i32 {
    raw.trim().parse().unwrap_or(0)
}

/// Ability modifier from base score plus temporary adjustment
pub fn modifier(base: i32, temp: i32) -> i32 {
    // div_euclid floors for negative scores (7 -> -2, not -1)
    (base + temp - 10).div_euclid(2)
}

/// One ability's base score and temporary adjustment
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct AbilityScore {
    pub base: i32,
    pub temp: i32,
}

/// Base and temporary values for all six abilities
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AbilityScores {
    scores: [AbilityScore; 6],
}

impl AbilityScores {
    pub fn get(&self, ability: Ability) -> AbilityScore {
        self.scores[ability.index()]
    }

    pub fn set(&mut self, ability: Ability, base: i32, temp: i32) {
        self.scores[ability.index()] = AbilityScore { base, temp };
    }
}

/// Computed modifiers for all six abilities
///
/// Built whole before being handed out, so every read during one recompute
/// sees a single consistent table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityModifiers {
    mods: [i32; 6],
}

impl AbilityModifiers {
    /// Compute the full modifier table from current scores
    pub fn from_scores(scores: &AbilityScores) -> Self {
        let mut mods = [0; 6];
        for ability in Ability::ALL {
            let score = scores.get(ability);
            mods[ability.index()] = modifier(score.base, score.temp);
        }
        Self { mods }
    }

    pub fn get(&self, ability: Ability) -> i32 {
        self.mods[ability.index()]
    }
}

/// One skill line on the sheet
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillRow {
    pub name: String,
    pub ability: Ability,
    pub ranks: i32,
    pub misc: i32,
    pub is_class_skill: bool,
}

impl SkillRow {
    /// Skill total against the current modifier table
    ///
    /// The class-skill bonus applies only once ranks are invested.
    pub fn total(&self, mods: &AbilityModifiers) -> i32 {
        let class_bonus = if self.is_class_skill && self.ranks > 0 {
            CLASS_SKILL_BONUS
        } else {
            0
        };
        mods.get(self.ability) + self.ranks + self.misc + class_bonus
    }
}

/// Combat-relevant field values: AC contributions, initiative, base attack
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct CombatProfile {
    pub initiative_misc: i32,
    pub armor: i32,
    pub shield: i32,
    pub dodge: i32,
    pub size: i32,
    pub natural: i32,
    pub deflection: i32,
    pub misc: i32,
    pub bab: i32,
}

/// One saving throw line
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SaveRow {
    pub kind: SaveKind,
    pub base: i32,
    pub magic: i32,
    pub misc: i32,
    pub temp: i32,
}

impl SaveRow {
    pub fn total(&self, mods: &AbilityModifiers) -> i32 {
        self.base + mods.get(self.kind.governing_ability()) + self.magic + self.misc + self.temp
    }
}

/// Everything the engine reads: the marshaled field values
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SheetInput {
    pub abilities: AbilityScores,
    pub skills: Vec<SkillRow>,
    pub combat: CombatProfile,
    pub saves: Vec<SaveRow>,
}

/// One AC contribution, kept for sign-annotated display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AcTerm {
    pub name: &'static str,
    pub value: i32,
}

/// The three armor class variants plus their contributing terms
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArmorClass {
    pub total: i32,
    pub touch: i32,
    pub flat_footed: i32,
    pub terms: Vec<AcTerm>,
}

impl ArmorClass {
    /// Compute all three variants from the profile and the Dex modifier
    pub fn compute(combat: &CombatProfile, dex_mod: i32) -> Self {
        let total = 10
            + combat.armor
            + combat.shield
            + dex_mod
            + combat.dodge
            + combat.size
            + combat.natural
            + combat.deflection
            + combat.misc;
        // Touch ignores armor, shield, and natural armor
        let touch =
            10 + dex_mod + combat.dodge + combat.size + combat.deflection + combat.misc;
        // Flat-footed loses Dex and dodge
        let flat_footed = 10
            + combat.armor
            + combat.shield
            + combat.size
            + combat.natural
            + combat.deflection
            + combat.misc;

        let terms = vec![
            AcTerm { name: "Armor", value: combat.armor },
            AcTerm { name: "Shield", value: combat.shield },
            AcTerm { name: "Dex", value: dex_mod },
            AcTerm { name: "Dodge", value: combat.dodge },
            AcTerm { name: "Size", value: combat.size },
            AcTerm { name: "Natural", value: combat.natural },
            AcTerm { name: "Deflection", value: combat.deflection },
            AcTerm { name: "Misc", value: combat.misc },
        ];

        Self { total, touch, flat_footed, terms }
    }
}

/// Computed totals written back to the display layer
#[derive(Debug, Clone, Serialize)]
pub struct DerivedStats {
    pub modifiers: AbilityModifiers,
    pub skill_totals: Vec<(String, i32)>,
    pub initiative: i32,
    pub armor_class: ArmorClass,
    pub save_totals: Vec<(SaveKind, i32)>,
    pub cmb: i32,
    pub cmd: i32,
}

/// Recompute every derived value from the current field values
///
/// Invoked on every field change. Order matters: the modifier table is built
/// first and every later step reads it; the size/dodge/deflection terms are
/// shared between AC and CMB/CMD and read once from the profile.
pub fn recompute(input: &SheetInput) -> DerivedStats {
    // 1. Modifier table, replaced atomically
    let modifiers = AbilityModifiers::from_scores(&input.abilities);

    // 2. Skill totals
    let skill_totals = input
        .skills
        .iter()
        .map(|skill| (skill.name.clone(), skill.total(&modifiers)))
        .collect();

    // 3. Initiative
    let dex_mod = modifiers.get(Ability::Dex);
    let initiative = dex_mod + input.combat.initiative_misc;

    // 4. Armor class variants
    let armor_class = ArmorClass::compute(&input.combat, dex_mod);

    // 5. Saves
    let save_totals = input
        .saves
        .iter()
        .map(|save| (save.kind, save.total(&modifiers)))
        .collect();

    // 6. Combat maneuvers, reusing the modifiers and shared AC terms
    let str_mod = modifiers.get(Ability::Str);
    let combat = &input.combat;
    let cmb = combat.bab + str_mod + combat.size;
    let cmd = 10
        + combat.bab
        + str_mod
        + dex_mod
        + combat.dodge
        + combat.deflection
        + combat.size
        + combat.misc;

    DerivedStats {
        modifiers,
        skill_totals,
        initiative,
        armor_class,
        save_totals,
        cmb,
        cmd,
    }
}
