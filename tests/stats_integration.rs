//! Integration tests for the derived-stat engine

use loresheet::core::types::{Ability, SaveKind};
use loresheet::stats::{
    modifier, recompute, signed, AbilityScores, CombatProfile, ConditionList, SaveRow, SheetInput,
    SkillRow,
};

fn scenario_input() -> SheetInput {
    let mut abilities = AbilityScores::default();
    abilities.set(Ability::Str, 14, 0); // +2
    abilities.set(Ability::Dex, 16, 0); // +3
    abilities.set(Ability::Con, 12, 0); // +1
    abilities.set(Ability::Int, 10, 0); // +0
    abilities.set(Ability::Wis, 13, 0); // +1
    abilities.set(Ability::Cha, 8, 0); // -1

    SheetInput {
        abilities,
        skills: vec![
            SkillRow {
                name: "Acrobatics".into(),
                ability: Ability::Dex,
                ranks: 4,
                misc: 1,
                is_class_skill: true,
            },
            SkillRow {
                name: "Bluff".into(),
                ability: Ability::Cha,
                ranks: 0,
                misc: 0,
                is_class_skill: true,
            },
        ],
        combat: CombatProfile {
            initiative_misc: 0,
            armor: 5,
            shield: 2,
            dodge: 1,
            size: 0,
            natural: 1,
            deflection: 1,
            misc: 0,
            bab: 6,
        },
        saves: vec![
            SaveRow { kind: SaveKind::Fortitude, base: 5, magic: 1, misc: 0, temp: 0 },
            SaveRow { kind: SaveKind::Reflex, base: 2, magic: 0, misc: 0, temp: 1 },
            SaveRow { kind: SaveKind::Will, base: 4, magic: 0, misc: 1, temp: 0 },
        ],
    }
}

/// Test 1: the worked AC scenario produces all three variants
#[test]
fn test_armor_class_scenario() {
    let stats = recompute(&scenario_input());
    // 10+5+2+3+1+0+1+1+0
    assert_eq!(stats.armor_class.total, 23);
    // 10+3+1+0+1+0
    assert_eq!(stats.armor_class.touch, 15);
    // 10+5+2+0+1+1+0
    assert_eq!(stats.armor_class.flat_footed, 19);
}

/// Test 2: the worked CMB/CMD scenario
#[test]
fn test_combat_maneuver_scenario() {
    let stats = recompute(&scenario_input());
    // bab 6 + str 2 + size 0
    assert_eq!(stats.cmb, 8);
    // 10 + 6 + 2 + 3 + 1 + 1 + 0 + 0
    assert_eq!(stats.cmd, 23);
}

/// Test 3: skill totals include the class-skill bonus only with ranks
#[test]
fn test_skill_totals() {
    let stats = recompute(&scenario_input());
    // Acrobatics: dex 3 + ranks 4 + misc 1 + class 3
    assert_eq!(stats.skill_totals[0], ("Acrobatics".to_string(), 11));
    // Bluff: class skill with zero ranks gets no bonus
    assert_eq!(stats.skill_totals[1], ("Bluff".to_string(), -1));
}

/// Test 4: saves resolve their governing ability by kind
#[test]
fn test_save_totals() {
    let stats = recompute(&scenario_input());
    // Fort: 5 + con 1 + 1; Ref: 2 + dex 3 + 1; Will: 4 + wis 1 + 1
    assert_eq!(stats.save_totals[0], (SaveKind::Fortitude, 7));
    assert_eq!(stats.save_totals[1], (SaveKind::Reflex, 6));
    assert_eq!(stats.save_totals[2], (SaveKind::Will, 6));
}

/// Test 5: AC terms render sign-annotated
#[test]
fn test_ac_term_display() {
    let stats = recompute(&scenario_input());
    let lines = stats.ac_term_lines();
    assert!(lines.contains(&("Armor", "+5".to_string())));
    assert!(lines.contains(&("Size", "+0".to_string())));
    assert_eq!(signed(-2), "-2");
}

/// Test 6: condition durations tick down one round per call
#[test]
fn test_advance_round_behavior() {
    let mut conditions = ConditionList::from_entries(vec![
        "Shaken (1 round)".into(),
        "Stunned (3 rounds)".into(),
        "Blind".into(),
    ]);

    conditions.advance_round();
    assert_eq!(conditions.entries(), ["Stunned (2 rounds)", "Blind"]);

    conditions.advance_round();
    assert_eq!(conditions.entries(), ["Stunned (1 round)", "Blind"]);
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// modifier(base, temp) = floor((base + temp - 10) / 2) for all inputs
        #[test]
        fn modifier_matches_floor_formula(base in -100i32..100, temp in -100i32..100) {
            let expected = ((base + temp - 10) as f64 / 2.0).floor() as i32;
            prop_assert_eq!(modifier(base, temp), expected);
        }

        /// Skill totals depend only on the final field values
        #[test]
        fn skill_total_matches_formula(ranks in 0i32..20, misc in -5i32..10, class_skill: bool) {
            let mut abilities = AbilityScores::default();
            abilities.set(Ability::Dex, 14, 0); // +2
            let input = SheetInput {
                abilities,
                skills: vec![SkillRow {
                    name: "Stealth".into(),
                    ability: Ability::Dex,
                    ranks,
                    misc,
                    is_class_skill: class_skill,
                }],
                ..Default::default()
            };

            let bonus = if class_skill && ranks > 0 { 3 } else { 0 };
            let stats = recompute(&input);
            prop_assert_eq!(stats.skill_totals[0].1, 2 + ranks + misc + bonus);
        }
    }
}
