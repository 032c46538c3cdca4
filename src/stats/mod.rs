//! Derived-stat engine
//!
//! Ability modifiers feed skills, initiative, armor class, saves, and combat
//! maneuvers. All of it is synchronous arithmetic over marshaled field
//! values; the UI layer is a thin adapter on either side.

pub mod conditions;
pub mod display;
pub mod engine;

pub use conditions::ConditionList;
pub use display::signed;
pub use engine::{
    coerce_int, modifier, recompute, AbilityModifiers, AbilityScore, AbilityScores, AcTerm,
    ArmorClass, CombatProfile, DerivedStats, SaveRow, SheetInput, SkillRow,
};
