//! Sign-annotated rendering for sheet bonuses
//!
//! A positive or zero value renders with a leading "+"; negative values keep
//! their native "-". This matches how bonuses read on a paper sheet.

use crate::stats::engine::{AcTerm, DerivedStats};

/// Render a bonus the way it appears on the sheet: "+3", "+0", "-2"
pub fn signed(value: i32) -> String {
    if value >= 0 {
        format!("+{}", value)
    } else {
        value.to_string()
    }
}

impl AcTerm {
    /// The term's displayed, sign-annotated value
    pub fn display(&self) -> String {
        signed(self.value)
    }
}

impl DerivedStats {
    /// AC contribution lines ready for display, e.g. ("Armor", "+5")
    pub fn ac_term_lines(&self) -> Vec<(&'static str, String)> {
        self.armor_class
            .terms
            .iter()
            .map(|term| (term.name, term.display()))
            .collect()
    }
}
