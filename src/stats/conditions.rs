//! Condition and status-effect tracking
//!
//! Entries are free text. Ones that carry an embedded remaining-duration
//! token like "(3 rounds)" tick down by one round per call and drop off the
//! list when they expire; everything else is left alone.

use serde::{Deserialize, Serialize};

/// Free-text condition list with duration ticking
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionList {
    entries: Vec<String>,
}

impl ConditionList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: Vec<String>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn add(&mut self, entry: impl Into<String>) {
        self.entries.push(entry.into());
    }

    pub fn remove(&mut self, index: usize) {
        if index < self.entries.len() {
            self.entries.remove(index);
        }
    }

    /// Advance every timed condition by exactly one round
    ///
    /// An entry at "(1 round)" is removed entirely; entries without a
    /// duration token are untouched. Each call advances one round, no more.
    pub fn advance_round(&mut self) {
        let entries = std::mem::take(&mut self.entries);
        self.entries = entries
            .into_iter()
            .filter_map(|entry| tick_entry(&entry))
            .collect();
    }
}

/// Tick one entry down a round; `None` means the condition expired
fn tick_entry(entry: &str) -> Option<String> {
    let (start, end, rounds) = match find_duration_token(entry) {
        Some(token) => token,
        None => return Some(entry.to_string()),
    };

    let remaining = rounds.saturating_sub(1);
    if remaining == 0 {
        return None;
    }

    let unit = if remaining == 1 { "round" } else { "rounds" };
    Some(format!(
        "{}({} {}){}",
        &entry[..start],
        remaining,
        unit,
        &entry[end..]
    ))
}

/// Locate a "(N round)" / "(N rounds)" token
///
/// Returns the byte span of the parenthesized token and the round count.
fn find_duration_token(entry: &str) -> Option<(usize, usize, u32)> {
    for (open, _) in entry.match_indices('(') {
        let rest = &entry[open + 1..];

        let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
        if digits.is_empty() {
            continue;
        }

        let after_digits = &rest[digits.len()..];
        let tail = after_digits
            .strip_prefix(" rounds)")
            .or_else(|| after_digits.strip_prefix(" round)"));

        if let Some(tail) = tail {
            let end = entry.len() - tail.len();
            if let Ok(rounds) = digits.parse() {
                return Some((open, end, rounds));
            }
        }
    }
    None
}
