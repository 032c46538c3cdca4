//! Spell browser filtering
//!
//! All set filters must match (logical AND). With no filter set at all the
//! result is deliberately empty: the browser never renders the whole catalog
//! unprompted.

use crate::core::types::SpellLevel;
use crate::spells::catalog::{Spell, SpellCatalog};

/// Filter criteria for the spell browser
#[derive(Debug, Clone, Default)]
pub struct SpellFilter {
    /// Restrict to spells castable by this class
    pub class: Option<String>,
    /// Restrict to this spell level
    pub level: Option<SpellLevel>,
    /// Case-insensitive substring match on the school
    pub school: Option<String>,
    /// Case-insensitive substring match on the name
    pub search: Option<String>,
}

impl SpellFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn with_level(mut self, level: SpellLevel) -> Self {
        self.level = Some(level);
        self
    }

    pub fn with_school(mut self, school: impl Into<String>) -> Self {
        self.school = Some(school.into());
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// True when no criterion is set
    pub fn is_empty(&self) -> bool {
        self.class.is_none()
            && self.level.is_none()
            && self.school.is_none()
            && self.search.is_none()
    }

    /// Whether one spell passes every set criterion
    pub fn matches(&self, spell: &Spell) -> bool {
        if let Some(class) = &self.class {
            if spell.level_for(class).is_none() {
                return false;
            }
        }

        if let Some(level) = self.level {
            // With a class filter the level is class-specific; without one,
            // any class casting at that level matches.
            let matches_level = match &self.class {
                Some(class) => spell.level_for(class) == Some(level),
                None => spell.level.values().any(|&l| l == level),
            };
            if !matches_level {
                return false;
            }
        }

        if let Some(school) = &self.school {
            if !contains_ignore_case(&spell.school, school) {
                return false;
            }
        }

        if let Some(search) = &self.search {
            if !contains_ignore_case(&spell.name, search) {
                return false;
            }
        }

        true
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

impl SpellCatalog {
    /// Run the browser filter over the catalog
    ///
    /// An empty filter returns an empty sequence, not the full catalog.
    pub fn filter(&self, filter: &SpellFilter) -> Vec<&Spell> {
        if filter.is_empty() {
            return Vec::new();
        }

        self.spells()
            .iter()
            .filter(|spell| filter.matches(spell))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spells::catalog::test_support::sample_catalog;

    #[test]
    fn test_empty_filter_returns_nothing() {
        let catalog = sample_catalog();
        assert!(catalog.filter(&SpellFilter::new()).is_empty());
    }

    #[test]
    fn test_class_filter() {
        let catalog = sample_catalog();
        let results = catalog.filter(&SpellFilter::new().with_class("Oracle"));
        let names: Vec<_> = results.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Bless", "Cure Light Wounds"]);
    }

    #[test]
    fn test_level_filter_with_class_is_class_specific() {
        let catalog = sample_catalog();
        let filter = SpellFilter::new().with_class("Wizard").with_level(3);
        let results = catalog.filter(&filter);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "Fireball");
    }

    #[test]
    fn test_level_filter_without_class_matches_any_class() {
        let catalog = sample_catalog();
        let results = catalog.filter(&SpellFilter::new().with_level(1));
        let names: Vec<_> = results.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Bless", "Mage Armor", "Cure Light Wounds"]);
    }

    #[test]
    fn test_school_filter_is_substring_case_insensitive() {
        let catalog = sample_catalog();
        let results = catalog.filter(&SpellFilter::new().with_school("conjuration"));
        let names: Vec<_> = results.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Mage Armor", "Cure Light Wounds"]);
    }

    #[test]
    fn test_search_filter_is_substring_case_insensitive() {
        let catalog = sample_catalog();
        let results = catalog.filter(&SpellFilter::new().with_search("FIRE"));
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "Fireball");
    }

    #[test]
    fn test_filters_combine_with_and() {
        let catalog = sample_catalog();
        let filter = SpellFilter::new()
            .with_class("Oracle")
            .with_school("Enchantment");
        let results = catalog.filter(&filter);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "Bless");

        // Same school, wrong class
        let filter = SpellFilter::new()
            .with_class("Wizard")
            .with_school("Enchantment");
        assert!(catalog.filter(&filter).is_empty());
    }
}
