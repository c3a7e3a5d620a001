//! Known-language lookup.
//!
//! The interpreter only needs to ask "what is my proficiency in this
//! language?". That question is the [`LanguageLookup`] trait, so any store
//! (a plain map, a sorted map, something backed by a remote profile service)
//! can stand in for the bundled [`LanguageRegistry`].

use crate::proficiency::ProficiencyRecord;
use std::collections::{BTreeMap, HashMap};

/// Lookup from a language tag to the caller's proficiency record.
pub trait LanguageLookup {
    /// Return the record for `language`, or `None` if it isn't known.
    fn lookup(&self, language: &str) -> Option<ProficiencyRecord>;

    /// Whether `language` is known.
    fn knows(&self, language: &str) -> bool {
        self.lookup(language).is_some()
    }
}

impl LanguageLookup for HashMap<String, ProficiencyRecord> {
    fn lookup(&self, language: &str) -> Option<ProficiencyRecord> {
        self.get(language).cloned()
    }
}

impl LanguageLookup for BTreeMap<String, ProficiencyRecord> {
    fn lookup(&self, language: &str) -> Option<ProficiencyRecord> {
        self.get(language).cloned()
    }
}

impl<L: LanguageLookup + ?Sized> LanguageLookup for &L {
    fn lookup(&self, language: &str) -> Option<ProficiencyRecord> {
        (**self).lookup(language)
    }
}

/// A participant's languages, keyed by tag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageRegistry {
    languages: HashMap<String, ProficiencyRecord>,
}

impl LanguageRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a record, returning the one it replaced (if any).
    pub fn insert(&mut self, record: ProficiencyRecord) -> Option<ProficiencyRecord> {
        self.languages.insert(record.language.clone(), record)
    }

    /// Remove a language.
    pub fn remove(&mut self, language: &str) -> Option<ProficiencyRecord> {
        self.languages.remove(language)
    }

    /// Borrow the record for `language`.
    pub fn get(&self, language: &str) -> Option<&ProficiencyRecord> {
        self.languages.get(language)
    }

    pub fn contains(&self, language: &str) -> bool {
        self.languages.contains_key(language)
    }

    pub fn len(&self) -> usize {
        self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }

    /// Iterate over records sorted by language tag.
    pub fn iter(&self) -> impl Iterator<Item = &ProficiencyRecord> {
        let mut records: Vec<_> = self.languages.values().collect();
        records.sort_by(|a, b| a.language.cmp(&b.language));
        records.into_iter()
    }
}

impl LanguageLookup for LanguageRegistry {
    fn lookup(&self, language: &str) -> Option<ProficiencyRecord> {
        self.get(language).cloned()
    }
}

impl FromIterator<ProficiencyRecord> for LanguageRegistry {
    fn from_iter<I: IntoIterator<Item = ProficiencyRecord>>(iter: I) -> Self {
        let mut registry = Self::new();
        for record in iter {
            registry.insert(record);
        }
        registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proficiency::{make_proficiency_record, Skill};

    fn record(language: &str, skill: u32) -> ProficiencyRecord {
        make_proficiency_record(Some(language), Some(skill))
    }

    #[test]
    fn test_insert_and_lookup() {
        let mut registry = LanguageRegistry::new();
        assert!(registry.is_empty());

        assert!(registry.insert(record("english", 80)).is_none());
        assert!(registry.knows("english"));
        assert!(!registry.knows("English"));
        assert_eq!(registry.lookup("english").unwrap().skill.get(), 80);
    }

    #[test]
    fn test_insert_replaces() {
        let mut registry = LanguageRegistry::new();
        registry.insert(record("english", 80));

        let previous = registry.insert(record("english", 95)).unwrap();
        assert_eq!(previous.skill.get(), 80);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("english").unwrap().skill.get(), 95);
    }

    #[test]
    fn test_remove() {
        let mut registry: LanguageRegistry = [record("english", 80)].into_iter().collect();
        assert!(registry.remove("english").is_some());
        assert!(!registry.contains("english"));
    }

    #[test]
    fn test_iter_sorted() {
        let registry: LanguageRegistry = [
            record("romanian", 70),
            record("chinese", 80),
            record("english", 90),
        ]
        .into_iter()
        .collect();

        let tags: Vec<_> = registry.iter().map(|r| r.language.as_str()).collect();
        assert_eq!(tags, ["chinese", "english", "romanian"]);
    }

    #[test]
    fn test_plain_maps_are_lookups() {
        let mut hash = HashMap::new();
        hash.insert("greek".to_string(), record("greek", 30));
        assert_eq!(hash.lookup("greek").unwrap().skill.get(), 30);

        let mut btree = BTreeMap::new();
        btree.insert("greek".to_string(), record("greek", 0));
        assert_eq!(btree.lookup("greek").unwrap().skill, Skill::NONE);
        assert!(btree.lookup("latin").is_none());
    }
}
