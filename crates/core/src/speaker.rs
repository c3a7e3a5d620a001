//! A chat participant: a set of known languages plus a default language.
//!
//! # Language Resolution
//!
//! When sending, the language actually used is picked in this order:
//! 1. the speaker's record for the requested language
//! 2. the requested language as a bare tag (composed at skill 0)
//! 3. the speaker's record for their default language
//! 4. the default language as a bare tag (composed at skill 0)
//!
//! A speaker created with no languages knows English at full proficiency,
//! whatever their default language is.

use crate::composer::{compose_with, LanguageChoice};
use crate::distortion::DistortionEngine;
use crate::interpreter::interpret_with;
use crate::message::{Message, DEFAULT_LANGUAGE};
use crate::proficiency::ProficiencyRecord;
use crate::registry::LanguageRegistry;
use rand::Rng;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Speaker {
    languages: LanguageRegistry,
    default_language: String,
}

impl Speaker {
    /// Create a speaker from their proficiency records.
    pub fn new(
        records: impl IntoIterator<Item = ProficiencyRecord>,
        default_language: Option<&str>,
    ) -> Self {
        let mut languages: LanguageRegistry = records.into_iter().collect();
        if languages.is_empty() {
            languages.insert(ProficiencyRecord::default());
        }

        let default_language = match default_language {
            Some(language) if !language.is_empty() => language.to_string(),
            _ => DEFAULT_LANGUAGE.to_string(),
        };

        Self {
            languages,
            default_language,
        }
    }

    pub fn languages(&self) -> &LanguageRegistry {
        &self.languages
    }

    pub fn default_language(&self) -> &str {
        &self.default_language
    }

    /// Work out what to compose with for a requested language.
    pub fn resolve_language(&self, language: Option<&str>) -> LanguageChoice {
        let requested = language.filter(|l| !l.is_empty());

        if let Some(record) = requested.and_then(|l| self.languages.get(l)) {
            return LanguageChoice::Record(record.clone());
        }
        if let Some(tag) = requested {
            return LanguageChoice::Tag(tag.to_string());
        }
        match self.languages.get(&self.default_language) {
            Some(record) => LanguageChoice::Record(record.clone()),
            None => LanguageChoice::Tag(self.default_language.clone()),
        }
    }

    /// Say something, optionally in a specific language.
    ///
    /// Returns `None` for empty content.
    pub fn send<R: Rng>(
        &self,
        engine: &DistortionEngine,
        rng: &mut R,
        content: &str,
        language: Option<&str>,
    ) -> Option<Message> {
        if content.is_empty() {
            return None;
        }
        compose_with(engine, rng, content, self.resolve_language(language))
    }

    /// Hear a message with this speaker's proficiencies.
    pub fn receive<R: Rng>(
        &self,
        engine: &DistortionEngine,
        rng: &mut R,
        message: Message,
    ) -> Option<Message> {
        interpret_with(engine, rng, message, &self.languages)
    }
}

impl Default for Speaker {
    fn default() -> Self {
        Self::new(std::iter::empty(), None)
    }
}
