//! Proficiency records: how well a participant knows one language.
//!
//! # Defaults
//!
//! A record built without a skill is fully proficient (100), but an explicit
//! zero stays zero. Composing from a bare language tag is a separate path
//! (see [`crate::composer::LanguageChoice`]) and uses skill 0 instead; the
//! two defaults are intentionally different.

use crate::config::MAX_SKILL;
use crate::error::ProficiencyError;
use crate::message::DEFAULT_LANGUAGE;
use std::fmt;
use std::str::FromStr;
use tracing::warn;

/// A proficiency value guaranteed to lie in [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Skill(u8);

impl Skill {
    /// No comprehension at all.
    pub const NONE: Skill = Skill(0);

    /// Perfect comprehension.
    pub const FULL: Skill = Skill(100);

    /// Create a skill, rejecting values above 100.
    pub fn new(value: u32) -> Result<Self, ProficiencyError> {
        if value > MAX_SKILL {
            return Err(ProficiencyError::SkillOutOfRange {
                skill: i64::from(value),
            });
        }
        Ok(Skill(value as u8))
    }

    /// Create a skill, clamping into [0, 100].
    pub fn saturating(value: i64) -> Self {
        Skill(value.clamp(0, i64::from(MAX_SKILL)) as u8)
    }

    /// Raw value in [0, 100].
    pub fn get(self) -> u32 {
        u32::from(self.0)
    }
}

impl Default for Skill {
    fn default() -> Self {
        Skill::FULL
    }
}

impl fmt::Display for Skill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u32> for Skill {
    type Error = ProficiencyError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Skill::new(value)
    }
}

/// One language a participant can speak and understand.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProficiencyRecord {
    /// Case-sensitive language identifier (never empty)
    pub language: String,

    /// Proficiency in that language
    pub skill: Skill,
}

impl ProficiencyRecord {
    /// Create a record from already-validated parts.
    ///
    /// An empty language falls back to `"english"`.
    pub fn new(language: impl Into<String>, skill: Skill) -> Self {
        let language = language.into();
        Self {
            language: if language.is_empty() {
                DEFAULT_LANGUAGE.to_string()
            } else {
                language
            },
            skill,
        }
    }

    /// Create a record from untrusted parts, failing instead of defaulting.
    pub fn try_new(language: &str, skill: u32) -> Result<Self, ProficiencyError> {
        if language.is_empty() {
            return Err(ProficiencyError::EmptyLanguage);
        }
        Ok(Self {
            language: language.to_string(),
            skill: Skill::try_from(skill)?,
        })
    }
}

impl Default for ProficiencyRecord {
    fn default() -> Self {
        Self::new(DEFAULT_LANGUAGE, Skill::FULL)
    }
}

impl fmt::Display for ProficiencyRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.language, self.skill)
    }
}

/// Parses `language` or `language:skill`.
impl FromStr for ProficiencyRecord {
    type Err = ProficiencyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let malformed = || ProficiencyError::Malformed {
            input: s.to_string(),
        };

        match s.split_once(':') {
            None => ProficiencyRecord::try_new(s, MAX_SKILL),
            Some((language, skill)) => {
                let skill: i64 = skill.trim().parse().map_err(|_| malformed())?;
                if !(0..=i64::from(MAX_SKILL)).contains(&skill) {
                    return Err(ProficiencyError::SkillOutOfRange { skill });
                }
                ProficiencyRecord::try_new(language.trim(), skill as u32)
            }
        }
    }
}

/// Build a record with the library defaults.
///
/// - Missing or empty `language` becomes `"english"`.
/// - Missing `skill` becomes 100; an explicit 0 is kept.
/// - Skills above 100 are clamped to 100.
pub fn make_proficiency_record(language: Option<&str>, skill: Option<u32>) -> ProficiencyRecord {
    let skill = match skill {
        None => Skill::FULL,
        Some(value) => Skill::new(value).unwrap_or_else(|_| {
            warn!(skill = value, "clamping out-of-range skill to 100");
            Skill::FULL
        }),
    };

    ProficiencyRecord::new(language.unwrap_or(DEFAULT_LANGUAGE), skill)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_record() {
        let record = make_proficiency_record(None, None);
        assert_eq!(record.language, "english");
        assert_eq!(record.skill, Skill::FULL);
        assert_eq!(record, ProficiencyRecord::default());
    }

    #[test]
    fn test_language_only() {
        let record = make_proficiency_record(Some("greek"), None);
        assert_eq!(record.language, "greek");
        assert_eq!(record.skill.get(), 100);
    }

    #[test]
    fn test_zero_skill_is_preserved() {
        let record = make_proficiency_record(Some("french"), Some(0));
        assert_eq!(record.language, "french");
        assert_eq!(record.skill.get(), 0);
    }

    #[test]
    fn test_empty_language_defaults() {
        let record = make_proficiency_record(Some(""), Some(40));
        assert_eq!(record.language, "english");
        assert_eq!(record.skill.get(), 40);
    }

    #[test]
    fn test_out_of_range_is_clamped() {
        let record = make_proficiency_record(Some("latin"), Some(250));
        assert_eq!(record.skill, Skill::FULL);
    }

    #[test]
    fn test_skill_bounds() {
        assert_eq!(Skill::new(100).unwrap().get(), 100);
        assert_eq!(
            Skill::new(101),
            Err(ProficiencyError::SkillOutOfRange { skill: 101 })
        );
        assert_eq!(Skill::saturating(-5), Skill::NONE);
        assert_eq!(Skill::saturating(1000), Skill::FULL);
        assert_eq!(Skill::saturating(42).get(), 42);
        assert_eq!(Skill::try_from(55u32).map(Skill::get), Ok(55));
        assert!(Skill::try_from(101u32).is_err());
    }

    #[test]
    fn test_try_new() {
        assert_eq!(
            ProficiencyRecord::try_new("", 50),
            Err(ProficiencyError::EmptyLanguage)
        );
        assert!(ProficiencyRecord::try_new("dutch", 101).is_err());
        assert_eq!(ProficiencyRecord::try_new("dutch", 55).unwrap().skill.get(), 55);
    }

    #[test]
    fn test_parse() {
        let record: ProficiencyRecord = "english:80".parse().unwrap();
        assert_eq!(record.language, "english");
        assert_eq!(record.skill.get(), 80);

        let record: ProficiencyRecord = "romanian".parse().unwrap();
        assert_eq!(record.skill, Skill::FULL);

        assert!(matches!(
            "english:lots".parse::<ProficiencyRecord>(),
            Err(ProficiencyError::Malformed { .. })
        ));
        assert_eq!(
            "english:-3".parse::<ProficiencyRecord>(),
            Err(ProficiencyError::SkillOutOfRange { skill: -3 })
        );
        assert_eq!(
            ":50".parse::<ProficiencyRecord>(),
            Err(ProficiencyError::EmptyLanguage)
        );
    }

    #[test]
    fn test_display() {
        let record = make_proficiency_record(Some("german"), Some(65));
        assert_eq!(record.to_string(), "german:65");
    }
}
