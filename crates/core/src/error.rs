//! Error types for the linguist system.
//!
//! Distortion itself never fails: empty messages and unknown languages are
//! reported through sentinel values (`None`, the `"unknown"` tag). Errors are
//! reserved for building values from untrusted input, such as CLI flags or
//! records parsed from text.

use thiserror::Error;

/// Top-level error type for all fallible operations in the system.
///
/// Each variant corresponds to a specific failure domain:
/// - Proficiency: skill values or language records that violate invariants
/// - Config: distortion parameters outside their allowed ranges
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Invalid proficiency record or skill value
    #[error("proficiency error: {0}")]
    Proficiency(#[from] ProficiencyError),

    /// Invalid distortion configuration
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Proficiency record errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProficiencyError {
    /// Skill must lie in [0, 100]
    #[error("skill {skill} is outside 0..=100")]
    SkillOutOfRange { skill: i64 },

    /// Language identifiers must be non-empty
    #[error("language identifier is empty")]
    EmptyLanguage,

    /// Text form could not be parsed (expected `language[:skill]`)
    #[error("malformed proficiency record {input:?}: expected LANGUAGE[:SKILL]")]
    Malformed { input: String },
}

/// Distortion configuration errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Proficiency threshold outside [0, 100]
    #[error("minimum proficiency {0} is outside 0..=100")]
    ThresholdOutOfRange(u32),

    /// Penalty outside [0, 100]
    #[error("proficiency penalty {0} is outside 0..=100")]
    PenaltyOutOfRange(u32),

    /// Unrecognised penalty mode name
    #[error("unknown penalty mode {0:?}: expected \"additive\" or \"subtractive\"")]
    UnknownPenaltyMode(String),
}

/// Type alias for Result with our Error type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_conversions() {
        let err: Error = ProficiencyError::EmptyLanguage.into();
        assert_eq!(err, Error::Proficiency(ProficiencyError::EmptyLanguage));

        let err: Error = ConfigError::PenaltyOutOfRange(120).into();
        assert!(matches!(err, Error::Config(ConfigError::PenaltyOutOfRange(120))));
    }

    #[test]
    fn test_display() {
        let err = Error::from(ProficiencyError::SkillOutOfRange { skill: 150 });
        assert_eq!(err.to_string(), "proficiency error: skill 150 is outside 0..=100");
    }
}
