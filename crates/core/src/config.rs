//! Distortion parameters.
//!
//! The comprehension threshold and penalty are process-wide, read-only
//! values. They are exposed as constants for callers that only need to
//! explain thresholds (a registry, a UI), and bundled into an immutable
//! [`DistortionConfig`] that is handed to the engine at construction.
//!
//! # Penalty Direction
//!
//! Below the threshold the penalty is *added* to the skill before it is
//! compared against the random draw ([`PenaltyMode::Additive`]). Numerically
//! this makes low-skill speakers slightly more accurate, which runs against
//! the "cliff-edge drop" the threshold is meant to model. The additive form
//! is the reference behavior and the default; [`PenaltyMode::Subtractive`]
//! implements the drop-off and is opt-in.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// Skill below which the proficiency penalty applies.
pub const MIN_PROFICIENCY: u32 = 70;

/// Amount applied to skill values below [`MIN_PROFICIENCY`].
pub const PROFICIENCY_PENALTY: u32 = 10;

/// Upper bound of the skill scale.
pub const MAX_SKILL: u32 = 100;

/// Returns the comprehension threshold (70).
pub fn min_proficiency_threshold() -> u32 {
    MIN_PROFICIENCY
}

/// Returns the below-threshold penalty (10).
pub fn proficiency_penalty() -> u32 {
    PROFICIENCY_PENALTY
}

/// How the penalty is applied to a below-threshold skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PenaltyMode {
    /// `skill + penalty` (reference arithmetic)
    #[default]
    Additive,

    /// `skill - penalty`, saturating at zero
    Subtractive,
}

impl fmt::Display for PenaltyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PenaltyMode::Additive => f.write_str("additive"),
            PenaltyMode::Subtractive => f.write_str("subtractive"),
        }
    }
}

impl FromStr for PenaltyMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "additive" | "add" => Ok(PenaltyMode::Additive),
            "subtractive" | "sub" => Ok(PenaltyMode::Subtractive),
            _ => Err(ConfigError::UnknownPenaltyMode(s.to_string())),
        }
    }
}

/// Immutable configuration for the distortion engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DistortionConfig {
    /// Skill below which the penalty applies
    pub min_proficiency: u32,

    /// Penalty magnitude
    pub proficiency_penalty: u32,

    /// Direction the penalty is applied in
    pub penalty_mode: PenaltyMode,
}

impl DistortionConfig {
    /// Create a validated configuration.
    ///
    /// Both the threshold and the penalty must lie in [0, 100].
    pub fn new(
        min_proficiency: u32,
        proficiency_penalty: u32,
        penalty_mode: PenaltyMode,
    ) -> Result<Self, ConfigError> {
        if min_proficiency > MAX_SKILL {
            return Err(ConfigError::ThresholdOutOfRange(min_proficiency));
        }
        if proficiency_penalty > MAX_SKILL {
            return Err(ConfigError::PenaltyOutOfRange(proficiency_penalty));
        }

        Ok(Self {
            min_proficiency,
            proficiency_penalty,
            penalty_mode,
        })
    }

    /// Reference configuration with the penalty direction flipped.
    pub fn subtractive() -> Self {
        Self {
            penalty_mode: PenaltyMode::Subtractive,
            ..Self::default()
        }
    }

    /// Skill value actually compared against the random draw.
    ///
    /// May exceed 100 in additive mode; never drops below 0.
    pub fn effective_skill(&self, skill: u32) -> u32 {
        if skill >= self.min_proficiency {
            return skill;
        }

        match self.penalty_mode {
            PenaltyMode::Additive => skill.saturating_add(self.proficiency_penalty),
            PenaltyMode::Subtractive => skill.saturating_sub(self.proficiency_penalty),
        }
    }
}

impl Default for DistortionConfig {
    fn default() -> Self {
        Self {
            min_proficiency: MIN_PROFICIENCY,
            proficiency_penalty: PROFICIENCY_PENALTY,
            penalty_mode: PenaltyMode::Additive,
        }
    }
}
