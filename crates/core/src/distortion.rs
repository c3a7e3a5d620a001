//! Character-level distortion driven by a single proficiency value.
//!
//! Every non-punctuation character is independently replaced with a random
//! alphanumeric character with a probability that falls as proficiency
//! rises. Sender and receiver use the same transform.
//!
//! # Algorithm
//!
//! For each character:
//! 1. Draw `r` uniformly from `[0, 100)`
//! 2. Apply the configured penalty if `skill < min_proficiency`
//! 3. Pass `!@,.:;$` and space through unchanged
//! 4. Otherwise replace the character when `effective_skill < r`
//!
//! Since `r < 100`, a skill of 100 never distorts anything.
//!
//! # Determinism
//!
//! The engine holds no RNG; callers pass one in. Use [`seeded_rng`] for
//! reproducible output (ChaCha8, same as the demo's default generation) or
//! `rand::thread_rng()` when any stream will do.

use crate::config::DistortionConfig;
use crate::proficiency::Skill;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Characters that always survive distortion (space is handled separately).
pub const PUNCTUATION: &str = "!@,.:;$";

/// Replacement alphabet.
pub const ALPHANUMERIC: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Create a seeded generator for reproducible distortion.
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Whether `c` is exempt from distortion.
pub fn is_preserved(c: char) -> bool {
    c == ' ' || PUNCTUATION.contains(c)
}

/// Stateless distortion transform parameterised by a [`DistortionConfig`].
///
/// Cheap to copy and safe to share across threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DistortionEngine {
    config: DistortionConfig,
}

impl DistortionEngine {
    /// Create an engine with the given configuration.
    pub fn new(config: DistortionConfig) -> Self {
        Self { config }
    }

    /// The configuration this engine was built with.
    pub fn config(&self) -> &DistortionConfig {
        &self.config
    }

    /// Skill value compared against each random draw.
    pub fn effective_skill(&self, skill: Skill) -> u32 {
        self.config.effective_skill(skill.get())
    }

    /// Distort a single character.
    ///
    /// Always consumes one draw for the comparison, plus one more when the
    /// character is replaced.
    pub fn distort_char<R: Rng>(&self, rng: &mut R, c: char, skill: Skill) -> char {
        let roll: f64 = rng.gen_range(0.0..100.0);
        let effective = f64::from(self.effective_skill(skill));

        if is_preserved(c) || effective >= roll {
            return c;
        }

        let idx = rng.gen_range(0..ALPHANUMERIC.len());
        ALPHANUMERIC[idx] as char
    }

    /// Distort every character of `text`.
    ///
    /// The result has exactly as many chars as the input.
    pub fn distort_text<R: Rng>(&self, rng: &mut R, text: &str, skill: Skill) -> String {
        text.chars()
            .map(|c| self.distort_char(rng, c, skill))
            .collect()
    }
}
