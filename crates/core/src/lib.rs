//! linguist-core: imperfect in-game communication between players
//!
//! A sender writes a message in some language at their proficiency; a
//! receiver reads it at theirs. Proficiency gaps and unknown languages turn
//! characters into random noise, modelling partial comprehension.
//!
//! # Architecture
//!
//! - `config`: comprehension threshold, penalty, and their direction
//! - `proficiency`: skill values and per-language records
//! - `message`: the message value passed between stages
//! - `distortion`: the character-level transform both stages share
//! - `composer`: send side
//! - `interpreter`: receive side
//! - `registry`: known-language lookup capability and a map-backed registry
//! - `speaker`: a participant facade (languages + default language)
//! - `metrics`: counters for demo runs
//!
//! # Design Principles
//!
//! - **No panics**: edge cases are sentinels (`None`, `"unknown"`), not errors
//! - **Stateless**: the engine holds only immutable config; randomness is
//!   passed in, so calls never share mutable state
//! - **Deterministic on request**: seed a ChaCha8 RNG to reproduce a run
//!
//! # Example
//!
//! ```
//! use linguist_core::{compose, interpret, make_proficiency_record, LanguageRegistry};
//!
//! let sender = make_proficiency_record(Some("english"), Some(80));
//! let msg = compose("cold day!", &sender).unwrap();
//!
//! let receiver: LanguageRegistry = [make_proficiency_record(Some("romanian"), Some(70))]
//!     .into_iter()
//!     .collect();
//! let heard = interpret(msg, &receiver).unwrap();
//! assert_eq!(heard.language, "unknown");
//! assert_eq!(heard.content.chars().count(), 9);
//! ```

pub mod composer;
pub mod config;
pub mod distortion;
pub mod error;
pub mod interpreter;
pub mod message;
pub mod metrics;
pub mod proficiency;
pub mod registry;
pub mod speaker;

// Re-export commonly used types
pub use composer::{compose_with, LanguageChoice};
pub use config::{
    min_proficiency_threshold, proficiency_penalty, DistortionConfig, PenaltyMode, MIN_PROFICIENCY,
    PROFICIENCY_PENALTY,
};
pub use distortion::{seeded_rng, DistortionEngine};
pub use error::{Error, Result};
pub use interpreter::interpret_with;
pub use message::{make_message, Message, DEFAULT_LANGUAGE, UNKNOWN_LANGUAGE};
pub use proficiency::{make_proficiency_record, ProficiencyRecord, Skill};
pub use registry::{LanguageLookup, LanguageRegistry};
pub use speaker::Speaker;

/// Compose with the default configuration and a thread-local RNG.
///
/// See [`compose_with`] for the seedable form.
pub fn compose<'a>(
    content: impl Into<Option<&'a str>>,
    choice: impl Into<LanguageChoice>,
) -> Option<Message> {
    compose_with(&DistortionEngine::default(), &mut rand::thread_rng(), content, choice)
}

/// Interpret with the default configuration and a thread-local RNG.
///
/// See [`interpret_with`] for the seedable form.
pub fn interpret<L: LanguageLookup + ?Sized>(message: Message, known: &L) -> Option<Message> {
    interpret_with(&DistortionEngine::default(), &mut rand::thread_rng(), message, known)
}
