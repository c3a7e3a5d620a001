//! Send side: turn raw text into an outgoing, possibly garbled, message.

use crate::distortion::DistortionEngine;
use crate::message::{Message, DEFAULT_LANGUAGE};
use crate::proficiency::{ProficiencyRecord, Skill};
use rand::Rng;
use tracing::debug;

/// What the sender says about the language they're speaking.
///
/// A full record carries the sender's skill. A bare tag (or nothing) means
/// the sender has no proficiency data for that language, which is treated
/// as zero skill.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LanguageChoice {
    /// Known proficiency, used as given
    Record(ProficiencyRecord),

    /// Language tag only; composed at skill 0
    Tag(String),

    /// Nothing specified; `"english"` at skill 0
    #[default]
    Unspecified,
}

impl LanguageChoice {
    /// Resolve to the record the message is composed with.
    pub fn resolve(self) -> ProficiencyRecord {
        match self {
            LanguageChoice::Record(record) => record,
            LanguageChoice::Tag(tag) => ProficiencyRecord::new(tag, Skill::NONE),
            LanguageChoice::Unspecified => ProficiencyRecord::new(DEFAULT_LANGUAGE, Skill::NONE),
        }
    }
}

impl From<ProficiencyRecord> for LanguageChoice {
    fn from(record: ProficiencyRecord) -> Self {
        LanguageChoice::Record(record)
    }
}

impl From<&ProficiencyRecord> for LanguageChoice {
    fn from(record: &ProficiencyRecord) -> Self {
        LanguageChoice::Record(record.clone())
    }
}

impl From<&str> for LanguageChoice {
    fn from(tag: &str) -> Self {
        LanguageChoice::Tag(tag.to_string())
    }
}

impl From<String> for LanguageChoice {
    fn from(tag: String) -> Self {
        LanguageChoice::Tag(tag)
    }
}

impl From<Option<&str>> for LanguageChoice {
    fn from(tag: Option<&str>) -> Self {
        tag.map_or(LanguageChoice::Unspecified, LanguageChoice::from)
    }
}

/// Compose a message at the sender's proficiency.
///
/// # Returns
/// - `None` if `content` is empty or absent
/// - `Some(message)` tagged with the resolved language, every character run
///   through the engine at the resolved skill
pub fn compose_with<'a, R: Rng>(
    engine: &DistortionEngine,
    rng: &mut R,
    content: impl Into<Option<&'a str>>,
    choice: impl Into<LanguageChoice>,
) -> Option<Message> {
    let content = content.into().filter(|c| !c.is_empty())?;
    let record = choice.into().resolve();

    let distorted = engine.distort_text(rng, content, record.skill);

    debug!(
        language = %record.language,
        skill = %record.skill,
        chars = distorted.chars().count(),
        "composed message"
    );

    Some(Message::new(distorted, record.language))
}
