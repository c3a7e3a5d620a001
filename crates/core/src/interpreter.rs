//! Receive side: understand an incoming message at the receiver's own skill.
//!
//! Distortion compounds: the receiver garbles what arrived, not the
//! sender's original text.

use crate::distortion::DistortionEngine;
use crate::message::{Message, UNKNOWN_LANGUAGE};
use crate::proficiency::Skill;
use crate::registry::LanguageLookup;
use rand::Rng;
use tracing::debug;

/// Interpret a received message against the receiver's known languages.
///
/// # Returns
/// - `None` if the message content is empty
/// - For a known language: the content re-distorted at the receiver's skill,
///   language tag unchanged
/// - For an unknown language: the content re-distorted at skill 0, language
///   tag set to `"unknown"`
pub fn interpret_with<R, L>(
    engine: &DistortionEngine,
    rng: &mut R,
    message: Message,
    known: &L,
) -> Option<Message>
where
    R: Rng,
    L: LanguageLookup + ?Sized,
{
    let Message { content, language } = message;
    if content.is_empty() {
        return None;
    }

    let (language, skill) = match known.lookup(&language) {
        Some(record) => (language, record.skill),
        None => {
            debug!(language = %language, "language not known to receiver");
            (UNKNOWN_LANGUAGE.to_string(), Skill::NONE)
        }
    };

    let content = engine.distort_text(rng, &content, skill);

    debug!(
        language = %language,
        skill = %skill,
        chars = content.chars().count(),
        "interpreted message"
    );

    Some(Message { content, language })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distortion::seeded_rng;
    use crate::proficiency::make_proficiency_record;
    use crate::registry::LanguageRegistry;

    fn registry(entries: &[(&str, u32)]) -> LanguageRegistry {
        entries
            .iter()
            .map(|(language, skill)| make_proficiency_record(Some(*language), Some(*skill)))
            .collect()
    }

    #[test]
    fn test_known_language_keeps_tag() {
        let engine = DistortionEngine::default();
        let known = registry(&[("english", 100)]);

        let input = Message::new("cold day!", "english");

        let msg = interpret_with(&engine, &mut seeded_rng(1), input, &known).unwrap();
        assert_eq!(msg.language, "english");
        assert_eq!(msg.content, "cold day!");
    }

    #[test]
    fn test_unknown_language_is_retagged() {
        let engine = DistortionEngine::default();
        let known = registry(&[("romanian", 70)]);

        let input = Message::new("cold day!", "english");

        let msg = interpret_with(&engine, &mut seeded_rng(1), input, &known).unwrap();
        assert_eq!(msg.language, "unknown");
        assert!(msg.is_unknown_language());
        assert_eq!(msg.char_len(), 9);
        assert_eq!(msg.content.find('!'), Some(8));
        assert_eq!(msg.content.find(' '), Some(4));
    }

    #[test]
    fn test_unknown_language_distorts_heavily() {
        let engine = DistortionEngine::default();
        let text = "#".repeat(500);

        let input = Message::new(text.clone(), "klingon");

        let msg = interpret_with(&engine, &mut seeded_rng(2), input, &LanguageRegistry::new())
            .unwrap();
        let changed = msg.content.chars().filter(|&c| c != '#').count();
        assert!(changed > 400, "changed = {changed}");
    }

    #[test]
    fn test_empty_content_yields_none() {
        let engine = DistortionEngine::default();
        let known = registry(&[("english", 100)]);

        for language in ["english", "klingon"] {
            let input = Message::new("", language);
            assert!(interpret_with(&engine, &mut seeded_rng(1), input, &known).is_none());
        }
    }

    #[test]
    fn test_zero_skill_record_is_known() {
        let engine = DistortionEngine::default();
        let known = registry(&[("french", 0)]);

        let input = Message::new("bonjour", "french");

        let msg = interpret_with(&engine, &mut seeded_rng(4), input, &known).unwrap();
        assert_eq!(msg.language, "french");
    }

    #[test]
    fn test_works_with_plain_map() {
        let engine = DistortionEngine::default();
        let mut known = std::collections::HashMap::new();
        known.insert("english".to_string(), make_proficiency_record(Some("english"), None));

        let msg = interpret_with(&engine, &mut seeded_rng(1), Message::new("hi", "english"), &known)
            .unwrap();
        assert_eq!(msg.content, "hi");
    }
}
