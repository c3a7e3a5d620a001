//! Property tests for invariants that hold for every input and every seed.

use linguist_core::distortion::is_preserved;
use linguist_core::{
    compose_with, interpret_with, seeded_rng, DistortionConfig, DistortionEngine,
    LanguageRegistry, PenaltyMode, ProficiencyRecord, Skill,
};
use proptest::prelude::*;

fn engine(mode: PenaltyMode) -> DistortionEngine {
    DistortionEngine::new(DistortionConfig {
        penalty_mode: mode,
        ..DistortionConfig::default()
    })
}

fn penalty_mode() -> impl Strategy<Value = PenaltyMode> {
    prop_oneof![Just(PenaltyMode::Additive), Just(PenaltyMode::Subtractive)]
}

proptest! {
    #[test]
    fn length_is_preserved(
        text in "\\PC{1,64}",
        skill in 0u32..=100,
        seed: u64,
        mode in penalty_mode(),
    ) {
        let engine = engine(mode);
        let out = engine.distort_text(&mut seeded_rng(seed), &text, Skill::new(skill).unwrap());
        prop_assert_eq!(out.chars().count(), text.chars().count());
    }

    #[test]
    fn preserved_chars_survive(
        text in "[a-z!@,.:;$ ]{1,64}",
        skill in 0u32..=100,
        seed: u64,
        mode in penalty_mode(),
    ) {
        let engine = engine(mode);
        let out = engine.distort_text(&mut seeded_rng(seed), &text, Skill::new(skill).unwrap());

        for (before, after) in text.chars().zip(out.chars()) {
            if is_preserved(before) {
                prop_assert_eq!(before, after);
            }
        }
    }

    #[test]
    fn full_skill_round_trip_is_exact(text in "\\PC{1,64}", seed: u64) {
        let engine = DistortionEngine::default();
        let mut rng = seeded_rng(seed);
        let record = ProficiencyRecord::new("english", Skill::FULL);
        let known: LanguageRegistry = [record.clone()].into_iter().collect();

        let sent = compose_with(&engine, &mut rng, text.as_str(), &record).unwrap();
        let heard = interpret_with(&engine, &mut rng, sent, &known).unwrap();
        prop_assert_eq!(heard.content, text);
    }

    #[test]
    fn unknown_language_is_always_retagged(
        text in "[a-z ]{1,32}",
        language in "[a-z]{1,12}",
        seed: u64,
    ) {
        prop_assume!(language != "english");
        let engine = DistortionEngine::default();
        let mut rng = seeded_rng(seed);
        let known: LanguageRegistry = [ProficiencyRecord::new("english", Skill::FULL)]
            .into_iter()
            .collect();

        let sent = compose_with(&engine, &mut rng, text.as_str(), language.as_str()).unwrap();
        prop_assert_eq!(&sent.language, &language);

        let heard = interpret_with(&engine, &mut rng, sent, &known).unwrap();
        prop_assert_eq!(heard.language.as_str(), "unknown");
        prop_assert_eq!(heard.content.chars().count(), text.chars().count());
    }
}
