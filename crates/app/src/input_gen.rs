//! Sample chat generation for the demo.
//!
//! When no messages are given on the command line, we generate short chat
//! lines that exercise the distortion rules: plain words, digits, and the
//! punctuation that always survives.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const OPENERS: &[&str] = &[
    "cold day",
    "hold on",
    "over here",
    "watch out",
    "follow me",
    "good game",
];

const SUBJECTS: &[&str] = &[
    "the north gate",
    "2 goblins",
    "our camp",
    "the bridge",
    "that chest",
    "you",
];

const ENDINGS: &[&str] = &["!", ".", "...", ":", ";", ""];

/// Generate `count` chat lines.
///
/// # Arguments
/// - `seed`: random seed for determinism
/// - `count`: number of lines to generate
pub fn generate_sample_messages(seed: u64, count: usize) -> Vec<String> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count).map(|_| generate_line(&mut rng)).collect()
}

fn generate_line(rng: &mut ChaCha8Rng) -> String {
    let opener = pick(rng, OPENERS);
    let ending = pick(rng, ENDINGS);

    // Half the lines are a bare opener, the rest mention something
    if rng.gen_bool(0.5) {
        format!("{opener}{ending}")
    } else {
        format!("{opener}, {}{ending}", pick(rng, SUBJECTS))
    }
}

fn pick<'a>(rng: &mut ChaCha8Rng, options: &[&'a str]) -> &'a str {
    options[rng.gen_range(0..options.len())]
}
