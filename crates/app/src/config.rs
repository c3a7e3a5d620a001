//! Configuration for the linguist demo.
//!
//! Handles parsing command-line arguments and generating sensible defaults
//! (including randomized defaults that are reproducible with a seed).
//!
//! # Philosophy
//!
//! The tool should work with ZERO arguments, using intelligent defaults.
//! All defaults are printed so runs are reproducible.

use linguist_core::{
    DistortionConfig, PenaltyMode, ProficiencyRecord, Skill, MIN_PROFICIENCY, PROFICIENCY_PENALTY,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Languages the seeded defaults pick from.
const LANGUAGES: &[&str] = &["english", "romanian", "french", "chinese"];

/// One side of the conversation.
#[derive(Debug, Clone)]
pub struct SpeakerConfig {
    /// Known languages (empty = English at full proficiency)
    pub languages: Vec<ProficiencyRecord>,

    /// Language used when none is requested
    pub default_language: Option<String>,
}

/// Complete configuration for a demo run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Seed for defaults, sample messages, and distortion
    pub seed: u64,

    // === Speakers ===
    pub sender: SpeakerConfig,
    pub receiver: SpeakerConfig,

    /// Language the sender is asked to speak (None = sender's default)
    pub language: Option<String>,

    // === Messages ===
    /// Explicit messages (empty = generate samples)
    pub messages: Vec<String>,

    /// Number of sample messages to generate
    pub count: usize,

    // === Distortion ===
    pub distortion: DistortionConfig,

    // === Behavior ===
    /// Whether to print detailed config
    pub print_config: bool,

    /// Whether to print detailed metrics summary
    pub print_metrics: bool,
}

impl Config {
    /// Parse configuration from command-line arguments.
    ///
    /// If no arguments provided, generates randomized defaults using a time-based seed.
    /// If --seed is provided, uses that seed for all randomness (fully deterministic).
    pub fn from_args(args: &[String]) -> Result<Self, String> {
        let mut seed: Option<u64> = None;
        let mut sender: Vec<ProficiencyRecord> = Vec::new();
        let mut sender_default: Option<String> = None;
        let mut receiver: Vec<ProficiencyRecord> = Vec::new();
        let mut receiver_default: Option<String> = None;
        let mut language: Option<String> = None;
        let mut messages: Vec<String> = Vec::new();
        let mut count: Option<usize> = None;
        let mut min_proficiency: Option<u32> = None;
        let mut penalty: Option<u32> = None;
        let mut penalty_mode = PenaltyMode::default();
        let mut print_config = false;
        let mut print_metrics = true;

        let mut i = 0;
        while i < args.len() {
            let flag = args[i].as_str();
            match flag {
                "--seed" => {
                    seed = Some(value(args, &mut i, flag)?.parse().map_err(|_| "invalid seed")?);
                }
                "--sender" => {
                    sender.push(
                        value(args, &mut i, flag)?
                            .parse::<ProficiencyRecord>()
                            .map_err(|e| format!("--sender: {e}"))?,
                    );
                }
                "--sender-default" => {
                    sender_default = Some(value(args, &mut i, flag)?.to_string());
                }
                "--receiver" => {
                    receiver.push(
                        value(args, &mut i, flag)?
                            .parse::<ProficiencyRecord>()
                            .map_err(|e| format!("--receiver: {e}"))?,
                    );
                }
                "--receiver-default" => {
                    receiver_default = Some(value(args, &mut i, flag)?.to_string());
                }
                "--language" => {
                    language = Some(value(args, &mut i, flag)?.to_string());
                }
                "--message" => {
                    messages.push(value(args, &mut i, flag)?.to_string());
                }
                "--count" => {
                    count = Some(value(args, &mut i, flag)?.parse().map_err(|_| "invalid count")?);
                }
                "--min-proficiency" => {
                    min_proficiency = Some(
                        value(args, &mut i, flag)?
                            .parse()
                            .map_err(|_| "invalid min-proficiency")?,
                    );
                }
                "--penalty" => {
                    penalty = Some(
                        value(args, &mut i, flag)?
                            .parse()
                            .map_err(|_| "invalid penalty")?,
                    );
                }
                "--penalty-mode" => {
                    penalty_mode = value(args, &mut i, flag)?
                        .parse::<PenaltyMode>()
                        .map_err(|e| e.to_string())?;
                }
                "--print-config" => {
                    print_config = true;
                }
                "--no-metrics" => {
                    print_metrics = false;
                }
                "--help" | "-h" => {
                    print_help();
                    std::process::exit(0);
                }
                _ => {
                    return Err(format!("unknown argument: {}", args[i]));
                }
            }
            i += 1;
        }

        // Determine seed (explicit or time-based)
        let seed = seed.unwrap_or_else(|| {
            use std::time::{SystemTime, UNIX_EPOCH};
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or_default()
        });

        // Generate defaults using seed
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        if sender.is_empty() {
            sender.push(random_record(&mut rng, "english"));
        }
        if receiver.is_empty() {
            let language = LANGUAGES[rng.gen_range(0..LANGUAGES.len())];
            receiver.push(random_record(&mut rng, language));
        }

        let distortion = DistortionConfig::new(
            min_proficiency.unwrap_or(MIN_PROFICIENCY),
            penalty.unwrap_or(PROFICIENCY_PENALTY),
            penalty_mode,
        )
        .map_err(|e| e.to_string())?;

        Ok(Config {
            seed,
            sender: SpeakerConfig {
                languages: sender,
                default_language: sender_default,
            },
            receiver: SpeakerConfig {
                languages: receiver,
                default_language: receiver_default,
            },
            language,
            messages,
            count: count.unwrap_or(5),
            distortion,
            print_config,
            print_metrics,
        })
    }

    /// Print the configuration in human-readable form.
    pub fn print(&self) {
        println!("=== Configuration ===");
        println!("Seed: {}", self.seed);
        println!();
        println!("=== Speakers ===");
        print_speaker("Sender", &self.sender);
        print_speaker("Receiver", &self.receiver);
        println!("Spoken language: {}", self.language.as_deref().unwrap_or("(sender default)"));
        println!();
        println!("=== Distortion ===");
        println!("Min proficiency: {}", self.distortion.min_proficiency);
        println!(
            "Penalty: {} ({})",
            self.distortion.proficiency_penalty, self.distortion.penalty_mode
        );
        println!();
        println!("=== Messages ===");
        if self.messages.is_empty() {
            println!("Generated samples: {}", self.count);
        } else {
            println!("Explicit messages: {}", self.messages.len());
        }
        println!();
    }
}

/// Consume the value following a flag.
fn value<'a>(args: &'a [String], i: &mut usize, flag: &str) -> Result<&'a str, String> {
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| format!("{flag} requires a value"))
}

/// Skill biased toward the interesting range around the threshold.
fn random_record(rng: &mut ChaCha8Rng, language: &str) -> ProficiencyRecord {
    ProficiencyRecord::new(language, Skill::saturating(rng.gen_range(40..=100)))
}

fn print_speaker(label: &str, speaker: &SpeakerConfig) {
    let languages: Vec<String> = speaker.languages.iter().map(ToString::to_string).collect();
    println!(
        "{label}: {} (default: {})",
        languages.join(", "),
        speaker.default_language.as_deref().unwrap_or("english")
    );
}

fn print_help() {
    println!("linguist: chat between two speakers with imperfect language skills");
    println!();
    println!("USAGE:");
    println!("    linguist [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    --seed <N>                  Random seed for determinism");
    println!();
    println!("    --sender <LANG[:SKILL]>     Sender language, repeatable");
    println!("                                (default: english, random 40-100)");
    println!("    --sender-default <LANG>     Sender default language (default: english)");
    println!("    --receiver <LANG[:SKILL]>   Receiver language, repeatable (default: random)");
    println!("    --receiver-default <LANG>   Receiver default language (default: english)");
    println!("    --language <LANG>           Language spoken (default: sender default)");
    println!();
    println!("    --message <TEXT>            Message to send, repeatable (default: generated)");
    println!("    --count <N>                 Number of generated messages (default: 5)");
    println!();
    println!("    --min-proficiency <N>       Penalty threshold 0-100 (default: 70)");
    println!("    --penalty <N>               Penalty amount 0-100 (default: 10)");
    println!("    --penalty-mode <MODE>       additive | subtractive (default: additive)");
    println!();
    println!("    --print-config              Print resolved configuration");
    println!("    --no-metrics                Don't print metrics summary");
    println!("    --help, -h                  Print this help");
    println!();
    println!("EXAMPLES:");
    println!("    linguist                                        # Run with random defaults");
    println!("    linguist --seed 42                              # Deterministic run");
    println!("    linguist --sender english:75 --receiver english:85 --message 'cold day!'");
    println!("    linguist --receiver romanian:70 --penalty-mode subtractive");
    println!();
}
