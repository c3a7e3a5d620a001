//! Metrics collection and reporting for chat exchanges.
//!
//! Tracks how much of each message survives the trip:
//! - Messages composed and interpreted, with empty drops counted per side
//! - Characters altered on the sending and receiving sides
//! - How often the receiver didn't know the language
//!
//! # Thread Safety
//!
//! The `Metrics` struct is NOT thread-safe. For multi-threaded use, wrap in
//! `Arc<Mutex<Metrics>>` or keep per-thread metrics and merge them at the end.

use crate::message::Message;
use std::time::{Duration, Instant};

/// Count positions where two strings hold different characters.
///
/// Strings are compared char by char; any length difference counts as
/// altered positions too.
pub fn count_altered(before: &str, after: &str) -> usize {
    let mut a = before.chars();
    let mut b = after.chars();
    let mut altered = 0;

    loop {
        match (a.next(), b.next()) {
            (None, None) => return altered,
            (Some(x), Some(y)) if x == y => {}
            _ => altered += 1,
        }
    }
}

/// Counters for a series of send/receive exchanges.
#[derive(Debug, Clone)]
pub struct Metrics {
    // === Timing ===
    /// When collection started
    pub start_time: Instant,

    /// When collection ended (set on completion)
    pub end_time: Option<Instant>,

    // === Sending ===
    /// Messages successfully composed
    pub messages_composed: u64,

    /// Compose attempts dropped for empty content
    pub messages_empty_on_send: u64,

    /// Characters handed to the composer
    pub chars_sent: u64,

    /// Characters changed by the composer
    pub chars_altered_on_send: u64,

    // === Receiving ===
    /// Messages interpreted by a receiver
    pub messages_interpreted: u64,

    /// Interpret attempts that produced nothing
    pub messages_empty_on_receive: u64,

    /// Messages retagged as "unknown"
    pub messages_unknown_language: u64,

    /// Characters changed by the interpreter
    pub chars_altered_on_receive: u64,

    /// Characters that differ between the original text and what was heard
    pub chars_altered_end_to_end: u64,
}

impl Metrics {
    /// Create new metrics with start time set to now.
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            end_time: None,
            messages_composed: 0,
            messages_empty_on_send: 0,
            chars_sent: 0,
            chars_altered_on_send: 0,
            messages_interpreted: 0,
            messages_empty_on_receive: 0,
            messages_unknown_language: 0,
            chars_altered_on_receive: 0,
            chars_altered_end_to_end: 0,
        }
    }

    /// Record the outcome of composing `original`.
    pub fn record_compose(&mut self, original: &str, composed: Option<&Message>) {
        match composed {
            Some(msg) => {
                self.messages_composed += 1;
                self.chars_sent += original.chars().count() as u64;
                self.chars_altered_on_send += count_altered(original, &msg.content) as u64;
            }
            None => self.messages_empty_on_send += 1,
        }
    }

    /// Record the outcome of interpreting `sent`, given the original text.
    pub fn record_interpret(&mut self, original: &str, sent: &Message, heard: Option<&Message>) {
        let Some(heard) = heard else {
            self.messages_empty_on_receive += 1;
            return;
        };

        self.messages_interpreted += 1;
        if heard.is_unknown_language() {
            self.messages_unknown_language += 1;
        }
        self.chars_altered_on_receive += count_altered(&sent.content, &heard.content) as u64;
        self.chars_altered_end_to_end += count_altered(original, &heard.content) as u64;
    }

    /// Mark collection as complete.
    pub fn complete(&mut self) {
        self.end_time = Some(Instant::now());
    }

    /// Get total duration (or current elapsed if not complete).
    pub fn duration(&self) -> Duration {
        match self.end_time {
            Some(end) => end.duration_since(self.start_time),
            None => self.start_time.elapsed(),
        }
    }

    /// Fraction of sent characters changed by the sender.
    pub fn send_distortion_rate(&self) -> f64 {
        ratio(self.chars_altered_on_send, self.chars_sent)
    }

    /// Fraction of sent characters that arrived different from the original.
    pub fn distortion_rate(&self) -> f64 {
        ratio(self.chars_altered_end_to_end, self.chars_sent)
    }

    /// Fraction of interpreted messages in an unknown language.
    pub fn unknown_language_rate(&self) -> f64 {
        ratio(self.messages_unknown_language, self.messages_interpreted)
    }

    /// Print a human-readable summary to stdout.
    pub fn print_summary(&self) {
        println!("\n=== Exchange Summary ===");
        println!("Duration: {} ms", self.duration().as_millis());
        println!();

        println!("=== Sending ===");
        println!("Messages composed: {}", self.messages_composed);
        println!("Empty messages: {}", self.messages_empty_on_send);
        println!("Characters sent: {}", self.chars_sent);
        println!(
            "Altered by sender: {} ({:.2}%)",
            self.chars_altered_on_send,
            self.send_distortion_rate() * 100.0
        );
        println!();

        println!("=== Receiving ===");
        println!("Messages interpreted: {}", self.messages_interpreted);
        println!("Empty messages: {}", self.messages_empty_on_receive);
        println!(
            "Unknown language: {} ({:.2}%)",
            self.messages_unknown_language,
            self.unknown_language_rate() * 100.0
        );
        println!("Altered by receiver: {}", self.chars_altered_on_receive);
        println!(
            "Altered end to end: {} ({:.2}%)",
            self.chars_altered_end_to_end,
            self.distortion_rate() * 100.0
        );
        println!();
    }

    /// Export metrics as a simple text format (for parsing/testing).
    pub fn export_text(&self) -> String {
        format!(
            "duration_ms={}\n\
             messages_composed={}\n\
             messages_empty_on_send={}\n\
             messages_interpreted={}\n\
             messages_empty_on_receive={}\n\
             messages_unknown_language={}\n\
             chars_sent={}\n\
             chars_altered_on_send={}\n\
             chars_altered_on_receive={}\n\
             chars_altered_end_to_end={}\n\
             distortion_rate={:.4}\n",
            self.duration().as_millis(),
            self.messages_composed,
            self.messages_empty_on_send,
            self.messages_interpreted,
            self.messages_empty_on_receive,
            self.messages_unknown_language,
            self.chars_sent,
            self.chars_altered_on_send,
            self.chars_altered_on_receive,
            self.chars_altered_end_to_end,
            self.distortion_rate(),
        )
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

fn ratio(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64
    }
}
