//! The unit of communication between composer and interpreter.

use std::fmt;

/// Language assumed when none is given.
pub const DEFAULT_LANGUAGE: &str = "english";

/// Tag given to a received message whose language the receiver doesn't know.
pub const UNKNOWN_LANGUAGE: &str = "unknown";

/// A chat message tagged with the language it claims to be written in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    /// Message text (may be empty on a hand-built message)
    pub content: String,

    /// Language tag
    pub language: String,
}

impl Message {
    /// Create a message. An empty language falls back to `"english"`.
    pub fn new(content: impl Into<String>, language: impl Into<String>) -> Self {
        let language = language.into();
        Self {
            content: content.into(),
            language: if language.is_empty() {
                DEFAULT_LANGUAGE.to_string()
            } else {
                language
            },
        }
    }

    /// Number of characters (Unicode scalar values) in the content.
    pub fn char_len(&self) -> usize {
        self.content.chars().count()
    }

    /// Whether the receiver failed to recognise the language.
    pub fn is_unknown_language(&self) -> bool {
        self.language == UNKNOWN_LANGUAGE
    }
}

impl Default for Message {
    fn default() -> Self {
        Message::new("", DEFAULT_LANGUAGE)
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.language, self.content)
    }
}

/// Build a message with the library defaults: empty content, `"english"`.
pub fn make_message(content: Option<&str>, language: Option<&str>) -> Message {
    Message::new(
        content.unwrap_or_default(),
        language.unwrap_or(DEFAULT_LANGUAGE),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_message() {
        let msg = make_message(None, None);
        assert_eq!(msg.content, "");
        assert_eq!(msg.language, "english");
        assert_eq!(msg, Message::default());
    }

    #[test]
    fn test_message_fields() {
        let msg = make_message(Some("bonjour"), Some("french"));
        assert_eq!(msg.content, "bonjour");
        assert_eq!(msg.language, "french");
        assert!(!msg.is_unknown_language());
    }

    #[test]
    fn test_char_len_counts_chars() {
        let msg = Message::new("héllo", "french");
        assert_eq!(msg.char_len(), 5);
        assert_eq!(msg.content.len(), 6);
    }

    #[test]
    fn test_display() {
        let msg = Message::new("cold day!", "");
        assert_eq!(msg.to_string(), "[english] cold day!");
    }
}
