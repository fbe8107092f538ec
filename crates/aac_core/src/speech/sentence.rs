//! Sentence accumulator.
//!
//! # Responsibility
//! - Accumulate tile activations into the utterance being composed.
//! - Merge consecutive digit taps into one multi-digit number token.
//!
//! # Invariants
//! - No two adjacent tokens are both pure-digit.
//! - A tile whose token is not pure-digit always starts a new token.

use super::number_words::digits_to_words;
use crate::model::tile::Tile;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static PURE_DIGIT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+$").expect("valid pure digit regex"));

/// Returns whether `value` is one or more ASCII digits and nothing else.
pub fn is_pure_digit(value: &str) -> bool {
    PURE_DIGIT_RE.is_match(value)
}

/// How a freshly tapped lone digit is spoken before any merge happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DigitSpeechPolicy {
    /// Speak the word form ("1" is spoken "one").
    #[default]
    AlwaysWords,
    /// Speak the tile's `say` text unchanged.
    Verbatim,
}

impl DigitSpeechPolicy {
    /// Parses `always_words|verbatim`, case-insensitive.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "always_words" | "words" => Some(Self::AlwaysWords),
            "verbatim" => Some(Self::Verbatim),
            _ => None,
        }
    }
}

/// Ordered token sequence of the utterance being composed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sentence {
    tokens: Vec<String>,
}

impl Sentence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Display text: tokens joined by single spaces.
    pub fn text(&self) -> String {
        self.tokens.join(" ")
    }

    /// Speech text for the whole sentence, numbers rendered as words.
    pub fn spoken_text(&self) -> String {
        self.tokens
            .iter()
            .map(|token| digits_to_words(token).unwrap_or_else(|| token.clone()))
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn clear(&mut self) {
        self.tokens.clear();
    }

    /// Drops the last token, returning it.
    pub fn remove_last(&mut self) -> Option<String> {
        self.tokens.pop()
    }

    /// Applies one tile activation and returns the text to speak.
    ///
    /// Returns `None` when the tile has neither label nor spoken text.
    pub fn activate(&mut self, tile: &Tile, policy: DigitSpeechPolicy) -> Option<String> {
        let label = tile.label.trim();
        let say = tile.say.trim();
        if label.is_empty() && say.is_empty() {
            return None;
        }

        // Digit tiles contribute their label; anything else its spoken text.
        let token = if is_pure_digit(label) {
            label.to_string()
        } else {
            spoken_or_label(say, label)
        };

        if is_pure_digit(&token) {
            if let Some(last) = self.tokens.last_mut() {
                if is_pure_digit(last) {
                    last.push_str(&token);
                    return digits_to_words(last);
                }
            }

            let spoken = match policy {
                DigitSpeechPolicy::AlwaysWords => digits_to_words(&token),
                DigitSpeechPolicy::Verbatim => Some(spoken_or_label(say, label)),
            };
            self.tokens.push(token);
            return spoken;
        }

        self.tokens.push(token.clone());
        Some(token)
    }
}

fn spoken_or_label(say: &str, label: &str) -> String {
    if say.is_empty() {
        label.to_string()
    } else {
        say.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::{is_pure_digit, DigitSpeechPolicy, Sentence};
    use crate::model::tile::Tile;

    fn tile(label: &str, say: &str) -> Tile {
        Tile::new(label, say, "#FFFFFF")
    }

    #[test]
    fn pure_digit_classification() {
        assert!(is_pure_digit("0"));
        assert!(is_pure_digit("0123"));
        assert!(!is_pure_digit(""));
        assert!(!is_pure_digit("-1"));
        assert!(!is_pure_digit("1.5"));
        assert!(!is_pure_digit(" 1"));
        assert!(!is_pure_digit("١"));
    }

    #[test]
    fn consecutive_digits_merge_into_one_token() {
        let mut sentence = Sentence::new();
        let policy = DigitSpeechPolicy::AlwaysWords;
        assert_eq!(sentence.activate(&tile("1", "1"), policy).as_deref(), Some("one"));
        assert_eq!(sentence.activate(&tile("2", "2"), policy).as_deref(), Some("twelve"));
        assert_eq!(
            sentence.activate(&tile("3", "3"), policy).as_deref(),
            Some("one hundred twenty-three")
        );
        assert_eq!(sentence.tokens(), ["123"]);
    }

    #[test]
    fn non_digit_breaks_the_number_run() {
        let mut sentence = Sentence::new();
        let policy = DigitSpeechPolicy::AlwaysWords;
        sentence.activate(&tile("1", "1"), policy);
        sentence.activate(&tile("dog", "dog"), policy);
        sentence.activate(&tile("2", "2"), policy);
        assert_eq!(sentence.tokens(), ["1", "dog", "2"]);
    }

    #[test]
    fn digit_tile_appends_label_even_when_say_is_a_word() {
        let mut sentence = Sentence::new();
        let policy = DigitSpeechPolicy::AlwaysWords;
        sentence.activate(&tile("4", "four"), policy);
        sentence.activate(&tile("2", "two"), policy);
        assert_eq!(sentence.tokens(), ["42"]);
        assert_eq!(sentence.spoken_text(), "forty-two");
    }

    #[test]
    fn numeric_say_joins_the_digit_run() {
        let mut sentence = Sentence::new();
        let policy = DigitSpeechPolicy::AlwaysWords;
        sentence.activate(&tile("1", "1"), policy);
        assert_eq!(
            sentence.activate(&tile("hundred", "100"), policy).as_deref(),
            Some("one thousand one hundred")
        );
        assert_eq!(sentence.tokens(), ["1100"]);
    }

    #[test]
    fn verbatim_policy_speaks_first_digit_say_unchanged() {
        let mut sentence = Sentence::new();
        let policy = DigitSpeechPolicy::Verbatim;
        assert_eq!(sentence.activate(&tile("7", "7"), policy).as_deref(), Some("7"));
        assert_eq!(
            sentence.activate(&tile("0", "0"), policy).as_deref(),
            Some("seventy")
        );
    }

    #[test]
    fn word_tile_appends_say_and_speaks_it() {
        let mut sentence = Sentence::new();
        let spoken = sentence.activate(
            &tile("Toilet", "I need the toilet."),
            DigitSpeechPolicy::AlwaysWords,
        );
        assert_eq!(spoken.as_deref(), Some("I need the toilet."));
        assert_eq!(sentence.tokens(), ["I need the toilet."]);
    }

    #[test]
    fn empty_tile_is_a_no_op() {
        let mut sentence = Sentence::new();
        let mut empty = tile("x", "x");
        empty.label.clear();
        empty.say.clear();
        assert_eq!(sentence.activate(&empty, DigitSpeechPolicy::AlwaysWords), None);
        assert!(sentence.is_empty());
    }

    #[test]
    fn remove_last_and_clear() {
        let mut sentence = Sentence::new();
        sentence.activate(&tile("I", "I"), DigitSpeechPolicy::AlwaysWords);
        sentence.activate(&tile("want", "want"), DigitSpeechPolicy::AlwaysWords);
        assert_eq!(sentence.text(), "I want");
        assert_eq!(sentence.remove_last().as_deref(), Some("want"));
        assert_eq!(sentence.len(), 1);
        sentence.clear();
        assert!(sentence.is_empty());
        assert_eq!(sentence.remove_last(), None);
    }

    #[test]
    fn policy_parses_known_values() {
        assert_eq!(
            DigitSpeechPolicy::parse(" Verbatim "),
            Some(DigitSpeechPolicy::Verbatim)
        );
        assert_eq!(
            DigitSpeechPolicy::parse("always_words"),
            Some(DigitSpeechPolicy::AlwaysWords)
        );
        assert_eq!(DigitSpeechPolicy::parse("loud"), None);
    }
}
