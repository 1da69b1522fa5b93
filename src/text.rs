//! Shared text normalization and tokenization helpers.
//!
//! All rubric pattern matching runs over the lowercased transcript, and all
//! rate/ratio computations count word tokens produced by a `\w+` scan.

use once_cell::sync::Lazy;
use regex::Regex;

static WORD_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+").expect("word token regex"));

/// Normalize a transcript for pattern matching.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
}

/// Split a text into word tokens.
pub fn tokenize(text: &str) -> Vec<&str> {
    WORD_TOKEN.find_iter(text).map(|m| m.as_str()).collect()
}

/// Number of word tokens in a text.
pub fn token_count(text: &str) -> usize {
    WORD_TOKEN.find_iter(text).count()
}

/// Compile a whole-word (or whole-phrase) matcher for a literal.
pub(crate) fn word_bounded(literal: &str) -> Regex {
    Regex::new(&format!(r"\b{}\b", regex::escape(literal))).expect("word-bounded literal regex")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_splits_on_non_word_characters() {
        assert_eq!(tokenize("my name is asha!"), vec!["my", "name", "is", "asha"]);
        assert_eq!(token_count("i am 12 years old"), 5);
        assert_eq!(token_count(""), 0);
        assert_eq!(token_count("...!?"), 0);
    }

    #[test]
    fn word_bounded_does_not_match_substrings() {
        let re = word_bounded("hi");
        assert!(re.is_match("hi everyone"));
        assert!(!re.is_match("this is history"));

        let phrase = word_bounded("you know");
        assert_eq!(phrase.find_iter("you know, you know what").count(), 2);
    }
}
