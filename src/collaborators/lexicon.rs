//! In-process sentiment analyzer backed by fixed indicator lexicons.
//!
//! Counts positive and negative indicator tokens and reports their
//! proportions of the total token count. Pattern matching only; a rough
//! stand-in for a full polarity model, adequate for banded scoring.

use crate::collaborators::{SentimentAnalyzer, SentimentScores};
use crate::errors::CollaboratorError;
use crate::text;

const POSITIVE_INDICATORS: &[&str] = &[
    "happy",
    "excited",
    "love",
    "great",
    "enjoy",
    "glad",
    "proud",
    "wonderful",
    "amazing",
    "fun",
    "best",
    "favorite",
    "favourite",
    "passionate",
    "thank",
    "thanks",
    "grateful",
    "awesome",
    "fantastic",
    "delighted",
];

const NEGATIVE_INDICATORS: &[&str] = &[
    "sad",
    "hate",
    "bad",
    "boring",
    "difficult",
    "worst",
    "terrible",
    "awful",
    "unfortunately",
    "afraid",
    "nervous",
    "worried",
    "angry",
    "upset",
];

#[derive(Debug, Default, Clone, Copy)]
pub struct LexiconSentiment;

impl SentimentAnalyzer for LexiconSentiment {
    fn analyze(&self, text: &str) -> Result<SentimentScores, CollaboratorError> {
        let normalized = text::normalize(text);
        let tokens = text::tokenize(&normalized);
        if tokens.is_empty() {
            return Ok(SentimentScores::neutral());
        }

        let total = tokens.len() as f64;
        let pos_hits = tokens
            .iter()
            .filter(|t| POSITIVE_INDICATORS.contains(t))
            .count();
        let neg_hits = tokens
            .iter()
            .filter(|t| NEGATIVE_INDICATORS.contains(t))
            .count();

        let pos = (pos_hits as f64 / total).clamp(0.0, 1.0);
        let neg = (neg_hits as f64 / total).clamp(0.0, 1.0);
        let neu = (1.0 - pos - neg).max(0.0);
        let compound = (pos - neg).clamp(-1.0, 1.0);

        Ok(SentimentScores {
            pos,
            neu,
            neg,
            compound,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_is_neutral() {
        let scores = LexiconSentiment.analyze("").unwrap();
        assert_eq!(scores, SentimentScores::neutral());
    }

    #[test]
    fn positive_indicators_raise_pos() {
        let scores = LexiconSentiment.analyze("I love painting, it is great fun").unwrap();
        assert!(scores.pos > 0.3);
        assert_eq!(scores.neg, 0.0);
        assert!(scores.compound > 0.0);
    }

    #[test]
    fn negative_indicators_raise_neg() {
        let scores = LexiconSentiment.analyze("a sad and boring day").unwrap();
        assert!(scores.neg > 0.0);
        assert!(scores.compound < 0.0);
    }

    #[test]
    fn proportions_stay_in_range() {
        let scores = LexiconSentiment
            .analyze("great great great great")
            .unwrap();
        assert!(scores.pos <= 1.0);
        assert!(scores.neu >= 0.0);
    }
}
