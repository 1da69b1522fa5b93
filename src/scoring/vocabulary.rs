//! Lexical-diversity banding (0-10).

use std::collections::HashSet;

use crate::text;

/// Band the type-token ratio of a normalized transcript: unique word tokens
/// over total word tokens, 0 when there are no tokens. Returns the banded
/// score and the raw ratio.
pub fn score(normalized: &str) -> (u32, f64) {
    let tokens = text::tokenize(normalized);
    let total = tokens.len();
    let ttr = if total == 0 {
        0.0
    } else {
        let unique: HashSet<&str> = tokens.iter().copied().collect();
        unique.len() as f64 / total as f64
    };

    let band = if ttr >= 0.9 {
        10
    } else if ttr >= 0.7 {
        8
    } else if ttr >= 0.5 {
        6
    } else if ttr >= 0.3 {
        4
    } else {
        2
    };
    (band, ttr)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_distinct_tokens_score_ten() {
        let (band, ttr) = score("one two three four five");
        assert_eq!(band, 10);
        assert_eq!(ttr, 1.0);
    }

    #[test]
    fn repetition_lowers_the_band() {
        // 2 unique / 10 total = 0.2
        let (band, ttr) = score("word word word word word again again again again again");
        assert_eq!(band, 2);
        assert!((ttr - 0.2).abs() < 1e-9);
    }

    #[test]
    fn half_unique_hits_the_middle_band() {
        // 2 unique / 4 total = 0.5
        let (band, _) = score("red blue red blue");
        assert_eq!(band, 6);
    }

    #[test]
    fn empty_text_has_zero_ratio_and_lowest_band() {
        let (band, ttr) = score("");
        assert_eq!(band, 2);
        assert_eq!(ttr, 0.0);
    }
}
