//! Filler-word-rate banding (0-15).

use crate::patterns::FILLER_PATTERNS;
use crate::scoring::FillerFindings;
use crate::text;

/// Outcome of a filler scan: the banded score, the occurrence rate per 100
/// word tokens, and the non-zero per-filler counts.
#[derive(Debug, Clone, PartialEq)]
pub struct FillerOutcome {
    pub score: u32,
    pub rate: f64,
    pub findings: FillerFindings,
}

/// Count whole-word/phrase filler occurrences in a normalized transcript
/// and band the resulting rate. A rate of 0 (including the no-token case)
/// lands in the top band.
pub fn score(normalized: &str) -> FillerOutcome {
    let total = text::token_count(normalized);
    let mut findings = FillerFindings::new();
    let mut count = 0usize;

    for (word, re) in FILLER_PATTERNS.iter() {
        let n = re.find_iter(normalized).count();
        if n > 0 {
            findings.insert((*word).to_string(), n);
        }
        count += n;
    }

    let rate = if total > 0 {
        count as f64 / total as f64 * 100.0
    } else {
        0.0
    };

    let score = if rate <= 3.0 {
        15
    } else if rate <= 6.0 {
        12
    } else if rate <= 9.0 {
        9
    } else if rate <= 12.0 {
        6
    } else {
        3
    };

    FillerOutcome {
        score,
        rate,
        findings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// `filler_count` fillers padded with distinct words to `total` tokens.
    fn padded(filler_count: usize, total: usize) -> String {
        let mut words: Vec<String> = (0..filler_count).map(|_| "um".to_string()).collect();
        for i in 0..(total - filler_count) {
            words.push(format!("w{i}"));
        }
        words.join(" ")
    }

    #[test]
    fn rate_at_exactly_three_stays_in_top_band() {
        let outcome = score(&padded(3, 100));
        assert_eq!(outcome.rate, 3.0);
        assert_eq!(outcome.score, 15);
        assert_eq!(outcome.findings.get("um"), Some(&3));
    }

    #[test]
    fn rate_just_above_three_drops_a_band() {
        // 301 fillers in 10000 tokens: rate 3.01, just past the top band.
        let outcome = score(&padded(301, 10_000));
        assert!((outcome.rate - 3.01).abs() < 1e-9);
        assert_eq!(outcome.score, 12);
    }

    #[test]
    fn heavy_filler_use_hits_the_floor() {
        let outcome = score("um uh like um uh like um uh");
        assert!(outcome.rate > 12.0);
        assert_eq!(outcome.score, 3);
    }

    #[test]
    fn phrases_match_across_word_boundaries() {
        let outcome = score("you know, i paint. you know, i also sketch");
        assert_eq!(outcome.findings.get("you know"), Some(&2));
    }

    #[test]
    fn empty_text_has_zero_rate_and_top_band() {
        let outcome = score("");
        assert_eq!(outcome.rate, 0.0);
        assert_eq!(outcome.score, 15);
        assert!(outcome.findings.is_empty());
    }

    #[test]
    fn findings_contain_only_observed_fillers() {
        let outcome = score("well, that was basically it");
        assert_eq!(outcome.findings.len(), 2);
        assert_eq!(outcome.findings.get("well"), Some(&1));
        assert_eq!(outcome.findings.get("basically"), Some(&1));
    }
}
