//! Opening-greeting scoring (0-5).

use crate::patterns::{GOOD_SALUTATIONS, NORMAL_SALUTATIONS, STRONG_SALUTATIONS};

/// Score the salutation tier of a normalized transcript. Tiers are checked
/// strongest first and the first matching tier wins: strong openers score 5,
/// time-of-day/audience greetings 4, bare whole-word greetings 2, none 0.
pub fn score(normalized: &str) -> u32 {
    if STRONG_SALUTATIONS.iter().any(|p| normalized.contains(p)) {
        return 5;
    }
    if GOOD_SALUTATIONS.iter().any(|p| normalized.contains(p)) {
        return 4;
    }
    if NORMAL_SALUTATIONS.iter().any(|re| re.is_match(normalized)) {
        return 2;
    }
    0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strong_opener_wins_over_lower_tiers() {
        assert_eq!(score("hello, i am excited to introduce myself"), 5);
        assert_eq!(score("i am feeling great today"), 5);
    }

    #[test]
    fn time_of_day_greeting_scores_four() {
        assert_eq!(score("good morning everyone, my name is asha"), 4);
        assert_eq!(score("good evening all"), 4);
        assert_eq!(score("hello everyone"), 4);
    }

    #[test]
    fn bare_greeting_matches_whole_words_only() {
        assert_eq!(score("hello, my name is asha"), 2);
        assert_eq!(score("hi there"), 2);
        // "hi" inside another word is not a greeting
        assert_eq!(score("this is history class"), 0);
    }

    #[test]
    fn no_greeting_scores_zero() {
        assert_eq!(score("my name is asha"), 0);
        assert_eq!(score(""), 0);
    }
}
