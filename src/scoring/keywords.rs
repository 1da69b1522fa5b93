//! Content-keyword coverage scoring (0-30).

use crate::patterns::{GOOD_CATEGORIES, GOOD_POINTS, KEYWORD_CAP, MUST_CATEGORIES, MUST_POINTS};
use crate::scoring::KeywordDetail;

/// Score content coverage of a normalized transcript.
///
/// Each must-have category awards 4 points, each good-to-have category 2,
/// on the first pattern in the category's list that matches (remaining
/// patterns for that category are skipped). The sum is capped at 30. The
/// returned detail lists matched labels in category declaration order.
pub fn score(normalized: &str) -> (u32, KeywordDetail) {
    let mut total = 0;
    let mut detail = KeywordDetail::default();

    for (label, patterns) in MUST_CATEGORIES.iter() {
        if patterns.iter().any(|re| re.is_match(normalized)) {
            detail.must.push(*label);
            total += MUST_POINTS;
        }
    }
    for (label, patterns) in GOOD_CATEGORIES.iter() {
        if patterns.iter().any(|re| re.is_match(normalized)) {
            detail.good.push(*label);
            total += GOOD_POINTS;
        }
    }

    (total.min(KEYWORD_CAP), detail)
}
