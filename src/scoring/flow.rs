//! Narrative-order scoring (0-5).

use crate::patterns::FLOW_SLOTS;

/// Score narrative flow of a normalized transcript.
///
/// Each slot contributes the start position of its first match, taken in
/// slot declaration order; unmatched slots are omitted. No slot matched
/// scores 0. If the collected positions are already sorted ascending the
/// content appeared in the expected order (5), otherwise it is present but
/// out of order (3). Missing content is not penalized here.
pub fn score(normalized: &str) -> u32 {
    let positions: Vec<usize> = FLOW_SLOTS
        .iter()
        .filter_map(|(_, re)| re.find(normalized).map(|m| m.start()))
        .collect();
    if positions.is_empty() {
        return 0;
    }
    let mut sorted = positions.clone();
    sorted.sort_unstable();
    if positions == sorted {
        5
    } else {
        3
    }
}
