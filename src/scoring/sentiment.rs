//! Sentiment-positivity banding (0-15).

/// Band the `pos` value reported by the sentiment collaborator (in [0, 1]).
pub fn score(pos: f64) -> u32 {
    if pos >= 0.9 {
        15
    } else if pos >= 0.7 {
        12
    } else if pos >= 0.5 {
        9
    } else if pos >= 0.3 {
        6
    } else {
        3
    }
}
