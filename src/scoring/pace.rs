//! Speaking-pace banding (0-10).

/// Band a words-per-minute rate. Range checks run in order and the first
/// satisfied band wins; 111-140 wpm is the target band.
pub fn score(wpm: f64) -> u32 {
    if (111.0..=140.0).contains(&wpm) {
        10
    } else if (141.0..=160.0).contains(&wpm) {
        6
    } else if wpm > 160.0 {
        2
    } else if (81.0..=110.0).contains(&wpm) {
        6
    } else {
        2
    }
}
