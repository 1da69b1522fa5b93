//! Grammar-error-density banding (0-10).

/// Band a grammar-check result by errors per 100 word tokens.
///
/// Returns the banded score and a raw `quality` diagnostic of
/// `1 - errors_per_100 / 100`, deliberately unclamped (negative past one
/// error per word). Note the band direction: higher error density currently
/// maps to a higher score. Correcting it changes shipped scores, so it
/// stays pending product sign-off.
pub fn score(error_count: usize, word_count: usize) -> (u32, f64) {
    let words = word_count.max(1) as f64;
    let errors_per_100 = error_count as f64 / words * 100.0;
    let quality = 1.0 - errors_per_100 / 100.0;

    let band = if errors_per_100 > 90.0 {
        10
    } else if errors_per_100 >= 70.0 {
        8
    } else if errors_per_100 >= 50.0 {
        6
    } else if errors_per_100 >= 30.0 {
        4
    } else {
        2
    };
    (band, quality)
}
