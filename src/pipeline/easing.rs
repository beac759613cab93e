//! Cosine ease-in-out reshaping.
//!
//! Replaces a captured position sequence with a smooth ease-in-out curve
//! between its first and last samples, the same shape the animation tool
//! interpolates with. All intermediate samples are discarded; only the two
//! endpoints survive. Callers that want the literal captured path skip this
//! stage.

use std::f64::consts::PI;

use tracing::debug;

/// Apply the ease-in-out curve to a sample sequence.
///
/// Returns the input unchanged when the net displacement `|last - first|`
/// is below `threshold` (no significant motion), or when the sequence is
/// shorter than 2 samples. Otherwise returns
/// `first + (last - first) * (0.5 - 0.5 * cos(pi * i / (n - 1)))` for each
/// index, which starts at `first`, ends exactly at `last`, and is monotonic
/// in between.
pub fn apply(values: &[f64], threshold: f64) -> Vec<f64> {
    let n = values.len();
    if n < 2 {
        return values.to_vec();
    }

    let start = values[0];
    let end = values[n - 1];
    let displacement = end - start;

    if displacement.abs() < threshold {
        debug!(displacement, threshold, "no significant motion; easing skipped");
        return values.to_vec();
    }

    (0..n)
        .map(|i| {
            let ease = 0.5 - 0.5 * (PI * i as f64 / (n - 1) as f64).cos();
            start + displacement * ease
        })
        .collect()
}
