//! Uniform-timeline resampling.
//!
//! Captures exported at a variable frame rate can be resampled onto a fixed
//! interval so the firmware plays back against a constant tick.

use crate::error::{DataError, Error, Result};

/// Resample `(times, values)` onto a uniform timeline.
///
/// The output timeline starts at `times[0]` and advances by `interval`
/// seconds while it stays within the captured range; values are linearly
/// interpolated between the surrounding samples. Assumes `times` is
/// strictly increasing (checked at load).
///
/// # Errors
///
/// Returns a [`DataError`] if fewer than 2 samples remain on the uniform
/// timeline (interval longer than the capture).
pub fn resample_uniform(times: &[f64], values: &[f64], interval: f64) -> Result<(Vec<f64>, Vec<f64>)> {
    debug_assert_eq!(times.len(), values.len());

    let start = times[0];
    let end = times[times.len() - 1];

    let mut out_times = Vec::new();
    let mut out_values = Vec::new();

    // Tiny slack so an exact multiple of the interval still hits the endpoint
    let mut t = start;
    let mut k = 0u64;
    while t <= end + interval * 1e-9 {
        out_times.push(t);
        out_values.push(interpolate(times, values, t));
        k += 1;
        t = start + k as f64 * interval;
    }

    if out_times.len() < 2 {
        return Err(Error::Data(DataError::InsufficientRows(out_times.len())));
    }

    Ok((out_times, out_values))
}

/// Linear interpolation of `values` at time `t`, clamped to the sampled range.
fn interpolate(times: &[f64], values: &[f64], t: f64) -> f64 {
    if t <= times[0] {
        return values[0];
    }
    if t >= times[times.len() - 1] {
        return values[values.len() - 1];
    }

    // partition_point: first index with times[i] > t; t lies in [i-1, i]
    let i = times.partition_point(|&x| x <= t);
    let (t0, t1) = (times[i - 1], times[i]);
    let (v0, v1) = (values[i - 1], values[i]);

    v0 + (v1 - v0) * (t - t0) / (t1 - t0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_on_matching_interval() {
        let times = [0.0, 0.1, 0.2, 0.3];
        let values = [0.0, 1.0, 4.0, 9.0];

        let (t, v) = resample_uniform(&times, &values, 0.1).unwrap();

        assert_eq!(t.len(), 4);
        for (a, b) in t.iter().zip(&times) {
            assert!((a - b).abs() < 1e-9);
        }
        for (a, b) in v.iter().zip(&values) {
            assert!((a - b).abs() < 1e-9);
        }
    }

    #[test]
    fn test_downsampling_interpolates() {
        let times = [0.0, 0.1, 0.2, 0.3, 0.4];
        let values = [0.0, 1.0, 2.0, 3.0, 4.0];

        let (t, v) = resample_uniform(&times, &values, 0.2).unwrap();

        assert_eq!(t.len(), 3);
        assert!((v[0] - 0.0).abs() < 1e-9);
        assert!((v[1] - 2.0).abs() < 1e-9);
        assert!((v[2] - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_upsampling_midpoints() {
        let times = [0.0, 0.2];
        let values = [0.0, 1.0];

        let (t, v) = resample_uniform(&times, &values, 0.1).unwrap();

        assert_eq!(t.len(), 3);
        assert!((v[1] - 0.5).abs() < 1e-9);
        assert!((v[2] - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_uneven_capture_becomes_uniform() {
        let times = [0.0, 0.05, 0.3];
        let values = [0.0, 0.5, 3.0];

        let (t, _) = resample_uniform(&times, &values, 0.1).unwrap();

        for pair in t.windows(2) {
            assert!((pair[1] - pair[0] - 0.1).abs() < 1e-9);
        }
    }

    #[test]
    fn test_interval_longer_than_capture() {
        let result = resample_uniform(&[0.0, 0.1], &[0.0, 1.0], 1.0);
        assert!(matches!(result, Err(Error::Data(DataError::InsufficientRows(1)))));
    }
}
