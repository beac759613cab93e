//! Delta/delay table computation.
//!
//! Differentiates a step sequence against its timeline: each interval gets
//! the signed step change and the per-step delay in microseconds needed to
//! spread those steps evenly across the interval.

use crate::config::DelayClamp;
use crate::error::{DataError, Error, Result};

/// Per-interval step deltas and delays for one channel.
///
/// Values are kept at full width here; narrowing to the firmware's array
/// widths happens at export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeltaDelayTable {
    /// Signed step change per interval. Zero means no step is issued;
    /// negative means direction reversal.
    pub delta_steps: Vec<i64>,

    /// Per-step delay in microseconds per interval. Zero whenever the
    /// interval issues no steps (unless a clamp raises it).
    pub delay_us: Vec<u64>,
}

impl DeltaDelayTable {
    /// Compute the table from a step sequence and its timeline.
    ///
    /// `steps` and `times` must have the same length `n >= 2`; the result
    /// holds `n - 1` entries. For each interval: `delta = s[i+1] - s[i]`;
    /// if `delta` is zero the delay is zero (nothing to pace), otherwise
    /// `delay = round(1e6 * dt / |delta|)`, the microseconds between
    /// individual steps that completes `|delta|` steps in `dt` seconds.
    /// A configured clamp is applied to every delay afterwards.
    ///
    /// # Errors
    ///
    /// Returns a [`DataError`] on a non-positive time interval.
    pub fn compute(steps: &[i64], times: &[f64], clamp: Option<DelayClamp>) -> Result<Self> {
        debug_assert_eq!(steps.len(), times.len());

        let intervals = steps.len().saturating_sub(1);
        let mut delta_steps = Vec::with_capacity(intervals);
        let mut delay_us = Vec::with_capacity(intervals);

        for (i, (s, t)) in steps.windows(2).zip(times.windows(2)).enumerate() {
            let delta = s[1] - s[0];

            let dt = t[1] - t[0];
            if dt <= 0.0 {
                return Err(Error::Data(DataError::NonPositiveInterval { index: i, dt }));
            }

            let delay = if delta == 0 {
                0
            } else {
                // 1e6 / (|delta| / dt) steps-per-second
                (1_000_000.0 * dt / delta.unsigned_abs() as f64).round() as u64
            };

            delta_steps.push(delta);
            delay_us.push(match clamp {
                Some(c) => c.apply(delay),
                None => delay,
            });
        }

        Ok(Self { delta_steps, delay_us })
    }

    /// Number of intervals in the table.
    pub fn len(&self) -> usize {
        self.delta_steps.len()
    }

    /// Whether the table holds no intervals.
    pub fn is_empty(&self) -> bool {
        self.delta_steps.is_empty()
    }

    /// Smallest and largest step delta, for the success summary.
    pub fn delta_range(&self) -> Option<(i64, i64)> {
        let min = self.delta_steps.iter().min()?;
        let max = self.delta_steps.iter().max()?;
        Some((*min, *max))
    }
}
