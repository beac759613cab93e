//! Output policy configuration.

use serde::Deserialize;

/// Options applied when computing and emitting the delay tables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputConfig {
    /// Resample every channel onto a uniform timeline with this interval
    /// in seconds before any other processing. Unset keeps the captured
    /// frame times.
    #[serde(default, rename = "resample_interval_s")]
    pub resample_interval: Option<f64>,

    /// Clamp every computed delay into this range. Unset leaves delays
    /// unclamped.
    #[serde(default, rename = "delay_clamp_us")]
    pub delay_clamp: Option<DelayClamp>,
}

/// Inclusive delay clamp range in microseconds.
///
/// Some rigs cap delays into a band such as 200–5000 µs. The clamp applies
/// to every entry, so zero-delta intervals lose their zero delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct DelayClamp {
    /// Minimum delay in microseconds.
    pub min: u32,

    /// Maximum delay in microseconds.
    pub max: u32,
}

impl DelayClamp {
    /// Check if the clamp range is valid (min <= max).
    pub fn is_valid(&self) -> bool {
        self.min <= self.max
    }

    /// Clamp a delay into the range.
    #[inline]
    pub fn apply(&self, delay_us: u64) -> u64 {
        delay_us.clamp(self.min as u64, self.max as u64)
    }
}
