//! Channel configuration from TOML.

use serde::Deserialize;

use super::units::{ChannelUnit, RoundingMode};

/// Default easing threshold for linear channels, in metres.
pub const DEFAULT_LINEAR_THRESHOLD: f64 = 1e-4;

/// Default easing threshold for rotational channels, in degrees.
pub const DEFAULT_ROTATIONAL_THRESHOLD: f64 = 0.01;

/// A capture channel to convert: one CSV column, one pair of output arrays.
#[derive(Debug, Clone, Deserialize)]
pub struct ChannelConfig {
    /// CSV column header this channel reads from (e.g. `"X (m)"`).
    pub column: String,

    /// Physical unit of the column.
    pub unit: ChannelUnit,

    /// Suffix appended to the output array names (e.g. `"Lin"` gives
    /// `deltaStepsLin`). A single channel may leave this empty to emit the
    /// plain `deltaSteps`/`delayTimes` names.
    #[serde(default)]
    pub suffix: String,

    /// Reshape the channel with a cosine ease-in-out curve. Disable to
    /// preserve the captured path shape.
    #[serde(default = "default_easing")]
    pub easing: bool,

    /// Net displacement below which the channel is treated as motionless
    /// and easing is skipped. Defaults per unit when not set.
    #[serde(default, rename = "easing_threshold")]
    pub threshold: Option<f64>,

    /// Step rounding policy. Defaults per unit when not set.
    #[serde(default)]
    pub rounding: Option<RoundingMode>,
}

fn default_easing() -> bool {
    true
}

impl ChannelConfig {
    /// Get the effective easing threshold for this channel.
    ///
    /// Falls back to the per-unit default: 0.1 mm of travel for linear
    /// channels, 0.01° for rotational ones.
    pub fn effective_threshold(&self) -> f64 {
        self.threshold.unwrap_or(match self.unit {
            ChannelUnit::Metres => DEFAULT_LINEAR_THRESHOLD,
            ChannelUnit::Degrees => DEFAULT_ROTATIONAL_THRESHOLD,
        })
    }

    /// Get the effective rounding policy for this channel.
    ///
    /// The per-unit defaults keep regenerated tables compatible with
    /// existing firmware: linear channels round to the nearest step,
    /// rotational channels truncate.
    pub fn effective_rounding(&self) -> RoundingMode {
        self.rounding.unwrap_or(match self.unit {
            ChannelUnit::Metres => RoundingMode::Nearest,
            ChannelUnit::Degrees => RoundingMode::Truncate,
        })
    }
}
