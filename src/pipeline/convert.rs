//! Position-to-step conversion.

use crate::config::{ChannelConfig, ChannelUnit, DriveGeometry};

/// Convert a position sequence to motor steps for one channel.
///
/// Linear channels map through the belt geometry (steps per metre),
/// rotational channels through steps per revolution; each uses the
/// channel's effective rounding policy.
pub fn to_steps(values: &[f64], channel: &ChannelConfig, geometry: &DriveGeometry) -> Vec<i64> {
    let mode = channel.effective_rounding();

    values
        .iter()
        .map(|&v| match channel.unit {
            ChannelUnit::Metres => geometry.metres_to_steps(v, mode),
            ChannelUnit::Degrees => geometry.degrees_to_steps(v, mode),
        })
        .collect()
}
