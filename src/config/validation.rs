//! Configuration validation.

use std::collections::HashSet;

use crate::error::{ConfigError, Error, Result};

use super::SystemConfig;

/// Validate a system configuration.
///
/// Runs before any capture row is read. Checks:
/// - Drive parameters are positive (a zero pitch or tooth count would
///   divide by zero when deriving steps per metre)
/// - At least one channel is defined, with unique columns and suffixes
/// - Easing thresholds are finite and non-negative
/// - Output policies are well-formed (positive resample interval,
///   ordered clamp range)
pub fn validate_config(config: &SystemConfig) -> Result<()> {
    validate_drive(&config.drive)?;
    validate_capture(&config.capture)?;
    validate_output(&config.output)?;
    validate_channels(config)?;

    Ok(())
}

fn validate_drive(drive: &super::DriveConfig) -> Result<()> {
    if drive.pulley_teeth == 0 {
        return Err(Error::Config(ConfigError::InvalidPulleyTeeth(drive.pulley_teeth)));
    }

    if !(drive.belt_pitch_mm > 0.0) || !drive.belt_pitch_mm.is_finite() {
        return Err(Error::Config(ConfigError::InvalidBeltPitch(drive.belt_pitch_mm)));
    }

    if drive.steps_per_revolution == 0 {
        return Err(Error::Config(ConfigError::InvalidStepsPerRevolution(
            drive.steps_per_revolution,
        )));
    }

    if !(drive.gear_ratio > 0.0) || !drive.gear_ratio.is_finite() {
        return Err(Error::Config(ConfigError::InvalidGearRatio(drive.gear_ratio)));
    }

    Ok(())
}

fn validate_capture(capture: &super::CaptureConfig) -> Result<()> {
    // Fewer than 2 rows can never produce a delta
    if let Some(max_rows) = capture.max_rows {
        if max_rows < 2 {
            return Err(Error::Config(ConfigError::InvalidMaxRows(max_rows)));
        }
    }

    Ok(())
}

fn validate_output(output: &super::OutputConfig) -> Result<()> {
    if let Some(interval) = output.resample_interval {
        if !(interval > 0.0) || !interval.is_finite() {
            return Err(Error::Config(ConfigError::InvalidResampleInterval(interval)));
        }
    }

    if let Some(clamp) = output.delay_clamp {
        if !clamp.is_valid() {
            return Err(Error::Config(ConfigError::InvalidDelayClamp {
                min: clamp.min,
                max: clamp.max,
            }));
        }
    }

    Ok(())
}

fn validate_channels(config: &SystemConfig) -> Result<()> {
    if config.channels.is_empty() {
        return Err(Error::Config(ConfigError::NoChannels));
    }

    let mut columns = HashSet::new();
    let mut suffixes = HashSet::new();

    for channel in &config.channels {
        if !columns.insert(channel.column.as_str()) {
            return Err(Error::Config(ConfigError::DuplicateChannelColumn(
                channel.column.clone(),
            )));
        }

        if !suffixes.insert(channel.suffix.as_str()) {
            return Err(Error::Config(ConfigError::DuplicateChannelSuffix(
                channel.suffix.clone(),
            )));
        }

        if let Some(threshold) = channel.threshold {
            if !threshold.is_finite() || threshold < 0.0 {
                return Err(Error::Config(ConfigError::InvalidEasingThreshold {
                    column: channel.column.clone(),
                    threshold,
                }));
            }
        }
    }

    Ok(())
}
