//! Conversion pipeline for motion-tables.
//!
//! Runs each configured channel through the sequential stages: optional
//! uniform resampling, optional ease-in-out reshaping, unit-to-step
//! conversion, and delta/delay differentiation. Channels are independent;
//! they share only the capture's time base.

pub mod convert;
pub mod easing;
pub mod resample;
mod table;

pub use table::DeltaDelayTable;

use tracing::debug;

use crate::capture::CaptureTable;
use crate::config::{DriveGeometry, SystemConfig};
use crate::error::{DataError, Error, Result};

/// A computed table plus the channel's output identity.
#[derive(Debug, Clone)]
pub struct ChannelTable {
    /// Array-name suffix from the channel configuration.
    pub suffix: String,

    /// The delta/delay table.
    pub table: DeltaDelayTable,
}

/// All channel tables for one capture, ready for export.
#[derive(Debug, Clone)]
pub struct MotionTables {
    /// Number of intervals per channel (`rows - 1`), the firmware's
    /// `dataLength`.
    pub data_length: usize,

    /// Tables in configuration order.
    pub channels: Vec<ChannelTable>,
}

/// Run the full pipeline over a loaded capture.
///
/// # Errors
///
/// Returns a [`DataError`] if a configured column is absent from the
/// capture or a stage rejects the data (see [`DeltaDelayTable::compute`]).
pub fn process_capture(capture: &CaptureTable, config: &SystemConfig) -> Result<MotionTables> {
    let geometry = DriveGeometry::from_config(&config.drive);

    let mut channels = Vec::with_capacity(config.channels.len());
    let mut data_length = 0;

    for channel in &config.channels {
        let values = capture
            .values(&channel.column)
            .ok_or_else(|| Error::Data(DataError::MissingColumn(channel.column.clone())))?;

        let (times, values) = match config.output.resample_interval {
            Some(interval) => resample::resample_uniform(capture.times(), values, interval)?,
            None => (capture.times().to_vec(), values.to_vec()),
        };

        let values = if channel.easing {
            easing::apply(&values, channel.effective_threshold())
        } else {
            values
        };

        let steps = convert::to_steps(&values, channel, &geometry);
        let table = DeltaDelayTable::compute(&steps, &times, config.output.delay_clamp)?;

        if let Some((min, max)) = table.delta_range() {
            debug!(
                column = channel.column.as_str(),
                intervals = table.len(),
                min,
                max,
                "channel converted"
            );
        }

        data_length = table.len();
        channels.push(ChannelTable {
            suffix: channel.suffix.clone(),
            table,
        });
    }

    Ok(MotionTables { data_length, channels })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capture::read_capture;
    use crate::config::parse_config;

    const CONFIG: &str = r#"
[drive]
pulley_teeth = 36
belt_pitch_mm = 2.0
steps_per_revolution = 200
microsteps = 8

[[channels]]
column = "X (m)"
unit = "metres"
suffix = "Lin"

[[channels]]
column = "RotX (deg)"
unit = "degrees"
suffix = "Rot"
"#;

    const CSV: &str = "\
Time (s),X (m),RotX (deg)
0.0,0.000,10.0
0.1,0.020,10.0
0.2,0.050,10.0
0.3,0.072,10.0
";

    fn load() -> (CaptureTable, SystemConfig) {
        let config = parse_config(CONFIG).unwrap();
        let columns: Vec<&str> = config.required_columns().collect();
        let capture = read_capture(CSV.as_bytes(), &config.capture, &columns).unwrap();
        (capture, config)
    }

    #[test]
    fn test_channels_share_data_length() {
        let (capture, config) = load();
        let tables = process_capture(&capture, &config).unwrap();

        assert_eq!(tables.data_length, 3);
        assert_eq!(tables.channels.len(), 2);
        for channel in &tables.channels {
            assert_eq!(channel.table.len(), 3);
        }
    }

    #[test]
    fn test_eased_linear_channel_lands_on_endpoints() {
        let (capture, config) = load();
        let tables = process_capture(&capture, &config).unwrap();

        // 0.072 m is exactly one revolution = 1600 steps; the eased curve
        // must deliver all of them regardless of intermediate samples.
        let lin = &tables.channels[0];
        assert_eq!(lin.suffix, "Lin");
        let sum: i64 = lin.table.delta_steps.iter().sum();
        assert_eq!(sum, 1600);
    }

    #[test]
    fn test_motionless_rotation_is_all_zero() {
        let (capture, config) = load();
        let tables = process_capture(&capture, &config).unwrap();

        let rot = &tables.channels[1];
        assert_eq!(rot.suffix, "Rot");
        assert!(rot.table.delta_steps.iter().all(|&d| d == 0));
        assert!(rot.table.delay_us.iter().all(|&d| d == 0));
    }

    #[test]
    fn test_resample_changes_data_length() {
        let config = parse_config(&CONFIG.replacen(
            "[[channels]]",
            "[output]\nresample_interval_s = 0.15\n\n[[channels]]",
            1,
        ))
        .unwrap();
        let columns: Vec<&str> = config.required_columns().collect();
        let capture = read_capture(CSV.as_bytes(), &config.capture, &columns).unwrap();

        let tables = process_capture(&capture, &config).unwrap();

        // 0.0, 0.15, 0.30 -> 3 samples, 2 intervals
        assert_eq!(tables.data_length, 2);
    }

    #[test]
    fn test_easing_disabled_follows_path() {
        let config = parse_config(&CONFIG.replace(
            "column = \"X (m)\"\nunit = \"metres\"",
            "column = \"X (m)\"\nunit = \"metres\"\neasing = false",
        ))
        .unwrap();
        let columns: Vec<&str> = config.required_columns().collect();
        let capture = read_capture(CSV.as_bytes(), &config.capture, &columns).unwrap();

        let tables = process_capture(&capture, &config).unwrap();

        // Raw samples: 0, 444, 1111, 1600 steps (nearest of x * 22222.2)
        let lin = &tables.channels[0];
        assert_eq!(lin.table.delta_steps, vec![444, 667, 489]);
    }
}
