//! Unit tests for configuration parsing and validation.

use motion_tables::error::{ConfigError, Error};
use motion_tables::{parse_config, ChannelUnit, RoundingMode};

/// Test that a complete configuration parses with every policy resolved.
#[test]
fn test_full_config_parses() {
    let toml_str = r#"
[drive]
pulley_teeth = 20
belt_pitch_mm = 2.0
steps_per_revolution = 200
microsteps = 16

[capture]
time_column = "Time (s)"

[output]
resample_interval_s = 0.04

[[channels]]
column = "X (m)"
unit = "metres"
suffix = "X"

[[channels]]
column = "RotX (deg)"
unit = "degrees"
suffix = "Tilt"
easing = false
"#;

    let config = parse_config(toml_str).expect("Failed to parse TOML");

    assert_eq!(config.drive.total_steps_per_revolution(), 3200);
    assert_eq!(config.channels.len(), 2);

    let x = config.channel("X (m)").unwrap();
    assert_eq!(x.unit, ChannelUnit::Metres);
    assert!(x.easing);
    assert_eq!(x.effective_rounding(), RoundingMode::Nearest);

    let tilt = config.channel("RotX (deg)").unwrap();
    assert!(!tilt.easing);
    assert_eq!(tilt.effective_rounding(), RoundingMode::Truncate);
}

/// Test that channel order in the file is preserved (it defines array order
/// in the export).
#[test]
fn test_channel_order_preserved() {
    let toml_str = r#"
[drive]
pulley_teeth = 20
belt_pitch_mm = 2.0
steps_per_revolution = 200

[[channels]]
column = "B"
unit = "degrees"
suffix = "B"

[[channels]]
column = "A"
unit = "degrees"
suffix = "A"
"#;

    let config = parse_config(toml_str).unwrap();
    let columns: Vec<&str> = config.required_columns().collect();
    assert_eq!(columns, ["B", "A"]);
}

/// Test that an invalid microstep divisor is rejected at parse time.
#[test]
fn test_invalid_microsteps_rejected() {
    let toml_str = r#"
[drive]
pulley_teeth = 20
belt_pitch_mm = 2.0
steps_per_revolution = 200
microsteps = 48

[[channels]]
column = "X (m)"
unit = "metres"
"#;

    assert!(parse_config(toml_str).is_err());
}

/// Test that an unknown channel unit is rejected.
#[test]
fn test_unknown_unit_rejected() {
    let toml_str = r#"
[drive]
pulley_teeth = 20
belt_pitch_mm = 2.0
steps_per_revolution = 200

[[channels]]
column = "X"
unit = "furlongs"
"#;

    assert!(matches!(
        parse_config(toml_str),
        Err(Error::Config(ConfigError::ParseError(_)))
    ));
}

/// Test that a config-file read failure surfaces as an I/O config error.
#[test]
fn test_missing_config_file() {
    let result = motion_tables::load_config("/nonexistent/motion.toml");
    assert!(matches!(result, Err(Error::Config(ConfigError::IoError(_)))));
}
