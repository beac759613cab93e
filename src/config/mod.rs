//! Configuration module for motion-tables.
//!
//! Provides types for loading and validating drive, capture, and channel
//! configurations from TOML files.

mod capture;
mod channel;
mod drive;
mod loader;
mod output;
mod system;
pub mod units;
mod validation;

pub use capture::CaptureConfig;
pub use channel::{ChannelConfig, DEFAULT_LINEAR_THRESHOLD, DEFAULT_ROTATIONAL_THRESHOLD};
pub use drive::{DriveConfig, DriveGeometry};
pub use loader::{load_config, parse_config};
pub use output::{DelayClamp, OutputConfig};
pub use system::SystemConfig;
pub use validation::validate_config;

// Re-export unit types at config level
pub use units::{ChannelUnit, Microsteps, RoundingMode};
