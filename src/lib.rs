//! # motion-tables
//!
//! Converts motion-capture CSV exports into stepper-motor step/delay tables
//! for firmware playback.
//!
//! ## Features
//!
//! - **Configuration-driven**: Define drive geometry and channels in TOML files
//! - **Cosine easing**: Optional ease-in-out reshaping matching the animation
//!   tool's own interpolation curve
//! - **Explicit policies**: Per-channel rounding mode, optional delay clamp,
//!   optional uniform resampling
//! - **Firmware-exact output**: Emits the `deltaSteps[]` / `delayTimes[]`
//!   array-literal text a firmware build consumes, bit-exact
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use motion_tables::{load_capture, load_config, process_capture, write_tables};
//!
//! // Load configuration from TOML
//! let config = motion_tables::load_config("motion.toml")?;
//!
//! // Read the capture CSV
//! let columns: Vec<&str> = config.required_columns().collect();
//! let capture = load_capture("pan_tilt.csv", &config.capture, &columns)?;
//!
//! // Convert and export
//! let tables = process_capture(&capture, &config)?;
//! let summary = write_tables("pan_tilt.txt".as_ref(), &tables)?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

// Core modules
pub mod capture;
pub mod config;
pub mod error;
pub mod export;
pub mod pipeline;

// Re-exports for ergonomic API
pub use capture::{load_capture, read_capture, CaptureTable};
pub use config::{load_config, parse_config, validate_config, SystemConfig};
pub use error::{ConfigError, DataError, Error, ExportError, Result};
pub use export::{write_tables, ExportSummary};
pub use pipeline::{process_capture, DeltaDelayTable, MotionTables};

// Unit and policy types
pub use config::units::{ChannelUnit, Microsteps, RoundingMode};
