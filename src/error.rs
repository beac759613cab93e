//! Error types for motion-tables.
//!
//! Provides unified error handling across configuration, capture input, and export.

use std::fmt;

/// Result type alias using the library's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for all motion-tables operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Configuration parsing or validation error
    Config(ConfigError),
    /// Malformed or insufficient capture input
    Data(DataError),
    /// Output rendering or writing error
    Export(ExportError),
}

/// Configuration-related errors.
///
/// All of these are fatal at startup, before any row of capture data is
/// processed.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Failed to parse TOML configuration
    ParseError(String),
    /// Failed to read the configuration file
    IoError(String),
    /// Invalid microstep value (must be power of 2: 1, 2, 4, 8, 16, 32, 64, 128, 256)
    InvalidMicrosteps(u16),
    /// Invalid pulley tooth count (must be > 0)
    InvalidPulleyTeeth(u16),
    /// Invalid belt pitch in millimetres (must be > 0)
    InvalidBeltPitch(f64),
    /// Invalid base steps per revolution (must be > 0)
    InvalidStepsPerRevolution(u16),
    /// Invalid gear ratio (must be > 0)
    InvalidGearRatio(f64),
    /// No channels defined in the configuration
    NoChannels,
    /// Two channels share the same CSV column
    DuplicateChannelColumn(String),
    /// Two channels share the same array-name suffix
    DuplicateChannelSuffix(String),
    /// Invalid easing threshold (must be finite and >= 0)
    InvalidEasingThreshold {
        /// Channel column the threshold belongs to
        column: String,
        /// Offending value
        threshold: f64,
    },
    /// Invalid resample interval (must be > 0)
    InvalidResampleInterval(f64),
    /// Invalid delay clamp (min must be <= max)
    InvalidDelayClamp {
        /// Lower clamp bound in microseconds
        min: u32,
        /// Upper clamp bound in microseconds
        max: u32,
    },
    /// Invalid capture row cap (must be >= 2)
    InvalidMaxRows(usize),
}

/// Capture input errors.
///
/// Fatal: the run aborts and no output is written.
#[derive(Debug, Clone, PartialEq)]
pub enum DataError {
    /// Failed to read the capture CSV
    ReadError(String),
    /// A required column is missing from the CSV header
    MissingColumn(String),
    /// A cell could not be parsed as a finite number
    NonNumeric {
        /// Column the cell belongs to
        column: String,
        /// Zero-based data row index (header excluded)
        row: usize,
    },
    /// Fewer than 2 rows of data (no interval to compute)
    InsufficientRows(usize),
    /// Timestamps are not strictly increasing
    NonPositiveInterval {
        /// Index of the interval (between row i and row i+1)
        index: usize,
        /// The offending time delta in seconds
        dt: f64,
    },
}

/// Export errors.
///
/// Raised when the computed tables cannot be represented in the firmware's
/// declared array widths, or when the output file cannot be written.
#[derive(Debug, Clone, PartialEq)]
pub enum ExportError {
    /// Step delta does not fit the firmware's `int` width
    DeltaOutOfRange {
        /// Array-name suffix of the channel
        channel: String,
        /// Index within the delta array
        index: usize,
        /// The offending value
        value: i64,
    },
    /// Delay does not fit the firmware's `unsigned int` width
    DelayOutOfRange {
        /// Array-name suffix of the channel
        channel: String,
        /// Index within the delay array
        index: usize,
        /// The offending value
        value: u64,
    },
    /// Failed to write the output file
    IoError(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Configuration error: {}", e),
            Error::Data(e) => write!(f, "Data error: {}", e),
            Error::Export(e) => write!(f, "Export error: {}", e),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
            ConfigError::InvalidMicrosteps(v) => {
                write!(f, "Invalid microsteps: {}. Valid values: 1, 2, 4, 8, 16, 32, 64, 128, 256", v)
            }
            ConfigError::InvalidPulleyTeeth(v) => {
                write!(f, "Invalid pulley tooth count: {}. Must be > 0", v)
            }
            ConfigError::InvalidBeltPitch(v) => {
                write!(f, "Invalid belt pitch: {} mm. Must be > 0", v)
            }
            ConfigError::InvalidStepsPerRevolution(v) => {
                write!(f, "Invalid steps per revolution: {}. Must be > 0", v)
            }
            ConfigError::InvalidGearRatio(v) => write!(f, "Invalid gear ratio: {}. Must be > 0", v),
            ConfigError::NoChannels => write!(f, "Configuration defines no channels"),
            ConfigError::DuplicateChannelColumn(c) => {
                write!(f, "Duplicate channel column: '{}'", c)
            }
            ConfigError::DuplicateChannelSuffix(s) => {
                write!(f, "Duplicate channel suffix: '{}'", s)
            }
            ConfigError::InvalidEasingThreshold { column, threshold } => {
                write!(
                    f,
                    "Invalid easing threshold {} for channel '{}'. Must be finite and >= 0",
                    threshold, column
                )
            }
            ConfigError::InvalidResampleInterval(v) => {
                write!(f, "Invalid resample interval: {} s. Must be > 0", v)
            }
            ConfigError::InvalidDelayClamp { min, max } => {
                write!(f, "Invalid delay clamp: min ({}) must be <= max ({})", min, max)
            }
            ConfigError::InvalidMaxRows(v) => {
                write!(f, "Invalid max_rows: {}. Must be >= 2", v)
            }
        }
    }
}

impl fmt::Display for DataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataError::ReadError(msg) => write!(f, "Failed to read capture: {}", msg),
            DataError::MissingColumn(c) => write!(f, "Column '{}' not found in CSV header", c),
            DataError::NonNumeric { column, row } => {
                write!(f, "Non-numeric value in column '{}' at row {}", column, row)
            }
            DataError::InsufficientRows(n) => {
                write!(f, "CSV does not contain enough rows of data ({} rows, need >= 2)", n)
            }
            DataError::NonPositiveInterval { index, dt } => {
                write!(
                    f,
                    "Timestamps must be strictly increasing: interval {} has dt = {} s",
                    index, dt
                )
            }
        }
    }
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::DeltaOutOfRange { channel, index, value } => {
                write!(
                    f,
                    "Step delta {} at index {} of channel '{}' does not fit a 32-bit int",
                    value, index, channel
                )
            }
            ExportError::DelayOutOfRange { channel, index, value } => {
                write!(
                    f,
                    "Delay {} us at index {} of channel '{}' does not fit a 32-bit unsigned int",
                    value, index, channel
                )
            }
            ExportError::IoError(msg) => write!(f, "Failed to write output: {}", msg),
        }
    }
}

// Conversion impls
impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<DataError> for Error {
    fn from(e: DataError) -> Self {
        Error::Data(e)
    }
}

impl From<ExportError> for Error {
    fn from(e: ExportError) -> Self {
        Error::Export(e)
    }
}

impl std::error::Error for Error {}

impl std::error::Error for ConfigError {}

impl std::error::Error for DataError {}

impl std::error::Error for ExportError {}
