//! Capture input configuration.

use serde::Deserialize;

/// Options for reading the capture CSV.
#[derive(Debug, Clone, Deserialize)]
pub struct CaptureConfig {
    /// Header of the timestamp column, in seconds.
    #[serde(default = "default_time_column")]
    pub time_column: String,

    /// Keep only the first `max_rows` data rows, trimming an over-long
    /// capture. Unset reads the whole file.
    #[serde(default)]
    pub max_rows: Option<usize>,
}

fn default_time_column() -> String {
    "Time (s)".to_string()
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            time_column: default_time_column(),
            max_rows: None,
        }
    }
}
