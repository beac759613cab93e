//! System configuration - root configuration structure.

use serde::Deserialize;

use super::capture::CaptureConfig;
use super::channel::ChannelConfig;
use super::drive::DriveConfig;
use super::output::OutputConfig;

/// Root configuration structure from TOML.
#[derive(Debug, Clone, Deserialize)]
pub struct SystemConfig {
    /// Drive train the exported tables are computed for.
    pub drive: DriveConfig,

    /// Capture input options.
    #[serde(default)]
    pub capture: CaptureConfig,

    /// Output policies.
    #[serde(default)]
    pub output: OutputConfig,

    /// Channels to convert, in output order.
    pub channels: Vec<ChannelConfig>,
}

impl SystemConfig {
    /// Get a channel configuration by its CSV column.
    pub fn channel(&self, column: &str) -> Option<&ChannelConfig> {
        self.channels.iter().find(|c| c.column == column)
    }

    /// List the CSV columns required by the configured channels.
    pub fn required_columns(&self) -> impl Iterator<Item = &str> {
        self.channels.iter().map(|c| c.column.as_str())
    }
}
