//! Firmware array export.
//!
//! Serializes the computed tables as C array-initializer text, the on-disk
//! contract the firmware build consumes. Two layouts exist in the field and
//! both are preserved bit-exact: the single-axis form (`deltaSteps` /
//! `delayTimes`) and the per-axis form with suffixed names and a comment
//! header per axis.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Error, ExportError, Result};
use crate::pipeline::{ChannelTable, MotionTables};

/// Success summary for the completed export.
#[derive(Debug, Clone)]
pub struct ExportSummary {
    /// Where the table text was written.
    pub path: PathBuf,

    /// The emitted `dataLength` value.
    pub data_length: usize,

    /// Per-channel delta extremes, in output order.
    pub ranges: Vec<ChannelRange>,
}

/// Delta extremes of one exported channel.
#[derive(Debug, Clone)]
pub struct ChannelRange {
    /// Array-name suffix of the channel (may be empty).
    pub suffix: String,

    /// Smallest step delta.
    pub min_delta: i32,

    /// Largest step delta.
    pub max_delta: i32,
}

/// Render the firmware text for the given tables.
///
/// # Errors
///
/// Returns an [`ExportError`] if any delta does not fit a 32-bit `int` or
/// any delay a 32-bit `unsigned int`.
pub fn render(tables: &MotionTables) -> Result<String> {
    let mut out = String::new();

    // Single unsuffixed channel keeps the legacy layout
    let legacy = tables.channels.len() == 1 && tables.channels[0].suffix.is_empty();

    let _ = writeln!(out, "const int dataLength = {};", tables.data_length);

    if legacy {
        let channel = &tables.channels[0];
        let (deltas, delays) = narrow_channel(channel)?;
        let _ = writeln!(out, "int deltaSteps[dataLength] = {{\n  {}\n}};", join(&deltas));
        let _ = writeln!(
            out,
            "unsigned int delayTimes[dataLength] = {{\n  {}\n}};",
            join(&delays)
        );
    } else {
        let _ = writeln!(out);
        for channel in &tables.channels {
            let (deltas, delays) = narrow_channel(channel)?;
            let _ = writeln!(out, "// --- {} axis ---", channel.suffix);
            let _ = writeln!(
                out,
                "int deltaSteps{}[dataLength] = {{\n  {}\n}};",
                channel.suffix,
                join(&deltas)
            );
            let _ = writeln!(
                out,
                "unsigned int delayTimes{}[dataLength] = {{\n  {}\n}};\n",
                channel.suffix,
                join(&delays)
            );
        }
    }

    Ok(out)
}

/// Render and write the tables to `path`.
///
/// The text is rendered fully before the file is touched, so a width
/// failure leaves no partial output behind.
pub fn write_tables(path: &Path, tables: &MotionTables) -> Result<ExportSummary> {
    let text = render(tables)?;

    fs::write(path, text).map_err(|e| Error::Export(ExportError::IoError(e.to_string())))?;
    debug!(path = %path.display(), "tables written");

    let ranges = tables
        .channels
        .iter()
        .map(|c| {
            let (min, max) = c.table.delta_range().unwrap_or((0, 0));
            ChannelRange {
                suffix: c.suffix.clone(),
                min_delta: min as i32,
                max_delta: max as i32,
            }
        })
        .collect();

    Ok(ExportSummary {
        path: path.to_path_buf(),
        data_length: tables.data_length,
        ranges,
    })
}

/// Narrow one channel's table to the firmware's declared widths.
fn narrow_channel(channel: &ChannelTable) -> Result<(Vec<i32>, Vec<u32>)> {
    let deltas = channel
        .table
        .delta_steps
        .iter()
        .enumerate()
        .map(|(index, &value)| {
            i32::try_from(value).map_err(|_| {
                Error::Export(ExportError::DeltaOutOfRange {
                    channel: channel.suffix.clone(),
                    index,
                    value,
                })
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let delays = channel
        .table
        .delay_us
        .iter()
        .enumerate()
        .map(|(index, &value)| {
            u32::try_from(value).map_err(|_| {
                Error::Export(ExportError::DelayOutOfRange {
                    channel: channel.suffix.clone(),
                    index,
                    value,
                })
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok((deltas, delays))
}

fn join<T: std::fmt::Display>(values: &[T]) -> String {
    values
        .iter()
        .map(T::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
