//! Capture table loading.
//!
//! Reads the CSV exported by the animation tool into one time sequence plus
//! one aligned position sequence per configured channel. All input
//! invariants (row count, numeric cells, strictly increasing timestamps)
//! are checked here, before any computation starts.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::config::CaptureConfig;
use crate::error::{DataError, Error, Result};

/// Per-frame capture data: timestamps plus one value sequence per column.
#[derive(Debug, Clone)]
pub struct CaptureTable {
    times: Vec<f64>,
    columns: HashMap<String, Vec<f64>>,
}

impl CaptureTable {
    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Whether the table holds no rows.
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Timestamps in seconds, strictly increasing.
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Position samples for a column, aligned with [`times`](Self::times).
    pub fn values(&self, column: &str) -> Option<&[f64]> {
        self.columns.get(column).map(Vec::as_slice)
    }
}

/// Load a capture table from a CSV file.
///
/// # Errors
///
/// Returns a [`DataError`] if the file cannot be read, a required column is
/// missing, any cell is non-numeric, fewer than 2 rows remain after the
/// optional row cap, or timestamps are not strictly increasing.
pub fn load_capture<P: AsRef<Path>>(
    path: P,
    config: &CaptureConfig,
    columns: &[&str],
) -> Result<CaptureTable> {
    let file = File::open(path.as_ref())
        .map_err(|e| Error::Data(DataError::ReadError(e.to_string())))?;

    read_capture(file, config, columns)
}

/// Read a capture table from any reader producing CSV with a header row.
///
/// Same contract as [`load_capture`]; split out so tests and embedding
/// hosts can feed in-memory data.
pub fn read_capture<R: Read>(
    reader: R,
    config: &CaptureConfig,
    columns: &[&str],
) -> Result<CaptureTable> {
    let mut rdr = csv::Reader::from_reader(reader);

    let headers = rdr
        .headers()
        .map_err(|e| Error::Data(DataError::ReadError(e.to_string())))?
        .clone();

    let time_idx = find_column(&headers, &config.time_column)?;
    let column_indices = columns
        .iter()
        .map(|&c| Ok((c, find_column(&headers, c)?)))
        .collect::<Result<Vec<_>>>()?;

    let mut times: Vec<f64> = Vec::new();
    let mut values: Vec<Vec<f64>> = vec![Vec::new(); column_indices.len()];

    for (row, record) in rdr.records().enumerate() {
        if let Some(max_rows) = config.max_rows {
            if row >= max_rows {
                break;
            }
        }

        let record = record.map_err(|e| Error::Data(DataError::ReadError(e.to_string())))?;

        times.push(parse_cell(&record, time_idx, &config.time_column, row)?);
        for (slot, &(column, idx)) in values.iter_mut().zip(&column_indices) {
            slot.push(parse_cell(&record, idx, column, row)?);
        }
    }

    if times.len() < 2 {
        return Err(Error::Data(DataError::InsufficientRows(times.len())));
    }

    for (i, pair) in times.windows(2).enumerate() {
        let dt = pair[1] - pair[0];
        if dt <= 0.0 {
            return Err(Error::Data(DataError::NonPositiveInterval { index: i, dt }));
        }
    }

    let columns = column_indices
        .into_iter()
        .zip(values)
        .map(|((column, _), seq)| (column.to_string(), seq))
        .collect();

    Ok(CaptureTable { times, columns })
}

fn find_column(headers: &csv::StringRecord, name: &str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| Error::Data(DataError::MissingColumn(name.to_string())))
}

fn parse_cell(record: &csv::StringRecord, idx: usize, column: &str, row: usize) -> Result<f64> {
    let non_numeric = || {
        Error::Data(DataError::NonNumeric {
            column: column.to_string(),
            row,
        })
    };

    let value: f64 = record
        .get(idx)
        .ok_or_else(non_numeric)?
        .trim()
        .parse()
        .map_err(|_| non_numeric())?;

    // NaN and infinities would poison every later stage
    if !value.is_finite() {
        return Err(non_numeric());
    }

    Ok(value)
}
