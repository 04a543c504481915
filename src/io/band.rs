//! Band CSV ingest.
//!
//! A band file is a plain numeric matrix:
//! - no header row
//! - one grid row per line, comma separated
//! - blank or whitespace-only lines and lines starting with `#` are ignored
//!
//! Every data line must have the same number of values. Parse failures are
//! reported with the 1-based line and column so the file can be fixed by hand.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::StringRecord;
use tracing::{debug, warn};

use crate::domain::SpectralGrid;
use crate::error::AppError;

/// Load a single band from a headerless CSV file.
pub fn read_band_csv(path: &Path) -> Result<SpectralGrid, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::new(2, format!("Failed to open band CSV '{}': {e}", path.display())))?;
    let grid = parse_band(file)
        .map_err(|e| AppError::new(e.exit_code(), format!("Band CSV '{}': {e}", path.display())))?;
    debug!(path = %path.display(), shape = %grid.shape(), "loaded band");
    Ok(grid)
}

/// Parse a band from any reader (see module docs for the format).
pub fn parse_band<R: Read>(reader: R) -> Result<SpectralGrid, AppError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .from_reader(reader);

    let mut rows = Vec::new();
    let mut non_finite = 0usize;

    for (idx, result) in reader.records().enumerate() {
        let record = result.map_err(|e| AppError::new(2, format!("CSV parse error: {e}")))?;
        // Fields are already trimmed, so a whitespace-only line is all empty.
        if record.iter().all(str::is_empty) {
            continue;
        }
        let line = record
            .position()
            .map(|p| p.line() as usize)
            .unwrap_or(idx + 1);

        let row = parse_row(&record, line)?;
        non_finite += row.iter().filter(|v| !v.is_finite()).count();
        rows.push(row);
    }

    if non_finite > 0 {
        warn!(non_finite, "band contains non-finite values");
    }

    Ok(SpectralGrid::from_rows(&rows)?)
}

fn parse_row(record: &StringRecord, line: usize) -> Result<Vec<f64>, AppError> {
    record
        .iter()
        .enumerate()
        .map(|(col, field)| {
            field.parse::<f64>().map_err(|_| {
                AppError::new(
                    2,
                    format!("line {line}, column {}: invalid number '{field}'", col + 1),
                )
            })
        })
        .collect()
}
