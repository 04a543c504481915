//! Export NDVI grids (CSV) and run reports (JSON).
//!
//! The grid CSV uses the same headerless layout `band::read_band_csv` accepts,
//! so an exported NDVI grid can be fed back into `ndvi plot`.

use std::fs::File;
use std::path::Path;

use crate::domain::{RunReport, SpectralGrid};
use crate::error::AppError;

/// Write a grid as headerless CSV (one row per line, 6 decimals).
pub fn write_grid_csv(path: &Path, grid: &SpectralGrid) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create grid CSV '{}': {e}", path.display())))?;

    let mut writer = csv::WriterBuilder::new().has_headers(false).from_writer(file);
    for r in 0..grid.height() {
        let fields: Vec<String> = grid.row(r).iter().map(|v| format!("{v:.6}")).collect();
        writer
            .write_record(&fields)
            .map_err(|e| AppError::new(2, format!("Failed to write grid CSV row {}: {e}", r + 1)))?;
    }
    writer
        .flush()
        .map_err(|e| AppError::new(2, format!("Failed to flush grid CSV: {e}")))?;

    Ok(())
}

/// Write the run report as pretty JSON.
pub fn write_report_json(path: &Path, report: &RunReport) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create report JSON '{}': {e}", path.display())))?;

    serde_json::to_writer_pretty(file, report)
        .map_err(|e| AppError::new(2, format!("Failed to write report JSON: {e}")))?;

    Ok(())
}

/// Read a run report back (used by tooling and tests).
pub fn read_report_json(path: &Path) -> Result<RunReport, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::new(2, format!("Failed to open report JSON '{}': {e}", path.display())))?;
    let report: RunReport =
        serde_json::from_reader(file).map_err(|e| AppError::new(2, format!("Invalid report JSON: {e}")))?;
    Ok(report)
}
