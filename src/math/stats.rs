//! Grid-wide summary statistics and NDVI cover breakdown.

use rayon::prelude::*;

use crate::domain::{CoverBreakdown, CoverClass, GridStats, SpectralGrid};

/// Mean, extremes and population standard deviation over every pixel.
///
/// A NaN pixel yields a NaN mean and standard deviation; `min`/`max` skip NaN.
pub fn grid_stats(grid: &SpectralGrid) -> GridStats {
    let count = grid.as_matrix().len();
    let mean = grid.mean();

    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut sq = 0.0;
    for v in grid.values() {
        min = min.min(v);
        max = max.max(v);
        sq += (v - mean) * (v - mean);
    }

    GridStats {
        count,
        mean,
        min,
        max,
        std_dev: (sq / count as f64).sqrt(),
    }
}

/// Count pixels per `CoverClass` (thresholds at 0.0 / 0.2 / 0.5).
pub fn cover_breakdown(ndvi: &SpectralGrid) -> CoverBreakdown {
    ndvi.as_matrix()
        .as_slice()
        .par_iter()
        .fold(CoverBreakdown::default, |mut acc, &v| {
            acc.record(CoverClass::from_ndvi(v));
            acc
        })
        .reduce(CoverBreakdown::default, CoverBreakdown::merge)
}
