//! Shared scan pipeline used by the CLI and the integration tests.
//!
//! acquire bands -> NDVI -> stats/cover -> classify
//!
//! Front-ends only deal with presentation (printing, exports).

use std::time::Instant;

use tracing::{debug, info};

use crate::data::generate_scene;
use crate::domain::{BandSource, ClassificationResult, CoverBreakdown, GridStats, RunConfig, SpectralGrid};
use crate::error::AppError;
use crate::io::read_band_csv;
use crate::math::{cover_breakdown, grid_stats, ndvi};
use crate::models::AnomalyClassifier;

/// All computed outputs of a single `ndvi run`.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub nir: SpectralGrid,
    pub red: SpectralGrid,
    pub ndvi: SpectralGrid,
    pub stats: GridStats,
    pub cover: CoverBreakdown,
    pub classification: ClassificationResult,
    /// `AnomalyClassifier::name` of the model that produced `classification`.
    pub classifier: String,
    /// Seed of the synthetic scene (`None` for file-sourced bands).
    pub seed: Option<u64>,
}

/// Execute the full pipeline with an explicitly supplied classifier.
pub fn run_scene(config: &RunConfig, classifier: &dyn AnomalyClassifier) -> Result<RunOutput, AppError> {
    let started = Instant::now();

    // 1) Acquire bands.
    let (nir, red, seed) = acquire_bands(&config.source)?;

    // 2) Index.
    let ndvi = ndvi(&nir, &red)?;
    debug!(shape = %ndvi.shape(), elapsed = ?started.elapsed(), "computed NDVI");

    // 3) Summaries.
    let stats = grid_stats(&ndvi);
    let cover = cover_breakdown(&ndvi);

    // 4) Classify.
    let classification = classifier.classify(&ndvi);
    info!(
        classifier = classifier.name(),
        label = %classification.label,
        confidence = classification.confidence,
        mean_ndvi = stats.mean,
        "scan classified"
    );

    Ok(RunOutput {
        nir,
        red,
        ndvi,
        stats,
        cover,
        classification,
        classifier: classifier.name().to_string(),
        seed,
    })
}

fn acquire_bands(source: &BandSource) -> Result<(SpectralGrid, SpectralGrid, Option<u64>), AppError> {
    match source {
        BandSource::Synthetic(scene) => {
            let scene = generate_scene(scene)?;
            Ok((scene.nir, scene.red, Some(scene.seed)))
        }
        BandSource::Files { nir, red } => {
            let nir = read_band_csv(nir)?;
            let red = read_band_csv(red)?;
            Ok((nir, red, None))
        }
    }
}
