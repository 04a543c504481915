//! Synthetic NIR/RED scene generation.
//!
//! Stands in for a multispectral camera capture: every pixel of each band is
//! drawn independently from a uniform distribution over the configured
//! reflectance range. The defaults roughly match a healthy canopy
//! (high NIR, low RED), which yields NDVI around 0.5.

use rand::prelude::*;
use rand::rngs::StdRng;
use rand_distr::Uniform;
use tracing::debug;

use crate::domain::{BandRange, MAX_SCENE_PIXELS, SceneConfig, SpectralGrid};
use crate::error::AppError;

/// A generated NIR/RED pair plus the seed that reproduces it.
#[derive(Debug, Clone)]
pub struct Scene {
    pub nir: SpectralGrid,
    pub red: SpectralGrid,
    pub seed: u64,
}

/// Generate a synthetic scene.
///
/// When `config.seed` is `None` a seed is drawn from OS entropy; either way the
/// seed actually used is returned in `Scene::seed` so the run can be replayed.
/// NIR is always sampled before RED from the same RNG stream.
pub fn generate_scene(config: &SceneConfig) -> Result<Scene, AppError> {
    if config.shape.is_empty() {
        return Err(AppError::new(
            2,
            format!("Grid shape must be non-empty, got {}.", config.shape),
        ));
    }
    if config.shape.cell_count().is_none_or(|n| n > MAX_SCENE_PIXELS) {
        return Err(AppError::new(
            2,
            format!(
                "Grid shape {} exceeds the synthetic scene limit of {MAX_SCENE_PIXELS} pixels.",
                config.shape
            ),
        ));
    }
    validate_range("NIR", config.nir_range)?;
    validate_range("RED", config.red_range)?;

    let seed = config.seed.unwrap_or_else(rand::random);
    let mut rng = StdRng::seed_from_u64(seed);
    debug!(seed, shape = %config.shape, "generating synthetic scene");

    let nir = sample_band(&mut rng, config, config.nir_range)?;
    let red = sample_band(&mut rng, config, config.red_range)?;

    Ok(Scene { nir, red, seed })
}

fn sample_band(
    rng: &mut StdRng,
    config: &SceneConfig,
    range: BandRange,
) -> Result<SpectralGrid, AppError> {
    let dist = Uniform::new(range.low, range.high);
    SpectralGrid::from_fn(config.shape, |_, _| dist.sample(&mut *rng))
        .map_err(|e| AppError::new(4, format!("Failed to build synthetic band: {e}")))
}

fn validate_range(band: &str, range: BandRange) -> Result<(), AppError> {
    if !range.is_valid() {
        return Err(AppError::new(
            2,
            format!(
                "Invalid {band} range [{}, {}): bounds must be finite with min < max and a finite span.",
                range.low, range.high
            ),
        ));
    }
    Ok(())
}
