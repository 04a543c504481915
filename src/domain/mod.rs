//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - band grids and their shapes (`SpectralGrid`, `GridShape`)
//! - scene/run configuration (`SceneConfig`, `RunConfig`, `BandRange`)
//! - classifier output (`ClassificationResult`)

pub mod grid;
pub mod types;

pub use grid::*;
pub use types::*;
