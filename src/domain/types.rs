//! Shared domain types.
//!
//! These types are kept lightweight and serializable so they can be:
//!
//! - used in-memory by the pipeline
//! - exported to the JSON run report
//! - asserted on directly in tests

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::GridShape;

/// Default NIR reflectance range for synthetic scenes.
pub const DEFAULT_NIR_RANGE: BandRange = BandRange { low: 0.4, high: 1.0 };
/// Default RED reflectance range for synthetic scenes.
pub const DEFAULT_RED_RANGE: BandRange = BandRange { low: 0.1, high: 0.4 };
/// Default synthetic scene edge length (pixels).
pub const DEFAULT_GRID_EDGE: usize = 100;
/// Upper bound on synthetic scene size (pixels per band).
pub const MAX_SCENE_PIXELS: usize = 25_000_000;

/// Half-open reflectance interval `[low, high)` used for uniform sampling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BandRange {
    pub low: f64,
    pub high: f64,
}

impl BandRange {
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Finite, ordered bounds whose span `high - low` is also finite.
    pub fn is_valid(self) -> bool {
        self.low.is_finite()
            && self.high.is_finite()
            && self.high > self.low
            && (self.high - self.low).is_finite()
    }

    pub fn contains(self, value: f64) -> bool {
        value >= self.low && value < self.high
    }
}

/// Parameters for generating a synthetic NIR/RED scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneConfig {
    pub shape: GridShape,
    pub nir_range: BandRange,
    pub red_range: BandRange,
    /// Fixed seed for reproducible scenes; `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            shape: GridShape::new(DEFAULT_GRID_EDGE, DEFAULT_GRID_EDGE),
            nir_range: DEFAULT_NIR_RANGE,
            red_range: DEFAULT_RED_RANGE,
            seed: None,
        }
    }
}

/// Where the NIR/RED bands come from.
#[derive(Debug, Clone, PartialEq)]
pub enum BandSource {
    Synthetic(SceneConfig),
    /// Headerless numeric CSV files, one grid row per line.
    Files { nir: PathBuf, red: PathBuf },
}

/// A full run's configuration as understood by the pipeline.
///
/// This is derived from CLI flags (plus defaults).
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub source: BandSource,

    /// Print the multi-line summary (stats + cover breakdown) after the headline.
    pub summary: bool,
    pub plot: bool,
    pub plot_width: usize,
    pub plot_height: usize,

    pub export_ndvi: Option<PathBuf>,
    pub export_report: Option<PathBuf>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            source: BandSource::Synthetic(SceneConfig::default()),
            summary: false,
            plot: false,
            plot_width: 60,
            plot_height: 20,
            export_ndvi: None,
            export_report: None,
        }
    }
}

/// Output of an anomaly classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub label: String,
    /// Nominally in `[0, 1]`.
    pub confidence: f64,
}

impl ClassificationResult {
    pub fn new(label: impl Into<String>, confidence: f64) -> Self {
        Self {
            label: label.into(),
            confidence,
        }
    }

    pub fn confidence_percent(&self) -> f64 {
        self.confidence * 100.0
    }
}

/// Summary statistics over every pixel of a grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridStats {
    pub count: usize,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
    /// Population standard deviation.
    pub std_dev: f64,
}

/// Coarse land-cover category from an NDVI value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoverClass {
    /// NDVI < 0.0: water, cloud, snow.
    Water,
    /// 0.0 <= NDVI < 0.2
    BareSoil,
    /// 0.2 <= NDVI < 0.5
    Sparse,
    /// NDVI >= 0.5
    Dense,
}

impl CoverClass {
    pub const ALL: [CoverClass; 4] = [
        CoverClass::Water,
        CoverClass::BareSoil,
        CoverClass::Sparse,
        CoverClass::Dense,
    ];

    /// Classify a single NDVI value; `None` for NaN/inf.
    pub fn from_ndvi(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        Some(if value < 0.0 {
            CoverClass::Water
        } else if value < 0.2 {
            CoverClass::BareSoil
        } else if value < 0.5 {
            CoverClass::Sparse
        } else {
            CoverClass::Dense
        })
    }

    pub fn display_name(self) -> &'static str {
        match self {
            CoverClass::Water => "water",
            CoverClass::BareSoil => "bare soil",
            CoverClass::Sparse => "sparse vegetation",
            CoverClass::Dense => "dense vegetation",
        }
    }
}

/// Pixel counts per cover class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverBreakdown {
    pub water: usize,
    pub bare_soil: usize,
    pub sparse: usize,
    pub dense: usize,
    /// Non-finite pixels.
    pub unclassified: usize,
}

impl CoverBreakdown {
    pub fn count(&self, class: CoverClass) -> usize {
        match class {
            CoverClass::Water => self.water,
            CoverClass::BareSoil => self.bare_soil,
            CoverClass::Sparse => self.sparse,
            CoverClass::Dense => self.dense,
        }
    }

    pub fn total(&self) -> usize {
        self.water + self.bare_soil + self.sparse + self.dense + self.unclassified
    }

    /// Fraction of all pixels (including unclassified) in `class`.
    pub fn fraction(&self, class: CoverClass) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        self.count(class) as f64 / total as f64
    }

    pub(crate) fn record(&mut self, class: Option<CoverClass>) {
        match class {
            Some(CoverClass::Water) => self.water += 1,
            Some(CoverClass::BareSoil) => self.bare_soil += 1,
            Some(CoverClass::Sparse) => self.sparse += 1,
            Some(CoverClass::Dense) => self.dense += 1,
            None => self.unclassified += 1,
        }
    }

    pub(crate) fn merge(mut self, other: CoverBreakdown) -> Self {
        self.water += other.water;
        self.bare_soil += other.bare_soil;
        self.sparse += other.sparse;
        self.dense += other.dense;
        self.unclassified += other.unclassified;
        self
    }
}

/// A saved run report (JSON).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub tool: String,
    pub generated_at: DateTime<Utc>,
    pub shape: GridShape,
    /// `None` for file-sourced bands or unseeded synthetic scenes.
    pub seed: Option<u64>,
    pub classifier: String,
    pub ndvi: GridStats,
    pub cover: CoverBreakdown,
    pub classification: ClassificationResult,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cover_class_thresholds() {
        assert_eq!(CoverClass::from_ndvi(-0.3), Some(CoverClass::Water));
        assert_eq!(CoverClass::from_ndvi(0.0), Some(CoverClass::BareSoil));
        assert_eq!(CoverClass::from_ndvi(0.19), Some(CoverClass::BareSoil));
        assert_eq!(CoverClass::from_ndvi(0.2), Some(CoverClass::Sparse));
        assert_eq!(CoverClass::from_ndvi(0.5), Some(CoverClass::Dense));
        assert_eq!(CoverClass::from_ndvi(1.2), Some(CoverClass::Dense));
        assert_eq!(CoverClass::from_ndvi(f64::NAN), None);
    }

    #[test]
    fn breakdown_fraction_handles_empty() {
        let empty = CoverBreakdown::default();
        assert_eq!(empty.fraction(CoverClass::Dense), 0.0);

        let mut b = CoverBreakdown::default();
        b.record(Some(CoverClass::Dense));
        b.record(Some(CoverClass::Dense));
        b.record(Some(CoverClass::Water));
        b.record(None);
        assert_eq!(b.total(), 4);
        assert!((b.fraction(CoverClass::Dense) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn default_scene_matches_documented_ranges() {
        let scene = SceneConfig::default();
        assert_eq!(scene.shape, GridShape::new(100, 100));
        assert_eq!(scene.nir_range, BandRange::new(0.4, 1.0));
        assert_eq!(scene.red_range, BandRange::new(0.1, 0.4));
        assert!(scene.nir_range.is_valid());
        assert!(!BandRange::new(0.5, 0.5).is_valid());
        assert!(!BandRange::new(f64::NAN, 1.0).is_valid());
        assert!(!BandRange::new(-1e308, 1e308).is_valid());
        assert!(BandRange::new(-1e307, 1e307).is_valid());
    }
}
