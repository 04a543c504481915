//! End-to-end tests for the scan pipeline through the public library API.

use std::path::PathBuf;

use agro_ndvi::app::pipeline::run_scene;
use agro_ndvi::domain::{
    BandSource, ClassificationResult, GridShape, RunConfig, SceneConfig, SpectralGrid,
};
use agro_ndvi::io::{read_band_csv, read_report_json, write_grid_csv, write_report_json};
use agro_ndvi::math::ndvi;
use agro_ndvi::models::{AnomalyClassifier, MockAnomalyClassifier};
use agro_ndvi::report::{build_report, format_headline};

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("agro-ndvi-it-{}-{name}", std::process::id()))
}

/// Threshold classifier used to check that the pipeline really goes through the trait.
struct LowVigor;

impl AnomalyClassifier for LowVigor {
    fn name(&self) -> &str {
        "low-vigor"
    }

    fn classify(&self, grid: &SpectralGrid) -> ClassificationResult {
        if grid.mean() < 0.2 {
            ClassificationResult::new("stress", 0.8)
        } else {
            ClassificationResult::new("healthy", 0.6)
        }
    }
}

#[test]
fn default_scene_headline() {
    let config = RunConfig {
        source: BandSource::Synthetic(SceneConfig {
            seed: Some(2025),
            ..SceneConfig::default()
        }),
        ..RunConfig::default()
    };
    let run = run_scene(&config, &MockAnomalyClassifier::default()).unwrap();

    assert_eq!(run.ndvi.shape(), GridShape::new(100, 100));
    // Uniform NIR [0.4, 1.0) and RED [0.1, 0.4) put the mean well inside (0.2, 0.7).
    assert!(run.stats.mean > 0.2 && run.stats.mean < 0.7, "mean {}", run.stats.mean);

    let line = format_headline(run.stats.mean, &run.classification);
    assert!(line.starts_with("NDVI: 0."), "{line}");
    assert!(line.ends_with(", Anomaly: disease (95.0%)"), "{line}");
}

#[test]
fn same_seed_same_result() {
    let config = RunConfig {
        source: BandSource::Synthetic(SceneConfig {
            shape: GridShape::new(16, 16),
            seed: Some(11),
            ..SceneConfig::default()
        }),
        ..RunConfig::default()
    };
    let a = run_scene(&config, &MockAnomalyClassifier::default()).unwrap();
    let b = run_scene(&config, &MockAnomalyClassifier::default()).unwrap();
    assert_eq!(a.ndvi, b.ndvi);
    assert_eq!(a.stats, b.stats);
}

#[test]
fn classifier_is_injected() {
    let config = RunConfig {
        source: BandSource::Synthetic(SceneConfig {
            shape: GridShape::new(8, 8),
            seed: Some(5),
            ..SceneConfig::default()
        }),
        ..RunConfig::default()
    };
    let run = run_scene(&config, &LowVigor).unwrap();
    assert_eq!(run.classifier, "low-vigor");
    assert_eq!(run.classification, ClassificationResult::new("healthy", 0.6));
}

#[test]
fn band_files_feed_the_pipeline() {
    let nir = SpectralGrid::from_rows(&[vec![0.5, 0.0], vec![0.8, 0.6]]).unwrap();
    let red = SpectralGrid::from_rows(&[vec![0.25, 0.0], vec![0.1, 0.6]]).unwrap();
    let nir_path = temp_path("nir.csv");
    let red_path = temp_path("red.csv");
    write_grid_csv(&nir_path, &nir).unwrap();
    write_grid_csv(&red_path, &red).unwrap();

    let config = RunConfig {
        source: BandSource::Files {
            nir: nir_path.clone(),
            red: red_path.clone(),
        },
        ..RunConfig::default()
    };
    let run = run_scene(&config, &MockAnomalyClassifier::default()).unwrap();
    std::fs::remove_file(&nir_path).ok();
    std::fs::remove_file(&red_path).ok();

    assert_eq!(run.seed, None);
    assert_eq!(run.ndvi, ndvi(&nir, &red).unwrap());
    assert!((run.ndvi.get(0, 0).unwrap() - 0.3333).abs() < 1e-4);
    assert_eq!(run.ndvi.get(0, 1), Some(0.0));
}

#[test]
fn mismatched_band_files_fail_with_input_error() {
    let nir_path = temp_path("nir-mismatch.csv");
    let red_path = temp_path("red-mismatch.csv");
    std::fs::write(&nir_path, "0.5,0.5\n").unwrap();
    std::fs::write(&red_path, "0.2\n0.2\n").unwrap();

    let config = RunConfig {
        source: BandSource::Files {
            nir: nir_path.clone(),
            red: red_path.clone(),
        },
        ..RunConfig::default()
    };
    let err = run_scene(&config, &MockAnomalyClassifier::default()).unwrap_err();
    std::fs::remove_file(&nir_path).ok();
    std::fs::remove_file(&red_path).ok();

    assert_eq!(err.exit_code(), 2);
    assert!(err.to_string().contains("Invalid input shape"), "{err}");
}

#[test]
fn exports_reload() {
    let config = RunConfig {
        source: BandSource::Synthetic(SceneConfig {
            shape: GridShape::new(5, 7),
            seed: Some(99),
            ..SceneConfig::default()
        }),
        ..RunConfig::default()
    };
    let run = run_scene(&config, &MockAnomalyClassifier::default()).unwrap();

    let grid_path = temp_path("ndvi.csv");
    let report_path = temp_path("report.json");
    write_grid_csv(&grid_path, &run.ndvi).unwrap();
    write_report_json(&report_path, &build_report(&run)).unwrap();

    let grid = read_band_csv(&grid_path).unwrap();
    let report = read_report_json(&report_path).unwrap();
    std::fs::remove_file(&grid_path).ok();
    std::fs::remove_file(&report_path).ok();

    assert_eq!(grid.shape(), GridShape::new(5, 7));
    assert_eq!(report.seed, Some(99));
    assert_eq!(report.cover.total(), 35);
    assert_eq!(report.classification.label, "disease");
}
