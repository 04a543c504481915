//! Formatted terminal output and report assembly.
//!
//! We keep formatting code in one place so:
//! - the numeric code stays clean and testable
//! - output changes are localized (the headline line is relied on by scripts)

use chrono::Utc;

use crate::app::pipeline::RunOutput;
use crate::domain::{ClassificationResult, CoverClass, RunReport};

/// The one-line result: mean NDVI (3 dp) plus label and confidence (1 dp, percent).
pub fn format_headline(mean_ndvi: f64, classification: &ClassificationResult) -> String {
    format!(
        "NDVI: {:.3}, Anomaly: {} ({:.1}%)",
        mean_ndvi,
        classification.label,
        classification.confidence_percent()
    )
}

/// Multi-line summary: scene, NDVI statistics, cover breakdown, classifier.
pub fn format_run_summary(run: &RunOutput) -> String {
    let mut out = String::new();

    out.push_str("=== ndvi - Multispectral NDVI Scan ===\n");
    out.push_str(&format!("Grid: {}\n", run.ndvi.shape()));
    match run.seed {
        Some(seed) => out.push_str(&format!("Source: synthetic (seed={seed})\n")),
        None => out.push_str("Source: band files\n"),
    }

    out.push_str(&format!(
        "NDVI: mean={:.3} std={:.3} min={:.3} max={:.3}\n",
        run.stats.mean, run.stats.std_dev, run.stats.min, run.stats.max
    ));

    out.push_str("\nCover:\n");
    for class in CoverClass::ALL {
        out.push_str(&format!(
            "  {:<18} {:>8} {:>6.1}%\n",
            class.display_name(),
            run.cover.count(class),
            run.cover.fraction(class) * 100.0
        ));
    }
    if run.cover.unclassified > 0 {
        out.push_str(&format!("  {:<18} {:>8}\n", "no data", run.cover.unclassified));
    }

    out.push_str(&format!(
        "\nClassifier: {} -> {} ({:.1}%)\n",
        run.classifier,
        run.classification.label,
        run.classification.confidence_percent()
    ));

    out
}

/// Assemble the JSON run report.
pub fn build_report(run: &RunOutput) -> RunReport {
    RunReport {
        tool: "ndvi".to_string(),
        generated_at: Utc::now(),
        shape: run.ndvi.shape(),
        seed: run.seed,
        classifier: run.classifier.clone(),
        ndvi: run.stats,
        cover: run.cover,
        classification: run.classification.clone(),
    }
}
