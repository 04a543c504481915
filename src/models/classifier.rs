//! Classifier interface and the constant stand-in model.

use crate::domain::{ClassificationResult, SpectralGrid};

/// Label reported by `MockAnomalyClassifier`.
pub const MOCK_LABEL: &str = "disease";
/// Confidence reported by `MockAnomalyClassifier`.
pub const MOCK_CONFIDENCE: f64 = 0.95;

/// Anything that can label an NDVI (or raw band) grid.
///
/// Implementations must be cheap to share across threads; the pipeline takes
/// them as `&dyn AnomalyClassifier`.
pub trait AnomalyClassifier: Send + Sync {
    /// Short identifier for logs and reports.
    fn name(&self) -> &str;

    fn classify(&self, grid: &SpectralGrid) -> ClassificationResult;
}

/// Stand-in for a trained on-board model.
///
/// **This is not a model.** It never looks at the grid and always returns the
/// same label and confidence. It exists so the pipeline, output format and tests
/// can be exercised before a real inference backend is wired in behind
/// `AnomalyClassifier`.
#[derive(Debug, Clone, PartialEq)]
pub struct MockAnomalyClassifier {
    label: String,
    confidence: f64,
}

impl MockAnomalyClassifier {
    pub fn new(label: impl Into<String>, confidence: f64) -> Self {
        Self {
            label: label.into(),
            confidence,
        }
    }
}

impl Default for MockAnomalyClassifier {
    fn default() -> Self {
        Self::new(MOCK_LABEL, MOCK_CONFIDENCE)
    }
}

impl AnomalyClassifier for MockAnomalyClassifier {
    fn name(&self) -> &str {
        "mock"
    }

    fn classify(&self, _grid: &SpectralGrid) -> ClassificationResult {
        ClassificationResult::new(self.label.clone(), self.confidence)
    }
}
