//! Anomaly classification models.
//!
//! Callers depend on the `AnomalyClassifier` trait only, so a trained model can
//! replace the stub without touching the pipeline.

pub mod classifier;

pub use classifier::*;
