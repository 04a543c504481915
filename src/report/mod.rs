//! Reporting utilities: headline, run summary and JSON report assembly.

pub mod format;

pub use format::*;
