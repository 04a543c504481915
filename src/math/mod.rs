//! Numeric kernels: spectral indices and grid statistics.

pub mod index;
pub mod stats;

pub use index::*;
pub use stats::*;
