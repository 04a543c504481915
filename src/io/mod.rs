//! Input/output helpers.
//!
//! - headerless band CSV ingest (`band`)
//! - NDVI grid CSV and run report JSON exports (`export`)

pub mod band;
pub mod export;

pub use band::*;
pub use export::*;
