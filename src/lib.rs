//! `agro-ndvi` library crate.
//!
//! The binary (`ndvi`) is a thin wrapper around this library so that:
//!
//! - the NDVI kernel and classifier are testable without spawning processes
//! - a real inference model can be plugged in behind `models::AnomalyClassifier`
//! - code stays easy to navigate as the project grows

pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod io;
pub mod logging;
pub mod math;
pub mod models;
pub mod plot;
pub mod report;
