//! Command-line parsing for the NDVI scanner.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the numeric code.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "ndvi", version, about = "Multispectral NDVI scan with anomaly classification")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Acquire NIR/RED bands, compute NDVI, classify, and print the result line.
    Run(RunArgs),
    /// Preview a previously exported NDVI grid CSV.
    Plot(PlotArgs),
}

/// Options for a scan.
#[derive(Debug, Parser, Clone)]
pub struct RunArgs {
    /// Synthetic grid height (pixels).
    #[arg(long, default_value_t = 100)]
    pub height: usize,

    /// Synthetic grid width (pixels).
    #[arg(long, default_value_t = 100)]
    pub width: usize,

    /// Random seed for synthetic bands (omit for a fresh scene each run).
    #[arg(long)]
    pub seed: Option<u64>,

    /// Lower bound of synthetic NIR reflectance.
    #[arg(long, default_value_t = 0.4)]
    pub nir_min: f64,

    /// Upper bound (exclusive) of synthetic NIR reflectance.
    #[arg(long, default_value_t = 1.0)]
    pub nir_max: f64,

    /// Lower bound of synthetic RED reflectance.
    #[arg(long, default_value_t = 0.1)]
    pub red_min: f64,

    /// Upper bound (exclusive) of synthetic RED reflectance.
    #[arg(long, default_value_t = 0.4)]
    pub red_max: f64,

    /// NIR band CSV (headerless). Requires `--red`; overrides synthetic generation.
    #[arg(long, value_name = "CSV", requires = "red")]
    pub nir: Option<PathBuf>,

    /// RED band CSV (headerless). Requires `--nir`.
    #[arg(long, value_name = "CSV", requires = "nir")]
    pub red: Option<PathBuf>,

    /// Print NDVI statistics and the cover breakdown after the result line.
    #[arg(long)]
    pub summary: bool,

    /// Render an ASCII preview of the NDVI grid.
    #[arg(long)]
    pub plot: bool,

    /// Preview width (columns).
    #[arg(long, default_value_t = 60)]
    pub plot_width: usize,

    /// Preview height (rows).
    #[arg(long, default_value_t = 20)]
    pub plot_height: usize,

    /// Export the NDVI grid to CSV.
    #[arg(long = "export-ndvi", value_name = "CSV")]
    pub export_ndvi: Option<PathBuf>,

    /// Export the run report to JSON.
    #[arg(long = "export-report", value_name = "JSON")]
    pub export_report: Option<PathBuf>,
}

/// Options for previewing a saved NDVI grid.
#[derive(Debug, Parser)]
pub struct PlotArgs {
    /// NDVI CSV produced by `ndvi run --export-ndvi`.
    #[arg(long, value_name = "CSV")]
    pub grid: PathBuf,

    /// Preview width (columns).
    #[arg(long, default_value_t = 60)]
    pub width: usize,

    /// Preview height (rows).
    #[arg(long, default_value_t = 20)]
    pub height: usize,
}
