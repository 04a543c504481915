//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - loads `.env` and sets up logging
//! - parses CLI arguments
//! - runs the scan pipeline with the configured classifier
//! - prints the result line and optional summary/preview
//! - writes optional exports

use clap::Parser;
use tracing::info;

use crate::cli::{Command, PlotArgs, RunArgs};
use crate::domain::{BandRange, BandSource, GridShape, RunConfig, SceneConfig};
use crate::error::AppError;
use crate::models::MockAnomalyClassifier;

pub mod pipeline;

/// Entry point for the `ndvi` binary.
pub fn run() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    crate::logging::init_logging();

    // `ndvi` and `ndvi --seed 7` behave like `ndvi run ...`.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match cli.command {
        Command::Run(args) => handle_run(args),
        Command::Plot(args) => handle_plot(args),
    }
}

fn handle_run(args: RunArgs) -> Result<(), AppError> {
    let config = run_config_from_args(&args);

    // Stand-in model until a trained classifier is available.
    let classifier = MockAnomalyClassifier::default();
    let run = pipeline::run_scene(&config, &classifier)?;

    println!(
        "{}",
        crate::report::format_headline(run.stats.mean, &run.classification)
    );

    if config.summary {
        println!();
        print!("{}", crate::report::format_run_summary(&run));
    }

    if config.plot {
        println!();
        print!(
            "{}",
            crate::plot::render_ascii_grid(&run.ndvi, config.plot_width, config.plot_height)
        );
    }

    // Optional exports.
    if let Some(path) = &config.export_ndvi {
        crate::io::write_grid_csv(path, &run.ndvi)?;
        info!(path = %path.display(), "exported NDVI grid");
    }
    if let Some(path) = &config.export_report {
        crate::io::write_report_json(path, &crate::report::build_report(&run))?;
        info!(path = %path.display(), "exported run report");
    }

    Ok(())
}

fn handle_plot(args: PlotArgs) -> Result<(), AppError> {
    let grid = crate::io::read_band_csv(&args.grid)?;
    print!("{}", crate::plot::render_ascii_grid(&grid, args.width, args.height));
    Ok(())
}

pub fn run_config_from_args(args: &RunArgs) -> RunConfig {
    let source = match (&args.nir, &args.red) {
        (Some(nir), Some(red)) => BandSource::Files {
            nir: nir.clone(),
            red: red.clone(),
        },
        _ => BandSource::Synthetic(SceneConfig {
            shape: GridShape::new(args.height, args.width),
            nir_range: BandRange::new(args.nir_min, args.nir_max),
            red_range: BandRange::new(args.red_min, args.red_max),
            seed: args.seed,
        }),
    };

    RunConfig {
        source,
        summary: args.summary,
        plot: args.plot,
        plot_width: args.plot_width,
        plot_height: args.plot_height,
        export_ndvi: args.export_ndvi.clone(),
        export_report: args.export_report.clone(),
    }
}

/// Rewrite argv so `ndvi` defaults to `ndvi run`.
///
/// Rules:
/// - `ndvi`                      -> `ndvi run`
/// - `ndvi --seed 7 ...`         -> `ndvi run --seed 7 ...`
/// - `ndvi --help/--version/-h`  -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("run".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    if is_top_level_help_or_version {
        return argv;
    }

    if arg1.starts_with('-') {
        argv.insert(1, "run".to_string());
    }

    argv
}
