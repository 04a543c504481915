//! Tracing setup for the `ndvi` binary.

use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_FILTER: &str = "warn,agro_ndvi=info";

/// Initialize logging to stderr.
///
/// `RUST_LOG` (from the environment or a `.env` file) overrides the default
/// filter. Stdout is reserved for the scan result.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
