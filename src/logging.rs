//! Logging setup

use tracing::Level;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable holding a tracing filter directive
pub const LOG_ENV: &str = "REPODECK_LOG";

/// Default level: warnings only, or debug when `verbose` is set
pub fn default_level(verbose: bool) -> Level {
    if verbose {
        Level::DEBUG
    } else {
        Level::WARN
    }
}

/// Build the filter from REPODECK_LOG, falling back to `default_level`
pub fn build_filter(default_level: Level) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(format!("repodeck={}", default_level)))
}

/// Install a plaintext subscriber writing to stderr.
/// Does nothing if a global subscriber is already set.
pub fn init(verbose: bool) {
    let filter = build_filter(default_level(verbose));
    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init();
}
