//! Tracing subscriber setup for the binary

use tracing_subscriber::EnvFilter;

/// Result type for logging setup
pub type LoggingResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

/// Install a fmt subscriber that writes to stderr
///
/// `RUST_LOG` takes precedence over `default_level`. Stdout is left alone so
/// JSON and CSV output stay machine readable.
pub fn init_logging(default_level: &str) -> LoggingResult {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
}
