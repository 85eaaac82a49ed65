//! Logging initialization.

use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber with stderr output.
///
/// `RUST_LOG` takes precedence over the provided level.
pub fn init_logging(level: &str) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();
}
