use tracing_subscriber::{EnvFilter, fmt};

/// Install the global subscriber.
///
/// Logs go to stderr since stdout carries the generated program. `RUST_LOG`
/// overrides the default filter, which only lets warnings through.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // A second init (e.g. from tests) is harmless.
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
