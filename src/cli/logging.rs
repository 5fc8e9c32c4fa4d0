//! Tracing initialization

use tracing_subscriber::EnvFilter;

/// Filter applied when RUST_LOG is not set
const DEFAULT_FILTER: &str = "pushnote=warn";

/// Initialize the tracing subscriber.
/// Diagnostics go to stderr so stdout stays scriptable.
pub fn init_logging() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
