use crate::{Error, Result};
use tracing_subscriber::{EnvFilter, prelude::*};

/// Builds the log filter from `RUST_LOG` when set, otherwise from the
/// configured level. Both accept full directive syntax such as
/// `summarizer_api=debug,tower_http=info`.
pub fn log_filter(rust_log: Option<&str>, configured_level: &str) -> Result<EnvFilter> {
    let directives = rust_log
        .filter(|value| !value.trim().is_empty())
        .unwrap_or(configured_level);

    EnvFilter::try_new(directives)
        .map_err(|e| Error::config(format!("Invalid log filter '{}': {}", directives, e)))
}

/// Installs the global JSON subscriber.
pub fn setup_logging(filter: EnvFilter) {
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}
