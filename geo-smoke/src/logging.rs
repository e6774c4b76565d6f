use crate::error::SmokeError;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install the global subscriber. `RUST_LOG` wins over the configured level.
///
/// Logs go to stderr so stdout carries only the report.
pub fn init_logging(level: &str) -> Result<(), SmokeError> {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    tracing_subscriber::registry()
        .with(env_filter(level)?)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| SmokeError::Logging(format!("Failed to initialize logging: {}", e)))
}

fn env_filter(level: &str) -> Result<EnvFilter, SmokeError> {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .map_err(|e| SmokeError::Logging(format!("Failed to create log filter: {}", e)))
}
