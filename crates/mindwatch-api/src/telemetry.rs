//! Tracing subscriber setup.

use std::io;

use anyhow::{anyhow, Result};
use tracing_subscriber::{fmt, EnvFilter};

use mindwatch_core::config::{LogFormat, LoggingConfig};

/// Install the global subscriber. Output goes to stderr.
///
/// `RUST_LOG` wins over `logging.level` when set.
pub fn init_tracing(logging: &LoggingConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&logging.level))
        .map_err(|e| anyhow!("invalid log level '{}': {}", logging.level, e))?;

    let builder = fmt()
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .with_file(logging.include_location)
        .with_line_number(logging.include_location);

    let installed = match logging.format {
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Compact => builder.compact().try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
    installed.map_err(|e| anyhow!("failed to install tracing subscriber: {}", e))
}
