//! Logging setup on top of tracing-subscriber

use tracing_subscriber::EnvFilter;

use crate::error::{TrimError, TrimResult};

/// Build the filter: `RUST_LOG` wins over the configured level
pub fn build_filter(level: &str) -> TrimResult<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(level).map_err(|e| TrimError::ConfigError {
        message: format!("invalid log level '{}': {}", level, e),
    })
}

/// Install the global subscriber, writing to stderr so stdout stays clean.
///
/// A subscriber that is already installed (tests, embedding) is left alone.
pub fn init_logging(level: &str, json: bool) -> TrimResult<()> {
    let filter = build_filter(level)?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    let _ = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    Ok(())
}
