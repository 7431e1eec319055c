//! Tracing subscriber setup.
//!
//! Logs go to stderr so the interactive transcript on stdout stays clean.
//! `RUST_LOG` takes precedence over the `--log-level` directive.

use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::config::ConfigError;

/// Build the filter: `RUST_LOG` if set and valid, otherwise `directive`.
pub fn filter(directive: &str) -> Result<EnvFilter, ConfigError> {
    if let Ok(from_env) = EnvFilter::try_from_default_env() {
        return Ok(from_env);
    }
    EnvFilter::try_new(directive).map_err(|e| ConfigError::InvalidLogFilter {
        directive: directive.to_string(),
        reason: e.to_string(),
    })
}

/// Install the global fmt subscriber.
pub fn init_logging(directive: &str) -> Result<(), ConfigError> {
    let filter = filter(directive)?;
    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
    {
        debug!(%e, "global subscriber already installed");
    }
    Ok(())
}
