//! Structured logging initialization.
//!
//! Installs a `tracing` subscriber driven by [`LoggingConfig`]. The
//! `RUST_LOG` environment variable, when set, overrides the configured
//! level.

use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;
use crate::error::{ProtocolError, Result};

/// Initializes the global tracing subscriber from the given configuration.
///
/// # Errors
/// Returns `ConfigError` if a subscriber is already installed.
pub fn init(config: &LoggingConfig) -> Result<()> {
    if !config.log_to_console {
        return Ok(());
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    let installed = if config.json_format {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    installed.map_err(|e| {
        ProtocolError::ConfigError(format!("failed to initialize logging: {e}"))
    })?;

    info!(app = %config.app_name, "Logging initialized");
    Ok(())
}
