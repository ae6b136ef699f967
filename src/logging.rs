//! Tracing subscriber setup.

use tracing_subscriber::{fmt, EnvFilter};

use crate::settings::{AppConfig, LogFormat};

/// Installs the global subscriber. `RUST_LOG` wins over the configured
/// `log_level` when set. Fails if a subscriber is already installed.
pub fn init_tracing(config: &AppConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))?;

    let builder = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true);

    match config.log_format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.try_init(),
    }
    .map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {}", e))
}
