//! Structured logging bootstrap.
//!
//! Installs a global `tracing` subscriber. The caller chooses where lines
//! go: the storefront writes to the browser console, tests write to a sink.

use crate::config::{LogFormat, LoggingConfig};
use crate::error::CoreError;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global subscriber described by `config`.
///
/// Timestamps and ANSI colors are disabled; neither is available in a
/// browser console. Returns [`CoreError::Logging`] if the level directive
/// does not parse or a global subscriber is already installed.
pub fn init_logging<W>(config: &LoggingConfig, make_writer: W) -> Result<(), CoreError>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let filter = env_filter(config)?;
    let layer = tracing_subscriber::fmt::layer()
        .with_writer(make_writer)
        .without_time()
        .with_ansi(false);

    let installed = match config.format {
        LogFormat::Compact => tracing_subscriber::registry()
            .with(filter)
            .with(layer.compact().with_target(false))
            .try_init(),
        LogFormat::Full => tracing_subscriber::registry()
            .with(filter)
            .with(layer)
            .try_init(),
    };
    installed.map_err(|e| CoreError::Logging(e.to_string()))
}

/// Build the event filter for `config.level`.
pub fn env_filter(config: &LoggingConfig) -> Result<EnvFilter, CoreError> {
    EnvFilter::try_new(&config.level)
        .map_err(|e| CoreError::Logging(format!("invalid level {:?}: {}", config.level, e)))
}
