use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::logger::{
    config::LoggerConfig,
    error::{LoggerError, LoggerResult},
    object::{LoggerFormat, LoggerRfc3339},
};

/// Builds the registry for `cfg` and installs it as the global default.
pub(crate) fn install(cfg: &LoggerConfig) -> LoggerResult<()> {
    let registry = tracing_subscriber::registry().with(cfg.level.to_env_filter());

    let installed = match cfg.format {
        LoggerFormat::Text => registry
            .with(
                fmt::layer()
                    .with_ansi(cfg.should_use_color())
                    .with_target(cfg.with_targets)
                    .with_timer(LoggerRfc3339),
            )
            .try_init(),
        LoggerFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_target(cfg.with_targets)
                    .with_timer(LoggerRfc3339),
            )
            .try_init(),
    };

    installed.map_err(|_| LoggerError::AlreadyInitialized)
}
