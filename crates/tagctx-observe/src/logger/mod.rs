mod config;
mod error;
mod log;
mod object;

pub use config::LoggerConfig;
pub use error::LoggerError;
pub use object::{LoggerFormat, LoggerLevel};

/// Installs the global tracing subscriber described by `cfg`.
///
/// Events emitted inside a [`crate::tag_span`] carry the rendered tag map with them.
///
/// # Examples
/// ```rust
/// use tagctx_observe::{LoggerConfig, init_logger};
///
/// let config = LoggerConfig::default();
/// init_logger(&config).expect("logger must initialize once");
///
/// tracing::info!("logger ready");
/// ```
pub fn init_logger(cfg: &LoggerConfig) -> Result<(), LoggerError> {
    log::install(cfg)
}
