use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

use crate::logger::LoggerError;

/// Validated `EnvFilter` expression, e.g. `"info"` or `"tagctx_core=trace,info"`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String")]
#[serde(into = "String")]
pub struct LoggerLevel(String);

impl LoggerLevel {
    /// # Examples
    /// ```
    /// use tagctx_observe::LoggerLevel;
    ///
    /// let lvl = LoggerLevel::new("tagctx_core=debug,info").unwrap();
    /// assert_eq!(lvl.as_str(), "tagctx_core=debug,info");
    /// assert!(LoggerLevel::new("tagctx_core=chatty").is_err());
    /// ```
    pub fn new(s: impl Into<String>) -> Result<Self, LoggerError> {
        Self::try_from(s.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn to_env_filter(&self) -> EnvFilter {
        EnvFilter::try_new(self.as_str()).expect("LoggerLevel is always valid after construction")
    }
}

impl Default for LoggerLevel {
    fn default() -> Self {
        Self("info".to_string())
    }
}

impl FromStr for LoggerLevel {
    type Err = LoggerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s.to_owned())
    }
}

impl TryFrom<String> for LoggerLevel {
    type Error = LoggerError;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        match EnvFilter::try_new(&s) {
            Ok(_) => Ok(LoggerLevel(s)),
            Err(e) => Err(LoggerError::InvalidLevel(format!("{s}: {e}"))),
        }
    }
}

impl From<LoggerLevel> for String {
    fn from(l: LoggerLevel) -> Self {
        l.0
    }
}

#[cfg(test)]
mod tests {
    use super::LoggerLevel;

    #[test]
    fn accepts_directives() {
        for lvl in ["info", "trace", "tagctx_core=trace", "tagctx_core=debug,warn"] {
            assert!(lvl.parse::<LoggerLevel>().is_ok(), "expected {lvl} to parse");
        }
    }

    #[test]
    fn rejects_unknown_level_names() {
        for lvl in ["tagctx_core=verbose", "a=trace,b=wat"] {
            assert!(lvl.parse::<LoggerLevel>().is_err(), "expected {lvl} to fail");
        }
    }

    #[test]
    fn default_is_info_and_builds_filter() {
        let lvl = LoggerLevel::default();
        assert_eq!(lvl.as_str(), "info");
        let _ = lvl.to_env_filter();
    }

    #[test]
    fn serde_from_plain_string() {
        let lvl: LoggerLevel = serde_json::from_str(r#""debug""#).unwrap();
        assert_eq!(lvl.as_str(), "debug");
        assert_eq!(serde_json::to_string(&lvl).unwrap(), r#""debug""#);
    }
}
