//! Logging configuration, read from the environment.

use std::env;
use std::path::PathBuf;

/// Environment key overriding the default log level.
pub const ENV_LOG_LEVEL: &str = "LOG_LEVEL";
/// Environment key selecting the log format (`json` or `pretty`).
pub const ENV_LOG_FORMAT: &str = "LOG_FORMAT";
/// Environment key pointing at a directory for rotated log files.
pub const ENV_LOG_DIR: &str = "LOG_DIR";

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Output format (json, pretty)
    pub format: String,

    /// Directory for log files (optional; stdout only when unset)
    pub log_dir: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "json".to_string(),
            log_dir: None,
        }
    }
}

impl LogConfig {
    /// Read the logging configuration from the environment, falling back
    /// to defaults for unset keys. Values are validated when the logger
    /// is built, not here.
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            level: env::var(ENV_LOG_LEVEL).unwrap_or(default.level),
            format: env::var(ENV_LOG_FORMAT).unwrap_or(default.format),
            log_dir: env::var(ENV_LOG_DIR).ok().map(PathBuf::from),
        }
    }
}
