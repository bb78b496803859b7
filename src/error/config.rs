//! Configuration loading errors.

use std::path::PathBuf;
use thiserror::Error;

/// Configuration could not be loaded.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file exists but could not be read.
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML for [`DashboardConfig`](crate::config::DashboardConfig).
    #[error("Invalid config file {path}: {message}")]
    Parse { path: PathBuf, message: String },

    /// An environment override could not be parsed.
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: String, value: String },
}

impl ConfigError {
    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            ConfigError::Read { .. } => "E_CFG_READ",
            ConfigError::Parse { .. } => "E_CFG_PARSE",
            ConfigError::InvalidValue { .. } => "E_CFG_VALUE",
        }
    }
}
