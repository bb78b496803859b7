//! Dashboard configuration.
//!
//! Values are resolved in three layers: built-in defaults, then the TOML file
//! (`$CONFIG_DIR/buzzboard/config.toml`, or the path in `BUZZBOARD_CONFIG`),
//! then environment variables.
//!
//! # Example
//!
//! ```ignore
//! use buzzboard::config::DashboardConfig;
//!
//! let config = DashboardConfig::default()
//!     .with_api_url("http://localhost:4000")
//!     .with_poll_interval_secs(10);
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::api::{ImagePolicy, DEFAULT_API_URL};
use crate::error::ConfigError;
use crate::helpers::DEFAULT_TOP_USERS;
use crate::sync::POLL_INTERVAL_SECS;

pub const ENV_CONFIG_PATH: &str = "BUZZBOARD_CONFIG";
pub const ENV_API_URL: &str = "BUZZBOARD_API_URL";
pub const ENV_POLL_SECS: &str = "BUZZBOARD_POLL_SECS";
pub const ENV_TIMEOUT_SECS: &str = "BUZZBOARD_TIMEOUT_SECS";
pub const ENV_IMAGE_POLICY: &str = "BUZZBOARD_IMAGE_POLICY";
pub const ENV_LOG_FILE: &str = "BUZZBOARD_LOG";

/// Default per-request timeout for backend calls.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Backend base URL (default: http://localhost:3000)
    pub api_url: String,
    /// Posts polling interval in seconds (default: 30)
    pub poll_interval_secs: u64,
    /// Per-request timeout in seconds (default: 10)
    pub request_timeout_secs: u64,
    /// Leaderboard size (default: 5)
    pub top_users: usize,
    /// How curated images are applied to fetched posts
    pub image_policy: ImagePolicy,
    /// Log file; the platform data directory is used when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            poll_interval_secs: POLL_INTERVAL_SECS,
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            top_users: DEFAULT_TOP_USERS,
            image_policy: ImagePolicy::default(),
            log_file: None,
        }
    }
}

impl DashboardConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    pub fn with_poll_interval_secs(mut self, secs: u64) -> Self {
        self.poll_interval_secs = secs;
        self
    }

    pub fn with_request_timeout_secs(mut self, secs: u64) -> Self {
        self.request_timeout_secs = secs;
        self
    }

    pub fn with_top_users(mut self, count: usize) -> Self {
        self.top_users = count;
        self
    }

    pub fn with_image_policy(mut self, policy: ImagePolicy) -> Self {
        self.image_policy = policy;
        self
    }

    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = Some(path.into());
        self
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Log file path, falling back to [`default_log_path`].
    pub fn log_path(&self) -> PathBuf {
        self.log_file.clone().unwrap_or_else(default_log_path)
    }

    /// Resolve the full configuration: defaults, then file, then environment.
    ///
    /// A missing config file is not an error.
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var_os(ENV_CONFIG_PATH)
            .map(PathBuf::from)
            .or_else(default_config_path);

        let config = match path {
            Some(ref path) if path.exists() => {
                let config = Self::from_toml_file(path)?;
                tracing::info!("Loaded config from {:?}", path);
                config
            }
            _ => Self::default(),
        };

        config.apply_env()
    }

    /// Parse a TOML config file. Missing keys keep their defaults.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        config.validate()
    }

    /// Apply `BUZZBOARD_*` environment overrides.
    pub fn apply_env(self) -> Result<Self, ConfigError> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    fn apply_overrides(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(url) = lookup(ENV_API_URL) {
            self.api_url = url;
        }
        if let Some(secs) = lookup(ENV_POLL_SECS) {
            self.poll_interval_secs = parse_value(ENV_POLL_SECS, &secs)?;
        }
        if let Some(secs) = lookup(ENV_TIMEOUT_SECS) {
            self.request_timeout_secs = parse_value(ENV_TIMEOUT_SECS, &secs)?;
        }
        if let Some(policy) = lookup(ENV_IMAGE_POLICY) {
            self.image_policy = parse_value(ENV_IMAGE_POLICY, &policy)?;
        }
        if let Some(path) = lookup(ENV_LOG_FILE) {
            self.log_file = Some(PathBuf::from(path));
        }

        self.validate()
    }

    fn validate(self) -> Result<Self, ConfigError> {
        // tokio intervals panic on a zero period
        if self.poll_interval_secs == 0 {
            return Err(ConfigError::InvalidValue {
                key: "poll_interval_secs".to_string(),
                value: "0".to_string(),
            });
        }
        if self.api_url.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "api_url".to_string(),
                value: self.api_url,
            });
        }
        Ok(self)
    }
}

fn parse_value<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    })
}

/// `$CONFIG_DIR/buzzboard/config.toml`, if the platform has a config directory.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("buzzboard").join("config.toml"))
}

/// `$DATA_DIR/buzzboard/buzzboard.log`, or `./buzzboard.log` without a data directory.
pub fn default_log_path() -> PathBuf {
    dirs::data_local_dir()
        .map(|dir| dir.join("buzzboard").join("buzzboard.log"))
        .unwrap_or_else(|| PathBuf::from("buzzboard.log"))
}
