//! Client configuration structures
//!
//! Loaded by `tasks-infra::config` from the environment or a TOML/JSON file.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::constants::{DEFAULT_API_BASE_URL, DEFAULT_REQUEST_TIMEOUT_SECS};
use crate::errors::{Result, TasksError};

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Remote API settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL every request path is appended to
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Upper bound for a single attempt, in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { base_url: default_base_url(), timeout_secs: default_timeout_secs() }
    }
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Where session state is persisted
///
/// `path: None` keeps credentials and profile in memory only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default)]
    pub path: Option<String>,
}

impl Config {
    /// Check the configuration for values the client cannot work with.
    ///
    /// # Errors
    /// Returns `TasksError::Config` when the base URL is not an absolute
    /// http(s) URL or the timeout is zero.
    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.api.base_url).map_err(|e| {
            TasksError::Config(format!("Invalid API base URL '{}': {}", self.api.base_url, e))
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(TasksError::Config(format!(
                "Unsupported API base URL scheme: {}",
                url.scheme()
            )));
        }

        if self.api.timeout_secs == 0 {
            return Err(TasksError::Config("Request timeout must be at least 1 second".into()));
        }

        Ok(())
    }
}

fn default_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}
