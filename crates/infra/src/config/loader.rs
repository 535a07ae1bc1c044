//! Configuration loader
//!
//! Loads client configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If `TASKS_API_BASE_URL` is unset, falls back to loading from file
//! 3. If no file is found either, uses [`Config::default`]
//!
//! Whatever the source, the result is validated before it is returned.
//!
//! ## Environment Variables
//! - `TASKS_API_BASE_URL`: API base URL (required for env mode)
//! - `TASKS_API_TIMEOUT_SECS`: Per-request timeout in seconds
//! - `TASKS_STORAGE_PATH`: Session file; unset keeps the session in memory
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./tasks.toml`, `./tasks.json`, `./config.toml`, `./config.json`
//! 2. The same names in the parent and grandparent directories
//! 3. The same names next to the executable

use std::path::{Path, PathBuf};

use tasks_domain::constants::DEFAULT_REQUEST_TIMEOUT_SECS;
use tasks_domain::{ApiConfig, Config, Result, StorageConfig, TasksError};

use crate::errors::InfraError;

pub const ENV_API_BASE_URL: &str = "TASKS_API_BASE_URL";
pub const ENV_API_TIMEOUT_SECS: &str = "TASKS_API_TIMEOUT_SECS";
pub const ENV_STORAGE_PATH: &str = "TASKS_STORAGE_PATH";

const CONFIG_FILE_NAMES: [&str; 4] = ["tasks.toml", "tasks.json", "config.toml", "config.json"];

/// Load configuration with automatic fallback strategy
///
/// # Errors
/// Returns `TasksError::Config` if a source is present but invalid. A
/// missing source is never an error; defaults apply.
pub fn load() -> Result<Config> {
    if std::env::var_os(ENV_API_BASE_URL).is_some() {
        let config = load_from_env()?;
        tracing::info!(base_url = %config.api.base_url, "Configuration loaded from environment variables");
        return Ok(config);
    }

    match probe_config_paths() {
        Some(path) => load_from_file(Some(path)),
        None => {
            tracing::debug!("No configuration source found, using defaults");
            let config = Config::default();
            config.validate()?;
            Ok(config)
        }
    }
}

/// Load configuration from environment variables
///
/// # Errors
/// Returns `TasksError::Config` if `TASKS_API_BASE_URL` is missing or a
/// value is invalid.
pub fn load_from_env() -> Result<Config> {
    let base_url = env_var(ENV_API_BASE_URL)?;
    let timeout_secs = match std::env::var(ENV_API_TIMEOUT_SECS) {
        Ok(raw) => raw.trim().parse::<u64>().map_err(|e| {
            TasksError::Config(format!("Invalid {}: {}", ENV_API_TIMEOUT_SECS, e))
        })?,
        Err(_) => DEFAULT_REQUEST_TIMEOUT_SECS,
    };
    let path = std::env::var(ENV_STORAGE_PATH).ok().filter(|p| !p.trim().is_empty());

    let config = Config {
        api: ApiConfig { base_url, timeout_secs },
        storage: StorageConfig { path },
    };
    config.validate()?;
    Ok(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, probes the standard locations. Format is chosen by
/// extension (`.toml` or `.json`).
///
/// # Errors
/// Returns `TasksError::Config` if the file cannot be found or read, or
/// does not parse into a valid configuration.
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(TasksError::Config(format!("Config file not found: {}", p.display())));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            TasksError::Config("No config file found in any of the standard locations".to_string())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| TasksError::Config(format!("Failed to read config file: {}", e)))?;

    let config = parse_config(&contents, &config_path)?;
    config.validate()?;
    Ok(config)
}

fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents).map_err(|e| TasksError::from(InfraError::from(e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| TasksError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(TasksError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// Probe the standard locations for a configuration file
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut roots = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        roots.push(cwd.clone());
        roots.push(cwd.join(".."));
        roots.push(cwd.join("../.."));
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            roots.push(exe_dir.to_path_buf());
        }
    }

    roots
        .iter()
        .flat_map(|root| CONFIG_FILE_NAMES.iter().map(move |name| root.join(name)))
        .find(|path| path.exists())
}

fn env_var(key: &str) -> Result<String> {
    std::env::var(key)
        .map_err(|_| TasksError::Config(format!("Missing required environment variable: {}", key)))
}
