//! Configuration loading
//!
//! Resolves [`Config`](tasks_domain::Config) from `TASKS_*` environment
//! variables, a TOML/JSON file, or built-in defaults.

pub mod loader;

pub use loader::{load, load_from_env, load_from_file, probe_config_paths};
