//! Application constants
//!
//! Centralized location for domain-level constants used throughout the
//! workspace.

// Remote API
pub const DEFAULT_API_BASE_URL: &str = "https://tasks-api.chara.dev";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 5;
pub const REFRESH_PATH: &str = "/auth/refresh";
pub const REQUEST_ID_HEADER: &str = "x-request-id";

// Persisted session keys
pub const CREDENTIALS_STORAGE_KEY: &str = "auth";
pub const PROFILE_STORAGE_KEY: &str = "profile";
