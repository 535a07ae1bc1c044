//! API-specific error types
//!
//! Classifies failures of calls against the task API. Only an expired access
//! credential is handled inside the client; everything here reaches the
//! caller as-is.

use std::time::Duration;

use reqwest::StatusCode;
use tasks_domain::TasksError;
use thiserror::Error;

/// Categories of API errors, as seen by callers deciding what to do next
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorCategory {
    /// Transport failure (connect, DNS, reset, timeout) - caller may retry
    Network,
    /// Session could not be renewed; credentials are gone
    AuthExhausted,
    /// Non-2xx answer from the API; status and body tell the caller why
    Business,
    /// Local misuse or contract mismatch - never retryable
    Client,
}

/// Why a session could not be kept alive after a 401
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthExhaustedReason {
    /// The 401 body is kept so the server's message reaches the user.
    #[error("no refresh credential available")]
    NoRefreshCredential { body: String },

    #[error("refresh rejected with status {0}")]
    RefreshRejected(StatusCode),

    #[error("refresh failed: {0}")]
    RefreshFailed(String),

    #[error("refresh timed out after {0:?}")]
    RefreshTimedOut(Duration),
}

/// API operation errors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Timeout after {0:?}")]
    Timeout(Duration),

    #[error("Session expired: {0}")]
    AuthExhausted(AuthExhaustedReason),

    #[error("Request failed with status {status}: {body}")]
    Business { status: StatusCode, body: String },

    #[error("Expected status {expected}, got {actual}")]
    UnexpectedStatus { expected: StatusCode, actual: StatusCode },

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl ApiError {
    /// Get the error category for this error
    pub fn category(&self) -> ApiErrorCategory {
        match self {
            Self::Network(_) | Self::Timeout(_) => ApiErrorCategory::Network,
            Self::AuthExhausted(_) => ApiErrorCategory::AuthExhausted,
            Self::Business { .. } => ApiErrorCategory::Business,
            Self::UnexpectedStatus { .. }
            | Self::Serialization(_)
            | Self::Config(_)
            | Self::Storage(_) => ApiErrorCategory::Client,
        }
    }

    /// Whether a caller-side retry could plausibly succeed.
    ///
    /// The client itself never retries these.
    pub fn should_retry(&self) -> bool {
        match self {
            Self::Network(_) | Self::Timeout(_) => true,
            Self::Business { status, .. } => {
                status.is_server_error() || *status == StatusCode::TOO_MANY_REQUESTS
            }
            _ => false,
        }
    }

    /// Status code returned by the API, when there was one.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Business { status, .. } => Some(*status),
            Self::UnexpectedStatus { actual, .. } => Some(*actual),
            Self::AuthExhausted(AuthExhaustedReason::NoRefreshCredential { .. }) => {
                Some(StatusCode::UNAUTHORIZED)
            }
            Self::AuthExhausted(AuthExhaustedReason::RefreshRejected(status)) => Some(*status),
            _ => None,
        }
    }
}

/// Store failures surfacing inside the client
impl From<TasksError> for ApiError {
    fn from(err: TasksError) -> Self {
        match err {
            TasksError::Config(msg) => Self::Config(msg),
            TasksError::Network(msg) => Self::Network(msg),
            other => Self::Storage(other.to_string()),
        }
    }
}

impl From<ApiError> for TasksError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Network(msg) => Self::Network(msg),
            ApiError::Timeout(timeout) => Self::Network(format!("request timed out after {timeout:?}")),
            ApiError::AuthExhausted(AuthExhaustedReason::NoRefreshCredential { body }) => {
                Self::Auth(non_empty_or_status(body, StatusCode::UNAUTHORIZED))
            }
            ApiError::AuthExhausted(reason) => Self::Auth(reason.to_string()),
            ApiError::Business { status, body } if status == StatusCode::NOT_FOUND => {
                Self::NotFound(non_empty_or_status(body, status))
            }
            ApiError::Business { status, body } => Self::Rejected(non_empty_or_status(body, status)),
            ApiError::UnexpectedStatus { .. } | ApiError::Serialization(_) => {
                Self::Internal(err.to_string())
            }
            ApiError::Config(msg) => Self::Config(msg),
            ApiError::Storage(msg) => Self::Storage(msg),
        }
    }
}

fn non_empty_or_status(body: String, status: StatusCode) -> String {
    if body.trim().is_empty() {
        format!("request failed with status {status}")
    } else {
        body
    }
}
