//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for the task list client
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum TasksError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(String),

    /// Session is gone: credentials were rejected and could not be renewed
    #[error("Authentication error: {0}")]
    Auth(String),

    /// The API answered with a non-success status; message is the response body
    #[error("Request rejected: {0}")]
    Rejected(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl TasksError {
    /// Whether the error means the user is now logged out.
    pub fn is_logged_out(&self) -> bool {
        matches!(self, Self::Auth(_))
    }
}

/// Result type alias for task list client operations
pub type Result<T> = std::result::Result<T, TasksError>;
