//! Conversions from external infrastructure errors into domain errors.

use std::io::Error as IoError;

use reqwest::Error as HttpError;
use serde_json::Error as JsonError;
use tasks_domain::TasksError;
use toml::de::Error as TomlError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub TasksError);

impl From<InfraError> for TasksError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<TasksError> for InfraError {
    fn from(value: TasksError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoTasksError {
    fn into_tasks(self) -> TasksError;
}

/* -------------------------------------------------------------------------- */
/* std::io::Error → TasksError */
/* -------------------------------------------------------------------------- */

impl IntoTasksError for IoError {
    fn into_tasks(self) -> TasksError {
        use std::io::ErrorKind;

        match self.kind() {
            ErrorKind::NotFound => TasksError::NotFound(format!("file not found: {self}")),
            ErrorKind::PermissionDenied => {
                TasksError::Storage(format!("permission denied: {self}"))
            }
            _ => TasksError::Storage(format!("I/O failure: {self}")),
        }
    }
}

impl From<IoError> for InfraError {
    fn from(value: IoError) -> Self {
        InfraError(value.into_tasks())
    }
}

/* -------------------------------------------------------------------------- */
/* serde_json::Error → TasksError */
/* -------------------------------------------------------------------------- */

impl IntoTasksError for JsonError {
    fn into_tasks(self) -> TasksError {
        if self.is_io() {
            TasksError::Storage(format!("I/O failure while handling JSON: {self}"))
        } else {
            TasksError::Storage(format!("invalid JSON (line {}): {self}", self.line()))
        }
    }
}

impl From<JsonError> for InfraError {
    fn from(value: JsonError) -> Self {
        InfraError(value.into_tasks())
    }
}

/* -------------------------------------------------------------------------- */
/* toml::de::Error → TasksError */
/* -------------------------------------------------------------------------- */

impl IntoTasksError for TomlError {
    fn into_tasks(self) -> TasksError {
        TasksError::Config(format!("Invalid TOML format: {}", self.message()))
    }
}

impl From<TomlError> for InfraError {
    fn from(value: TomlError) -> Self {
        InfraError(value.into_tasks())
    }
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → TasksError */
/* -------------------------------------------------------------------------- */

impl IntoTasksError for HttpError {
    fn into_tasks(self) -> TasksError {
        if self.is_builder() {
            return TasksError::Config(format!("HTTP client misconfigured: {self}"));
        }

        if self.is_timeout() {
            return TasksError::Network("HTTP request timed out".into());
        }

        #[cfg(not(target_arch = "wasm32"))]
        if self.is_connect() {
            return TasksError::Network("HTTP connection failure".into());
        }

        if let Some(status) = self.status() {
            let code = status.as_u16();
            let message =
                format!("HTTP {} {}", code, status.canonical_reason().unwrap_or("unknown status"));

            return match code {
                401 => TasksError::Auth(message),
                404 => TasksError::NotFound(message),
                400..=499 => TasksError::Rejected(message),
                _ => TasksError::Network(message),
            };
        }

        TasksError::Network(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_tasks())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
