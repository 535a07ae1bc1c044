use std::time::Duration;

use tasks_domain::TasksError;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Environment variable selecting the log output format (`json` or text).
pub const LOG_FORMAT_ENV: &str = "TASKS_LOG_FORMAT";

/// Install the global tracing subscriber.
///
/// Filtering follows `RUST_LOG` and defaults to `info`. Setting
/// `TASKS_LOG_FORMAT=json` switches to one JSON object per event. Calling
/// this more than once is harmless; later calls leave the first subscriber in
/// place.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let json = std::env::var(LOG_FORMAT_ENV).is_ok_and(|v| v.eq_ignore_ascii_case("json"));

    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(true);
    let result = if json { builder.json().try_init() } else { builder.try_init() };

    if result.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}

/// Log the outcome of a command execution with structured fields.
///
/// `command` must be a stable identifier such as `"lists::create_list"` and
/// never carry user data.
#[inline]
pub fn log_command_execution(
    command: &str,
    elapsed: Duration,
    success: bool,
    error_type: Option<&str>,
) {
    let duration_ms = elapsed.as_millis() as u64;

    if success {
        info!(command, duration_ms, "command_execution_success");
    } else {
        warn!(command, duration_ms, error_type, "command_execution_failure");
    }
}

/// Convert a `TasksError` into a stable label suitable for logging.
#[inline]
pub fn error_label(error: &TasksError) -> &'static str {
    match error {
        TasksError::Config(_) => "config",
        TasksError::Network(_) => "network",
        TasksError::Auth(_) => "auth",
        TasksError::Rejected(_) => "rejected",
        TasksError::Storage(_) => "storage",
        TasksError::NotFound(_) => "not_found",
        TasksError::InvalidInput(_) => "invalid_input",
        TasksError::Internal(_) => "internal",
    }
}
