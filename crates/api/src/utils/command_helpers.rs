//! Command execution helpers
//!
//! Every command times itself, logs its outcome and hands the rendering layer
//! a plain `String` error.

use std::future::Future;
use std::time::Instant;

use tasks_domain::Result as DomainResult;

use crate::utils::logging::{error_label, log_command_execution};

/// Execute a command with timing and outcome logging
///
/// # Example
///
/// ```rust,ignore
/// pub async fn get_lists(ctx: &AppContext) -> Result<Vec<TaskList>, String> {
///     execute_command("lists::get_lists", || async {
///         Ok(ctx.api.get_lists().await?)
///     })
///     .await
/// }
/// ```
pub async fn execute_command<F, Fut, T>(command_name: &str, command_fn: F) -> Result<T, String>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = DomainResult<T>>,
{
    let start = Instant::now();

    let result = command_fn().await;

    let elapsed = start.elapsed();
    let error_type = result.as_ref().err().map(error_label);
    log_command_execution(command_name, elapsed, result.is_ok(), error_type);

    result.map_err(|e| e.to_string())
}
