//! Task commands

use tasks_domain::{CreateTaskRequest, MoveTaskRequest, Task, TasksError, UpdateTaskRequest};

use crate::context::AppContext;
use crate::utils::command_helpers::execute_command;

pub async fn get_tasks(ctx: &AppContext, list_id: &str) -> Result<Vec<Task>, String> {
    execute_command("tasks::get_tasks", || async {
        ctx.api.get_tasks(list_id).await.map_err(TasksError::from)
    })
    .await
}

/// Add a task to a list. The label must not be blank.
pub async fn create_task(
    ctx: &AppContext,
    list_id: &str,
    request: CreateTaskRequest,
) -> Result<Task, String> {
    execute_command("tasks::create_task", || async {
        if request.label.trim().is_empty() {
            return Err(TasksError::InvalidInput("task label is required".into()));
        }
        ctx.api.create_task(list_id, &request).await.map_err(TasksError::from)
    })
    .await
}

pub async fn update_task(
    ctx: &AppContext,
    list_id: &str,
    task_id: &str,
    request: UpdateTaskRequest,
) -> Result<Task, String> {
    execute_command("tasks::update_task", || async {
        ctx.api.update_task(list_id, task_id, &request).await.map_err(TasksError::from)
    })
    .await
}

/// Reposition a task, optionally moving it to another list.
pub async fn move_task(
    ctx: &AppContext,
    list_id: &str,
    task_id: &str,
    request: MoveTaskRequest,
) -> Result<Task, String> {
    execute_command("tasks::move_task", || async {
        if request.ordinal < 0 {
            return Err(TasksError::InvalidInput("ordinal must not be negative".into()));
        }
        ctx.api.move_task(list_id, task_id, &request).await.map_err(TasksError::from)
    })
    .await
}

pub async fn clear_completed(ctx: &AppContext, list_id: &str) -> Result<(), String> {
    execute_command("tasks::clear_completed", || async {
        ctx.api.clear_completed(list_id).await.map_err(TasksError::from)
    })
    .await
}
