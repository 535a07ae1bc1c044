//! Task list commands

use tasks_domain::{CreateListRequest, TaskList, TasksError};

use crate::context::AppContext;
use crate::utils::command_helpers::execute_command;

pub async fn get_lists(ctx: &AppContext) -> Result<Vec<TaskList>, String> {
    execute_command("lists::get_lists", || async {
        ctx.api.get_lists().await.map_err(TasksError::from)
    })
    .await
}

/// Create a list. The title is trimmed and must not be blank.
pub async fn create_list(ctx: &AppContext, request: CreateListRequest) -> Result<TaskList, String> {
    execute_command("lists::create_list", || async {
        let title = request.title.trim();
        if title.is_empty() {
            return Err(TasksError::InvalidInput("list title is required".into()));
        }
        let request = CreateListRequest { title: title.to_string(), ..request.clone() };
        ctx.api.create_list(&request).await.map_err(TasksError::from)
    })
    .await
}

pub async fn delete_list(ctx: &AppContext, list_id: &str) -> Result<(), String> {
    execute_command("lists::delete_list", || async {
        ctx.api.delete_list(list_id).await.map_err(TasksError::from)
    })
    .await
}
