//! List membership commands

use tasks_domain::{InviteRequest, TasksError};

use crate::context::AppContext;
use crate::utils::command_helpers::execute_command;

/// Invite someone to a list by email.
pub async fn invite_member(ctx: &AppContext, list_id: &str, email: &str) -> Result<(), String> {
    execute_command("members::invite_member", || async {
        let email = email.trim();
        if email.is_empty() {
            return Err(TasksError::InvalidInput("email is required".into()));
        }
        let request = InviteRequest { email: email.to_string() };
        ctx.api.invite_member(list_id, &request).await.map_err(TasksError::from)
    })
    .await
}
