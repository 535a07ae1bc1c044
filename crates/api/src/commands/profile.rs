//! Profile commands

use tasks_domain::Profile;

use crate::context::AppContext;
use crate::utils::command_helpers::execute_command;

/// Fetch the profile from the API and update the stored copy.
pub async fn get_profile(ctx: &AppContext) -> Result<Profile, String> {
    execute_command("profile::get_profile", || ctx.session.refresh_profile()).await
}
