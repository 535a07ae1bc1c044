//! Login, signup and logout

use tasks_domain::Profile;

use crate::context::AppContext;
use crate::utils::command_helpers::execute_command;

/// Log in and return the user's profile.
pub async fn login(ctx: &AppContext, email: &str, password: &str) -> Result<Profile, String> {
    execute_command("session::login", || ctx.session.login(email, password)).await
}

/// Create an account and log straight into it.
pub async fn signup(
    ctx: &AppContext,
    email: &str,
    display_name: &str,
    password: &str,
) -> Result<Profile, String> {
    execute_command("session::signup", || ctx.session.signup(email, display_name, password)).await
}

pub async fn logout(ctx: &AppContext) -> Result<(), String> {
    execute_command("session::logout", || ctx.session.logout()).await
}

/// Whether a logged-in session is stored.
pub async fn is_authenticated(ctx: &AppContext) -> Result<bool, String> {
    execute_command("session::is_authenticated", || ctx.session.is_authenticated()).await
}
