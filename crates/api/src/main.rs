//! Tasks - command-line entry point
//!
//! Builds the application context, reports the stored session and, when
//! `TASKS_EMAIL` and `TASKS_PASSWORD` are set, logs in and lists the user's
//! task lists. All output goes through tracing.

use anyhow::Context;
use tasks_app::utils::logging::init_tracing;
use tasks_app::{commands, AppContext};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env before the subscriber reads RUST_LOG
    let dotenv = dotenvy::dotenv();
    init_tracing();

    match dotenv {
        Ok(path) => info!(path = %path.display(), "Loaded .env"),
        Err(e) => warn!(error = %e, "Could not load .env file"),
    }

    let ctx = AppContext::new().await.context("failed to initialize application context")?;

    match ctx.session.current_profile().await? {
        Some(profile) => info!(user_id = %profile.id, email = %profile.email, "Stored session found"),
        None => info!("No stored session"),
    }

    let (Ok(email), Ok(password)) = (std::env::var("TASKS_EMAIL"), std::env::var("TASKS_PASSWORD"))
    else {
        return Ok(());
    };

    let profile = commands::login(&ctx, &email, &password).await.map_err(anyhow::Error::msg)?;
    info!(display_name = %profile.display_name, "Logged in");

    let lists = commands::get_lists(&ctx).await.map_err(anyhow::Error::msg)?;
    info!(count = lists.len(), "Fetched task lists");
    for list in &lists {
        info!(list_id = %list.id, title = %list.title, "task_list");
    }

    Ok(())
}
