use colab_core::errors::CoreError;
use serde_json::json;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AuthCommands;
use crate::commands::shared::session::issue_session;
use crate::context::AppContext;
use crate::output::output;

/// Handle `colab auth`.
pub async fn handle(action: &AuthCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        AuthCommands::Whoami => whoami(ctx, flags).await,
        AuthCommands::Issue { email } => issue(email, ctx, flags).await,
    }
}

async fn whoami(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let identity = ctx.identity().await?;
    let user = ctx.service.get_user(identity.user_id).await?;
    output(&json!({ "user": user }), flags.format)
}

async fn issue(email: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    // Fail on missing auth config before touching the store.
    ctx.authenticator()?;
    let user = ctx
        .service
        .find_user_by_email(email)
        .await?
        .ok_or_else(|| CoreError::not_found("user", email))?;
    let session = issue_session(ctx, user)?;
    output(&session, flags.format)
}
