use crate::cli::GlobalFlags;
use crate::commands::shared::session::issue_session;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(email: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    // No account without a way to sign in to it.
    ctx.authenticator()?;
    let user = ctx.service.register_user(email).await?;
    let session = issue_session(ctx, user)?;
    output(&session, flags.format)
}
