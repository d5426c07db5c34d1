use colab_core::enums::CollaboratorRole;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ProjectInviteArgs;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(args: &ProjectInviteArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let role: CollaboratorRole = args.role.parse()?;
    let caller = ctx.caller_id().await?;
    let invitation = ctx
        .service
        .invite_collaborator(args.id, caller, &args.email, role)
        .await?;
    tracing::debug!(invitation_id = invitation.id, "invitation sent");
    output(&invitation, flags.format)
}
