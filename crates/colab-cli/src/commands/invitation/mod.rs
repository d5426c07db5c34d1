use colab_core::responses::InvitationListResponse;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::InvitationCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `colab invitation`.
pub async fn handle(
    action: &InvitationCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let caller = ctx.caller_id().await?;
    match action {
        InvitationCommands::List => {
            let invitations = ctx.service.list_my_invitations(caller).await?;
            output(&InvitationListResponse { invitations }, flags.format)
        }
        InvitationCommands::Respond {
            project_id,
            invitation_id,
            action,
        } => {
            let response = ctx
                .service
                .respond_to_invitation(*project_id, *invitation_id, caller, action)
                .await?;
            output(&response, flags.format)
        }
    }
}
