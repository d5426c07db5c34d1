mod create;
mod invite;
mod update;

use colab_core::responses::ProjectListResponse;
use serde_json::json;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ProjectCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `colab project`.
pub async fn handle(
    action: &ProjectCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ProjectCommands::Create(args) => create::run(args, ctx, flags).await,
        ProjectCommands::Get { id } => {
            let project = ctx.service.get_project(*id).await?;
            output(&project, flags.format)
        }
        ProjectCommands::List => {
            let projects = ctx.service.list_projects().await?;
            output(&ProjectListResponse { projects }, flags.format)
        }
        ProjectCommands::Collaborators { id } => {
            let collaborators = ctx.service.list_collaborators(*id).await?;
            output(
                &json!({ "project_id": id, "collaborators": collaborators }),
                flags.format,
            )
        }
        ProjectCommands::Update(args) => update::run(args, ctx, flags).await,
        ProjectCommands::Invite(args) => invite::run(args, ctx, flags).await,
    }
}
