use colab_core::enums::{ProjectStatus, Visibility};
use colab_core::requests::NewProject;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ProjectCreateArgs;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(args: &ProjectCreateArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let req = build_request(args)?;
    let caller = ctx.caller_id().await?;
    let project = ctx.service.create_project(req, caller).await?;
    output(&project, flags.format)
}

fn build_request(args: &ProjectCreateArgs) -> anyhow::Result<NewProject> {
    let status: ProjectStatus = args.status.parse()?;
    let visibility: Visibility = args.visibility.parse()?;
    Ok(NewProject::new(&args.title)
        .description(&args.description)
        .skills(&args.skill)
        .status(status)
        .visibility(visibility))
}
