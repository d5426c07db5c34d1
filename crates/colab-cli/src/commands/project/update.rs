use colab_core::enums::ProjectStatus;
use colab_db::updates::project::ProjectUpdateBuilder;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ProjectUpdateArgs;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(args: &ProjectUpdateArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut builder = ProjectUpdateBuilder::new();
    if let Some(description) = &args.description {
        builder = builder.description(description);
    }
    if let Some(status) = &args.status {
        builder = builder.status(status.parse::<ProjectStatus>()?);
    }

    let caller = ctx.caller_id().await?;
    let project = ctx
        .service
        .update_project(args.id, caller, builder.build())
        .await?;
    output(&project, flags.format)
}
