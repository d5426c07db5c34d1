mod register;
mod update_profile;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::UserCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `colab user`.
pub async fn handle(action: &UserCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        UserCommands::Register { email } => register::run(email, ctx, flags).await,
        UserCommands::Profile { user_id } => {
            let profile = ctx.service.get_profile(*user_id).await?;
            output(&profile, flags.format)
        }
        UserCommands::UpdateProfile(args) => update_profile::run(args, ctx, flags).await,
    }
}
