use crate::cli::{Commands, GlobalFlags};
use crate::context::AppContext;

/// Route a parsed command to its handler.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::User { action } => super::user::handle(&action, ctx, flags).await,
        Commands::Auth { action } => super::auth::handle(&action, ctx, flags).await,
        Commands::Project { action } => super::project::handle(&action, ctx, flags).await,
        Commands::Invitation { action } => super::invitation::handle(&action, ctx, flags).await,
    }
}
