use clap::Subcommand;

use crate::cli::subcommands::{AuthCommands, InvitationCommands, ProjectCommands, UserCommands};

/// Top-level command groups.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Accounts and profiles.
    User {
        #[command(subcommand)]
        action: UserCommands,
    },
    /// Session tokens.
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },
    /// Projects, rosters and invitations sent by owners.
    Project {
        #[command(subcommand)]
        action: ProjectCommands,
    },
    /// Invitations addressed to the caller.
    Invitation {
        #[command(subcommand)]
        action: InvitationCommands,
    },
}
