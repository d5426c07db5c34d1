use clap::{Args, Subcommand};

/// Account and profile commands.
#[derive(Clone, Debug, Subcommand)]
pub enum UserCommands {
    /// Create an account and print a session token for it.
    Register { email: String },
    /// Show a user's profile.
    Profile { user_id: i64 },
    /// Edit the caller's own profile.
    UpdateProfile(UpdateProfileArgs),
}

#[derive(Clone, Debug, Args)]
pub struct UpdateProfileArgs {
    pub user_id: i64,
    #[arg(long)]
    pub full_name: Option<String>,
    #[arg(long)]
    pub bio: Option<String>,
    #[arg(long)]
    pub affiliation: Option<String>,
    #[arg(long)]
    pub skills: Option<String>,
    #[arg(long)]
    pub role: Option<String>,
    #[arg(long)]
    pub projects: Option<String>,
    #[arg(long)]
    pub location: Option<String>,
    #[arg(long)]
    pub github: Option<String>,
}
