use clap::{Args, Subcommand};

/// Project commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ProjectCommands {
    /// Create a project owned by the caller.
    Create(ProjectCreateArgs),
    /// Get a project by ID.
    Get { id: i64 },
    /// List every project.
    List,
    /// List a project's collaborators.
    Collaborators { id: i64 },
    /// Change description or status (owner only).
    Update(ProjectUpdateArgs),
    /// Invite an email address to collaborate (owner only).
    Invite(ProjectInviteArgs),
}

#[derive(Clone, Debug, Args)]
pub struct ProjectCreateArgs {
    #[arg(long)]
    pub title: String,
    #[arg(long, default_value = "")]
    pub description: String,
    /// Required skill; repeat for several
    #[arg(long)]
    pub skill: Vec<String>,
    #[arg(long, default_value = "private")]
    pub visibility: String,
    /// open, in-progress or completed
    #[arg(long, default_value = "open")]
    pub status: String,
}

#[derive(Clone, Debug, Args)]
pub struct ProjectUpdateArgs {
    pub id: i64,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub status: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct ProjectInviteArgs {
    pub id: i64,
    #[arg(long)]
    pub email: String,
    /// programmer or editor
    #[arg(long)]
    pub role: String,
}
