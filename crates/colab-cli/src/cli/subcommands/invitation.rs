use clap::Subcommand;

/// Invitations addressed to the caller.
#[derive(Clone, Debug, Subcommand)]
pub enum InvitationCommands {
    /// List pending invitations for the caller's email.
    List,
    /// Accept or reject an invitation.
    Respond {
        project_id: i64,
        invitation_id: i64,
        /// accept or reject
        action: String,
    },
}
