use clap::Subcommand;

/// Session token commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AuthCommands {
    /// Show the account behind the current token.
    Whoami,
    /// Mint a token for an existing account (operator use).
    Issue { email: String },
}
