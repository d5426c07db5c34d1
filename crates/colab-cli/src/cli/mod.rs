use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `colab` binary.
#[derive(Debug, Parser)]
#[command(
    name = "colab",
    version,
    about = "Colab - research project collaboration"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (errors only in logs)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Session token identifying the caller
    #[arg(long, global = true, env = "COLAB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Database file, overriding `database.path` from config
    #[arg(long, global = true)]
    pub database: Option<String>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
            token: self.token.clone(),
            database: self.database.clone(),
        }
    }
}
