//! Command-line interface.

pub mod check;
pub mod completions;
pub mod keys;
pub mod output;
pub mod run;

use clap::{Parser, Subcommand};

/// Satchel - run commands with encrypted secrets injected as env vars.
#[derive(Parser)]
#[command(
    name = "satchel",
    about = "Run commands with encrypted secrets injected as environment variables",
    version
)]
pub struct Cli {
    /// Path to the encrypted secrets file
    #[arg(short, long, global = true, env = "SATCHEL_FILE")]
    pub file: Option<String>,

    /// Decryption binary to invoke
    #[arg(long, global = true, env = "SATCHEL_SOPS")]
    pub sops: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Decrypt secrets and run a command with them injected as env vars
    Run {
        /// Command and arguments to run
        #[arg(trailing_var_arg = true, required = true)]
        command: Vec<String>,
    },

    /// List secret key names (never values)
    Keys {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check that the decryption tool and secrets file are in place
    Check,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Execute a command.
pub fn execute(command: Command, file: Option<String>, sops: Option<String>) -> crate::error::Result<()> {
    use Command::*;

    match command {
        Run { command } => run::execute(file, sops, &command),
        Keys { json } => keys::execute(file, sops, json),
        Check => check::execute(file, sops),
        Completions { shell } => completions::execute(shell),
    }
}
