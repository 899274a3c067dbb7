//! Command-line interface.

pub mod completions;
pub mod export;
pub mod list;
pub mod output;
pub mod resolve;
pub mod run;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::core::constants;
use crate::core::format::Format;

/// awsenv - Load AWS-hosted configuration into your shell.
#[derive(Parser)]
#[command(
    name = "awsenv",
    about = "Resolve CloudFormation, SSM and Secrets Manager values into shell exports",
    version,
    after_help = "Usage in a shell: eval \"$(awsenv)\""
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Options shared by every command.
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Path to the variables file
    #[arg(short, long, global = true, env = "AWSENV_FILE", default_value = constants::CONFIG_FILE)]
    pub file: PathBuf,

    /// AWS region (overrides the `region` key in the variables file)
    #[arg(long, global = true, env = "AWSENV_REGION")]
    pub region: Option<String>,

    /// AWS shared config profile
    #[arg(long, global = true, env = "AWSENV_PROFILE")]
    pub profile: Option<String>,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Resolve all variables and print them (default)
    Export {
        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Shell)]
        format: Format,
    },

    /// Show the declared variables without contacting AWS
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run a command with the resolved variables in its environment
    Run {
        /// Command and arguments to run
        #[arg(trailing_var_arg = true, required = true)]
        command: Vec<String>,
    },

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

/// Execute a command. No command means `export` in shell format.
pub fn execute(command: Option<Command>, global: GlobalArgs) -> crate::error::Result<()> {
    use Command::*;

    let command = command.unwrap_or(Export {
        format: Format::Shell,
    });

    match command {
        Export { format } => export::execute(&global, format),
        List { json } => list::execute(&global, json),
        Run { command } => run::execute(&global, &command),
        Completions { shell } => completions::execute(shell),
    }
}
