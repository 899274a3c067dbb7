//! awsenv - Load AWS-hosted configuration into your shell.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use awsenv::cli::output;
use awsenv::cli::{execute, Cli};
use awsenv::core::constants;
use awsenv::error::{BackendError, ConfigError, Error, LookupError};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(constants::LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("awsenv=debug")
        } else {
            EnvFilter::new("awsenv=warn")
        }
    });

    // stdout carries the exports, logs go to stderr
    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = execute(cli.command, cli.global) {
        let suggestion = match &e {
            Error::Config(ConfigError::NotFound(_)) => {
                Some("create .awsenv with a `variables:` mapping, or pass --file")
            }
            Error::Config(ConfigError::InvalidKey { .. }) => {
                Some("nothing was exported; rename the variable using only letters, digits and underscores")
            }
            Error::Lookup(LookupError::ExportNotFound(_)) => {
                Some("run: aws cloudformation list-exports")
            }
            Error::Backend(BackendError::Request { .. }) => {
                Some("check your AWS credentials and region (--profile, --region)")
            }
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
