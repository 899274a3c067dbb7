//! Run command.
//!
//! Executes a command with the resolved variables injected as environment
//! variables. Nothing is written to disk.

use zeroize::Zeroizing;

use crate::cli::{resolve, GlobalArgs};
use crate::core::resolver::ResolvedVariable;
use crate::error::{Error, Result};

/// Run a command with resolved variables and exit with its status.
pub fn execute(global: &GlobalArgs, command: &[String]) -> Result<()> {
    let vars = resolve::resolve_variables(global)?;
    let exit_code = run_with_variables(vars, command)?;
    std::process::exit(exit_code);
}

/// Spawn `command` with `vars` added to its environment.
fn run_with_variables(vars: Vec<ResolvedVariable>, command: &[String]) -> Result<i32> {
    let (program, args) = command
        .split_first()
        .ok_or_else(|| Error::Other("no command specified".to_string()))?;

    let mut cmd = std::process::Command::new(program);
    cmd.args(args);

    for var in vars {
        let value = Zeroizing::new(var.value.unwrap_or_default());
        cmd.env(&var.name, value.as_str());
    }

    let status = cmd.status()?;
    // Killed by a signal: no code, report generic failure
    Ok(status.code().unwrap_or(1))
}
