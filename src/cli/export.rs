//! Export command - print resolved variables to stdout.

use crate::cli::{output, resolve, GlobalArgs};
use crate::core::format::Format;
use crate::error::Result;

/// Resolve all variables and print them in the requested format.
pub fn execute(global: &GlobalArgs, format: Format) -> Result<()> {
    let vars = resolve::resolve_variables(global)?;
    output::raw(&format.render(&vars)?);
    Ok(())
}
