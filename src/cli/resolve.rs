//! Shared pipeline: load the variables file and resolve it against AWS.

use tracing::debug;

use crate::cli::GlobalArgs;
use crate::core::aws::{AwsBackend, AwsSettings};
use crate::core::backend::Backends;
use crate::core::config::Config;
use crate::core::reference;
use crate::core::resolver::{ResolvedVariable, Resolver};
use crate::error::Result;

/// Load the variables file and resolve every valid entry.
pub fn resolve_variables(global: &GlobalArgs) -> Result<Vec<ResolvedVariable>> {
    let config = Config::load(&global.file)?;
    let lookups = reference::parse_variables(&config.variables);

    // Nothing to look up, so skip loading AWS config entirely.
    if lookups.is_empty() {
        debug!("no variables to resolve");
        return Ok(Vec::new());
    }

    let settings = AwsSettings {
        region: global.region.clone().or(config.region),
        profile: global.profile.clone(),
    };
    let backend = AwsBackend::connect(&settings)?;

    Resolver::new(Backends::uniform(&backend)).resolve_all(lookups)
}
