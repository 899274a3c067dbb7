//! List command - show declared variables without resolving them.

use serde_json::json;

use crate::cli::{output, GlobalArgs};
use crate::core::config::Config;
use crate::core::reference;
use crate::error::{Error, Result};

/// Print each valid variable with its lookup kind and target.
pub fn execute(global: &GlobalArgs, json: bool) -> Result<()> {
    let config = Config::load(&global.file)?;
    let lookups = reference::parse_variables(&config.variables);

    if json {
        let entries: Vec<_> = lookups
            .iter()
            .map(|l| {
                json!({
                    "name": l.key,
                    "kind": l.source.kind(),
                    "target": l.source.to_string(),
                })
            })
            .collect();
        let text = serde_json::to_string_pretty(&entries)
            .map_err(|e| Error::Other(format!("failed to serialize output: {}", e)))?;
        println!("{}", text);
        return Ok(());
    }

    if lookups.is_empty() {
        output::dimmed("no variables declared");
        return Ok(());
    }

    let width = lookups.iter().map(|l| l.key.len()).max().unwrap_or(0);
    for lookup in &lookups {
        output::row(
            &lookup.key,
            width,
            lookup.source.kind(),
            &lookup.source.to_string(),
        );
    }

    Ok(())
}
