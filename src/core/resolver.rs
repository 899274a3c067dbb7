//! Lookup resolution.
//!
//! Dispatches each [`Lookup`] to the matching backend capability and collects
//! the results in declaration order. Lookups run one at a time; the first
//! error aborts the run.
//!
//! Not-found handling differs per kind:
//! - missing export: error
//! - missing stack output: absent value (`None`)
//! - missing parameter or secret: whatever error the backend reports

use serde_json::Value;
use tracing::{debug, trace};

use super::backend::Backends;
use super::reference::{Lookup, Source};
use crate::error::{LookupError, Result};

/// A resolved variable, ready for formatting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedVariable {
    pub name: String,
    /// `None` when a stack output was not present.
    pub value: Option<String>,
}

impl ResolvedVariable {
    /// The value, with absent rendered as an empty string.
    pub fn value_or_empty(&self) -> &str {
        self.value.as_deref().unwrap_or_default()
    }
}

/// Resolves lookups against a set of backends.
pub struct Resolver<'a> {
    backends: Backends<'a>,
}

impl<'a> Resolver<'a> {
    pub fn new(backends: Backends<'a>) -> Self {
        Self { backends }
    }

    /// Resolve every lookup in order.
    ///
    /// # Errors
    ///
    /// Returns the first lookup or backend error; no partial result is kept.
    pub fn resolve_all(&self, lookups: Vec<Lookup>) -> Result<Vec<ResolvedVariable>> {
        let mut resolved = Vec::with_capacity(lookups.len());
        for lookup in lookups {
            debug!(key = %lookup.key, kind = lookup.source.kind(), "resolving");
            let value = self.resolve(&lookup.source)?;
            if value.is_none() {
                debug!(key = %lookup.key, "no value found, leaving empty");
            }
            resolved.push(ResolvedVariable {
                name: lookup.key,
                value,
            });
        }
        Ok(resolved)
    }

    /// Resolve a single source.
    pub fn resolve(&self, source: &Source) -> Result<Option<String>> {
        match source {
            Source::StackExport { export_name } => self.export(export_name).map(Some),
            Source::StackOutput {
                stack_name,
                output_key,
            } => self.output(stack_name, output_key),
            Source::Parameter { parameter_name } => self
                .backends
                .parameters
                .get_parameter(parameter_name)
                .map(Some),
            Source::Secret {
                secret_id,
                field_name,
            } => self.secret(secret_id, field_name.as_deref()).map(Some),
        }
    }

    fn export(&self, name: &str) -> Result<String> {
        let mut token: Option<String> = None;
        loop {
            let page = self.backends.exports.list_exports(token.as_deref())?;
            trace!(count = page.exports.len(), "scanning export page");

            if let Some(export) = page.exports.into_iter().find(|e| e.name == name) {
                return Ok(export.value);
            }

            match page.next_token {
                Some(next) => token = Some(next),
                None => return Err(LookupError::ExportNotFound(name.to_string()).into()),
            }
        }
    }

    fn output(&self, stack_name: &str, output_key: &str) -> Result<Option<String>> {
        let stacks = self.backends.stacks.describe_stack(stack_name)?;
        let stack = stacks
            .into_iter()
            .next()
            .ok_or_else(|| LookupError::StackNotFound(stack_name.to_string()))?;

        Ok(stack
            .outputs
            .into_iter()
            .find(|o| o.key == output_key)
            .map(|o| o.value))
    }

    fn secret(&self, secret_id: &str, field: Option<&str>) -> Result<String> {
        let body = self.backends.secrets.get_secret_value(secret_id)?;
        let Some(field) = field else {
            return Ok(body);
        };

        let json: Value =
            serde_json::from_str(&body).map_err(|source| LookupError::SecretNotJson {
                secret_id: secret_id.to_string(),
                source,
            })?;

        match json.get(field) {
            Some(Value::String(s)) => Ok(s.clone()),
            Some(other) => Ok(other.to_string()),
            None => Err(LookupError::SecretFieldNotFound {
                secret_id: secret_id.to_string(),
                field: field.to_string(),
            }
            .into()),
        }
    }
}
