//! Reference parsing.
//!
//! Turns the encoded strings from `.awsenv` into typed lookups:
//!
//! ```text
//! cfn:export:<export>            -> Source::StackExport
//! cfn:output:<stack>:<output>    -> Source::StackOutput
//! ssm:<parameter>                -> Source::Parameter
//! secret:<id>[:<field>]          -> Source::Secret
//! ```
//!
//! Anything else is logged and skipped. Parsing never fails.

use indexmap::IndexMap;
use std::fmt;
use tracing::{trace, warn};

use crate::core::constants::{
    PREFIX_EXPORT, PREFIX_OUTPUT, PREFIX_PARAMETER, PREFIX_SECRET, SEPARATOR,
};

/// Where a variable's value lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// An account-wide CloudFormation export, looked up by name.
    StackExport { export_name: String },

    /// An output of one CloudFormation stack.
    StackOutput {
        stack_name: String,
        output_key: String,
    },

    /// An SSM Parameter Store entry (decrypted).
    Parameter { parameter_name: String },

    /// A Secrets Manager secret, optionally a single field of a JSON body.
    Secret {
        secret_id: String,
        field_name: Option<String>,
    },
}

impl Source {
    /// Short label for the lookup kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::StackExport { .. } => "export",
            Self::StackOutput { .. } => "output",
            Self::Parameter { .. } => "ssm",
            Self::Secret { .. } => "secret",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StackExport { export_name } => write!(f, "{}", export_name),
            Self::StackOutput {
                stack_name,
                output_key,
            } => write!(f, "{}.{}", stack_name, output_key),
            Self::Parameter { parameter_name } => write!(f, "{}", parameter_name),
            Self::Secret {
                secret_id,
                field_name: Some(field),
            } => write!(f, "{}#{}", secret_id, field),
            Self::Secret { secret_id, .. } => write!(f, "{}", secret_id),
        }
    }
}

/// A named lookup: one entry of the `variables` mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lookup {
    /// Name the resolved value is exported under.
    pub key: String,
    pub source: Source,
}

/// Parse a single encoded reference.
///
/// Returns `None` when no known prefix matches. Empty remainders are not
/// rejected here (`ssm:` yields an empty parameter name).
pub fn parse_reference(reference: &str) -> Option<Source> {
    if let Some(rest) = reference.strip_prefix(PREFIX_EXPORT) {
        return Some(Source::StackExport {
            export_name: rest.to_string(),
        });
    }

    if let Some(rest) = reference.strip_prefix(PREFIX_OUTPUT) {
        // Only the first two segments are used; anything after a second
        // separator is dropped.
        let mut parts = rest.split(SEPARATOR);
        let stack_name = parts.next().unwrap_or_default().to_string();
        let output_key = parts.next().unwrap_or_default().to_string();
        return Some(Source::StackOutput {
            stack_name,
            output_key,
        });
    }

    if let Some(rest) = reference.strip_prefix(PREFIX_PARAMETER) {
        return Some(Source::Parameter {
            parameter_name: rest.to_string(),
        });
    }

    if let Some(rest) = reference.strip_prefix(PREFIX_SECRET) {
        let mut parts = rest.split(SEPARATOR);
        let secret_id = parts.next().unwrap_or_default().to_string();
        // `secret:<id>:` means the whole body, same as no field.
        let field_name = parts
            .next()
            .filter(|f| !f.is_empty())
            .map(str::to_string);
        return Some(Source::Secret {
            secret_id,
            field_name,
        });
    }

    None
}

/// Parse every declared variable, preserving declaration order.
///
/// Entries with an unrecognized reference are logged and left out.
pub fn parse_variables(variables: &IndexMap<String, String>) -> Vec<Lookup> {
    variables
        .iter()
        .filter_map(|(key, reference)| match parse_reference(reference) {
            Some(source) => {
                trace!(key = %key, kind = source.kind(), "parsed reference");
                Some(Lookup {
                    key: key.clone(),
                    source,
                })
            }
            None => {
                warn!(key = %key, reference = %reference, "invalid config, skipping");
                None
            }
        })
        .collect()
}
