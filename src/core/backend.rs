//! Backend capabilities.
//!
//! The resolver needs four operations from the outside world. Each one is a
//! narrow trait so tests can substitute any of them without network access.
//! [`crate::core::aws::AwsBackend`] implements all four.

use crate::error::Result;

/// A named CloudFormation export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Export {
    pub name: String,
    pub value: String,
}

/// One page of a `ListExports` listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportPage {
    pub exports: Vec<Export>,
    /// Continuation token; `None` on the last page.
    pub next_token: Option<String>,
}

/// A stack output entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackOutput {
    pub key: String,
    pub value: String,
}

/// A described stack. Only its outputs are of interest.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stack {
    pub outputs: Vec<StackOutput>,
}

/// Lists CloudFormation exports page by page.
pub trait ExportLister {
    fn list_exports(&self, next_token: Option<&str>) -> Result<ExportPage>;
}

/// Describes a CloudFormation stack by name.
pub trait StackDescriber {
    fn describe_stack(&self, stack_name: &str) -> Result<Vec<Stack>>;
}

/// Reads an SSM parameter with decryption enabled.
pub trait ParameterGetter {
    fn get_parameter(&self, name: &str) -> Result<String>;
}

/// Reads the string body of a Secrets Manager secret.
pub trait SecretGetter {
    fn get_secret_value(&self, secret_id: &str) -> Result<String>;
}

/// The set of backend handles used for one resolution run.
///
/// Handles are shared read-only for the lifetime of the run.
#[derive(Clone, Copy)]
pub struct Backends<'a> {
    pub exports: &'a dyn ExportLister,
    pub stacks: &'a dyn StackDescriber,
    pub parameters: &'a dyn ParameterGetter,
    pub secrets: &'a dyn SecretGetter,
}

impl<'a> Backends<'a> {
    /// Use one value for every capability.
    pub fn uniform<B>(backend: &'a B) -> Self
    where
        B: ExportLister + StackDescriber + ParameterGetter + SecretGetter,
    {
        Self {
            exports: backend,
            stacks: backend,
            parameters: backend,
            secrets: backend,
        }
    }
}
