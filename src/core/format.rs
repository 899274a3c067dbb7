//! Output formats for resolved variables.

use serde_json::{Map, Value};

use super::resolver::ResolvedVariable;
use crate::error::{Error, Result};

/// How resolved variables are printed.
#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Format {
    /// `export NAME="value"` lines for `eval`
    #[default]
    Shell,
    /// `NAME=value` lines (.env)
    Dotenv,
    /// A JSON object
    Json,
}

impl Format {
    /// Render variables in declaration order.
    pub fn render(self, vars: &[ResolvedVariable]) -> Result<String> {
        match self {
            Self::Shell => Ok(vars
                .iter()
                .map(|v| {
                    format!(
                        "export {}=\"{}\"\n",
                        v.name,
                        escape_double_quoted(v.value_or_empty())
                    )
                })
                .collect()),
            Self::Dotenv => Ok(vars
                .iter()
                .map(|v| format!("{}={}\n", v.name, dotenv_value(v.value_or_empty())))
                .collect()),
            Self::Json => {
                let object: Map<String, Value> = vars
                    .iter()
                    .map(|v| {
                        let value = v.value.clone().map(Value::String).unwrap_or(Value::Null);
                        (v.name.clone(), value)
                    })
                    .collect();
                let mut out = serde_json::to_string_pretty(&Value::Object(object))
                    .map_err(|e| Error::Other(format!("failed to serialize output: {}", e)))?;
                out.push('\n');
                Ok(out)
            }
        }
    }
}

/// Escape characters that are special inside a double-quoted shell string.
fn escape_double_quoted(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '\\' | '"' | '$' | '`') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Quote a .env value when it contains whitespace or special characters.
fn dotenv_value(value: &str) -> String {
    let needs_quotes = value
        .chars()
        .any(|c| c.is_whitespace() || matches!(c, '#' | '=' | '"' | '\''));
    if needs_quotes {
        format!("\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\""))
    } else {
        value.to_string()
    }
}
