//! Configuration file management.
//!
//! Reads and validates `.awsenv` files:
//!
//! ```yaml
//! region: eu-central-1
//! variables:
//!   DB_HOST: "cfn:output:database:Endpoint"
//!   DB_PASSWORD: "secret:prod/db:password"
//! ```

use indexmap::IndexMap;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::constants;
use crate::error::{ConfigError, Result};

/// Contents of an `.awsenv` file.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Region to use unless `--region` is given.
    #[serde(default)]
    pub region: Option<String>,
    /// Variable name to encoded reference, in declaration order.
    #[serde(default)]
    pub variables: IndexMap<String, String>,
}

impl Config {
    /// Default config path in the current directory.
    pub fn default_path() -> PathBuf {
        PathBuf::from(constants::CONFIG_FILE)
    }

    /// Load and validate a config file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if the file doesn't exist,
    /// `ConfigError::Parse` if the YAML is malformed, or
    /// `ConfigError::InvalidKey` if a variable name is not a valid shell name.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading config");

        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()).into());
        }
        let contents = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        let config = Self::parse(&contents)?;

        debug!(variables = config.variables.len(), "config loaded");
        Ok(config)
    }

    /// Parse and validate config contents.
    pub fn parse(contents: &str) -> Result<Self> {
        // An empty document deserializes to unit, not a map.
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(contents).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every variable name is usable as a shell variable.
    pub fn validate(&self) -> Result<()> {
        for key in self.variables.keys() {
            validate_key(key)?;
        }
        Ok(())
    }
}

/// Validate a variable name: `[A-Za-z_][A-Za-z0-9_]*`.
pub fn validate_key(key: &str) -> Result<()> {
    let mut chars = key.chars();
    let first = chars.next().ok_or_else(|| ConfigError::InvalidKey {
        key: key.to_string(),
        reason: "name is empty",
    })?;

    if !(first.is_ascii_alphabetic() || first == '_') {
        return Err(ConfigError::InvalidKey {
            key: key.to_string(),
            reason: "must start with a letter or underscore",
        }
        .into());
    }

    if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(ConfigError::InvalidKey {
            key: key.to_string(),
            reason: "only letters, digits and underscores are allowed",
        }
        .into());
    }

    Ok(())
}
