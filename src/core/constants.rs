//! Constants used throughout awsenv.
//!
//! Centralizes magic strings and configuration values.

/// Configuration file name (.awsenv).
pub const CONFIG_FILE: &str = ".awsenv";

/// Environment variable holding the tracing filter.
pub const LOG_ENV: &str = "AWSENV_LOG";

/// Proxy environment variables, checked in order.
pub const PROXY_ENV: &[&str] = &["HTTPS_PROXY", "https_proxy"];

/// Reference prefix for CloudFormation exports.
pub const PREFIX_EXPORT: &str = "cfn:export:";

/// Reference prefix for CloudFormation stack outputs.
pub const PREFIX_OUTPUT: &str = "cfn:output:";

/// Reference prefix for SSM parameters.
pub const PREFIX_PARAMETER: &str = "ssm:";

/// Reference prefix for Secrets Manager secrets.
pub const PREFIX_SECRET: &str = "secret:";

/// Separator between reference segments.
pub const SEPARATOR: char = ':';
