//! Test fixtures and constants.

/// One variable of every reference kind, deliberately not in alphabetical order.
pub const MIXED_CONFIG: &str = r#"
variables:
  ZED_SECRET: "secret:prod/db:password"
  API_URL: "cfn:export:api-url"
  DB_HOST: "cfn:output:database:Endpoint"
  LOG_LEVEL: "ssm:/app/log-level"
  RAW_SECRET: "secret:prod/token"
"#;

/// Only references that are skipped by the parser.
pub const INVALID_ONLY_CONFIG: &str = r#"
variables:
  BAD: "foo:bar"
  EMPTY: ""
"#;

/// Valid and invalid references mixed.
pub const PARTIALLY_INVALID_CONFIG: &str = r#"
variables:
  FIRST: "ssm:/first"
  BROKEN: "vault:kv/thing"
  LAST: "cfn:export:last"
"#;

/// A variable name that cannot be exported by a shell.
pub const INVALID_KEY_CONFIG: &str = r#"
variables:
  my-var: "ssm:/x"
"#;

/// A single SSM lookup.
pub const SSM_CONFIG: &str = r#"
variables:
  LOG_LEVEL: "ssm:/app/log-level"
"#;
