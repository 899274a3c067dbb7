//! awsenv - Load AWS-hosted configuration into your shell.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── export        # Resolve and print (default command)
//! │   ├── list          # Show declared variables offline
//! │   ├── run           # Run a command with resolved variables
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── config        # .awsenv loading and validation
//!     ├── reference     # Reference string parsing
//!     ├── backend       # Backend capability traits
//!     ├── aws           # AWS SDK implementation of the backends
//!     ├── resolver      # Lookup dispatch
//!     └── format        # shell / dotenv / json rendering
//! ```
//!
//! # Reference syntax
//!
//! - `cfn:export:<name>` - CloudFormation export
//! - `cfn:output:<stack>:<key>` - CloudFormation stack output
//! - `ssm:<name>` - SSM parameter (decrypted)
//! - `secret:<id>[:<field>]` - Secrets Manager secret, optionally one JSON field

pub mod cli;
pub mod core;
pub mod error;
