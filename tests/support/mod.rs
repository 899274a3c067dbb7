//! Test support utilities for awsenv integration tests.
//!
//! Provides reusable test environment setup and helper commands.

#![allow(dead_code)]

pub mod assertions;
pub mod commands;
pub mod fixtures;
pub mod skip;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use std::path::PathBuf;
use tempfile::TempDir;

/// Test environment with isolated temp directories.
///
/// Each test gets its own temporary project dir and home dir.
/// No process-global state is mutated; child processes use `.current_dir()`
/// so tests can safely run in parallel.
pub struct Test {
    /// Temporary directory for the test project
    pub dir: TempDir,
    /// Temporary home directory
    pub home: TempDir,
}

impl Test {
    /// Create a new empty test environment.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        let home = TempDir::new().expect("failed to create temp home");

        Self { dir, home }
    }

    /// Create a test environment with `.awsenv` written in the project dir.
    pub fn with_config(contents: &str) -> Self {
        let t = Self::new();
        t.write_file(".awsenv", contents);
        t
    }

    /// Write a file relative to the project dir and return its path.
    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, contents).expect("failed to write test file");
        path
    }
}
