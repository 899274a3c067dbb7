//! Core library components.
//!
//! This module contains the reference parsing, lookup resolution and
//! configuration handling, independent of the command line.

pub mod aws;
pub mod backend;
pub mod config;
pub mod constants;
pub mod format;
pub mod reference;
pub mod resolver;
