//! vitn CLI library
//!
//! This library provides the command-line interface for the vitn
//! Vietnamese inverse text normalization system.

pub mod commands;
pub mod error;

pub use error::{CliError, CliResult};
