//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// Input file not found or inaccessible
    FileNotFound(String),
    /// Grammar build failure from the core
    BuildError(String),
    /// Normalization failure from the core
    NormalizeError(String),
    /// Output writing failure
    OutputError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::BuildError(msg) => write!(f, "Grammar build error: {msg}"),
            CliError::NormalizeError(msg) => write!(f, "Normalization error: {msg}"),
            CliError::OutputError(msg) => write!(f, "Output error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
