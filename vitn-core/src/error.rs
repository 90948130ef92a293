//! Layered error types
//!
//! Build failures are fatal and surface at grammar construction time;
//! classification itself cannot fail because the word fallback guarantees
//! a covering for any input.

use thiserror::Error;

/// Errors raised while building or loading a compiled grammar set.
#[derive(Error, Debug)]
pub enum BuildError {
    /// Lexicon configuration could not be parsed
    #[error("failed to parse lexicon for '{language}': {message}")]
    LexiconParse {
        /// Language code whose lexicon failed to parse
        language: String,
        /// Underlying parser message
        message: String,
    },

    /// Lexicon parsed but contains an invalid entry
    #[error("invalid lexicon: {0}")]
    InvalidLexicon(String),

    /// A pattern in the lexicon does not compile
    #[error("invalid pattern '{pattern}': {message}")]
    InvalidPattern {
        /// The offending pattern source
        pattern: String,
        /// Compiler message
        message: String,
    },

    /// Grammar cache I/O failure
    #[error("grammar cache I/O error: {0}")]
    CacheIo(#[from] std::io::Error),

    /// Persisted grammar archive is corrupt or has an incompatible layout.
    /// Pass `overwrite = true` to rebuild and replace it.
    #[error("grammar cache corrupt: {0}")]
    CacheCorrupt(#[from] serde_json::Error),

    /// Requested language has no lexicon
    #[error("language '{code}' not supported")]
    UnsupportedLanguage {
        /// The unknown language code
        code: String,
    },
}

/// Errors raised while verbalizing a classified sentence.
///
/// These are internal contract violations: a token sequence handed to the
/// verbalizer is inconsistent with its declared kind. No partially rendered
/// string is ever returned.
#[derive(Error, Debug)]
pub enum VerbalizeError {
    /// A token is missing a required field or carries an out-of-contract value
    #[error("malformed {kind} token: {reason}")]
    MalformedToken {
        /// Token kind name
        kind: &'static str,
        /// What the contract violation is
        reason: String,
    },
}

/// Errors surfaced by the combined normalization entry point.
#[derive(Error, Debug)]
pub enum NormalizeError {
    /// Grammar build or cache failure
    #[error("grammar build failed: {0}")]
    Build(#[from] BuildError),

    /// Verbalizer contract violation
    #[error("verbalization failed: {0}")]
    Verbalize(#[from] VerbalizeError),
}

/// Result type for grammar build operations.
pub type BuildResult<T> = std::result::Result<T, BuildError>;

/// Result type for normalization operations.
pub type Result<T> = std::result::Result<T, NormalizeError>;
