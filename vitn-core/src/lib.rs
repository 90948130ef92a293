//! Inverse text normalization for Vietnamese speech transcripts
//!
//! Converts spoken-style text (digit words, date and time phrases,
//! currency phrases, telephone digit sequences) into canonical written
//! form through a two-stage tag-then-verbalize pipeline:
//!
//! - the **classifier** scans the input with every sub-grammar, forming a
//!   lattice of typed candidate spans, and selects the minimum-weight
//!   covering of the whole input;
//! - the **verbalizer** renders the resulting token sequence into the
//!   final string, one rule per token kind.
//!
//! Sub-grammars compile once per (language, case-mode) key into an
//! immutable grammar set shared by all calls, with an optional persisted
//! cache to skip the build on later process starts.
//!
//! # Example
//!
//! ```rust
//! use vitn_core::InverseNormalizer;
//!
//! let normalizer = InverseNormalizer::new().unwrap();
//! let out = normalizer
//!     .inverse_normalize("giá vàng lên một trăm hai mươi năm triệu đồng")
//!     .unwrap();
//! assert_eq!(out, "giá vàng lên 125 triệu đồng");
//! ```

pub mod classifier;
pub mod error;
pub mod grammar;
pub mod lexicon;
pub mod normalizer;
mod tagger;
pub mod token;
pub mod tokenize;
pub mod verbalizer;

pub use error::{BuildError, BuildResult, NormalizeError, Result, VerbalizeError};
pub use grammar::{CaseMode, CompiledGrammarSet, GrammarCache, Language};
pub use normalizer::{inverse_normalize, InverseNormalizer, NormalizerConfig};
pub use token::{Sentence, Span, Token};
