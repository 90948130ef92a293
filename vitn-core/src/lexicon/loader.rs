//! Embedded lexicon loading
//!
//! Lexicon data ships inside the crate as TOML, one file per language.

use crate::error::{BuildError, BuildResult};

use super::config::LexiconConfig;
use super::tables::Lexicon;

/// Parse and compile a lexicon from TOML source.
pub fn from_toml(code: &str, toml_str: &str) -> BuildResult<Lexicon> {
    let config: LexiconConfig =
        toml::from_str(toml_str).map_err(|e| BuildError::LexiconParse {
            language: code.to_string(),
            message: e.to_string(),
        })?;
    Lexicon::from_config(&config).map_err(BuildError::InvalidLexicon)
}

/// The embedded Vietnamese lexicon.
pub fn vietnamese() -> BuildResult<Lexicon> {
    from_toml("vi", include_str!("../../configs/languages/vietnamese.toml"))
}
