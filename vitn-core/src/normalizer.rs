//! Combined normalization entry point
//!
//! [`InverseNormalizer`] composes the classifier and the verbalizer over a
//! shared compiled grammar set. Normalization is a pure function of the
//! input text and the grammar set: no shared state is mutated, and
//! instances can be used concurrently from many threads.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::debug;

use crate::classifier::classify;
use crate::error::{BuildResult, Result};
use crate::grammar::{CaseMode, CompiledGrammarSet, GrammarCache, Language};
use crate::token::Sentence;
use crate::tokenize::tokenize;
use crate::verbalizer::verbalize;

/// Configuration for an [`InverseNormalizer`].
#[derive(Debug, Clone)]
pub struct NormalizerConfig {
    /// Target language
    pub language: Language,
    /// Input case handling
    pub case_mode: CaseMode,
    /// Optional on-disk grammar cache location
    pub cache_dir: Option<PathBuf>,
    /// Force a rebuild of any cached grammar set
    pub overwrite_cache: bool,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            language: Language::Vietnamese,
            case_mode: CaseMode::Lowercase,
            cache_dir: None,
            overwrite_cache: false,
        }
    }
}

impl NormalizerConfig {
    /// Start building a configuration.
    pub fn builder() -> NormalizerConfigBuilder {
        NormalizerConfigBuilder::default()
    }
}

/// Builder for [`NormalizerConfig`].
#[derive(Debug, Default)]
pub struct NormalizerConfigBuilder {
    config: NormalizerConfig,
}

impl NormalizerConfigBuilder {
    /// Set the language.
    pub fn language(mut self, language: Language) -> Self {
        self.config.language = language;
        self
    }

    /// Set the case mode.
    pub fn case_mode(mut self, case_mode: CaseMode) -> Self {
        self.config.case_mode = case_mode;
        self
    }

    /// Set the on-disk grammar cache directory.
    pub fn cache_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.cache_dir = Some(dir.into());
        self
    }

    /// Force a rebuild of any cached grammar set.
    pub fn overwrite_cache(mut self, overwrite: bool) -> Self {
        self.config.overwrite_cache = overwrite;
        self
    }

    /// Finish building.
    pub fn build(self) -> NormalizerConfig {
        self.config
    }
}

/// Inverse text normalizer over a shared compiled grammar set.
pub struct InverseNormalizer {
    grammar: Arc<CompiledGrammarSet>,
}

impl InverseNormalizer {
    /// Create a normalizer with the default configuration (Vietnamese,
    /// lowercase input, no disk cache).
    pub fn new() -> BuildResult<Self> {
        Self::with_config(NormalizerConfig::default())
    }

    /// Create a normalizer with a custom configuration.
    ///
    /// The grammar set is built (or restored from the cache) here; build
    /// failures surface immediately and nothing is served from a partially
    /// built set.
    pub fn with_config(config: NormalizerConfig) -> BuildResult<Self> {
        let cache = GrammarCache::new(config.cache_dir);
        let grammar = cache.get_or_build(config.language, config.case_mode, config.overwrite_cache)?;
        Ok(Self { grammar })
    }

    /// The language this normalizer serves.
    pub fn language(&self) -> Language {
        self.grammar.language()
    }

    /// The case mode this normalizer was built with.
    pub fn case_mode(&self) -> CaseMode {
        self.grammar.case_mode()
    }

    /// Classify input into its best-covering token sequence.
    pub fn classify(&self, text: &str) -> Sentence {
        let units = tokenize(text, self.grammar.lexicon(), self.grammar.case_mode());
        classify(&self.grammar, &units)
    }

    /// Convert spoken-style text into canonical written form.
    pub fn inverse_normalize(&self, text: &str) -> Result<String> {
        let sentence = self.classify(text);
        debug!(tokens = sentence.spans.len(), "classified input");
        Ok(verbalize(&self.grammar, &sentence)?)
    }
}

/// Convert spoken-style text into canonical written form.
///
/// Convenience wrapper around [`InverseNormalizer`]; the grammar set is
/// shared process-wide, so repeated calls pay the build cost once.
pub fn inverse_normalize(text: &str, language: Language, case_mode: CaseMode) -> Result<String> {
    let config = NormalizerConfig::builder()
        .language(language)
        .case_mode(case_mode)
        .build();
    InverseNormalizer::with_config(config)?.inverse_normalize(text)
}
