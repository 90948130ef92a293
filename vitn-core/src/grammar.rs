//! Compiled grammar set and process-wide grammar cache
//!
//! Sub-grammars compile once into an immutable [`CompiledGrammarSet`]
//! shared read-only by every normalization call. The cache builds at most
//! once per (language, case-mode) key under mutual exclusion, and can
//! persist the compiled tables to disk so later processes skip the build.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock, PoisonError};

use regex::Regex;
use tracing::info;

use crate::error::{BuildError, BuildResult};
use crate::lexicon::{loader, Lexicon};

/// Input case handling, part of the grammar cache key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CaseMode {
    /// Input is expected already lowercased; match keys are taken verbatim
    #[default]
    Lowercase,
    /// Matching is case-insensitive; raw spelling is preserved on
    /// passthrough
    Cased,
}

impl CaseMode {
    /// Case-mode code used in cache keys.
    pub fn code(&self) -> &'static str {
        match self {
            CaseMode::Lowercase => "lower_cased",
            CaseMode::Cased => "cased",
        }
    }
}

/// Supported languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    /// Vietnamese
    Vietnamese,
}

impl Language {
    /// Language code.
    pub fn code(&self) -> &'static str {
        match self {
            Language::Vietnamese => "vi",
        }
    }

    /// Parse a language code.
    pub fn from_code(code: &str) -> BuildResult<Self> {
        match code {
            "vi" | "vietnamese" => Ok(Language::Vietnamese),
            other => Err(BuildError::UnsupportedLanguage {
                code: other.to_string(),
            }),
        }
    }
}

/// The built, immutable form of all sub-grammars, ready for matching.
///
/// Never mutated after construction; shared behind an [`Arc`] by all
/// concurrent normalization calls.
#[derive(Debug)]
pub struct CompiledGrammarSet {
    language: Language,
    case_mode: CaseMode,
    lexicon: Lexicon,
    electronic: Regex,
}

impl CompiledGrammarSet {
    /// Build fresh from the embedded lexicon definitions.
    pub fn build(language: Language, case_mode: CaseMode) -> BuildResult<Self> {
        let lexicon = match language {
            Language::Vietnamese => loader::vietnamese()?,
        };
        Self::compile(language, case_mode, lexicon)
    }

    fn compile(language: Language, case_mode: CaseMode, lexicon: Lexicon) -> BuildResult<Self> {
        let pattern = lexicon.electronic_written_pattern();
        let electronic = Regex::new(pattern).map_err(|e| BuildError::InvalidPattern {
            pattern: pattern.to_string(),
            message: e.to_string(),
        })?;
        Ok(Self {
            language,
            case_mode,
            lexicon,
            electronic,
        })
    }

    /// The language this set was built for.
    pub fn language(&self) -> Language {
        self.language
    }

    /// The case mode this set was built for.
    pub fn case_mode(&self) -> CaseMode {
        self.case_mode
    }

    /// The compiled lexicon tables.
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Compiled written-form electronic pattern.
    pub(crate) fn electronic_pattern(&self) -> &Regex {
        &self.electronic
    }

    fn load(path: &Path, language: Language, case_mode: CaseMode) -> BuildResult<Self> {
        let bytes = fs::read(path)?;
        let lexicon: Lexicon = serde_json::from_slice(&bytes)?;
        Self::compile(language, case_mode, lexicon)
    }

    fn persist(&self, path: &Path) -> BuildResult<()> {
        let bytes = serde_json::to_vec(&self.lexicon)?;
        fs::write(path, bytes)?;
        Ok(())
    }
}

type Registry = Mutex<HashMap<String, Arc<CompiledGrammarSet>>>;

fn registry() -> &'static Registry {
    static REGISTRY: OnceLock<Registry> = OnceLock::new();
    REGISTRY.get_or_init(|| Mutex::new(HashMap::new()))
}

/// Grammar cache: in-process registry plus an optional persisted archive.
///
/// The archive maps `"{language}_{case_mode}"` keys to the serialized
/// compiled tables, one JSON file per key under the configured directory.
#[derive(Debug, Clone, Default)]
pub struct GrammarCache {
    cache_dir: Option<PathBuf>,
}

impl GrammarCache {
    /// A cache with an optional on-disk archive location.
    pub fn new(cache_dir: Option<PathBuf>) -> Self {
        Self { cache_dir }
    }

    /// Return the compiled grammar set for a key, building it at most once
    /// per process under mutual exclusion.
    ///
    /// With `overwrite` set, any registered or persisted set for the key is
    /// discarded and rebuilt from the lexicon definitions. Build failures
    /// are fatal: nothing is registered and the error surfaces to the
    /// caller.
    pub fn get_or_build(
        &self,
        language: Language,
        case_mode: CaseMode,
        overwrite: bool,
    ) -> BuildResult<Arc<CompiledGrammarSet>> {
        let key = cache_key(language, case_mode);
        let mut registered = registry().lock().unwrap_or_else(PoisonError::into_inner);

        if !overwrite {
            if let Some(set) = registered.get(&key) {
                return Ok(Arc::clone(set));
            }
        }

        let set = if let Some(dir) = &self.cache_dir {
            let path = dir.join(format!("{key}.json"));
            if !overwrite && path.exists() {
                let set = CompiledGrammarSet::load(&path, language, case_mode)?;
                info!(path = %path.display(), "grammar set restored from cache");
                Arc::new(set)
            } else {
                let set = CompiledGrammarSet::build(language, case_mode)?;
                fs::create_dir_all(dir)?;
                set.persist(&path)?;
                info!(path = %path.display(), "grammar set built and persisted");
                Arc::new(set)
            }
        } else {
            info!(key = %key, "building grammar set");
            Arc::new(CompiledGrammarSet::build(language, case_mode)?)
        };

        registered.insert(key, Arc::clone(&set));
        Ok(set)
    }
}

fn cache_key(language: Language, case_mode: CaseMode) -> String {
    format!("{}_{}", language.code(), case_mode.code())
}
