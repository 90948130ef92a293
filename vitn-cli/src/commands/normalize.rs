//! Normalize command implementation

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use vitn_core::{CaseMode, InverseNormalizer, Language, NormalizerConfig};

use crate::error::CliError;

/// Arguments for the normalize command
#[derive(Debug, Args)]
pub struct NormalizeArgs {
    /// Input files; reads stdin when neither files nor --text are given
    #[arg(short, long, value_name = "FILE")]
    pub input: Vec<PathBuf>,

    /// Normalize a literal text argument instead of files
    #[arg(short, long, value_name = "TEXT", conflicts_with = "input")]
    pub text: Option<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Language for normalization rules
    #[arg(short, long, value_enum, default_value = "vietnamese")]
    pub language: CliLanguage,

    /// Input case handling
    #[arg(long, value_enum, default_value = "lower")]
    pub case: CliCaseMode,

    /// Grammar cache directory
    #[arg(long, value_name = "DIR")]
    pub cache_dir: Option<PathBuf>,

    /// Rebuild the grammar cache even when a persisted set exists
    #[arg(long)]
    pub overwrite_cache: bool,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// One normalized line per input line
    Text,
    /// JSON array of input/output records
    Json,
}

/// Supported languages
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliLanguage {
    /// Vietnamese normalization rules
    Vietnamese,
}

impl From<CliLanguage> for Language {
    fn from(value: CliLanguage) -> Self {
        match value {
            CliLanguage::Vietnamese => Language::Vietnamese,
        }
    }
}

/// Input case handling
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliCaseMode {
    /// Input is already lowercased
    Lower,
    /// Match case-insensitively
    Cased,
}

impl From<CliCaseMode> for CaseMode {
    fn from(value: CliCaseMode) -> Self {
        match value {
            CliCaseMode::Lower => CaseMode::Lowercase,
            CliCaseMode::Cased => CaseMode::Cased,
        }
    }
}

#[derive(Debug, Serialize)]
struct Record {
    input: String,
    output: String,
}

impl NormalizeArgs {
    /// Execute the normalize command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        log::info!("Building grammar set");
        let mut config = NormalizerConfig::builder()
            .language(self.language.into())
            .case_mode(self.case.into())
            .overwrite_cache(self.overwrite_cache);
        if let Some(dir) = &self.cache_dir {
            config = config.cache_dir(dir);
        }
        let normalizer = InverseNormalizer::with_config(config.build())
            .map_err(|e| CliError::BuildError(e.to_string()))?;

        let lines = self.read_lines()?;
        log::info!("Normalizing {} line(s)", lines.len());

        let mut records = Vec::with_capacity(lines.len());
        for line in lines {
            let output = normalizer
                .inverse_normalize(&line)
                .map_err(|e| CliError::NormalizeError(e.to_string()))?;
            records.push(Record {
                input: line,
                output,
            });
        }

        let rendered = match self.format {
            OutputFormat::Text => {
                let mut s = records
                    .iter()
                    .map(|r| r.output.as_str())
                    .collect::<Vec<_>>()
                    .join("\n");
                s.push('\n');
                s
            }
            OutputFormat::Json => {
                let mut s = serde_json::to_string_pretty(&records)?;
                s.push('\n');
                s
            }
        };
        self.write_output(&rendered)
    }

    fn read_lines(&self) -> Result<Vec<String>> {
        if let Some(text) = &self.text {
            return Ok(text.lines().map(str::to_string).collect());
        }
        if self.input.is_empty() {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("reading stdin")?;
            return Ok(buf.lines().map(str::to_string).collect());
        }
        let mut lines = Vec::new();
        for path in &self.input {
            let content = fs::read_to_string(path)
                .map_err(|_| CliError::FileNotFound(path.display().to_string()))?;
            lines.extend(content.lines().map(str::to_string));
        }
        Ok(lines)
    }

    fn write_output(&self, rendered: &str) -> Result<()> {
        match &self.output {
            Some(path) => fs::write(path, rendered)
                .map_err(|e| CliError::OutputError(e.to_string()).into()),
            None => {
                io::stdout()
                    .write_all(rendered.as_bytes())
                    .context("writing stdout")?;
                Ok(())
            }
        }
    }

    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }
}
