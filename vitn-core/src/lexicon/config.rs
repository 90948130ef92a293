//! Lexicon configuration schema
//!
//! This module defines the TOML schema for a language lexicon. Malformed
//! entries are a build-time fatal error: validation runs before any
//! grammar is compiled, and a process never serves traffic with a
//! partially built grammar set.

use serde::{Deserialize, Serialize};

/// Root lexicon configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexiconConfig {
    pub metadata: Metadata,
    pub numbers: Numbers,
    pub ordinal: OrdinalWords,
    pub date: DateWords,
    pub time: TimeWords,
    pub telephone: TelephoneWords,
    pub electronic: ElectronicWords,
    pub money: MoneyWords,
    pub measure: MeasureWords,
    pub whitelist: Whitelist,
    pub punctuation: Punctuation,
}

/// Language metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    pub code: String,
    pub name: String,
}

/// Numeral vocabulary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Numbers {
    /// Plain digit words, values 0-9
    pub digits: Vec<ValuedWord>,
    /// Unit-position variants, valid after a tens word or at the end of a
    /// digit sequence
    pub unit_variants: Vec<ValuedWord>,
    /// Scale words with their power of ten
    pub scales: Vec<ScaleWord>,
    /// The hundreds word
    pub hundred: String,
    /// The standalone-ten word
    pub ten: String,
    /// The tens-multiplier word
    pub tens: String,
    /// Connectors for a zero tens digit ("linh", "lẻ")
    pub zero_connectors: Vec<String>,
    /// Negative-sign words
    pub negative: Vec<String>,
    /// Spoken decimal separator
    pub decimal_separator: String,
    /// Spoken fraction separator
    pub fraction_separator: String,
    /// The half word, contributing fractional part "5" after a quantity
    pub half: String,
    /// Scale words that may be kept verbatim as a decimal quantity
    pub quantity_scales: Vec<String>,
}

/// A spoken word carrying a digit value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValuedWord {
    pub spoken: String,
    pub value: u8,
}

/// A spoken scale word carrying its power of ten.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScaleWord {
    pub spoken: String,
    pub zeros: u8,
}

/// Ordinal vocabulary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrdinalWords {
    /// The ordinal marker word
    pub marker: String,
    /// Ordinal-only readings ("nhất", "nhì", "tư")
    pub specials: Vec<ValuedWord>,
}

/// Date vocabulary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DateWords {
    pub month_marker: String,
    pub year_marker: String,
    /// Optional day-prefix words ("mùng", "mồng")
    #[serde(default)]
    pub day_markers: Vec<String>,
    /// Month names mapping to month numbers ("giêng" -> 1, "chạp" -> 12)
    pub month_names: Vec<ValuedWord>,
}

/// Time vocabulary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeWords {
    pub hour_marker: String,
    pub minute_marker: String,
    pub second_marker: String,
    /// Day-period suffix words kept verbatim
    pub suffixes: Vec<String>,
}

/// Telephone vocabulary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelephoneWords {
    /// Spoken separators deleted between digit groups
    #[serde(default)]
    pub separators: Vec<String>,
}

/// Electronic-address vocabulary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ElectronicWords {
    /// Spoken forms of "@"
    pub at: Vec<String>,
    /// Spoken form of "."
    pub dot: String,
    /// Bare protocol tokens
    pub protocols: Vec<String>,
    /// Regex matching an already-written address or URL token
    pub written_pattern: String,
}

/// Currency table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoneyWords {
    pub currencies: Vec<Substitution>,
}

/// Unit-of-measure table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeasureWords {
    pub units: Vec<UnitEntry>,
}

/// One unit-of-measure entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitEntry {
    pub spoken: String,
    pub written: String,
    /// Tight units attach to the amount without a space ("%", degrees)
    #[serde(default)]
    pub tight: bool,
}

/// Whitelist substitution table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Whitelist {
    pub entries: Vec<Substitution>,
}

/// A spoken-form to written-form substitution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Substitution {
    pub spoken: String,
    pub written: String,
}

/// Punctuation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Punctuation {
    /// Characters peeled off word edges into punctuation units
    pub marks: Vec<char>,
}

impl LexiconConfig {
    /// Validate the configuration.
    pub(crate) fn validate(&self) -> Result<(), String> {
        if self.numbers.digits.is_empty() {
            return Err("no digit words defined".to_string());
        }
        for d in &self.numbers.digits {
            if d.value > 9 {
                return Err(format!("digit word '{}' has value {} > 9", d.spoken, d.value));
            }
        }
        for v in &self.numbers.unit_variants {
            if v.value == 0 || v.value > 9 {
                return Err(format!(
                    "unit variant '{}' must have value 1-9, got {}",
                    v.spoken, v.value
                ));
            }
        }
        for s in &self.numbers.scales {
            if !matches!(s.zeros, 3 | 6 | 9) {
                return Err(format!(
                    "scale word '{}' must have 3, 6 or 9 zeros, got {}",
                    s.spoken, s.zeros
                ));
            }
        }
        for q in &self.numbers.quantity_scales {
            if !self.numbers.scales.iter().any(|s| &s.spoken == q) {
                return Err(format!("quantity scale '{q}' is not a known scale word"));
            }
        }
        for m in &self.date.month_names {
            if m.value == 0 || m.value > 12 {
                return Err(format!(
                    "month name '{}' must map to 1-12, got {}",
                    m.spoken, m.value
                ));
            }
        }
        let empty_spoken = self
            .money
            .currencies
            .iter()
            .map(|c| &c.spoken)
            .chain(self.whitelist.entries.iter().map(|w| &w.spoken))
            .chain(self.measure.units.iter().map(|u| &u.spoken))
            .any(|s| s.trim().is_empty());
        if empty_spoken {
            return Err("empty spoken form in a substitution table".to_string());
        }
        if self.punctuation.marks.is_empty() {
            return Err("no punctuation marks defined".to_string());
        }
        Ok(())
    }
}
