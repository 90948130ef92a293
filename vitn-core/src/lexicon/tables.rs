//! Compiled lexicon lookup tables
//!
//! Built once from [`LexiconConfig`](super::config::LexiconConfig) and
//! shared read-only by every matcher. Multi-word spoken forms are kept in
//! [`PhraseTable`]s resolved longest-phrase-first.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use super::config::LexiconConfig;

/// Longest-prefix phrase lookup over space-joined match keys.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhraseTable<V> {
    entries: HashMap<String, V>,
    max_words: usize,
}

impl<V> Default for PhraseTable<V> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
            max_words: 0,
        }
    }
}

impl<V> PhraseTable<V> {
    /// Insert a spoken phrase.
    pub fn insert(&mut self, spoken: &str, value: V) {
        let words = spoken.split_whitespace().count();
        self.max_words = self.max_words.max(words);
        self.entries
            .insert(spoken.split_whitespace().collect::<Vec<_>>().join(" "), value);
    }

    /// Exact lookup by space-joined key.
    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries.get(key)
    }

    /// Longest phrase in the table, in words.
    pub fn max_words(&self) -> usize {
        self.max_words
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A unit-of-measure mapping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Unit {
    /// Written abbreviation
    pub written: String,
    /// Whether the unit attaches without a space
    pub tight: bool,
}

/// Compiled, immutable lexicon for one language.
///
/// Serializable so the grammar cache can persist it; rebuilt lookup state
/// is identical after a round trip.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lexicon {
    code: String,
    name: String,

    digits: HashMap<String, u8>,
    unit_variants: HashMap<String, u8>,
    scales: HashMap<String, u8>,
    quantity_scales: HashSet<String>,
    hundred: String,
    ten: String,
    tens: String,
    zero_connectors: HashSet<String>,
    negative: HashSet<String>,
    decimal_separator: String,
    fraction_separator: String,
    half: String,

    ordinal_marker: String,
    ordinal_specials: HashMap<String, u8>,

    month_marker: String,
    year_marker: String,
    day_markers: HashSet<String>,
    month_names: HashMap<String, u8>,

    hour_marker: String,
    minute_marker: String,
    second_marker: String,
    time_suffixes: HashSet<String>,

    telephone_separators: HashSet<String>,

    electronic_at: PhraseTable<()>,
    electronic_dot: String,
    protocols: HashSet<String>,
    electronic_written_pattern: String,

    currencies: PhraseTable<String>,
    units: PhraseTable<Unit>,
    tight_units: HashSet<String>,
    whitelist: PhraseTable<String>,

    punctuation: HashSet<char>,
}

impl Lexicon {
    /// Compile lookup tables from a validated configuration.
    pub fn from_config(config: &LexiconConfig) -> Result<Self, String> {
        config.validate()?;

        let mut digits = HashMap::new();
        for d in &config.numbers.digits {
            if digits.insert(d.spoken.clone(), d.value).is_some() {
                return Err(format!("duplicate digit word '{}'", d.spoken));
            }
        }
        let mut unit_variants = HashMap::new();
        for v in &config.numbers.unit_variants {
            unit_variants.insert(v.spoken.clone(), v.value);
        }
        let mut scales = HashMap::new();
        for s in &config.numbers.scales {
            scales.insert(s.spoken.clone(), s.zeros);
        }

        let mut ordinal_specials = HashMap::new();
        for s in &config.ordinal.specials {
            ordinal_specials.insert(s.spoken.clone(), s.value);
        }
        let mut month_names = HashMap::new();
        for m in &config.date.month_names {
            month_names.insert(m.spoken.clone(), m.value);
        }

        let mut electronic_at = PhraseTable::default();
        for at in &config.electronic.at {
            electronic_at.insert(at, ());
        }
        let mut currencies = PhraseTable::default();
        for c in &config.money.currencies {
            currencies.insert(&c.spoken, c.written.clone());
        }
        let mut units = PhraseTable::default();
        let mut tight_units = HashSet::new();
        for u in &config.measure.units {
            units.insert(
                &u.spoken,
                Unit {
                    written: u.written.clone(),
                    tight: u.tight,
                },
            );
            if u.tight {
                tight_units.insert(u.written.clone());
            }
        }
        let mut whitelist = PhraseTable::default();
        for w in &config.whitelist.entries {
            whitelist.insert(&w.spoken, w.written.clone());
        }

        Ok(Self {
            code: config.metadata.code.clone(),
            name: config.metadata.name.clone(),
            digits,
            unit_variants,
            scales,
            quantity_scales: config.numbers.quantity_scales.iter().cloned().collect(),
            hundred: config.numbers.hundred.clone(),
            ten: config.numbers.ten.clone(),
            tens: config.numbers.tens.clone(),
            zero_connectors: config.numbers.zero_connectors.iter().cloned().collect(),
            negative: config.numbers.negative.iter().cloned().collect(),
            decimal_separator: config.numbers.decimal_separator.clone(),
            fraction_separator: config.numbers.fraction_separator.clone(),
            half: config.numbers.half.clone(),
            ordinal_marker: config.ordinal.marker.clone(),
            ordinal_specials,
            month_marker: config.date.month_marker.clone(),
            year_marker: config.date.year_marker.clone(),
            day_markers: config.date.day_markers.iter().cloned().collect(),
            month_names,
            hour_marker: config.time.hour_marker.clone(),
            minute_marker: config.time.minute_marker.clone(),
            second_marker: config.time.second_marker.clone(),
            time_suffixes: config.time.suffixes.iter().cloned().collect(),
            telephone_separators: config.telephone.separators.iter().cloned().collect(),
            electronic_at,
            electronic_dot: config.electronic.dot.clone(),
            protocols: config.electronic.protocols.iter().cloned().collect(),
            electronic_written_pattern: config.electronic.written_pattern.clone(),
            currencies,
            units,
            tight_units,
            whitelist,
            punctuation: config.punctuation.marks.iter().copied().collect(),
        })
    }

    /// Language code ("vi").
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Human-readable language name.
    pub fn name(&self) -> &str {
        &self.name
    }

    // --- numeral vocabulary ---

    /// Plain digit value of a word, 0-9.
    pub fn digit(&self, key: &str) -> Option<u8> {
        self.digits.get(key).copied()
    }

    /// Unit-position variant value of a word ("mốt", "tư", "lăm").
    pub fn unit_variant(&self, key: &str) -> Option<u8> {
        self.unit_variants.get(key).copied()
    }

    /// Power of ten of a scale word.
    pub fn scale(&self, key: &str) -> Option<u8> {
        self.scales.get(key).copied()
    }

    /// Whether a scale word may be kept verbatim as a decimal quantity.
    pub fn is_quantity_scale(&self, key: &str) -> bool {
        self.quantity_scales.contains(key)
    }

    /// The hundreds word.
    pub fn is_hundred(&self, key: &str) -> bool {
        key == self.hundred
    }

    /// The standalone-ten word.
    pub fn is_ten(&self, key: &str) -> bool {
        key == self.ten
    }

    /// The tens-multiplier word.
    pub fn is_tens(&self, key: &str) -> bool {
        key == self.tens
    }

    /// Zero-tens connector ("linh", "lẻ").
    pub fn is_zero_connector(&self, key: &str) -> bool {
        self.zero_connectors.contains(key)
    }

    /// Negative-sign word.
    pub fn is_negative(&self, key: &str) -> bool {
        self.negative.contains(key)
    }

    /// Spoken decimal separator.
    pub fn is_decimal_separator(&self, key: &str) -> bool {
        key == self.decimal_separator
    }

    /// Spoken fraction separator.
    pub fn is_fraction_separator(&self, key: &str) -> bool {
        key == self.fraction_separator
    }

    /// The half word.
    pub fn is_half(&self, key: &str) -> bool {
        key == self.half
    }

    // --- ordinal ---

    /// The ordinal marker word.
    pub fn is_ordinal_marker(&self, key: &str) -> bool {
        key == self.ordinal_marker
    }

    /// Ordinal-only reading of a word.
    pub fn ordinal_special(&self, key: &str) -> Option<u8> {
        self.ordinal_specials.get(key).copied()
    }

    // --- date ---

    /// The month marker word.
    pub fn is_month_marker(&self, key: &str) -> bool {
        key == self.month_marker
    }

    /// The year marker word.
    pub fn is_year_marker(&self, key: &str) -> bool {
        key == self.year_marker
    }

    /// Optional day-prefix word.
    pub fn is_day_marker(&self, key: &str) -> bool {
        self.day_markers.contains(key)
    }

    /// Month number of a month name.
    pub fn month_name(&self, key: &str) -> Option<u8> {
        self.month_names.get(key).copied()
    }

    // --- time ---

    /// The hour marker word.
    pub fn is_hour_marker(&self, key: &str) -> bool {
        key == self.hour_marker
    }

    /// The minute marker word.
    pub fn is_minute_marker(&self, key: &str) -> bool {
        key == self.minute_marker
    }

    /// The second marker word.
    pub fn is_second_marker(&self, key: &str) -> bool {
        key == self.second_marker
    }

    /// Day-period suffix word.
    pub fn is_time_suffix(&self, key: &str) -> bool {
        self.time_suffixes.contains(key)
    }

    // --- telephone ---

    /// Spoken telephone separator.
    pub fn is_telephone_separator(&self, key: &str) -> bool {
        self.telephone_separators.contains(key)
    }

    // --- electronic ---

    /// Spoken "@" phrases.
    pub fn electronic_at(&self) -> &PhraseTable<()> {
        &self.electronic_at
    }

    /// Spoken "." word.
    pub fn is_electronic_dot(&self, key: &str) -> bool {
        key == self.electronic_dot
    }

    /// Bare protocol token.
    pub fn is_protocol(&self, key: &str) -> bool {
        self.protocols.contains(key)
    }

    /// Regex source matching an already-written address token.
    pub fn electronic_written_pattern(&self) -> &str {
        &self.electronic_written_pattern
    }

    // --- tables ---

    /// Currency phrase table.
    pub fn currencies(&self) -> &PhraseTable<String> {
        &self.currencies
    }

    /// Unit-of-measure phrase table.
    pub fn units(&self) -> &PhraseTable<Unit> {
        &self.units
    }

    /// Whether a written unit attaches without a space.
    pub fn is_tight_unit(&self, written: &str) -> bool {
        self.tight_units.contains(written)
    }

    /// Whitelist substitution table.
    pub fn whitelist(&self) -> &PhraseTable<String> {
        &self.whitelist
    }

    /// Whether a character is a peelable punctuation mark.
    pub fn is_punctuation(&self, ch: char) -> bool {
        self.punctuation.contains(&ch)
    }
}
