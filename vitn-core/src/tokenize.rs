//! Input tokenization
//!
//! The classifier operates on a flat sequence of [`WordUnit`]s: the input
//! split on whitespace, with leading and trailing punctuation peeled into
//! units of their own. Interior punctuation (hyphens, slashes inside a
//! word) stays attached, so chunks like "đồng/lượng" survive as one word.

use crate::grammar::CaseMode;
use crate::lexicon::Lexicon;

/// One unit of the tokenized input: a word or a single punctuation mark.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordUnit {
    raw: String,
    key: String,
    punct: bool,
}

impl WordUnit {
    fn word(raw: &str, case: CaseMode) -> Self {
        let key = match case {
            // Input contract: already lowercased; match keys verbatim.
            CaseMode::Lowercase => raw.to_string(),
            // Case-insensitive matching over the lexicon.
            CaseMode::Cased => raw.to_lowercase(),
        };
        Self {
            raw: raw.to_string(),
            key,
            punct: false,
        }
    }

    fn punct(mark: char) -> Self {
        Self {
            raw: mark.to_string(),
            key: mark.to_string(),
            punct: true,
        }
    }

    /// Raw input spelling, preserved for passthrough.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Key used for lexicon matching.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Whether this unit is a peeled punctuation mark.
    pub fn is_punct(&self) -> bool {
        self.punct
    }
}

/// Split input text into word units.
pub fn tokenize(text: &str, lexicon: &Lexicon, case: CaseMode) -> Vec<WordUnit> {
    let mut units = Vec::new();
    for chunk in text.split_whitespace() {
        let mut rest = chunk;

        // leading punctuation
        while let Some(c) = rest.chars().next() {
            if !lexicon.is_punctuation(c) {
                break;
            }
            units.push(WordUnit::punct(c));
            rest = &rest[c.len_utf8()..];
        }

        // trailing punctuation, collected inside-out
        let mut trailing = Vec::new();
        while let Some(c) = rest.chars().last() {
            if !lexicon.is_punctuation(c) {
                break;
            }
            trailing.push(c);
            rest = &rest[..rest.len() - c.len_utf8()];
        }

        if !rest.is_empty() {
            units.push(WordUnit::word(rest, case));
        }
        for c in trailing.into_iter().rev() {
            units.push(WordUnit::punct(c));
        }
    }
    units
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::loader::vietnamese;

    #[test]
    fn test_peels_edge_punctuation_only() {
        let lexicon = vietnamese().unwrap();
        let units = tokenize("(mua - bán), đồng/lượng rồi.", &lexicon, CaseMode::Lowercase);
        let keys: Vec<&str> = units.iter().map(|u| u.key()).collect();
        assert_eq!(keys, vec!["(", "mua", "-", "bán", ")", ",", "đồng/lượng", "rồi", "."]);
        assert!(units[0].is_punct());
        assert!(!units[6].is_punct());
    }

    #[test]
    fn test_cased_mode_lowercases_keys_keeps_raw() {
        let lexicon = vietnamese().unwrap();
        let units = tokenize("Hà Nội", &lexicon, CaseMode::Cased);
        assert_eq!(units[0].key(), "hà");
        assert_eq!(units[0].raw(), "Hà");
    }

    #[test]
    fn test_empty_and_whitespace_input() {
        let lexicon = vietnamese().unwrap();
        assert!(tokenize("", &lexicon, CaseMode::Lowercase).is_empty());
        assert!(tokenize("  \t \n ", &lexicon, CaseMode::Lowercase).is_empty());
    }
}
