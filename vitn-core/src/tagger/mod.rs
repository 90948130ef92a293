//! Sub-grammar taggers
//!
//! Each sub-grammar is a pure function over a compiled grammar set and a
//! unit slice, returning every match anchored at the start of the slice as
//! `(consumed, Token)` candidates. Overlapping claims between sub-grammars
//! are not resolved here; the classifier picks the minimum-weight covering.

pub(crate) mod cardinal;
pub(crate) mod date;
pub(crate) mod decimal;
pub(crate) mod electronic;
pub(crate) mod fraction;
pub(crate) mod measure;
pub(crate) mod money;
pub(crate) mod ordinal;
pub(crate) mod telephone;
pub(crate) mod time;
pub(crate) mod whitelist;
pub(crate) mod word;

use smallvec::SmallVec;

use crate::grammar::CompiledGrammarSet;
use crate::lexicon::PhraseTable;
use crate::token::Token;
use crate::tokenize::WordUnit;

/// One candidate firing of a sub-grammar.
#[derive(Debug, Clone)]
pub(crate) struct TagMatch {
    /// Word units consumed from the slice start
    pub consumed: usize,
    /// The token this firing produces
    pub token: Token,
}

/// Candidate list returned by a tagger.
pub(crate) type Matches = SmallVec<[TagMatch; 4]>;

/// A sub-grammar with its fixed priority weight.
pub(crate) struct TaggerDef {
    pub kind: &'static str,
    /// Base priority in centiweights (lower = preferred)
    pub weight: u32,
    pub tag: fn(&CompiledGrammarSet, &[WordUnit]) -> Matches,
}

/// All sub-grammars in declaration order.
///
/// Order matters: when two coverings tie on total weight, the classifier
/// keeps the firing from the earlier row. The order and weights are those
/// of the classifier grammar union.
pub(crate) const TAGGERS: &[TaggerDef] = &[
    TaggerDef { kind: "whitelist", weight: 101, tag: whitelist::tag },
    TaggerDef { kind: "time", weight: 105, tag: time::tag },
    TaggerDef { kind: "money", weight: 103, tag: money::tag },
    TaggerDef { kind: "telephone", weight: 104, tag: telephone::tag },
    TaggerDef { kind: "date", weight: 109, tag: date::tag },
    TaggerDef { kind: "decimal", weight: 108, tag: decimal::tag },
    TaggerDef { kind: "measure", weight: 110, tag: measure::tag },
    TaggerDef { kind: "cardinal", weight: 110, tag: cardinal::tag },
    TaggerDef { kind: "ordinal", weight: 110, tag: ordinal::tag },
    TaggerDef { kind: "fraction", weight: 109, tag: fraction::tag },
    TaggerDef { kind: "electronic", weight: 110, tag: electronic::tag },
    TaggerDef { kind: "punctuation", weight: 110, tag: word::tag_punct },
    TaggerDef { kind: "word", weight: 10_000, tag: word::tag_word },
];

/// Match key of the unit at `i`, unless it is punctuation.
pub(crate) fn key(units: &[WordUnit], i: usize) -> Option<&str> {
    units.get(i).and_then(|u| if u.is_punct() { None } else { Some(u.key()) })
}

/// Longest spoken-phrase match anchored at the slice start.
///
/// Phrases never span punctuation units.
pub(crate) fn match_phrase<'a, V>(
    table: &'a PhraseTable<V>,
    units: &[WordUnit],
) -> Option<(usize, &'a V)> {
    let max = table.max_words().min(units.len());
    for n in (1..=max).rev() {
        if units[..n].iter().any(|u| u.is_punct()) {
            continue;
        }
        let key = units[..n]
            .iter()
            .map(|u| u.key())
            .collect::<Vec<_>>()
            .join(" ");
        if let Some(v) = table.get(&key) {
            return Some((n, v));
        }
    }
    None
}

#[cfg(test)]
pub(crate) mod testing {
    use crate::grammar::{CaseMode, CompiledGrammarSet, Language};
    use crate::tokenize::{tokenize, WordUnit};

    pub(crate) fn grammar() -> CompiledGrammarSet {
        CompiledGrammarSet::build(Language::Vietnamese, CaseMode::Lowercase)
            .expect("embedded grammar builds")
    }

    pub(crate) fn units(grammar: &CompiledGrammarSet, text: &str) -> Vec<WordUnit> {
        tokenize(text, grammar.lexicon(), grammar.case_mode())
    }
}
