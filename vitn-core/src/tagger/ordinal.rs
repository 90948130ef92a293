//! Ordinal sub-grammar: "thứ" + numeral.
//!
//! "thứ nhất", "thứ nhì" and "thứ tư" use ordinal-only readings that the
//! cardinal grammar does not produce.

use crate::grammar::CompiledGrammarSet;
use crate::token::{Ordinal, Token};
use crate::tokenize::WordUnit;

use super::{cardinal, key, Matches, TagMatch};

pub(crate) fn tag(grammar: &CompiledGrammarSet, units: &[WordUnit]) -> Matches {
    let lexicon = grammar.lexicon();
    let mut out = Matches::new();
    if !key(units, 0).is_some_and(|k| lexicon.is_ordinal_marker(k)) {
        return out;
    }

    if let Some(v) = key(units, 1).and_then(|k| lexicon.ordinal_special(k)) {
        out.push(TagMatch {
            consumed: 2,
            token: Token::Ordinal(Ordinal {
                integer: v.to_string(),
            }),
        });
    }
    for r in cardinal::readings(lexicon, &units[1..]) {
        out.push(TagMatch {
            consumed: 1 + r.consumed,
            token: Token::Ordinal(Ordinal { integer: r.digits }),
        });
    }
    out
}
