//! Whitelist sub-grammar: exact substitution lookup.
//!
//! Highest-priority sub-grammar; the canonical written form is emitted
//! verbatim by the verbalizer.

use crate::grammar::CompiledGrammarSet;
use crate::token::Token;
use crate::tokenize::WordUnit;

use super::{match_phrase, Matches, TagMatch};

pub(crate) fn tag(grammar: &CompiledGrammarSet, units: &[WordUnit]) -> Matches {
    let mut out = Matches::new();
    if let Some((consumed, written)) = match_phrase(grammar.lexicon().whitelist(), units) {
        out.push(TagMatch {
            consumed,
            token: Token::Whitelist {
                name: written.clone(),
            },
        });
    }
    out
}
