//! Word and punctuation fallbacks.
//!
//! The word fallback fires on exactly one non-punctuation unit, the
//! punctuation rule on exactly one peeled mark. Together they guarantee a
//! covering exists for any input.

use crate::grammar::CompiledGrammarSet;
use crate::token::Token;
use crate::tokenize::WordUnit;

use super::{Matches, TagMatch};

pub(crate) fn tag_word(_grammar: &CompiledGrammarSet, units: &[WordUnit]) -> Matches {
    let mut out = Matches::new();
    if let Some(first) = units.first().filter(|u| !u.is_punct()) {
        out.push(TagMatch {
            consumed: 1,
            token: Token::Word {
                text: first.raw().to_string(),
            },
        });
    }
    out
}

pub(crate) fn tag_punct(_grammar: &CompiledGrammarSet, units: &[WordUnit]) -> Matches {
    let mut out = Matches::new();
    if let Some(first) = units.first().filter(|u| u.is_punct()) {
        out.push(TagMatch {
            consumed: 1,
            token: Token::Punctuation {
                mark: first.raw().to_string(),
            },
        });
    }
    out
}
