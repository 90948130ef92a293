//! Telephone sub-grammar
//!
//! Three or more digit words, optionally separated by spoken separators
//! ("chấm"); the final digit may use a unit-position variant ("mốt", "tư",
//! "lăm"). Competition with dates, money and measures is resolved by the
//! classifier's priority weights, never by exclusion here.

use crate::grammar::CompiledGrammarSet;
use crate::token::{Telephone, Token};
use crate::tokenize::WordUnit;

use super::{key, Matches, TagMatch};

const MIN_DIGITS: usize = 3;

pub(crate) fn tag(grammar: &CompiledGrammarSet, units: &[WordUnit]) -> Matches {
    let lexicon = grammar.lexicon();
    let mut out = Matches::new();
    let mut digits = String::new();
    let mut i = 0;

    loop {
        let Some(k) = key(units, i) else { break };
        if let Some(d) = lexicon.digit(k) {
            digits.push((b'0' + d) as char);
            i += 1;
            if digits.len() >= MIN_DIGITS {
                out.push(TagMatch {
                    consumed: i,
                    token: Token::Telephone(Telephone {
                        number_part: digits.clone(),
                    }),
                });
            }
            // a separator is deleted only when more digits follow
            if key(units, i).is_some_and(|k| lexicon.is_telephone_separator(k))
                && key(units, i + 1).is_some_and(|k| {
                    lexicon.digit(k).or_else(|| lexicon.unit_variant(k)).is_some()
                })
            {
                i += 1;
            }
        } else if digits.len() >= MIN_DIGITS - 1 {
            if let Some(v) = lexicon.unit_variant(k) {
                digits.push((b'0' + v) as char);
                out.push(TagMatch {
                    consumed: i + 1,
                    token: Token::Telephone(Telephone {
                        number_part: digits.clone(),
                    }),
                });
            }
            break;
        } else {
            break;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tagger::testing;

    fn longest(text: &str) -> (usize, String) {
        let grammar = testing::grammar();
        let units = testing::units(&grammar, text);
        let m = tag(&grammar, &units)
            .into_iter()
            .max_by_key(|m| m.consumed)
            .expect("a telephone match");
        match m.token {
            Token::Telephone(t) => (m.consumed, t.number_part),
            other => panic!("unexpected token {other:?}"),
        }
    }

    #[test]
    fn test_ten_digit_number() {
        assert_eq!(
            longest("không chín một hai ba bốn năm sáu bảy tám"),
            (10, "0912345678".to_string())
        );
    }

    #[test]
    fn test_variant_last_digit() {
        assert_eq!(longest("năm tám năm lăm"), (4, "5855".to_string()));
    }

    #[test]
    fn test_separator_between_groups() {
        assert_eq!(longest("một hai ba chấm bốn năm sáu"), (7, "123456".to_string()));
    }

    #[test]
    fn test_too_short() {
        let grammar = testing::grammar();
        let units = testing::units(&grammar, "năm tám");
        assert!(tag(&grammar, &units).is_empty());
    }
}
