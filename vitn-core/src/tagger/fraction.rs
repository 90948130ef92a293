//! Fraction sub-grammar: "A phần B".

use crate::grammar::CompiledGrammarSet;
use crate::token::{Fraction, Token};
use crate::tokenize::WordUnit;

use super::{cardinal, key, Matches, TagMatch};

pub(crate) fn tag(grammar: &CompiledGrammarSet, units: &[WordUnit]) -> Matches {
    let lexicon = grammar.lexicon();
    let mut out = Matches::new();
    for num in cardinal::readings(lexicon, units) {
        if !key(units, num.consumed).is_some_and(|k| lexicon.is_fraction_separator(k)) {
            continue;
        }
        for den in cardinal::readings(lexicon, &units[num.consumed + 1..]) {
            out.push(TagMatch {
                consumed: num.consumed + 1 + den.consumed,
                token: Token::Fraction(Fraction {
                    numerator: num.digits.clone(),
                    denominator: den.digits,
                }),
            });
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tagger::testing;

    #[test]
    fn test_simple_fraction() {
        let grammar = testing::grammar();
        let units = testing::units(&grammar, "chín phần mười");
        let matches = tag(&grammar, &units);
        let m = matches.iter().find(|m| m.consumed == 3).unwrap();
        assert_eq!(
            m.token,
            Token::Fraction(Fraction {
                numerator: "9".to_string(),
                denominator: "10".to_string(),
            })
        );
    }

    #[test]
    fn test_variant_denominator() {
        let grammar = testing::grammar();
        let units = testing::units(&grammar, "ba phần bốn");
        let matches = tag(&grammar, &units);
        assert!(matches.iter().any(|m| m.consumed == 3
            && m.token
                == Token::Fraction(Fraction {
                    numerator: "3".to_string(),
                    denominator: "4".to_string(),
                })));
    }

    #[test]
    fn test_percent_is_not_a_fraction() {
        // "trăm" is not a standalone numeral; "phần trăm" belongs to measure
        let grammar = testing::grammar();
        let units = testing::units(&grammar, "năm phần trăm");
        assert!(tag(&grammar, &units).is_empty());
    }
}
