//! Measure sub-grammar: amount followed by a closed-table unit word.
//!
//! The unit word maps to its standard abbreviation by table lookup, not
//! computation. An optional negative word prefixes the amount.

use crate::grammar::CompiledGrammarSet;
use crate::token::{Measure, Token};
use crate::tokenize::WordUnit;

use super::{key, match_phrase, money, Matches, TagMatch};

pub(crate) fn tag(grammar: &CompiledGrammarSet, units: &[WordUnit]) -> Matches {
    let lexicon = grammar.lexicon();
    let negative = key(units, 0).is_some_and(|k| lexicon.is_negative(k));
    let offset = usize::from(negative);

    let mut out = Matches::new();
    for (amount_len, amount) in money::amounts(lexicon, &units[offset..]) {
        let after_amount = offset + amount_len;
        if let Some((unit_len, unit)) = match_phrase(lexicon.units(), &units[after_amount..]) {
            out.push(TagMatch {
                consumed: after_amount + unit_len,
                token: Token::Measure(Measure {
                    amount,
                    units: unit.written.clone(),
                    negative,
                }),
            });
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::{Amount, Cardinal, Decimal};
    use crate::tagger::testing;

    #[test]
    fn test_percent() {
        let grammar = testing::grammar();
        let units = testing::units(&grammar, "chín phẩy năm tám phần trăm");
        let matches = tag(&grammar, &units);
        assert!(matches.iter().any(|m| m.consumed == 6
            && m.token
                == Token::Measure(Measure {
                    amount: Amount::Decimal(Decimal {
                        integer_part: "9".to_string(),
                        fractional_part: Some("58".to_string()),
                        quantity: None,
                    }),
                    units: "%".to_string(),
                    negative: false,
                })));
    }

    #[test]
    fn test_negative_degrees() {
        let grammar = testing::grammar();
        let units = testing::units(&grammar, "âm ba độ xê");
        let matches = tag(&grammar, &units);
        assert!(matches.iter().any(|m| m.consumed == 4
            && m.token
                == Token::Measure(Measure {
                    amount: Amount::Cardinal(Cardinal {
                        digits: "3".to_string(),
                        negative: false,
                    }),
                    units: "°C".to_string(),
                    negative: true,
                })));
    }

    #[test]
    fn test_longest_unit_phrase_wins() {
        let grammar = testing::grammar();
        let units = testing::units(&grammar, "sáu mươi ki lô mét trên giờ");
        let matches = tag(&grammar, &units);
        assert!(matches.iter().any(|m| m.consumed == 7
            && matches!(&m.token, Token::Measure(me) if me.units == "km/h")));
    }
}
