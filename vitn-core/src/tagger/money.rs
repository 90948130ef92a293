//! Money sub-grammar: amount immediately followed by a currency word.
//!
//! Decimal amounts are emitted before cardinal ones so that a
//! quantity-scaled reading wins an equal-weight tie ("một trăm triệu đồng"
//! -> "100 triệu đồng", not "100000000 đồng").

use crate::grammar::CompiledGrammarSet;
use crate::lexicon::Lexicon;
use crate::token::{Amount, Cardinal, Money, Token};
use crate::tokenize::WordUnit;

use super::{cardinal, decimal, match_phrase, Matches, TagMatch};

/// Amount readings shared with the measure sub-grammar, decimal first.
pub(crate) fn amounts(lexicon: &Lexicon, units: &[WordUnit]) -> Vec<(usize, Amount)> {
    let mut out: Vec<(usize, Amount)> = decimal::amount_readings(lexicon, units)
        .into_iter()
        .map(|(n, d)| (n, Amount::Decimal(d)))
        .collect();
    for r in cardinal::readings(lexicon, units) {
        out.push((
            r.consumed,
            Amount::Cardinal(Cardinal {
                digits: r.digits,
                negative: false,
            }),
        ));
    }
    out
}

pub(crate) fn tag(grammar: &CompiledGrammarSet, units: &[WordUnit]) -> Matches {
    let lexicon = grammar.lexicon();
    let mut out = Matches::new();
    for (amount_len, amount) in amounts(lexicon, units) {
        if let Some((currency_len, written)) = match_phrase(lexicon.currencies(), &units[amount_len..])
        {
            out.push(TagMatch {
                consumed: amount_len + currency_len,
                token: Token::Money(Money {
                    amount,
                    currency: written.clone(),
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
    use crate::token::Decimal;

    #[test]
    fn test_quantity_amount_preferred() {
        let grammar = testing::grammar();
        let units = testing::units(&grammar, "một trăm triệu đồng");
        let matches = tag(&grammar, &units);
        // both a decimal-quantity and a full-cardinal reading cover all
        // four units; the decimal one must come first
        let full: Vec<&TagMatch> = matches.iter().filter(|m| m.consumed == 4).collect();
        assert!(full.len() >= 2);
        assert_eq!(
            full[0].token,
            Token::Money(Money {
                amount: Amount::Decimal(Decimal {
                    integer_part: "100".to_string(),
                    fractional_part: None,
                    quantity: Some("triệu".to_string()),
                }),
                currency: "đồng".to_string(),
            })
        );
    }

    #[test]
    fn test_plain_cardinal_amount() {
        let grammar = testing::grammar();
        let units = testing::units(&grammar, "hai trăm nghìn đồng");
        let matches = tag(&grammar, &units);
        assert!(matches.iter().any(|m| m.consumed == 4
            && m.token
                == Token::Money(Money {
                    amount: Amount::Cardinal(Cardinal {
                        digits: "200000".to_string(),
                        negative: false,
                    }),
                    currency: "đồng".to_string(),
                })));
    }
}
