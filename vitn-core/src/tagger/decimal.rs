//! Decimal numeral sub-grammar
//!
//! Two shapes: the spoken decimal separator form ("chín phẩy năm tám" ->
//! 9.58) and the quantity form, where a small cardinal keeps its trailing
//! scale word verbatim ("một trăm triệu" -> integer 100, quantity "triệu").
//! "rưỡi" after the scale word contributes fractional part 5.

use crate::grammar::CompiledGrammarSet;
use crate::lexicon::Lexicon;
use crate::token::{Decimal, Token};
use crate::tokenize::WordUnit;

use super::{cardinal, key, Matches, TagMatch};

/// All decimal readings anchored at the slice start.
///
/// Shared with the money and measure sub-grammars, which prefer these
/// over plain cardinal amounts when both cover the same span.
pub(crate) fn amount_readings(lexicon: &Lexicon, units: &[WordUnit]) -> Vec<(usize, Decimal)> {
    let mut out = Vec::new();
    for int in cardinal::readings_with_zero(lexicon, units) {
        let i = int.consumed;

        // quantity form: only a sub-thousand cardinal keeps its scale word
        if int.value < 1000 {
            if let Some(q) = key(units, i).filter(|k| lexicon.is_quantity_scale(k)) {
                if key(units, i + 1).is_some_and(|k| lexicon.is_half(k)) {
                    out.push((
                        i + 2,
                        Decimal {
                            integer_part: int.digits.clone(),
                            fractional_part: Some("5".to_string()),
                            quantity: Some(q.to_string()),
                        },
                    ));
                }
                out.push((
                    i + 1,
                    Decimal {
                        integer_part: int.digits.clone(),
                        fractional_part: None,
                        quantity: Some(q.to_string()),
                    },
                ));
            }
        }

        // separator form: integer part + "phẩy" + digit-by-digit fraction
        if key(units, i).is_some_and(|k| lexicon.is_decimal_separator(k)) {
            for (frac_len, frac) in fraction_digit_readings(lexicon, &units[i + 1..]) {
                let end = i + 1 + frac_len;
                if int.value < 1000 {
                    if let Some(q) = key(units, end).filter(|k| lexicon.is_quantity_scale(k)) {
                        out.push((
                            end + 1,
                            Decimal {
                                integer_part: int.digits.clone(),
                                fractional_part: Some(frac.clone()),
                                quantity: Some(q.to_string()),
                            },
                        ));
                    }
                }
                out.push((
                    end,
                    Decimal {
                        integer_part: int.digits.clone(),
                        fractional_part: Some(frac),
                        quantity: None,
                    },
                ));
            }
        }
    }
    out
}

/// Fractional digit readings: one or more plain digit words, optional
/// final-position variant.
fn fraction_digit_readings(lexicon: &Lexicon, units: &[WordUnit]) -> Vec<(usize, String)> {
    let mut run = 0;
    let mut digits = String::new();
    while let Some(d) = key(units, run).and_then(|k| lexicon.digit(k)) {
        digits.push((b'0' + d) as char);
        run += 1;
    }

    let mut out: Vec<(usize, String)> = (1..=run).map(|n| (n, digits[..n].to_string())).collect();
    if let Some(v) = key(units, run).and_then(|k| lexicon.unit_variant(k)) {
        let mut s = digits;
        s.push((b'0' + v) as char);
        out.push((run + 1, s));
    }
    out
}

pub(crate) fn tag(grammar: &CompiledGrammarSet, units: &[WordUnit]) -> Matches {
    let mut out = Matches::new();
    for (consumed, decimal) in amount_readings(grammar.lexicon(), units) {
        out.push(TagMatch {
            consumed,
            token: Token::Decimal(decimal),
        });
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tagger::testing;

    fn longest(text: &str) -> (usize, Decimal) {
        let grammar = testing::grammar();
        let units = testing::units(&grammar, text);
        amount_readings(grammar.lexicon(), &units)
            .into_iter()
            .max_by_key(|(n, _)| *n)
            .expect("at least one reading")
    }

    #[test]
    fn test_separator_form() {
        let (consumed, d) = longest("chín phẩy năm tám");
        assert_eq!(consumed, 4);
        assert_eq!(d.integer_part, "9");
        assert_eq!(d.fractional_part.as_deref(), Some("58"));
        assert_eq!(d.quantity, None);
    }

    #[test]
    fn test_quantity_form() {
        let (consumed, d) = longest("một trăm triệu");
        assert_eq!(consumed, 3);
        assert_eq!(d.integer_part, "100");
        assert_eq!(d.fractional_part, None);
        assert_eq!(d.quantity.as_deref(), Some("triệu"));
    }

    #[test]
    fn test_separator_with_quantity() {
        let (consumed, d) = longest("một trăm mười chín phẩy ba triệu");
        assert_eq!(consumed, 7);
        assert_eq!(d.integer_part, "119");
        assert_eq!(d.fractional_part.as_deref(), Some("3"));
        assert_eq!(d.quantity.as_deref(), Some("triệu"));
    }

    #[test]
    fn test_half_after_quantity() {
        let (consumed, d) = longest("một triệu rưỡi");
        assert_eq!(consumed, 3);
        assert_eq!(d.integer_part, "1");
        assert_eq!(d.fractional_part.as_deref(), Some("5"));
        assert_eq!(d.quantity.as_deref(), Some("triệu"));
    }

    #[test]
    fn test_zero_integer_part() {
        let (consumed, d) = longest("không phẩy năm");
        assert_eq!(consumed, 3);
        assert_eq!(d.integer_part, "0");
        assert_eq!(d.fractional_part.as_deref(), Some("5"));
        assert_eq!(d.quantity, None);
    }

    #[test]
    fn test_thousand_is_not_a_quantity() {
        let grammar = testing::grammar();
        let units = testing::units(&grammar, "hai nghìn");
        assert!(amount_readings(grammar.lexicon(), &units).is_empty());
    }
}
