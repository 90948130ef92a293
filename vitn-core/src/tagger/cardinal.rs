//! Cardinal numeral sub-grammar
//!
//! Implements the Vietnamese numeral grammar over the word stream: hundreds
//! groups combined with scale words, plus the digit-by-digit sequence
//! reading used for years and account-style numbers. The reading engine
//! here is shared by the decimal, fraction, ordinal, date, time, money and
//! measure sub-grammars.
//!
//! The "mươi năm" ambiguity is resolved lexically: directly after a tens
//! word, "năm" is the units digit 5 ("hai mươi năm" -> 25), never the
//! standalone numeral or the year marker.

use crate::grammar::CompiledGrammarSet;
use crate::lexicon::Lexicon;
use crate::token::{Cardinal, Token};
use crate::tokenize::WordUnit;

use super::{key, Matches, TagMatch};

/// One numeral reading anchored at the start of a unit slice.
#[derive(Debug, Clone)]
pub(crate) struct NumberMatch {
    /// Word units consumed
    pub consumed: usize,
    /// Digit string, leading zeros preserved
    pub digits: String,
    /// Numeric value, saturated for oversized digit sequences
    pub value: u64,
}

/// All numeral readings anchored at the slice start, one per consumed
/// length, shorter readings first. Structured readings take precedence
/// over digit-sequence readings of the same length.
pub(crate) fn readings(lexicon: &Lexicon, units: &[WordUnit]) -> Vec<NumberMatch> {
    let mut out: Vec<NumberMatch> = Vec::new();
    for (consumed, value) in structured_readings(lexicon, units, None) {
        // A bare zero is overwhelmingly the negation word, never a numeral
        // on its own; zero still participates in longer readings.
        if consumed == 1 && value == 0 {
            continue;
        }
        push_unique(&mut out, consumed, value.to_string(), value);
    }
    for (consumed, digits) in digit_sequence_readings(lexicon, units) {
        let value = digits.parse().unwrap_or(u64::MAX);
        push_unique(&mut out, consumed, digits, value);
    }
    out.sort_by_key(|m| m.consumed);
    out
}

/// Readings for contexts where a bare zero is meaningful: decimal integer
/// parts ("không phẩy năm" -> 0.5) and clock hours ("không giờ" ->
/// midnight).
pub(crate) fn readings_with_zero(lexicon: &Lexicon, units: &[WordUnit]) -> Vec<NumberMatch> {
    let mut out = readings(lexicon, units);
    if key(units, 0).and_then(|k| lexicon.digit(k)) == Some(0)
        && !out.iter().any(|m| m.consumed == 1)
    {
        out.insert(
            0,
            NumberMatch {
                consumed: 1,
                digits: "0".to_string(),
                value: 0,
            },
        );
    }
    out
}

fn push_unique(out: &mut Vec<NumberMatch>, consumed: usize, digits: String, value: u64) {
    if !out.iter().any(|m| m.consumed == consumed) {
        out.push(NumberMatch {
            consumed,
            digits,
            value,
        });
    }
}

/// Structured readings: hundreds groups joined by strictly decreasing
/// scale words. `cap` bounds the scale a continuation may use.
fn structured_readings(
    lexicon: &Lexicon,
    units: &[WordUnit],
    cap: Option<u8>,
) -> Vec<(usize, u64)> {
    let mut out: Vec<(usize, u64)> = Vec::new();
    for (group_len, group_val) in group_readings(lexicon, units) {
        push_len_unique(&mut out, group_len, group_val);

        let Some(zeros) = key(units, group_len).and_then(|k| lexicon.scale(k)) else {
            continue;
        };
        if group_val == 0 || cap.is_some_and(|c| zeros >= c) {
            continue;
        }
        let base = group_val * 10u64.pow(u32::from(zeros));
        push_len_unique(&mut out, group_len + 1, base);

        let limit = 10u64.pow(u32::from(zeros));
        for (rest_len, rest_val) in structured_readings(lexicon, &units[group_len + 1..], Some(zeros))
        {
            if rest_val > 0 && rest_val < limit {
                push_len_unique(&mut out, group_len + 1 + rest_len, base + rest_val);
            }
        }
    }
    out
}

fn push_len_unique(out: &mut Vec<(usize, u64)>, len: usize, val: u64) {
    if !out.iter().any(|(l, _)| *l == len) {
        out.push((len, val));
    }
}

/// Readings of one hundreds group (0-999).
fn group_readings(lexicon: &Lexicon, units: &[WordUnit]) -> Vec<(usize, u64)> {
    let mut out: Vec<(usize, u64)> = Vec::new();
    let Some(first) = key(units, 0) else {
        return out;
    };

    if let Some(d) = lexicon.digit(first) {
        out.push((1, u64::from(d)));

        if key(units, 1).is_some_and(|k| lexicon.is_hundred(k)) {
            let hundreds = u64::from(d) * 100;
            out.push((2, hundreds));

            // "X trăm linh Z"
            if key(units, 2).is_some_and(|k| lexicon.is_zero_connector(k)) {
                if let Some(u) = connector_unit(lexicon, key(units, 3)) {
                    out.push((4, hundreds + u64::from(u)));
                }
            }
            // "X trăm Y mươi [Z]" / "X trăm mười [Z]"
            for (tens_len, tens_val) in tens_readings(lexicon, &units[2..]) {
                push_len_unique(&mut out, 2 + tens_len, hundreds + tens_val);
            }
            // "X trăm A B" spoken-digit pair ("năm trăm tám bốn" -> 584)
            if let Some(a) = key(units, 2).and_then(|k| lexicon.digit(k)).filter(|a| *a >= 1) {
                if let Some(b) = key(units, 3)
                    .and_then(|k| lexicon.digit(k).or_else(|| lexicon.unit_variant(k)))
                {
                    push_len_unique(&mut out, 4, hundreds + u64::from(a) * 10 + u64::from(b));
                }
            }
        }
    }

    for (tens_len, tens_val) in tens_readings(lexicon, units) {
        push_len_unique(&mut out, tens_len, tens_val);
    }
    out
}

/// Tens readings: "mười [Z]" or "Y mươi [Z]".
fn tens_readings(lexicon: &Lexicon, units: &[WordUnit]) -> Vec<(usize, u64)> {
    let mut out = Vec::new();
    let Some(first) = key(units, 0) else {
        return out;
    };

    if lexicon.is_ten(first) {
        out.push((1, 10));
        if let Some(u) = unit_after_tens(lexicon, key(units, 1)) {
            out.push((2, 10 + u64::from(u)));
        }
    } else if let Some(d) = lexicon.digit(first).filter(|d| *d >= 1) {
        if key(units, 1).is_some_and(|k| lexicon.is_tens(k)) {
            out.push((2, u64::from(d) * 10));
            if let Some(u) = unit_after_tens(lexicon, key(units, 2)) {
                out.push((3, u64::from(d) * 10 + u64::from(u)));
            }
        }
    }
    out
}

/// Units digit directly after a tens word: plain nonzero digits (the
/// tens-five rule reads "năm" here as 5) and the unit-position variants.
fn unit_after_tens(lexicon: &Lexicon, k: Option<&str>) -> Option<u8> {
    let k = k?;
    if let Some(d) = lexicon.digit(k) {
        return (d >= 1).then_some(d);
    }
    lexicon.unit_variant(k)
}

/// Units digit after a zero connector ("linh năm" -> 5, "lẻ tư" -> 4).
fn connector_unit(lexicon: &Lexicon, k: Option<&str>) -> Option<u8> {
    let k = k?;
    lexicon
        .digit(k)
        .filter(|d| *d >= 1)
        .or_else(|| lexicon.unit_variant(k))
}

/// Digit-by-digit sequence readings: two or more plain digit words, with
/// an optional final-position variant ("mốt", "tư", "lăm").
fn digit_sequence_readings(lexicon: &Lexicon, units: &[WordUnit]) -> Vec<(usize, String)> {
    let mut run = 0;
    let mut digits = String::new();
    while let Some(d) = key(units, run).and_then(|k| lexicon.digit(k)) {
        digits.push((b'0' + d) as char);
        run += 1;
    }

    let mut out: Vec<(usize, String)> = (2..=run).map(|n| (n, digits[..n].to_string())).collect();
    if run >= 1 {
        if let Some(v) = key(units, run).and_then(|k| lexicon.unit_variant(k)) {
            let mut s = digits;
            s.push((b'0' + v) as char);
            out.push((run + 1, s));
        }
    }
    out
}

/// Cardinal tagger: every numeral reading, with an optional negative
/// prefix word.
pub(crate) fn tag(grammar: &CompiledGrammarSet, units: &[WordUnit]) -> Matches {
    let lexicon = grammar.lexicon();
    let negative = key(units, 0).is_some_and(|k| lexicon.is_negative(k));
    let offset = usize::from(negative);

    let mut out = Matches::new();
    for m in readings(lexicon, &units[offset..]) {
        out.push(TagMatch {
            consumed: offset + m.consumed,
            token: Token::Cardinal(Cardinal {
                digits: m.digits,
                negative,
            }),
        });
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
        let all = readings(grammar.lexicon(), &units);
        let m = all.last().expect("at least one reading");
        (m.consumed, m.digits.clone())
    }

    #[test]
    fn test_tens_five_rule() {
        assert_eq!(longest("hai mươi năm"), (3, "25".to_string()));
        assert_eq!(longest("tám mươi năm"), (3, "85".to_string()));
        assert_eq!(longest("một trăm ba mươi năm"), (5, "135".to_string()));
        assert_eq!(longest("mười năm"), (2, "15".to_string()));
    }

    #[test]
    fn test_unit_variants() {
        assert_eq!(longest("hai mươi mốt"), (3, "21".to_string()));
        assert_eq!(longest("bốn mươi tư"), (3, "44".to_string()));
        assert_eq!(longest("chín mươi lăm"), (3, "95".to_string()));
    }

    #[test]
    fn test_scale_combination() {
        assert_eq!(longest("một triệu"), (2, "1000000".to_string()));
        assert_eq!(
            longest("một triệu hai trăm hai mươi hai nghìn"),
            (8, "1222000".to_string())
        );
        assert_eq!(longest("hai nghìn mười"), (3, "2010".to_string()));
    }

    #[test]
    fn test_zero_connector_groups() {
        assert_eq!(longest("một trăm linh năm"), (4, "105".to_string()));
        assert_eq!(
            longest("hai nghìn không trăm linh bốn"),
            (6, "2004".to_string())
        );
        assert_eq!(
            longest("năm trăm linh năm triệu không trăm linh năm nghìn không trăm linh năm"),
            (14, "505005005".to_string())
        );
    }

    #[test]
    fn test_spoken_digit_pair_after_hundreds() {
        assert_eq!(longest("năm trăm tám bốn"), (4, "584".to_string()));
    }

    #[test]
    fn test_digit_sequence_keeps_leading_zero() {
        assert_eq!(longest("không chín một hai"), (4, "0912".to_string()));
        assert_eq!(longest("một chín bảy năm"), (4, "1975".to_string()));
    }

    #[test]
    fn test_bare_zero_is_not_a_numeral() {
        let grammar = testing::grammar();
        let units = testing::units(&grammar, "không");
        assert!(readings(grammar.lexicon(), &units).is_empty());
    }

    #[test]
    fn test_negative_prefix() {
        let grammar = testing::grammar();
        let units = testing::units(&grammar, "âm ba mươi");
        let matches = tag(&grammar, &units);
        let m = matches.last().unwrap();
        assert_eq!(m.consumed, 3);
        assert_eq!(
            m.token,
            Token::Cardinal(Cardinal {
                digits: "30".to_string(),
                negative: true,
            })
        );
    }
}
