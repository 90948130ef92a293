//! Date sub-grammar
//!
//! Day, month and year sub-patterns matched left to right in
//! day -> month -> year order; each is optional but at least two must be
//! present. Month names "giêng" and "chạp" map to 1 and 12; "tháng tư" is
//! April. A bare year phrase is not a date — the year marker word stays a
//! plain word there and the digits classify as a cardinal.

use crate::grammar::CompiledGrammarSet;
use crate::lexicon::Lexicon;
use crate::token::{Date, Token};
use crate::tokenize::WordUnit;

use super::{cardinal, key, Matches, TagMatch};

pub(crate) fn tag(grammar: &CompiledGrammarSet, units: &[WordUnit]) -> Matches {
    let lexicon = grammar.lexicon();
    let mut out = Matches::new();

    // day-led: [mùng] day "tháng" month ["năm" year]
    let marker = usize::from(key(units, 0).is_some_and(|k| lexicon.is_day_marker(k)));
    for day in cardinal::readings(lexicon, &units[marker..]) {
        if day.value == 0 || day.value > 31 {
            continue;
        }
        let after_day = marker + day.consumed;
        for (month_len, month) in month_part(lexicon, &units[after_day..]) {
            let after_month = after_day + month_len;
            out.push(TagMatch {
                consumed: after_month,
                token: Token::Date(Date {
                    day: Some(day.digits.clone()),
                    month: Some(month.clone()),
                    year: None,
                }),
            });
            for (year_len, year) in year_part(lexicon, &units[after_month..]) {
                out.push(TagMatch {
                    consumed: after_month + year_len,
                    token: Token::Date(Date {
                        day: Some(day.digits.clone()),
                        month: Some(month.clone()),
                        year: Some(year),
                    }),
                });
            }
        }
    }

    // month-led: "tháng" month "năm" year
    for (month_len, month) in month_part(lexicon, units) {
        for (year_len, year) in year_part(lexicon, &units[month_len..]) {
            out.push(TagMatch {
                consumed: month_len + year_len,
                token: Token::Date(Date {
                    day: None,
                    month: Some(month.clone()),
                    year: Some(year),
                }),
            });
        }
    }
    out
}

/// Month sub-pattern: the month marker followed by a month name or a
/// numeral 1-12. Returns every viable length.
fn month_part(lexicon: &Lexicon, units: &[WordUnit]) -> Vec<(usize, String)> {
    let mut out = Vec::new();
    if !key(units, 0).is_some_and(|k| lexicon.is_month_marker(k)) {
        return out;
    }
    if let Some(m) = key(units, 1).and_then(|k| lexicon.month_name(k)) {
        out.push((2, m.to_string()));
    }
    for r in cardinal::readings(lexicon, &units[1..]) {
        if r.value >= 1 && r.value <= 12 {
            out.push((1 + r.consumed, r.digits));
        }
    }
    out
}

/// Year sub-pattern: the year marker followed by a numeral up to four
/// digits (structured or digit-by-digit).
fn year_part(lexicon: &Lexicon, units: &[WordUnit]) -> Vec<(usize, String)> {
    let mut out = Vec::new();
    if !key(units, 0).is_some_and(|k| lexicon.is_year_marker(k)) {
        return out;
    }
    for r in cardinal::readings(lexicon, &units[1..]) {
        if r.value >= 1 && r.digits.len() <= 4 {
            out.push((1 + r.consumed, r.digits));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tagger::testing;

    fn best(text: &str) -> TagMatch {
        let grammar = testing::grammar();
        let units = testing::units(&grammar, text);
        tag(&grammar, &units)
            .into_iter()
            .max_by_key(|m| m.consumed)
            .expect("a date match")
    }

    #[test]
    fn test_full_date() {
        let m = best("ba mươi tháng tư năm một chín bảy năm");
        assert_eq!(m.consumed, 9);
        assert_eq!(
            m.token,
            Token::Date(Date {
                day: Some("30".to_string()),
                month: Some("4".to_string()),
                year: Some("1975".to_string()),
            })
        );
    }

    #[test]
    fn test_day_month() {
        let m = best("bốn tháng năm");
        assert_eq!(m.consumed, 3);
        assert_eq!(
            m.token,
            Token::Date(Date {
                day: Some("4".to_string()),
                month: Some("5".to_string()),
                year: None,
            })
        );
    }

    #[test]
    fn test_month_year() {
        let m = best("tháng chạp năm hai nghìn hai mươi");
        assert_eq!(m.consumed, 7);
        assert_eq!(
            m.token,
            Token::Date(Date {
                day: None,
                month: Some("12".to_string()),
                year: Some("2020".to_string()),
            })
        );
    }

    #[test]
    fn test_bare_year_phrase_is_not_a_date() {
        let grammar = testing::grammar();
        let units = testing::units(&grammar, "năm một chín chín chín");
        assert!(tag(&grammar, &units).is_empty());
    }
}
