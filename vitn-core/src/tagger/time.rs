//! Time sub-grammar
//!
//! Hour marker required; minute and second sub-patterns optional, the
//! second one only with its marker word. "giờ rưỡi" reads as thirty
//! minutes. A trailing day-period word is kept verbatim as the suffix.

use crate::grammar::CompiledGrammarSet;
use crate::token::{Time, Token};
use crate::tokenize::WordUnit;

use super::{cardinal, key, Matches, TagMatch};

pub(crate) fn tag(grammar: &CompiledGrammarSet, units: &[WordUnit]) -> Matches {
    let lexicon = grammar.lexicon();
    let mut out = Matches::new();

    for hour in cardinal::readings_with_zero(lexicon, units) {
        if hour.value > 24 {
            continue;
        }
        if !key(units, hour.consumed).is_some_and(|k| lexicon.is_hour_marker(k)) {
            continue;
        }
        let base = hour.consumed + 1;

        push_with_suffix(
            &mut out,
            grammar,
            units,
            base,
            Time {
                hours: hour.digits.clone(),
                minutes: None,
                seconds: None,
                suffix: None,
            },
        );

        // "giờ rưỡi"
        if key(units, base).is_some_and(|k| lexicon.is_half(k)) {
            push_with_suffix(
                &mut out,
                grammar,
                units,
                base + 1,
                Time {
                    hours: hour.digits.clone(),
                    minutes: Some("30".to_string()),
                    seconds: None,
                    suffix: None,
                },
            );
        }

        for minute in cardinal::readings_with_zero(lexicon, &units[base..]) {
            if minute.value > 59 {
                continue;
            }
            let mut after_min = base + minute.consumed;
            if key(units, after_min).is_some_and(|k| lexicon.is_minute_marker(k)) {
                after_min += 1;
            }
            push_with_suffix(
                &mut out,
                grammar,
                units,
                after_min,
                Time {
                    hours: hour.digits.clone(),
                    minutes: Some(minute.digits.clone()),
                    seconds: None,
                    suffix: None,
                },
            );

            for second in cardinal::readings(lexicon, &units[after_min..]) {
                if second.value > 59 {
                    continue;
                }
                let end = after_min + second.consumed;
                if !key(units, end).is_some_and(|k| lexicon.is_second_marker(k)) {
                    continue;
                }
                push_with_suffix(
                    &mut out,
                    grammar,
                    units,
                    end + 1,
                    Time {
                        hours: hour.digits.clone(),
                        minutes: Some(minute.digits.clone()),
                        seconds: Some(second.digits.clone()),
                        suffix: None,
                    },
                );
            }
        }
    }
    out
}

/// Emit a reading, plus a one-unit-longer variant carrying a day-period
/// suffix when one follows.
fn push_with_suffix(
    out: &mut Matches,
    grammar: &CompiledGrammarSet,
    units: &[WordUnit],
    consumed: usize,
    time: Time,
) {
    if key(units, consumed).is_some_and(|k| grammar.lexicon().is_time_suffix(k)) {
        let mut with_suffix = time.clone();
        with_suffix.suffix = Some(units[consumed].raw().to_string());
        out.push(TagMatch {
            consumed: consumed + 1,
            token: Token::Time(with_suffix),
        });
    }
    out.push(TagMatch {
        consumed,
        token: Token::Time(time),
    });
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
            .expect("a time match")
    }

    #[test]
    fn test_hour_with_suffix() {
        let m = best("ba giờ chiều");
        assert_eq!(m.consumed, 3);
        assert_eq!(
            m.token,
            Token::Time(Time {
                hours: "3".to_string(),
                minutes: None,
                seconds: None,
                suffix: Some("chiều".to_string()),
            })
        );
    }

    #[test]
    fn test_hour_minute_second() {
        let m = best("tám giờ mười lăm phút hai mươi giây");
        assert_eq!(m.consumed, 8);
        assert_eq!(
            m.token,
            Token::Time(Time {
                hours: "8".to_string(),
                minutes: Some("15".to_string()),
                seconds: Some("20".to_string()),
                suffix: None,
            })
        );
    }

    #[test]
    fn test_half_hour() {
        let m = best("bảy giờ rưỡi tối");
        assert_eq!(m.consumed, 4);
        assert_eq!(
            m.token,
            Token::Time(Time {
                hours: "7".to_string(),
                minutes: Some("30".to_string()),
                seconds: None,
                suffix: Some("tối".to_string()),
            })
        );
    }
}
