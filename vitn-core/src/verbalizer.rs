//! Verbalizer: canonical rendering of a classified sentence
//!
//! One rendering rule per token kind, symmetric to the sub-grammar table.
//! Tokens are rendered independently and joined with single spaces;
//! closing punctuation attaches to the preceding rendering and opening
//! punctuation to the following one. A token inconsistent with its
//! declared kind fails the whole call — no partially rendered string is
//! ever returned.

use crate::error::VerbalizeError;
use crate::grammar::CompiledGrammarSet;
use crate::token::{Amount, Date, Decimal, Sentence, Time, Token};

const CLOSING: &[char] = &['.', ',', '!', '?', ';', ':', ')', ']', '}', '»', '…'];
const OPENING: &[char] = &['(', '[', '{', '«'];

/// Render a classified sentence into its canonical written form.
pub fn verbalize(
    grammar: &CompiledGrammarSet,
    sentence: &Sentence,
) -> Result<String, VerbalizeError> {
    let mut out = String::new();
    let mut glue_next = false;

    for span in &sentence.spans {
        let piece = render(grammar, &span.token)?;
        let closing = matches!(&span.token, Token::Punctuation { mark }
            if mark.chars().all(|c| CLOSING.contains(&c)));
        let opening = matches!(&span.token, Token::Punctuation { mark }
            if mark.chars().all(|c| OPENING.contains(&c)));

        if !out.is_empty() && !closing && !glue_next {
            out.push(' ');
        }
        out.push_str(&piece);
        glue_next = opening;
    }
    Ok(out)
}

fn render(grammar: &CompiledGrammarSet, token: &Token) -> Result<String, VerbalizeError> {
    match token {
        Token::Cardinal(c) => render_cardinal(&c.digits, c.negative),
        Token::Decimal(d) => render_decimal(d),
        Token::Fraction(f) => {
            require_digits("fraction", "numerator", &f.numerator)?;
            require_digits("fraction", "denominator", &f.denominator)?;
            Ok(format!("{}/{}", f.numerator, f.denominator))
        }
        Token::Ordinal(o) => {
            require_digits("ordinal", "integer", &o.integer)?;
            Ok(format!("thứ {}", o.integer))
        }
        Token::Date(d) => render_date(d),
        Token::Time(t) => render_time(t),
        Token::Money(m) => {
            if m.currency.is_empty() {
                return Err(malformed("money", "empty currency"));
            }
            Ok(format!("{} {}", render_amount(&m.amount)?, m.currency))
        }
        Token::Measure(m) => {
            if m.units.is_empty() {
                return Err(malformed("measure", "empty units"));
            }
            let amount = render_amount(&m.amount)?;
            let sign = if m.negative { "-" } else { "" };
            if grammar.lexicon().is_tight_unit(&m.units) {
                Ok(format!("{sign}{amount}{}", m.units))
            } else {
                Ok(format!("{sign}{amount} {}", m.units))
            }
        }
        Token::Telephone(t) => {
            require_digits("telephone", "number_part", &t.number_part)?;
            Ok(t.number_part.clone())
        }
        Token::Electronic(e) => match (&e.username, &e.domain, &e.protocol) {
            (Some(user), Some(domain), _) if !user.is_empty() && !domain.is_empty() => {
                Ok(format!("{user}@{domain}"))
            }
            (None, None, Some(protocol)) if !protocol.is_empty() => Ok(protocol.clone()),
            _ => Err(malformed("electronic", "needs username+domain or protocol")),
        },
        Token::Whitelist { name } => {
            if name.is_empty() {
                return Err(malformed("whitelist", "empty substitution"));
            }
            Ok(name.clone())
        }
        Token::Punctuation { mark } => Ok(mark.clone()),
        Token::Word { text } => Ok(text.clone()),
    }
}

fn render_amount(amount: &Amount) -> Result<String, VerbalizeError> {
    match amount {
        Amount::Cardinal(c) => render_cardinal(&c.digits, c.negative),
        Amount::Decimal(d) => render_decimal(d),
    }
}

fn render_cardinal(digits: &str, negative: bool) -> Result<String, VerbalizeError> {
    require_digits("cardinal", "digits", digits)?;
    Ok(if negative {
        format!("-{digits}")
    } else {
        digits.to_string()
    })
}

fn render_decimal(d: &Decimal) -> Result<String, VerbalizeError> {
    require_digits("decimal", "integer_part", &d.integer_part)?;
    if d.fractional_part.is_none() && d.quantity.is_none() {
        return Err(malformed("decimal", "needs a fractional part or a quantity"));
    }
    let mut out = d.integer_part.clone();
    if let Some(frac) = &d.fractional_part {
        require_digits("decimal", "fractional_part", frac)?;
        out.push('.');
        out.push_str(frac);
    }
    if let Some(q) = &d.quantity {
        if q.is_empty() {
            return Err(malformed("decimal", "empty quantity"));
        }
        out.push(' ');
        out.push_str(q);
    }
    Ok(out)
}

fn render_date(d: &Date) -> Result<String, VerbalizeError> {
    let mut parts = Vec::new();
    if let Some(day) = &d.day {
        require_digits("date", "day", day)?;
        parts.push(pad2(day));
    }
    if let Some(month) = &d.month {
        require_digits("date", "month", month)?;
        parts.push(pad2(month));
    }
    if let Some(year) = &d.year {
        require_digits("date", "year", year)?;
        parts.push(year.clone());
    }
    if parts.is_empty() {
        return Err(malformed("date", "no components present"));
    }
    Ok(parts.join("/"))
}

fn render_time(t: &Time) -> Result<String, VerbalizeError> {
    require_digits("time", "hours", &t.hours)?;
    let minutes = match &t.minutes {
        Some(m) => {
            require_digits("time", "minutes", m)?;
            pad2(m)
        }
        None => "00".to_string(),
    };
    let mut out = format!("{}:{minutes}", t.hours);
    if let Some(s) = &t.seconds {
        require_digits("time", "seconds", s)?;
        out.push(':');
        out.push_str(&pad2(s));
    }
    if let Some(suffix) = &t.suffix {
        out.push(' ');
        out.push_str(suffix);
    }
    Ok(out)
}

fn pad2(digits: &str) -> String {
    if digits.len() == 1 {
        format!("0{digits}")
    } else {
        digits.to_string()
    }
}

fn require_digits(kind: &'static str, field: &str, value: &str) -> Result<(), VerbalizeError> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed(kind, format!("field '{field}' is not a numeral: {value:?}")));
    }
    Ok(())
}

fn malformed(kind: &'static str, reason: impl Into<String>) -> VerbalizeError {
    VerbalizeError::MalformedToken {
        kind,
        reason: reason.into(),
    }
}
