//! Tagged token model
//!
//! A [`Token`] is the typed representation of one classified span. Every
//! variant carries only the fields meaningful to its category, and all
//! fields are immutable once constructed: tokens are built by the
//! classifier, handed to the verbalizer, and dropped at the end of the
//! request.

/// A cardinal numeral.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cardinal {
    /// Non-empty decimal numeral string, leading zeros preserved
    pub digits: String,
    /// Whether a negative marker preceded the numeral
    pub negative: bool,
}

/// A decimal numeral, optionally carrying a trailing scale word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decimal {
    /// Digits before the decimal separator
    pub integer_part: String,
    /// Digits after the separator, read digit by digit
    pub fractional_part: Option<String>,
    /// Trailing scale word kept verbatim (e.g. "triệu")
    pub quantity: Option<String>,
}

/// A spoken fraction, `numerator phần denominator`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fraction {
    /// Numerator digits
    pub numerator: String,
    /// Denominator digits
    pub denominator: String,
}

/// An ordinal, `thứ N`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ordinal {
    /// The ordinal position as digits
    pub integer: String,
}

/// A calendar date; any subset of components may be present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Date {
    /// Day of month digits
    pub day: Option<String>,
    /// Month digits
    pub month: Option<String>,
    /// Year digits
    pub year: Option<String>,
}

/// A clock time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Time {
    /// Hour digits
    pub hours: String,
    /// Minute digits
    pub minutes: Option<String>,
    /// Second digits
    pub seconds: Option<String>,
    /// Day-period suffix word kept verbatim (e.g. "chiều")
    pub suffix: Option<String>,
}

/// The numeric part of a money or measure expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Amount {
    /// A plain cardinal amount
    Cardinal(Cardinal),
    /// A decimal amount, possibly quantity-scaled
    Decimal(Decimal),
}

/// An amount of money.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Money {
    /// The numeric amount
    pub amount: Amount,
    /// Canonical currency word from the lexicon
    pub currency: String,
}

/// A measured quantity with a unit abbreviation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Measure {
    /// The numeric amount
    pub amount: Amount,
    /// Canonical unit abbreviation from the lexicon
    pub units: String,
    /// Whether a negative marker preceded the amount
    pub negative: bool,
}

/// A telephone-style digit sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Telephone {
    /// Pure digit string, length >= 3
    pub number_part: String,
}

/// An electronic address: username plus domain, or a bare protocol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Electronic {
    /// Local part of an address
    pub username: Option<String>,
    /// Dotted domain
    pub domain: Option<String>,
    /// Bare protocol token
    pub protocol: Option<String>,
}

/// One classified span of the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Cardinal numeral
    Cardinal(Cardinal),
    /// Decimal numeral
    Decimal(Decimal),
    /// Fraction
    Fraction(Fraction),
    /// Ordinal
    Ordinal(Ordinal),
    /// Calendar date
    Date(Date),
    /// Clock time
    Time(Time),
    /// Money expression
    Money(Money),
    /// Measured quantity
    Measure(Measure),
    /// Telephone digit sequence
    Telephone(Telephone),
    /// Electronic address
    Electronic(Electronic),
    /// Whitelisted substitution
    Whitelist {
        /// Canonical substitution text, emitted verbatim
        name: String,
    },
    /// A single punctuation mark
    Punctuation {
        /// The mark itself
        mark: String,
    },
    /// Unrecognized word, passed through unchanged
    Word {
        /// Raw input spelling
        text: String,
    },
}

impl Token {
    /// Kind name used in logs and error reports.
    pub fn kind(&self) -> &'static str {
        match self {
            Token::Cardinal(_) => "cardinal",
            Token::Decimal(_) => "decimal",
            Token::Fraction(_) => "fraction",
            Token::Ordinal(_) => "ordinal",
            Token::Date(_) => "date",
            Token::Time(_) => "time",
            Token::Money(_) => "money",
            Token::Measure(_) => "measure",
            Token::Telephone(_) => "telephone",
            Token::Electronic(_) => "electronic",
            Token::Whitelist { .. } => "whitelist",
            Token::Punctuation { .. } => "punctuation",
            Token::Word { .. } => "word",
        }
    }
}

/// A token together with the number of input word units it consumed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    /// The classified token
    pub token: Token,
    /// Word units covered by this token
    pub consumed: usize,
}

/// The ordered result of classifying one input string.
///
/// Invariant (total coverage): the `consumed` counts of all spans sum to
/// exactly the number of word units the input tokenized into — no gaps,
/// no overlaps. The classifier guarantees this for every input; the word
/// and punctuation fallbacks make a covering always exist.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Sentence {
    /// Classified spans in left-to-right input order
    pub spans: Vec<Span>,
    /// Number of word units the input tokenized into
    pub total_units: usize,
}

impl Sentence {
    /// Word units covered by the spans.
    pub fn covered_units(&self) -> usize {
        self.spans.iter().map(|s| s.consumed).sum()
    }

    /// Whether the spans partition the input exactly.
    pub fn is_total_covering(&self) -> bool {
        self.covered_units() == self.total_units
    }

    /// True for the empty classification of empty input.
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }
}
