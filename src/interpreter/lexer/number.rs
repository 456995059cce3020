use std::fmt;

/// The base announced by a `0x`, `0o` or `0b` literal prefix.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Radix {
    /// `0b`
    Binary,
    /// `0o`
    Octal,
    /// `0x`
    Hexadecimal,
}

impl Radix {
    /// Reads the radix from the prefix of a literal.
    #[must_use]
    pub fn from_prefix(literal: &str) -> Option<Self> {
        match literal.get(..2)? {
            "0b" => Some(Self::Binary),
            "0o" => Some(Self::Octal),
            "0x" => Some(Self::Hexadecimal),
            _ => None,
        }
    }

    /// The numeric base.
    #[must_use]
    pub const fn base(self) -> u32 {
        match self {
            Self::Binary => 2,
            Self::Octal => 8,
            Self::Hexadecimal => 16,
        }
    }

    /// True if `c` is a digit of this radix. Hexadecimal digits may be upper
    /// or lower case.
    #[must_use]
    pub fn accepts(self, c: char) -> bool {
        c.is_digit(self.base())
    }
}

impl fmt::Display for Radix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Binary => "binary",
            Self::Octal => "octal",
            Self::Hexadecimal => "hexadecimal",
        };
        write!(f, "{name}")
    }
}

/// True if `c` can begin a numeric literal.
#[must_use]
pub const fn is_number_start(c: char) -> bool {
    c == '.' || c.is_ascii_digit()
}

/// Tests `text` against the numeric literal shapes: `0x…`, `0o…`, `0b…`
/// followed by letters or digits, `123`, `1.5`, `1.` and `.5`.
///
/// Digits after a radix prefix are not checked against the radix here; the
/// lexer validates them one at a time as it scans.
///
/// ## Example
/// ```
/// use numerate::interpreter::lexer::number::matches_shape;
///
/// assert!(matches_shape("0xFF"));
/// assert!(matches_shape("12."));
/// assert!(matches_shape(".5"));
/// assert!(!matches_shape("."));
/// assert!(!matches_shape("1.2.3"));
/// assert!(!matches_shape("0x"));
/// ```
#[must_use]
pub fn matches_shape(text: &str) -> bool {
    if Radix::from_prefix(text).is_some() {
        let digits = &text[2..];
        return !digits.is_empty() && digits.chars().all(|c| c.is_ascii_alphanumeric());
    }

    let all_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
    match text.split_once('.') {
        None => !text.is_empty() && all_digits(text),
        Some((integer, fraction)) => {
            !(integer.is_empty() && fraction.is_empty()) && all_digits(integer)
            && all_digits(fraction)
        },
    }
}

/// Converts the text of a number token to its value.
///
/// Radix literals are accumulated digit by digit, so literals wider than 64
/// bits round like any other large float instead of failing.
///
/// ## Example
/// ```
/// use numerate::interpreter::lexer::number::parse_literal;
///
/// assert_eq!(parse_literal("0xFF"), Some(255.0));
/// assert_eq!(parse_literal("0o17"), Some(15.0));
/// assert_eq!(parse_literal("5."), Some(5.0));
/// assert_eq!(parse_literal(".25"), Some(0.25));
/// assert_eq!(parse_literal("0b12"), None);
/// ```
#[must_use]
pub fn parse_literal(text: &str) -> Option<f64> {
    if !matches_shape(text) {
        return None;
    }
    match Radix::from_prefix(text) {
        Some(radix) => text[2..].chars().try_fold(0.0, |value, c| {
                                             let digit = c.to_digit(radix.base())?;
                                             Some(value * f64::from(radix.base())
                                                  + f64::from(digit))
                                         }),
        None => text.parse().ok(),
    }
}
