use logos::Logos;

/// Every operator symbol the calculator knows, unary and binary alike.
///
/// The `logos` derive compiles the table into a DFA that always returns the
/// longest symbol matching at the start of the input, so `>>>` wins over `>>`
/// and `**` over `*`.
#[derive(Logos, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `~`
    #[token("~")]
    Tilde,
    /// `√`
    #[token("√")]
    Radical,
    /// `**`
    #[token("**")]
    DoubleStar,
    /// `*`
    #[token("*")]
    Star,
    /// `×`
    #[token("×")]
    Times,
    /// `/`
    #[token("/")]
    Slash,
    /// `÷`
    #[token("÷")]
    Obelus,
    /// `%`
    #[token("%")]
    Percent,
    /// `<<`
    #[token("<<")]
    ShiftLeft,
    /// `>>`
    #[token(">>")]
    ShiftRight,
    /// `>>>`
    #[token(">>>")]
    UnsignedShiftRight,
    /// `&`
    #[token("&")]
    Ampersand,
    /// `^`
    #[token("^")]
    Caret,
    /// `|`
    #[token("|")]
    Pipe,
}

/// The textual form of every [`Symbol`].
pub const SYMBOLS: &[&str] =
    &["+", "-", "~", "√", "**", "*", "×", "/", "÷", "%", "<<", ">>", ">>>", "&", "^", "|"];

/// True if some operator symbol contains `c`.
///
/// ## Example
/// ```
/// use numerate::interpreter::lexer::symbol::is_symbol_char;
///
/// assert!(is_symbol_char('<'));
/// assert!(is_symbol_char('÷'));
/// assert!(!is_symbol_char('$'));
/// ```
#[must_use]
pub fn is_symbol_char(c: char) -> bool {
    SYMBOLS.iter().any(|symbol| symbol.contains(c))
}

/// Matches the longest operator symbol at the start of `input`.
///
/// On success returns the symbol text. On failure returns the longest prefix
/// of `input` that is still the beginning of some symbol; that is the text an
/// `InvalidOperator` error reports.
///
/// ## Example
/// ```
/// use numerate::interpreter::lexer::symbol::longest_symbol;
///
/// assert_eq!(longest_symbol(">>>= 1"), Ok(">>>"));
/// assert_eq!(longest_symbol("**2"), Ok("**"));
/// assert_eq!(longest_symbol("<3"), Err("<"));
/// ```
pub fn longest_symbol(input: &str) -> Result<&str, &str> {
    let mut lexer = Symbol::lexer(input);
    match lexer.next() {
        Some(Ok(_)) => Ok(lexer.slice()),
        _ => Err(longest_partial_symbol(input)),
    }
}

fn longest_partial_symbol(input: &str) -> &str {
    let mut end = 0;
    for (offset, c) in input.char_indices() {
        let candidate = &input[..offset + c.len_utf8()];
        if !SYMBOLS.iter().any(|symbol| symbol.starts_with(candidate)) {
            break;
        }
        end = candidate.len();
    }
    &input[..end]
}
