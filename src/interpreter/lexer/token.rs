use std::fmt;

/// The lexical class of a [`Token`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A numeric literal, such as `42`, `.5` or `0b101`.
    Number,
    /// A constant or function name, such as `pi` or `MAX`.
    Keyword,
    /// `,`
    Comma,
    /// A unary or binary operator symbol, such as `**` or `√`.
    Operator,
    /// `(` or `)`
    Parenthesis,
}

/// A lexical token: its class, its text as written, and the character offset
/// where it starts.
///
/// Tokens are immutable. Keyword text keeps its original case; the parser
/// resolves names case-insensitively and stores the canonical name in the
/// tree instead of rewriting the token.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    /// The lexical class.
    pub kind:     TokenKind,
    /// The source text of the token.
    pub text:     String,
    /// Character offset of the first character.
    pub position: usize,
}

impl Token {
    /// Creates a token.
    #[must_use]
    pub fn new(kind: TokenKind, text: impl Into<String>, position: usize) -> Self {
        Self { kind,
               text: text.into(),
               position }
    }

    /// True for a parenthesis token with the given character.
    #[must_use]
    pub fn is_parenthesis(&self, parenthesis: char) -> bool {
        self.kind == TokenKind::Parenthesis && self.text.starts_with(parenthesis)
    }

    /// True for `(`.
    #[must_use]
    pub fn is_open_parenthesis(&self) -> bool {
        self.is_parenthesis('(')
    }

    /// True for `)`.
    #[must_use]
    pub fn is_close_parenthesis(&self) -> bool {
        self.is_parenthesis(')')
    }

    /// True for `,`.
    #[must_use]
    pub fn is_comma(&self) -> bool {
        self.kind == TokenKind::Comma
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
