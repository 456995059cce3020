use log::{debug, trace};

use crate::{
    error::{CalcError, CalcResult, ErrorKind},
    interpreter::{
        cursor::Cursor,
        lexer::{
            number::{Radix, is_number_start, matches_shape},
            symbol::{is_symbol_char, longest_symbol},
            token::{Token, TokenKind},
        },
    },
};

/// Numeric literal shapes, radix validation and literal conversion.
pub mod number;
/// The operator symbol table and longest-match recognition.
pub mod symbol;
/// Token and token kind definitions.
pub mod token;

/// Splits source text into tokens.
///
/// The scan runs left to right. At each character the sub-lexers are tried in
/// a fixed order: whitespace (skipped), comma, operator, parenthesis, number,
/// keyword. A character none of them accepts is an `InvalidCharacter` error.
/// Token positions are character offsets.
///
/// # Errors
/// Returns a lexer error for invalid characters, unknown operators, malformed
/// literals and digits outside a literal's radix.
///
/// # Example
/// ```
/// use numerate::interpreter::lexer::{lex, token::TokenKind};
///
/// let tokens = lex("max(1, 0x1F) ** 2").unwrap();
/// let texts: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();
/// assert_eq!(texts, ["max", "(", "1", ",", "0x1F", ")", "**", "2"]);
/// assert_eq!(tokens[6].kind, TokenKind::Operator);
/// assert_eq!(tokens[6].position, 13);
/// ```
pub fn lex(source: &str) -> CalcResult<Vec<Token>> {
    let chars: Vec<(usize, char)> = source.char_indices().collect();
    let mut scanner = Scanner { source,
                                cursor: Cursor::new(&chars),
                                tokens: Vec::new() };

    while let Some(&(_, c)) = scanner.cursor.peek() {
        let matched = scanner.lex_space(c)
                      || scanner.lex_comma(c)
                      || scanner.lex_operator(c)?
                      || scanner.lex_parenthesis(c)
                      || scanner.lex_number(c)?
                      || scanner.lex_keyword(c);
        if !matched {
            return Err(CalcError::at(ErrorKind::InvalidCharacter { character: c },
                                     scanner.cursor.position()));
        }
    }

    debug!("lexed {} token(s) from {source:?}", scanner.tokens.len());
    Ok(scanner.tokens)
}

/// True if `c` may appear in a constant or function name.
#[must_use]
pub fn is_keyword_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '∞'
}

/// Per-call lexing state. Items are `(byte offset, char)` pairs so that the
/// operator matcher can work on the remaining `&str`.
struct Scanner<'a> {
    source: &'a str,
    cursor: Cursor<'a, (usize, char)>,
    tokens: Vec<Token>,
}

impl Scanner<'_> {
    fn push(&mut self, kind: TokenKind, text: String, position: usize) {
        trace!("token {kind:?} {text:?} at {position}");
        self.tokens.push(Token::new(kind, text, position));
    }

    fn lex_space(&mut self, c: char) -> bool {
        if !matches!(c, ' ' | '\t' | '\n' | '\r') {
            return false;
        }
        self.cursor.advance(0);
        true
    }

    fn lex_comma(&mut self, c: char) -> bool {
        if c != ',' {
            return false;
        }
        self.push(TokenKind::Comma, c.to_string(), self.cursor.position());
        self.cursor.advance(0);
        true
    }

    fn lex_parenthesis(&mut self, c: char) -> bool {
        if !matches!(c, '(' | ')') {
            return false;
        }
        self.push(TokenKind::Parenthesis, c.to_string(), self.cursor.position());
        self.cursor.advance(0);
        true
    }

    /// Greedy longest match against the operator table.
    fn lex_operator(&mut self, c: char) -> CalcResult<bool> {
        if !is_symbol_char(c) {
            return Ok(false);
        }
        let position = self.cursor.position();
        let Some(&(offset, _)) = self.cursor.peek() else {
            return Ok(false);
        };

        let source = self.source;
        match longest_symbol(&source[offset..]) {
            Ok(symbol) => {
                let width = symbol.chars().count();
                self.cursor.advance(width - 1);
                self.push(TokenKind::Operator, symbol.to_string(), position);
                Ok(true)
            },
            Err(partial) => {
                Err(CalcError::at(ErrorKind::InvalidOperator { operator: partial.to_string() },
                                  position))
            },
        }
    }

    /// Greedy scan against the literal shapes.
    ///
    /// A character is taken while the literal plus that character could
    /// still grow into a valid shape. Once a radix prefix has been read,
    /// every further character is checked against the radix immediately.
    fn lex_number(&mut self, c: char) -> CalcResult<bool> {
        if !is_number_start(c) {
            return Ok(false);
        }
        let position = self.cursor.position();
        let mut literal = String::new();
        let mut radix: Option<Radix> = None;

        while let Some(&(_, next)) = self.cursor.peek() {
            let candidate = format!("{literal}{next}");
            if !matches_shape(&format!("{candidate}0")) {
                break;
            }
            if radix.is_none() {
                radix = Radix::from_prefix(&literal);
            }
            if let Some(radix) = radix
               && !radix.accepts(next)
            {
                return Err(CalcError::at(ErrorKind::PositionNotationError { radix, digit: next },
                                         self.cursor.position()));
            }
            literal = candidate;
            self.cursor.advance(0);
        }

        // A lone dot is not a number; give it back so it is reported as an
        // invalid character.
        if literal == "." {
            self.cursor.retreat(1);
            return Ok(false);
        }
        if !matches_shape(&literal) {
            return Err(CalcError::at(ErrorKind::InvalidNumber { literal }, position));
        }

        self.push(TokenKind::Number, literal, position);
        Ok(true)
    }

    fn lex_keyword(&mut self, c: char) -> bool {
        if !is_keyword_char(c) {
            return false;
        }
        let position = self.cursor.position();
        let mut keyword = String::new();
        while let Some(&(_, next)) = self.cursor.peek()
              && is_keyword_char(next)
        {
            keyword.push(next);
            self.cursor.advance(0);
        }
        self.push(TokenKind::Keyword, keyword, position);
        true
    }
}
