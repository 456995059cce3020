use std::fmt;

use crate::interpreter::lexer::number::Radix;

/// The stage an error belongs to.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Malformed characters, operators or literals.
    Lexer,
    /// Grammar violations, unmatched delimiters, unknown tokens.
    Parser,
    /// Failures while computing the value of a well-formed tree.
    Evaluator,
    /// A broken parser invariant. Never caused by input; always a bug.
    Internal,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Lexer => "LexerError",
            Self::Parser => "ParserError",
            Self::Evaluator => "EvaluatorError",
            Self::Internal => "InternalError",
        };
        write!(f, "{name}")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
/// Represents every way lexing, parsing or evaluation can fail.
pub enum ErrorKind {
    /// A character that starts no token.
    #[error("Invalid character '{character}'.")]
    InvalidCharacter {
        /// The offending character.
        character: char,
    },
    /// A run of operator characters that is not a known operator.
    #[error("Invalid operator '{operator}'.")]
    InvalidOperator {
        /// The scanned operator text.
        operator: String,
    },
    /// A scanned literal that matches no numeric shape.
    #[error("Invalid number '{literal}'.")]
    InvalidNumber {
        /// The scanned literal text.
        literal: String,
    },
    /// A digit outside the alphabet of a radix-prefixed literal.
    #[error("'{digit}' is not a valid {radix} digit.")]
    PositionNotationError {
        /// The radix announced by the literal's prefix.
        radix: Radix,
        /// The first digit that does not belong to it.
        digit: char,
    },

    /// The token stream ended where an expression was expected.
    #[error("Missing expression. Nothing to parse.")]
    MissingExpressions,
    /// A token that cannot start an expression here.
    #[error("Invalid token '{token}'.")]
    InvalidToken {
        /// The token text.
        token: String,
    },
    /// A function name not followed by `(`.
    #[error("Missing open parenthesis.")]
    MissingOpenParenthesis,
    /// A group or argument list that is never closed.
    #[error("Missing close parenthesis.")]
    MissingCloseParenthesis,
    /// A number token whose text does not convert to a number.
    #[error("'{literal}' cannot be parsed as a number.")]
    NotANumber {
        /// The token text.
        literal: String,
    },
    /// Tokens left over after a complete expression.
    #[error("Extra tokens after expression, starting with '{token}'.")]
    ExtraTrailingTokens {
        /// Text of the first leftover token.
        token: String,
    },
    /// Nesting deeper than the configured limit.
    #[error("Expression nests deeper than {limit} levels.")]
    NestingTooDeep {
        /// The configured limit.
        limit: usize,
    },

    /// A constant the registry does not know.
    #[error("Unknown constant '{name}'.")]
    UnknownConstant {
        /// The constant name.
        name: String,
    },
    /// A function the registry does not know.
    #[error("Unknown function '{name}'.")]
    UnknownFunction {
        /// The function name.
        name: String,
    },

    /// A pop from an empty parser stack.
    #[error("The stack is empty. This is a bug in the calculator itself.")]
    EmptyStack,
    /// Parser stacks not drained after a complete parse.
    #[error("Non-empty stack after parsing. This is a bug in the calculator itself.")]
    NonEmptyStack,
}

impl ErrorKind {
    /// Returns the stage this kind of error belongs to.
    ///
    /// # Example
    /// ```
    /// use numerate::error::{ErrorCategory, ErrorKind};
    ///
    /// assert_eq!(ErrorKind::MissingCloseParenthesis.category(), ErrorCategory::Parser);
    /// assert_eq!(ErrorKind::EmptyStack.category(), ErrorCategory::Internal);
    /// ```
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidCharacter { .. }
            | Self::InvalidOperator { .. }
            | Self::InvalidNumber { .. }
            | Self::PositionNotationError { .. } => ErrorCategory::Lexer,
            Self::MissingExpressions
            | Self::InvalidToken { .. }
            | Self::MissingOpenParenthesis
            | Self::MissingCloseParenthesis
            | Self::NotANumber { .. }
            | Self::ExtraTrailingTokens { .. }
            | Self::NestingTooDeep { .. } => ErrorCategory::Parser,
            Self::UnknownConstant { .. } | Self::UnknownFunction { .. } => {
                ErrorCategory::Evaluator
            },
            Self::EmptyStack | Self::NonEmptyStack => ErrorCategory::Internal,
        }
    }

    /// Returns the stable string code of this kind, e.g. `"InvalidCharacter"`.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidCharacter { .. } => "InvalidCharacter",
            Self::InvalidOperator { .. } => "InvalidOperator",
            Self::InvalidNumber { .. } => "InvalidNumber",
            Self::PositionNotationError { .. } => "PositionNotationError",
            Self::MissingExpressions => "MissingExpressions",
            Self::InvalidToken { .. } => "InvalidToken",
            Self::MissingOpenParenthesis => "MissingOpenParenthesis",
            Self::MissingCloseParenthesis => "MissingCloseParenthesis",
            Self::NotANumber { .. } => "NotANumber",
            Self::ExtraTrailingTokens { .. } => "ExtraTrailingTokens",
            Self::NestingTooDeep { .. } => "NestingTooDeep",
            Self::UnknownConstant { .. } => "UnknownConstant",
            Self::UnknownFunction { .. } => "UnknownFunction",
            Self::EmptyStack => "EmptyStack",
            Self::NonEmptyStack => "NonEmptyStack",
        }
    }
}
