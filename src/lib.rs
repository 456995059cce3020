//! # numerate
//!
//! numerate is an arithmetic expression calculator written in Rust.
//! It lexes, parses, and evaluates expressions with operator precedence,
//! unary operators, radix literals, named constants, variadic functions, and
//! decimal-corrected arithmetic, so that `0.1 + 0.2` is exactly `0.3`.
//!
//! ```
//! assert_eq!(numerate::calculate("2 ** 3 ** 2").unwrap(), 512.0);
//! assert_eq!(numerate::calculate("max(1, 0x10, 0b11) / 4").unwrap(), 4.0);
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::Expr,
    error::CalcResult,
    interpreter::{
        evaluator,
        lexer::{self, token::Token},
        parser,
        registry::{Builtins, Registry},
    },
};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and the operator types that represent
/// an expression as a tree. The tree is built by the parser and read by the
/// evaluator.
///
/// # Responsibilities
/// - Defines the node variants and the source position each one carries.
/// - Holds the precedence and associativity table of the binary operators.
pub mod ast;
/// Provides the error type shared by every stage.
///
/// This module defines every way lexing, parsing, or evaluating can fail. Each
/// error carries a category, a stable code, the message arguments, and the
/// source position when there is one.
///
/// # Responsibilities
/// - Classifies failures as lexer, parser, evaluator, or internal errors.
/// - Keeps internal faults distinguishable from bad input.
pub mod error;
/// Orchestrates the stages of a calculation.
///
/// This module ties together the cursor, lexer, parser, evaluator and the
/// name registry.
pub mod interpreter;
/// General numeric utilities.
///
/// This module provides the 32-bit integer conversions used by the bitwise
/// operators and the decimal correction used by `+ - * /`.
pub mod util;

/// Limits applied while parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Deepest nesting the parser accepts. Parentheses, unary operators,
    /// function arguments and each operator of a binary chain count one level,
    /// so a flat chain of `n` operators needs `n + 1` levels.
    pub max_depth: usize,
}

impl Options {
    /// Nesting limit used by [`Options::default`].
    pub const DEFAULT_MAX_DEPTH: usize = 256;
}

impl Default for Options {
    fn default() -> Self {
        Self { max_depth: Self::DEFAULT_MAX_DEPTH }
    }
}

/// A calculator bound to a registry and parser options.
///
/// Each call owns its own lexer and parser state, so a `Calculator` can be
/// shared freely and reused for any number of expressions.
///
/// # Example
/// ```
/// use numerate::{Calculator, Options};
///
/// let calculator = Calculator::new().options(Options { max_depth: 4 });
/// assert_eq!(calculator.calculate("(1 + 2) * 3").unwrap(), 9.0);
///
/// let err = calculator.calculate("((((1))))").unwrap_err();
/// assert_eq!(err.code(), "NestingTooDeep");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Calculator<R = Builtins> {
    registry: R,
    options:  Options,
}

impl Calculator {
    /// Creates a calculator with the builtin constants and functions.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<R: Registry> Calculator<R> {
    /// Creates a calculator that resolves names through `registry`.
    #[must_use]
    pub fn with_registry(registry: R) -> Self {
        Self { registry,
               options: Options::default() }
    }

    /// Replaces the parser options.
    #[must_use]
    pub const fn options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    /// The registry names are resolved through.
    #[must_use]
    pub const fn registry(&self) -> &R {
        &self.registry
    }

    /// Lexes, parses, and evaluates `source`.
    pub fn calculate(&self, source: &str) -> CalcResult<f64> {
        let tokens = self.lex(source)?;
        let expr = self.parse(&tokens)?;
        self.evaluate(&expr)
    }

    /// Splits `source` into tokens.
    #[allow(clippy::unused_self)]
    pub fn lex(&self, source: &str) -> CalcResult<Vec<Token>> {
        lexer::lex(source)
    }

    /// Builds an expression tree from tokens.
    pub fn parse(&self, tokens: &[Token]) -> CalcResult<Expr> {
        parser::parse(tokens, &self.registry, self.options)
    }

    /// Computes the value of an expression tree.
    pub fn evaluate(&self, expr: &Expr) -> CalcResult<f64> {
        evaluator::evaluate(expr, &self.registry)
    }
}

/// Calculates the value of an expression with the builtin registry.
///
/// Equivalent to `evaluate(&parse(&lex(source)?)?)`. The first failure of
/// any stage is returned.
///
/// # Examples
/// ```
/// use numerate::calculate;
///
/// assert_eq!(calculate("0.1 + 0.2").unwrap(), 0.3);
/// assert_eq!(calculate("-2 ** 2").unwrap(), 4.0);
///
/// let err = calculate("1 + 2)").unwrap_err();
/// assert_eq!(err.code(), "ExtraTrailingTokens");
/// assert_eq!(err.position, Some(5));
/// ```
pub fn calculate(source: &str) -> CalcResult<f64> {
    Calculator::new().calculate(source)
}

/// Splits source text into tokens.
///
/// # Example
/// ```
/// let tokens = numerate::lex("√16").unwrap();
/// assert_eq!(tokens.len(), 2);
/// ```
pub fn lex(source: &str) -> CalcResult<Vec<Token>> {
    lexer::lex(source)
}

/// Builds an expression tree from tokens, resolving names with the builtin
/// registry.
pub fn parse(tokens: &[Token]) -> CalcResult<Expr> {
    Calculator::new().parse(tokens)
}

/// Computes the value of an expression tree with the builtin registry.
pub fn evaluate(expr: &Expr) -> CalcResult<f64> {
    Calculator::new().evaluate(expr)
}
