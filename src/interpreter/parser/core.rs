use log::debug;

use crate::{
    Options,
    ast::{BinaryOperator, Expr},
    error::{CalcError, CalcResult, ErrorKind},
    interpreter::{
        cursor::Cursor,
        lexer::token::{Token, TokenKind},
        registry::Registry,
    },
};

/// Parses a token sequence into an expression tree.
///
/// Constant and function names are resolved against `registry`, so the tree
/// must later be evaluated with the same registry.
///
/// # Parameters
/// - `tokens`: The output of the lexer.
/// - `registry`: Names that count as constants and functions.
/// - `options`: Parser limits.
///
/// # Returns
/// The root of the parsed tree.
///
/// # Errors
/// - `MissingExpressions` when an operand is expected but the input ended.
/// - `InvalidToken` for a token that cannot start an operand.
/// - `MissingOpenParenthesis` / `MissingCloseParenthesis` for unbalanced
///   calls and groups.
/// - `ExtraTrailingTokens` when a complete expression is followed by more
///   tokens.
/// - `NestingTooDeep` when nesting exceeds `options.max_depth`.
///
/// # Example
/// ```
/// use numerate::{
///     Options,
///     interpreter::{lexer::lex, parser::core::parse, registry::Builtins},
/// };
///
/// let tokens = lex("2 - 3 - 4 * PI").unwrap();
/// let tree = parse(&tokens, &Builtins, Options::default()).unwrap();
/// assert_eq!(tree.to_string(), "((2 - 3) - (4 * pi))");
/// ```
pub fn parse(tokens: &[Token], registry: &dyn Registry, options: Options) -> CalcResult<Expr> {
    let mut parser = Parser::new(tokens, registry, options);
    let expr = parser.parse_expression()?;
    parser.finish()?;
    debug!("parsed {} token(s) into {expr}", tokens.len());
    Ok(expr)
}

/// Per-call parsing state.
///
/// `operands` and `operators` hold the pending halves of binary operations.
/// `barriers` records the operator-stack depth at the entry of every open
/// group or argument; folding never pops an operator below the innermost
/// barrier.
pub(super) struct Parser<'a> {
    pub(super) cursor:    Cursor<'a, Token>,
    pub(super) tokens:    &'a [Token],
    pub(super) registry:  &'a dyn Registry,
    pub(super) options:   Options,
    pub(super) operands:  Vec<Expr>,
    pub(super) operators: Vec<BinaryOperator>,
    pub(super) barriers:  Vec<usize>,
    pub(super) depth:     usize,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a [Token], registry: &'a dyn Registry, options: Options) -> Self {
        Self { cursor: Cursor::new(tokens),
               tokens,
               registry,
               options,
               operands: Vec::new(),
               operators: Vec::new(),
               barriers: Vec::new(),
               depth: 0 }
    }

    /// Parses `Primary (BinaryOp Expression)?`.
    ///
    /// The left operand and the operator are pushed, pending runs that bind
    /// tighter than the operator are folded, and the right side is parsed
    /// recursively. Everything above the current barrier is then reduced to
    /// a single tree.
    pub(super) fn parse_expression(&mut self) -> CalcResult<Expr> {
        self.enter()?;
        let operand = self.parse_primary()?;

        let Some(op) = self.peek_binary_operator() else {
            self.leave();
            return Ok(operand);
        };

        self.operands.push(operand);
        self.clear_above(op.precedence())?;
        self.operators.push(op);
        self.cursor.advance(0);

        let right = self.parse_expression()?;
        self.operands.push(right);
        self.reduce_to_barrier()?;

        let result = self.pop_operand()?;
        self.leave();
        Ok(result)
    }

    /// The binary operator at the cursor, if any.
    fn peek_binary_operator(&self) -> Option<BinaryOperator> {
        self.cursor
            .peek()
            .filter(|token| token.kind == TokenKind::Operator)
            .and_then(|token| BinaryOperator::from_symbol(&token.text))
    }

    pub(super) fn pop_operand(&mut self) -> CalcResult<Expr> {
        self.operands.pop().ok_or_else(|| CalcError::unlocated(ErrorKind::EmptyStack))
    }

    /// Counts one nesting level.
    pub(super) fn enter(&mut self) -> CalcResult<()> {
        self.depth += 1;
        if self.depth > self.options.max_depth {
            return Err(CalcError::at(ErrorKind::NestingTooDeep { limit: self.options.max_depth },
                                     self.here()));
        }
        Ok(())
    }

    pub(super) const fn leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Source position of the token at the cursor, or of the end of input.
    pub(super) fn here(&self) -> usize {
        self.cursor.peek().map_or_else(|| self.end_of_input(), |token| token.position)
    }

    /// Position just past the last token.
    pub(super) fn end_of_input(&self) -> usize {
        self.tokens.last().map_or(0, |token| token.position + token.text.chars().count())
    }

    /// Checks that the whole input formed one expression.
    fn finish(&self) -> CalcResult<()> {
        if !self.operands.is_empty() || !self.operators.is_empty() || !self.barriers.is_empty() {
            return Err(CalcError::unlocated(ErrorKind::NonEmptyStack));
        }
        if let Some(token) = self.cursor.peek() {
            return Err(CalcError::at(ErrorKind::ExtraTrailingTokens { token: token.text.clone() },
                                     token.position));
        }
        Ok(())
    }
}
