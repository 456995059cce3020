use log::trace;

use crate::{
    ast::{Expr, UnaryOperator},
    error::{CalcError, CalcResult, ErrorKind},
    interpreter::{
        lexer::{
            number::parse_literal,
            token::{Token, TokenKind},
        },
        parser::core::Parser,
    },
};

impl Parser<'_> {
    /// Parses a single operand.
    ///
    /// Grammar:
    /// ```text
    /// Primary := '(' Expression ')'
    ///          | UnaryOp Primary
    ///          | FunctionName '(' Arguments? ')'
    ///          | ConstantName
    ///          | NumberLiteral
    /// ```
    pub(super) fn parse_primary(&mut self) -> CalcResult<Expr> {
        let Some(token) = self.cursor.peek() else {
            return Err(CalcError::unlocated(ErrorKind::MissingExpressions));
        };

        match token.kind {
            TokenKind::Number => self.parse_number(token),
            TokenKind::Keyword => self.parse_keyword(token),
            TokenKind::Operator => self.parse_unary(token),
            TokenKind::Parenthesis if token.is_open_parenthesis() => self.parse_group(),
            TokenKind::Parenthesis | TokenKind::Comma => Err(invalid_token(token)),
        }
    }

    fn parse_number(&mut self, token: &Token) -> CalcResult<Expr> {
        let value = parse_literal(&token.text).ok_or_else(|| {
                        CalcError::at(ErrorKind::NotANumber { literal: token.text.clone() },
                                      token.position)
                    })?;
        self.cursor.advance(0);
        Ok(Expr::number(value, token.position))
    }

    /// A unary operator applies to the next primary only, so `-2 ** 2` is
    /// `(-2) ** 2`.
    fn parse_unary(&mut self, token: &Token) -> CalcResult<Expr> {
        let Some(op) = UnaryOperator::from_symbol(&token.text) else {
            return Err(invalid_token(token));
        };
        self.cursor.advance(0);

        self.enter()?;
        let operand = self.parse_primary()?;
        self.leave();

        Ok(Expr::UnaryOp { op,
                           operand: Box::new(operand),
                           position: token.position })
    }

    /// `'(' Expression ')'`, parsed under its own barrier.
    fn parse_group(&mut self) -> CalcResult<Expr> {
        self.cursor.advance(0);
        let expr = self.parse_scoped()?;

        match self.cursor.peek() {
            Some(token) if token.is_close_parenthesis() => {
                self.cursor.advance(0);
                Ok(expr)
            },
            _ => Err(CalcError::at(ErrorKind::MissingCloseParenthesis, self.here())),
        }
    }

    /// Resolves a name against the registry, constants first.
    ///
    /// The token keeps its text; the tree stores the lowercase name.
    fn parse_keyword(&mut self, token: &Token) -> CalcResult<Expr> {
        let name = token.text.to_lowercase();

        if self.registry.is_constant(&name) {
            trace!("constant {name} at {}", token.position);
            self.cursor.advance(0);
            return Ok(Expr::Constant { name,
                                       position: token.position });
        }
        if !self.registry.is_function(&name) {
            return Err(invalid_token(token));
        }

        self.cursor.advance(0);
        match self.cursor.peek() {
            Some(next) if next.is_open_parenthesis() => {
                self.cursor.advance(0);
            },
            _ => return Err(CalcError::at(ErrorKind::MissingOpenParenthesis, self.here())),
        }

        let arguments = self.parse_arguments()?;
        trace!("call {name} with {} argument(s) at {}", arguments.len(), token.position);
        Ok(Expr::FunctionCall { name,
                                arguments,
                                position: token.position })
    }

    /// `Arguments? ')'`, with the opening parenthesis already consumed.
    fn parse_arguments(&mut self) -> CalcResult<Vec<Expr>> {
        let mut arguments = Vec::new();

        match self.cursor.peek() {
            Some(token) if token.is_close_parenthesis() => {
                self.cursor.advance(0);
                return Ok(arguments);
            },
            None => return Err(CalcError::at(ErrorKind::MissingCloseParenthesis, self.here())),
            Some(_) => {},
        }

        loop {
            arguments.push(self.parse_scoped()?);

            match self.cursor.peek() {
                Some(token) if token.is_comma() => {
                    self.cursor.advance(0);
                },
                Some(token) if token.is_close_parenthesis() => {
                    self.cursor.advance(0);
                    return Ok(arguments);
                },
                _ => return Err(CalcError::at(ErrorKind::MissingCloseParenthesis, self.here())),
            }
        }
    }

    /// Parses an expression behind a fresh barrier, so that operators pending
    /// outside the scope are left alone.
    fn parse_scoped(&mut self) -> CalcResult<Expr> {
        self.barriers.push(self.operators.len());
        let expr = self.parse_expression()?;
        if self.barriers.pop().is_none() {
            return Err(CalcError::unlocated(ErrorKind::EmptyStack));
        }
        Ok(expr)
    }
}

fn invalid_token(token: &Token) -> CalcError {
    CalcError::at(ErrorKind::InvalidToken { token: token.text.clone() }, token.position)
}
