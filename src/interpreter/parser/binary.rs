use log::trace;

use crate::{
    ast::{Associativity, BinaryOperator, Expr},
    error::{CalcError, CalcResult, ErrorKind},
    interpreter::parser::core::Parser,
};

impl Parser<'_> {
    /// Folds pending runs that bind strictly tighter than `precedence`.
    ///
    /// Called before an incoming operator is pushed, so that the operator
    /// stack above the barrier never decreases in precedence from bottom to
    /// top.
    pub(super) fn clear_above(&mut self, precedence: u8) -> CalcResult<()> {
        while let Some(top) = self.top_operator()
              && top.precedence() > precedence
        {
            self.fold_run()?;
        }
        Ok(())
    }

    /// Folds every pending run above the innermost barrier.
    pub(super) fn reduce_to_barrier(&mut self) -> CalcResult<()> {
        while self.top_operator().is_some() {
            self.fold_run()?;
        }
        Ok(())
    }

    /// The innermost barrier, or the bottom of the stack at top level.
    fn barrier(&self) -> usize {
        self.barriers.last().copied().unwrap_or(0)
    }

    /// The top operator if it lies above the innermost barrier.
    fn top_operator(&self) -> Option<BinaryOperator> {
        if self.operators.len() > self.barrier() { self.operators.last().copied() } else { None }
    }

    /// Pops the maximal run of equal-precedence operators at the top of the
    /// stack together with its operands and pushes back one tree.
    ///
    /// A run of `k` operators takes `k + 1` operands. Left-associative runs
    /// fold left to right, the `**` run right to left.
    fn fold_run(&mut self) -> CalcResult<()> {
        let barrier = self.barrier();
        let (Some(&top), Some(pending)) = (self.operators.last(), self.operators.get(barrier..))
        else {
            return Err(CalcError::unlocated(ErrorKind::EmptyStack));
        };

        let precedence = top.precedence();
        let start = pending.iter()
                           .rposition(|op| op.precedence() != precedence)
                           .map_or(barrier, |i| barrier + i + 1);
        let run = self.operators.split_off(start);

        let Some(first) = self.operands.len().checked_sub(run.len() + 1) else {
            return Err(CalcError::unlocated(ErrorKind::EmptyStack));
        };
        let operands = self.operands.split_off(first);

        let folded = match top.associativity() {
            Associativity::Left => fold_left(operands, &run),
            Associativity::Right => fold_right(operands, &run),
        }.ok_or_else(|| CalcError::unlocated(ErrorKind::EmptyStack))?;

        trace!("folded run of {} '{top}' into {folded}", run.len());
        self.operands.push(folded);
        Ok(())
    }
}

/// `a - b - c` becomes `(a - b) - c`.
fn fold_left(operands: Vec<Expr>, run: &[BinaryOperator]) -> Option<Expr> {
    let mut operands = operands.into_iter();
    let first = operands.next()?;
    Some(run.iter()
            .zip(operands)
            .fold(first, |left, (&op, right)| Expr::binary(left, op, right)))
}

/// `a ** b ** c` becomes `a ** (b ** c)`.
fn fold_right(operands: Vec<Expr>, run: &[BinaryOperator]) -> Option<Expr> {
    let mut operands = operands.into_iter().rev();
    let last = operands.next()?;
    Some(run.iter()
            .rev()
            .zip(operands)
            .fold(last, |right, (&op, left)| Expr::binary(left, op, right)))
}
