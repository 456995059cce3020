use crate::{ast::UnaryOperator, interpreter::evaluator::core::Evaluator, util::num::to_int32};

impl Evaluator<'_> {
    /// Applies a unary operator to an evaluated operand.
    ///
    /// - `Plus`: the operand unchanged.
    /// - `Negate`: arithmetic negation.
    /// - `Not`: bitwise complement of the operand truncated to a 32-bit
    ///   integer.
    /// - `Sqrt`: principal square root; NaN for negative operands.
    ///
    /// # Example
    /// ```
    /// use numerate::{ast::UnaryOperator, interpreter::evaluator::Evaluator};
    ///
    /// assert_eq!(Evaluator::eval_unary(UnaryOperator::Not, 5.0), -6.0);
    /// assert_eq!(Evaluator::eval_unary(UnaryOperator::Sqrt, 16.0), 4.0);
    /// assert!(Evaluator::eval_unary(UnaryOperator::Sqrt, -1.0).is_nan());
    /// ```
    #[must_use]
    pub fn eval_unary(op: UnaryOperator, value: f64) -> f64 {
        match op {
            UnaryOperator::Plus => value,
            UnaryOperator::Negate => -value,
            UnaryOperator::Not => f64::from(!to_int32(value)),
            UnaryOperator::Sqrt => value.sqrt(),
        }
    }
}
