use crate::{
    ast::BinaryOperator,
    interpreter::evaluator::core::Evaluator,
    util::{
        decimal,
        num::{pow, to_int32, to_uint32},
    },
};

impl Evaluator<'_> {
    /// Applies a binary operator to two evaluated operands.
    ///
    /// `**` is NaN for a NaN exponent and for `±1 ** ±∞` (see [`pow`]).
    /// `+ - * /` go through the decimal correction, so `0.1 + 0.2` is exactly
    /// `0.3`. `%` truncates, so the result takes the sign of the dividend.
    /// The bitwise operators truncate both operands to 32-bit integers; shift
    /// counts use their low five bits and `>>>` shifts in zeros.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    ///
    /// # Returns
    /// The result. Division by zero gives an infinity or NaN, never an error.
    ///
    /// # Example
    /// ```
    /// use numerate::{ast::BinaryOperator, interpreter::evaluator::Evaluator};
    ///
    /// assert_eq!(Evaluator::eval_binary(BinaryOperator::Add, 0.1, 0.2), 0.3);
    /// assert_eq!(Evaluator::eval_binary(BinaryOperator::Rem, -7.0, 3.0), -1.0);
    /// assert_eq!(Evaluator::eval_binary(BinaryOperator::UShr, -1.0, 28.0), 15.0);
    /// assert_eq!(Evaluator::eval_binary(BinaryOperator::Shl, 1.0, 33.0), 2.0);
    /// ```
    #[must_use]
    pub fn eval_binary(op: BinaryOperator, left: f64, right: f64) -> f64 {
        use BinaryOperator::{
            Add, BitAnd, BitOr, BitXor, Div, Mul, Pow, Rem, Shl, Shr, Sub, UShr,
        };

        match op {
            Add => decimal::add(left, right),
            Sub => decimal::sub(left, right),
            Mul => decimal::mul(left, right),
            Div => decimal::div(left, right),
            Rem => left % right,
            Pow => pow(left, right),
            Shl => f64::from(to_int32(left).wrapping_shl(shift_count(right))),
            Shr => f64::from(to_int32(left) >> shift_count(right)),
            UShr => f64::from(to_uint32(left) >> shift_count(right)),
            BitAnd => f64::from(to_int32(left) & to_int32(right)),
            BitXor => f64::from(to_int32(left) ^ to_int32(right)),
            BitOr => f64::from(to_int32(left) | to_int32(right)),
        }
    }
}

/// Shift counts use the low five bits of the 32-bit form.
fn shift_count(value: f64) -> u32 {
    to_uint32(value) & 31
}
