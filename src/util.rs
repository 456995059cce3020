/// Numeric conversion helpers.
///
/// Integer views of `f64` values used by the bitwise operators and by the
/// builtin function table: 32-bit two's-complement truncation and the bounds
/// of exactly representable integers.
pub mod num;

/// Decimal-corrected arithmetic.
///
/// Addition, subtraction, multiplication and division that work on the
/// shortest decimal form of their operands, so that `0.1 + 0.2 == 0.3`.
pub mod decimal;
