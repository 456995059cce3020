/// The registry trait and the builtin table.
pub mod core;

/// Single-value math functions with host math-library semantics.
///
/// Rounding, sign, 32-bit helpers, trigonometry and random numbers.
pub mod builtin;

/// Variadic aggregate functions.
///
/// Sums, products, averages, standard deviation, factorial, greatest common
/// divisor and least common multiple.
pub mod stats;

pub use self::core::{BUILTIN_CONSTANTS, BUILTIN_FUNCTIONS, Builtins, NumericFn, Registry};
