/// Core evaluation logic.
///
/// Holds the evaluator, dispatches on node variants, resolves constants and
/// calls functions through the registry.
pub mod core;

/// Unary operator evaluation.
///
/// Identity, negation, 32-bit complement and square root.
pub mod unary;

/// Binary operator evaluation.
///
/// Decimal-corrected arithmetic, exponentiation, remainder and the 32-bit
/// bitwise family.
pub mod binary;

pub use self::core::{Evaluator, evaluate};
