/// Parser entry point and per-call state.
///
/// Holds the token cursor, the operand and operator stacks, the barrier
/// stack and the nesting counter, and checks that a parse consumed the whole
/// input.
pub mod core;

/// Operator-stack folding.
///
/// Collapses runs of equal-precedence operators into subtrees according to
/// their associativity, never crossing the innermost barrier.
pub mod binary;

/// Operand parsing.
///
/// Numbers, constants, function calls with their arguments, parenthesized
/// groups and unary operators.
pub mod primary;

pub use self::core::parse;
