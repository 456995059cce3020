/// The cursor module provides forward-only reading with lookahead.
///
/// Both the lexer (over characters) and the parser (over tokens) read their
/// input through a [`cursor::Cursor`], which reports "done" instead of failing
/// when reading past the end.
pub mod cursor;
/// The evaluator module computes the value of an expression tree.
///
/// Evaluation is a pure recursive walk. It resolves constants and calls
/// functions through a registry and applies decimal-corrected arithmetic to
/// `+ - * /`.
///
/// # Responsibilities
/// - Evaluates every node variant of the tree.
/// - Checks function argument counts against the registry.
/// - Reports names the registry does not know.
pub mod evaluator;
/// The lexer module splits source text into tokens.
///
/// The lexer reads the raw text once, left to right, and produces numbers,
/// keywords, operators, parentheses and commas, each with its character
/// offset. This is the first stage of a calculation.
///
/// # Responsibilities
/// - Recognizes operators by longest match.
/// - Validates numeric literals, including the digits of radix literals.
/// - Reports invalid characters with their position.
pub mod lexer;
/// The parser module builds the expression tree from tokens.
///
/// Recursive descent over operands is combined with explicit operand and
/// operator stacks. Barriers on the operator stack keep parenthesized groups
/// and function arguments from interacting with operators outside them.
///
/// # Responsibilities
/// - Applies the precedence and associativity of every binary operator.
/// - Resolves names to constants or functions through the registry.
/// - Reports grammar errors with the position of the offending token.
pub mod parser;
/// The registry module maps names to constants and functions.
///
/// The parser and evaluator depend only on the [`registry::Registry`] trait.
/// [`registry::Builtins`] is the default table of math constants and
/// functions.
pub mod registry;
