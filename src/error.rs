/// The error value returned by every stage of the pipeline.
///
/// Pairs an [`ErrorKind`] with the source position it was raised at.
pub mod calc_error;
/// Error kinds and the category each belongs to.
///
/// A kind carries the arguments of its message (the offending character,
/// token text, radix, ...). Kinds are grouped into categories so that callers
/// can tell malformed input apart from defects in the calculator itself.
pub mod kind;

pub use calc_error::{CalcError, CalcResult};
pub use kind::{ErrorCategory, ErrorKind};
