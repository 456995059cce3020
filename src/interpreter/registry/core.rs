use std::f64::consts::{E, LN_2, LN_10, LOG2_E, LOG10_E, PI, SQRT_2};

use crate::interpreter::registry::{builtin, stats};

/// Signature of a numeric function: evaluated arguments in, number out.
///
/// Every function is variadic. It receives all the arguments of the call in
/// source order and reads the ones it needs; a missing argument reads as NaN
/// (see [`builtin::arg`]).
pub type NumericFn = fn(&[f64]) -> f64;

/// The read-only name table the parser and evaluator consult.
///
/// Names are looked up in lowercase. The parser uses membership to decide
/// whether a keyword is a constant or a function; the evaluator uses the
/// values. Both must see the same registry.
pub trait Registry {
    /// Value of the constant `name`, if there is one.
    fn constant(&self, name: &str) -> Option<f64>;

    /// The function bound to `name`, if there is one.
    fn function(&self, name: &str) -> Option<NumericFn>;

    /// True if `name` is a constant.
    fn is_constant(&self, name: &str) -> bool {
        self.constant(name).is_some()
    }

    /// True if `name` is a function.
    fn is_function(&self, name: &str) -> bool {
        self.function(name).is_some()
    }
}

impl<R: Registry + ?Sized> Registry for &R {
    fn constant(&self, name: &str) -> Option<f64> {
        (**self).constant(name)
    }

    fn function(&self, name: &str) -> Option<NumericFn> {
        (**self).function(name)
    }
}

/// Defines the builtin constants and functions by generating lookup tables
/// and name lists.
///
/// Each function entry maps a string name to the function pointer
/// implementing the builtin.
///
/// The macro produces:
/// - `CONSTANT_TABLE` and `FUNCTION_TABLE` (static tables for lookup),
/// - `BUILTIN_CONSTANTS` and `BUILTIN_FUNCTIONS` (public lists of names).
macro_rules! builtins {
    (
        constants {
            $( $cname:literal => $value:expr ),* $(,)?
        }
        functions {
            $( $name:literal => $func:expr ),* $(,)?
        }
    ) => {
        static CONSTANT_TABLE: &[(&str, f64)] = &[
            $( ($cname, $value), )*
        ];
        static FUNCTION_TABLE: &[(&str, NumericFn)] = &[
            $( ($name, $func as NumericFn), )*
        ];
        /// Names of the builtin constants.
        pub const BUILTIN_CONSTANTS: &[&str] = &[
            $($cname,)*
        ];
        /// Names of the builtin functions.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtins! {
    constants {
        "e"        => E,
        "inf"      => f64::INFINITY,
        "infinity" => f64::INFINITY,
        "∞"        => f64::INFINITY,
        "ln10"     => LN_10,
        "ln2"      => LN_2,
        "log10e"   => LOG10_E,
        "log2e"    => LOG2_E,
        "nan"      => f64::NAN,
        "pi"       => PI,
        "π"        => PI,
        "sqrt1_2"  => std::f64::consts::FRAC_1_SQRT_2,
        "sqrt2"    => SQRT_2,
    }
    functions {
        "abs"     => |args| builtin::arg(args, 0).abs(),
        "cbrt"    => |args| builtin::arg(args, 0).cbrt(),
        "clz32"   => builtin::clz32,
        "exp"     => |args| builtin::arg(args, 0).exp(),
        "expm1"   => |args| builtin::arg(args, 0).exp_m1(),
        "fact"    => stats::fact,
        "fround"  => builtin::fround,
        "imul"    => builtin::imul,
        "irandom" => builtin::irandom,
        "log"     => |args| builtin::arg(args, 0).ln(),
        "log10"   => |args| builtin::arg(args, 0).log10(),
        "log1p"   => |args| builtin::arg(args, 0).ln_1p(),
        "log2"    => |args| builtin::arg(args, 0).log2(),
        "pow"     => builtin::pow,
        "random"  => builtin::random,
        "sqrt"    => |args| builtin::arg(args, 0).sqrt(),

        "ceil"    => |args| builtin::arg(args, 0).ceil(),
        "floor"   => |args| builtin::arg(args, 0).floor(),
        "round"   => builtin::round,
        "sign"    => builtin::sign,
        "trunc"   => |args| builtin::arg(args, 0).trunc(),

        "avg"     => stats::avg,
        "gcd"     => stats::gcd,
        "hypot"   => builtin::hypot,
        "lcm"     => stats::lcm,
        "max"     => builtin::max,
        "min"     => builtin::min,
        "prod"    => stats::prod,
        "sqsum"   => stats::sqsum,
        "stdev"   => stats::stdev,
        "sum"     => stats::sum,

        "acos"    => |args| builtin::arg(args, 0).acos(),
        "acosh"   => |args| builtin::arg(args, 0).acosh(),
        "asin"    => |args| builtin::arg(args, 0).asin(),
        "asinh"   => |args| builtin::arg(args, 0).asinh(),
        "atan"    => |args| builtin::arg(args, 0).atan(),
        "atan2"   => builtin::atan2,
        "atanh"   => |args| builtin::arg(args, 0).atanh(),
        "cos"     => |args| builtin::arg(args, 0).cos(),
        "cosh"    => |args| builtin::arg(args, 0).cosh(),
        "sin"     => |args| builtin::arg(args, 0).sin(),
        "sinh"    => |args| builtin::arg(args, 0).sinh(),
        "tan"     => |args| builtin::arg(args, 0).tan(),
        "tanh"    => |args| builtin::arg(args, 0).tanh(),
    }
}

/// The default registry: the math constants and functions listed in
/// [`BUILTIN_CONSTANTS`] and [`BUILTIN_FUNCTIONS`].
///
/// ## Example
/// ```
/// use numerate::interpreter::registry::{Builtins, Registry};
///
/// assert_eq!(Builtins.constant("pi"), Some(std::f64::consts::PI));
/// assert!(Builtins.is_function("gcd"));
/// assert!(!Builtins.is_function("PI"));
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Builtins;

impl Registry for Builtins {
    fn constant(&self, name: &str) -> Option<f64> {
        CONSTANT_TABLE.iter().find(|(n, _)| *n == name).map(|(_, value)| *value)
    }

    fn function(&self, name: &str) -> Option<NumericFn> {
        FUNCTION_TABLE.iter().find(|(n, _)| *n == name).map(|(_, function)| *function)
    }
}
