use rand::Rng;

use crate::util::num::{self, to_int32, to_uint32};

/// The argument at `index`, or NaN when it is missing.
#[must_use]
pub fn arg(args: &[f64], index: usize) -> f64 {
    args.get(index).copied().unwrap_or(f64::NAN)
}

/// Rounds to the nearest integer, with halves rounded toward positive
/// infinity.
///
/// ## Example
/// ```
/// use numerate::interpreter::registry::builtin::round;
///
/// assert_eq!(round(&[2.5]), 3.0);
/// assert_eq!(round(&[-2.5]), -2.0);
/// assert_eq!(round(&[0.499_999_999_999_999_94]), 0.0);
/// ```
#[must_use]
pub fn round(args: &[f64]) -> f64 {
    let x = arg(args, 0);
    let floor = x.floor();
    if x - floor >= 0.5 { floor + 1.0 } else { floor }
}

/// `-1`, `0` or `1` by the sign of the argument. Zero and NaN are returned
/// unchanged.
#[must_use]
pub fn sign(args: &[f64]) -> f64 {
    let x = arg(args, 0);
    if x == 0.0 || x.is_nan() { x } else { x.signum() }
}

/// Number of leading zero bits in the 32-bit unsigned form of the argument.
#[must_use]
pub fn clz32(args: &[f64]) -> f64 {
    f64::from(to_uint32(arg(args, 0)).leading_zeros())
}

/// Rounds to the nearest single-precision value.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn fround(args: &[f64]) -> f64 {
    f64::from(arg(args, 0) as f32)
}

/// Wrapping 32-bit integer multiplication.
///
/// ## Example
/// ```
/// use numerate::interpreter::registry::builtin::imul;
///
/// assert_eq!(imul(&[3.0, 4.0]), 12.0);
/// assert_eq!(imul(&[4_294_967_295.0, 5.0]), -5.0);
/// ```
#[must_use]
pub fn imul(args: &[f64]) -> f64 {
    f64::from(to_int32(arg(args, 0)).wrapping_mul(to_int32(arg(args, 1))))
}

/// `base` raised to `exponent`, the same as the `**` operator.
#[must_use]
pub fn pow(args: &[f64]) -> f64 {
    num::pow(arg(args, 0), arg(args, 1))
}

/// Angle of the point `(x, y)` for arguments `(y, x)`.
#[must_use]
pub fn atan2(args: &[f64]) -> f64 {
    arg(args, 0).atan2(arg(args, 1))
}

/// Square root of the sum of squares. Any infinite argument makes the result
/// infinite, even alongside NaN.
#[must_use]
pub fn hypot(args: &[f64]) -> f64 {
    args.iter().fold(0.0, |acc, &x| acc.hypot(x))
}

/// The largest argument. NaN if any argument is NaN, negative infinity when
/// there are none.
#[must_use]
pub fn max(args: &[f64]) -> f64 {
    if args.iter().any(|x| x.is_nan()) {
        return f64::NAN;
    }
    args.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}

/// The smallest argument. NaN if any argument is NaN, positive infinity when
/// there are none.
#[must_use]
pub fn min(args: &[f64]) -> f64 {
    if args.iter().any(|x| x.is_nan()) {
        return f64::NAN;
    }
    args.iter().copied().fold(f64::INFINITY, f64::min)
}

/// A uniformly distributed number in `[0, 1)`.
#[must_use]
pub fn random(_args: &[f64]) -> f64 {
    rand::random::<f64>()
}

/// A uniformly distributed integer between the two arguments, inclusive.
///
/// Both bounds are floored first, so `irandom(1.5, 3.5)` is one of `1`, `2`
/// or `3`. NaN when either bound is not finite.
#[must_use]
pub fn irandom(args: &[f64]) -> f64 {
    let (a, b) = (arg(args, 0), arg(args, 1));
    if !a.is_finite() || !b.is_finite() {
        return f64::NAN;
    }
    let low = a.min(b).floor();
    let high = a.max(b).floor();
    let offset = (rand::rng().random::<f64>() * (high - low + 1.0)).floor();
    low + offset.min(high - low)
}
