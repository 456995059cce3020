/// Largest integer value exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

const TWO_POW_32: f64 = 4_294_967_296.0;

/// Raises `base` to `exponent`.
///
/// Differs from [`f64::powf`] in two cases: a NaN exponent always gives NaN,
/// and `±1` raised to an infinite exponent is NaN rather than `1`.
///
/// # Example
/// ```
/// use numerate::util::num::pow;
///
/// assert_eq!(pow(2.0, 10.0), 1024.0);
/// assert_eq!(pow(f64::NAN, 0.0), 1.0);
/// assert!(pow(1.0, f64::NAN).is_nan());
/// assert!(pow(-1.0, f64::INFINITY).is_nan());
/// ```
#[must_use]
pub fn pow(base: f64, exponent: f64) -> f64 {
    if exponent.is_nan() || (base.abs() == 1.0 && exponent.is_infinite()) {
        return f64::NAN;
    }
    base.powf(exponent)
}

/// Converts a value to a 32-bit two's-complement integer.
///
/// The value is truncated toward zero and wrapped modulo `2^32`. `NaN` and
/// infinities become `0`.
///
/// # Example
/// ```
/// use numerate::util::num::to_int32;
///
/// assert_eq!(to_int32(-1.9), -1);
/// assert_eq!(to_int32(4_294_967_297.0), 1);
/// assert_eq!(to_int32(2_147_483_648.0), i32::MIN);
/// assert_eq!(to_int32(f64::NAN), 0);
/// ```
#[allow(clippy::cast_possible_wrap)]
#[must_use]
pub fn to_int32(value: f64) -> i32 {
    to_uint32(value) as i32
}

/// Converts a value to a 32-bit unsigned integer, wrapping modulo `2^32`.
///
/// # Example
/// ```
/// use numerate::util::num::to_uint32;
///
/// assert_eq!(to_uint32(-1.0), u32::MAX);
/// assert_eq!(to_uint32(f64::INFINITY), 0);
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_sign_loss)]
#[must_use]
pub fn to_uint32(value: f64) -> u32 {
    if !value.is_finite() {
        return 0;
    }
    // rem_euclid keeps the result in [0, 2^32), which fits a u32 exactly.
    value.trunc().rem_euclid(TWO_POW_32) as u32
}
