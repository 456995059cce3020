//! The operands are read back in their shortest round-trip decimal form (the
//! form `f64`'s `Display` produces). Each operand becomes an integer
//! significand plus a count of fractional digits, the operation runs on the
//! significands, and the result is scaled back by a power of ten.
//!
//! The correction is exact for a single operation on decimal literals. Across
//! a chain of operations every intermediate result is still an `f64`, so
//! error can accumulate. When an operand is not finite, has too many
//! fractional digits, or its significand is beyond `2^53 - 1`, the plain
//! floating-point operation is used instead.

use crate::util::num::MAX_SAFE_INTEGER;

/// Powers of ten that are exactly representable as `f64`.
const POWERS_OF_TEN: [f64; 23] = [1e0, 1e1, 1e2, 1e3, 1e4, 1e5, 1e6, 1e7, 1e8, 1e9, 1e10, 1e11,
                                  1e12, 1e13, 1e14, 1e15, 1e16, 1e17, 1e18, 1e19, 1e20, 1e21,
                                  1e22];

/// A finite value split into `significand * 10^-scale`, with an exact
/// integer significand.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Decimal {
    significand: f64,
    scale:       usize,
}

impl Decimal {
    fn from_f64(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        let text = value.to_string();
        let (integer, fraction) = text.split_once('.').unwrap_or((&text, ""));
        if fraction.len() >= POWERS_OF_TEN.len() {
            return None;
        }
        let significand: f64 = format!("{integer}{fraction}").parse().ok()?;
        if significand.abs() > MAX_SAFE_INTEGER {
            return None;
        }
        Some(Self { significand,
                    scale: fraction.len() })
    }

    /// Re-expresses the significand with `scale` fractional digits.
    fn rescale(self, scale: usize) -> Option<f64> {
        let factor = power_of_ten(scale.checked_sub(self.scale)?)?;
        let significand = self.significand * factor;
        (significand.abs() <= MAX_SAFE_INTEGER).then_some(significand)
    }
}

fn power_of_ten(exponent: usize) -> Option<f64> {
    POWERS_OF_TEN.get(exponent).copied()
}

/// Decimal-corrected addition.
///
/// # Example
/// ```
/// use numerate::util::decimal::add;
///
/// assert_eq!(add(0.1, 0.2), 0.3);
/// assert_eq!(add(1.005, 2.0), 3.005);
/// ```
#[must_use]
pub fn add(left: f64, right: f64) -> f64 {
    scaled_sum(left, right).unwrap_or(left + right)
}

/// Decimal-corrected subtraction.
///
/// # Example
/// ```
/// use numerate::util::decimal::sub;
///
/// assert_eq!(sub(0.3, 0.1), 0.2);
/// ```
#[must_use]
pub fn sub(left: f64, right: f64) -> f64 {
    scaled_sum(left, -right).unwrap_or(left - right)
}

fn scaled_sum(left: f64, right: f64) -> Option<f64> {
    let left = Decimal::from_f64(left)?;
    let right = Decimal::from_f64(right)?;
    let scale = left.scale.max(right.scale);
    let sum = left.rescale(scale)? + right.rescale(scale)?;
    Some(sum / power_of_ten(scale)?)
}

/// Decimal-corrected multiplication.
///
/// # Example
/// ```
/// use numerate::util::decimal::mul;
///
/// assert_eq!(mul(0.1, 3.0), 0.3);
/// assert_eq!(mul(1.1, 1.1), 1.21);
/// ```
#[must_use]
pub fn mul(left: f64, right: f64) -> f64 {
    scaled_product(left, right).unwrap_or(left * right)
}

fn scaled_product(left: f64, right: f64) -> Option<f64> {
    let left = Decimal::from_f64(left)?;
    let right = Decimal::from_f64(right)?;
    let scale = power_of_ten(left.scale + right.scale)?;
    Some(left.significand * right.significand / scale)
}

/// Decimal-corrected division.
///
/// The quotient of the significands is shifted by the difference of the
/// fractional digit counts.
///
/// # Example
/// ```
/// use numerate::util::decimal::div;
///
/// assert_eq!(div(0.3, 0.1), 3.0);
/// assert_eq!(div(0.69, 0.3), 2.3);
/// assert_eq!(div(1.0, 0.0), f64::INFINITY);
/// ```
#[must_use]
pub fn div(left: f64, right: f64) -> f64 {
    scaled_quotient(left, right).unwrap_or(left / right)
}

fn scaled_quotient(left: f64, right: f64) -> Option<f64> {
    let left = Decimal::from_f64(left)?;
    let right = Decimal::from_f64(right)?;
    let quotient = left.significand / right.significand;
    if right.scale >= left.scale {
        Some(quotient * power_of_ten(right.scale - left.scale)?)
    } else {
        Some(quotient / power_of_ten(left.scale - right.scale)?)
    }
}
