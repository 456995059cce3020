use crate::util::decimal;

/// Sum of the arguments, with the decimal correction applied at each step.
///
/// ## Example
/// ```
/// use numerate::interpreter::registry::stats::sum;
///
/// assert_eq!(sum(&[0.1, 0.2, 0.3]), 0.6);
/// assert_eq!(sum(&[]), 0.0);
/// ```
#[must_use]
pub fn sum(args: &[f64]) -> f64 {
    args.iter().copied().fold(0.0, decimal::add)
}

/// Sum of the squared arguments.
#[must_use]
pub fn sqsum(args: &[f64]) -> f64 {
    args.iter().map(|x| decimal::mul(*x, *x)).fold(0.0, decimal::add)
}

/// Product of the arguments, with the decimal correction applied at each
/// step.
#[must_use]
pub fn prod(args: &[f64]) -> f64 {
    args.iter().copied().fold(1.0, decimal::mul)
}

/// Arithmetic mean.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn avg(args: &[f64]) -> f64 {
    decimal::div(sum(args), args.len() as f64)
}

/// Population standard deviation.
///
/// ## Example
/// ```
/// use numerate::interpreter::registry::stats::stdev;
///
/// assert_eq!(stdev(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]), 2.0);
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn stdev(args: &[f64]) -> f64 {
    let n = args.len() as f64;
    let mean = avg(args);
    (sqsum(args) / n - mean * mean).sqrt()
}

/// Factorial of a positive integer; `0! = 1`.
///
/// NaN for negative or fractional arguments. Infinite from `171` upward,
/// where the result no longer fits in a double.
///
/// ## Example
/// ```
/// use numerate::interpreter::registry::stats::fact;
///
/// assert_eq!(fact(&[5.0]), 120.0);
/// assert_eq!(fact(&[0.0]), 1.0);
/// assert!(fact(&[2.5]).is_nan());
/// assert_eq!(fact(&[171.0]), f64::INFINITY);
/// ```
#[must_use]
pub fn fact(args: &[f64]) -> f64 {
    let n = args.first().copied().unwrap_or(f64::NAN);
    if n.is_nan() || n < 0.0 || n.fract() != 0.0 {
        return f64::NAN;
    }
    if n >= 171.0 {
        return f64::INFINITY;
    }

    let mut product = 1.0;
    let mut k = 2.0;
    while k <= n {
        product *= k;
        k += 1.0;
    }
    product
}

/// Greatest common divisor of the floored absolute values.
///
/// ## Example
/// ```
/// use numerate::interpreter::registry::stats::gcd;
///
/// assert_eq!(gcd(&[12.0, 18.0]), 6.0);
/// assert_eq!(gcd(&[-12.5, 18.0, 8.0]), 2.0);
/// assert!(gcd(&[f64::NAN, 4.0]).is_nan());
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn gcd(args: &[f64]) -> f64 {
    match whole_numbers(args) {
        Some(values) => values.into_iter().fold(0, gcd2) as f64,
        None => f64::NAN,
    }
}

/// Least common multiple of the floored absolute values. Infinite when the
/// result overflows 128 bits.
///
/// ## Example
/// ```
/// use numerate::interpreter::registry::stats::lcm;
///
/// assert_eq!(lcm(&[4.0, 6.0]), 12.0);
/// assert_eq!(lcm(&[3.0, 0.0]), 0.0);
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn lcm(args: &[f64]) -> f64 {
    let Some(values) = whole_numbers(args) else {
        return f64::NAN;
    };
    let mut iter = values.into_iter();
    let Some(first) = iter.next() else {
        return f64::NAN;
    };
    iter.try_fold(first, lcm2).map_or(f64::INFINITY, |value| value as f64)
}

/// Floored absolute values as integers, or `None` if any argument is not
/// finite or there are no arguments.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn whole_numbers(args: &[f64]) -> Option<Vec<u128>> {
    if args.is_empty() {
        return None;
    }
    args.iter()
        .map(|x| x.is_finite().then(|| x.abs().floor() as u128))
        .collect()
}

const fn gcd2(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

fn lcm2(a: u128, b: u128) -> Option<u128> {
    if a == 0 || b == 0 {
        return Some(0);
    }
    (a / gcd2(a, b)).checked_mul(b)
}
