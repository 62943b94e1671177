// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Magnitude & Precision Difference
//!
//! `magnitude` extracts the base-10 order of magnitude of a value, and
//! `precision_difference` turns two values into a scalar that tells how many
//! leading significant digits they share: a result near `10^-k` means the
//! values agree to about `k` significant digits, while a result of `10` or
//! more means they differ in order of magnitude.
//!
//! `precision_difference` is not a metric. It is asymmetric for values that
//! straddle a power of ten and does not satisfy the triangle inequality.

use crate::num::constants::SMALLEST_POSITIVE;

/// Returns the base-10 order of magnitude of `value`, `floor(log10(|value|))`.
///
/// Values whose absolute value is below `SMALLEST_POSITIVE` (i.e. zero) have
/// magnitude `0`. `NaN` also yields `0`, infinities saturate to `i32::MAX`.
///
/// # Examples
///
/// ```rust
/// # use numext_core::math::magnitude::magnitude;
/// assert_eq!(magnitude(1234.5), 3);
/// assert_eq!(magnitude(-0.05), -2);
/// assert_eq!(magnitude(1.0), 0);
/// assert_eq!(magnitude(0.0), 0);
/// ```
#[inline]
pub fn magnitude(value: f64) -> i32 {
    let abs = value.abs();
    if abs < SMALLEST_POSITIVE {
        return 0;
    }
    abs.log10().floor() as i32
}

/// Multiplies `value` by `10^exponent`.
///
/// `10^exponent` alone overflows past `10^308`, so exponents beyond 300 are
/// applied in two finite halves.
#[inline]
pub(crate) fn scale_by_power_of_ten(value: f64, exponent: i32) -> f64 {
    if exponent.unsigned_abs() <= 300 {
        return value * 10f64.powi(exponent);
    }
    let half = exponent / 2;
    value * 10f64.powi(half) * 10f64.powi(exponent - half)
}

/// Scales `value` into the `[1, 10)` band by its own magnitude.
#[inline(always)]
fn normalize(value: f64, magnitude: i32) -> f64 {
    scale_by_power_of_ten(value, magnitude.saturating_neg())
}

/// Measures how closely `a` and `b` agree in their significant digits.
///
/// Both operands are normalized by their own magnitude, and the result is the
/// absolute difference of the normalized values plus a penalty of
/// `10^|magnitude(a) - magnitude(b)|` when the magnitudes differ.
///
/// Subnormal operands are handled like any other finite value. Two equal
/// infinities give `0`; an infinity against any other value gives
/// `f64::INFINITY`. A `NaN` operand otherwise propagates.
///
/// # Examples
///
/// ```rust
/// # use numext_core::math::magnitude::precision_difference;
/// assert_eq!(precision_difference(3.0, 3.0), 0.0);
///
/// // 1234 vs 1235 agree on the first three digits.
/// let d = precision_difference(1234.0, 1235.0);
/// assert!((d - 0.001).abs() < 1e-12);
///
/// // Different orders of magnitude dominate the result.
/// assert!(precision_difference(5.0, 500.0) >= 100.0);
/// ```
pub fn precision_difference(a: f64, b: f64) -> f64 {
    if a.is_infinite() || b.is_infinite() {
        return if a == b { 0.0 } else { f64::INFINITY };
    }

    let magnitude_a = magnitude(a);
    let magnitude_b = magnitude(b);

    let normalized_a = normalize(a, magnitude_a);
    let normalized_b = normalize(b, magnitude_b);

    let penalty = if magnitude_a == magnitude_b {
        0.0
    } else {
        let distance = magnitude_a.abs_diff(magnitude_b).min(i32::MAX as u32);
        10f64.powi(distance as i32)
    };

    (normalized_a - normalized_b).abs() + penalty
}
