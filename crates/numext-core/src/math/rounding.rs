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

//! # Rounding & Angle Conversion
//!
//! Rounding to the nearest multiple of a step, rounding to a number of
//! significant digits, and degree/radian conversion.
//!
//! Degenerate steps are no-ops rather than errors: a multiple whose absolute
//! value is below `SMALLEST_POSITIVE` leaves the value untouched, and an
//! absent multiple means no rounding was requested.

use crate::{math::magnitude::magnitude, num::constants::SMALLEST_POSITIVE};
use std::f64::consts::PI;

/// Number of significant decimal digits that round-trip every `f64`.
const MAX_SIGNIFICANT_DIGITS: u32 = 17;

/// Rounds `value` to the nearest integer multiple of `multiple`.
///
/// Computed as `round(value / multiple) * multiple`, with ties going to the
/// even multiple. If `|multiple|` is below `SMALLEST_POSITIVE` the value is
/// returned unchanged.
///
/// # Examples
///
/// ```rust
/// # use numext_core::math::rounding::round_to_multiple;
/// assert_eq!(round_to_multiple(7.3, 0.5), 7.5);
/// assert_eq!(round_to_multiple(-12.0, 5.0), -10.0);
/// assert_eq!(round_to_multiple(7.3, 0.0), 7.3);
/// ```
#[inline]
pub fn round_to_multiple(value: f64, multiple: f64) -> f64 {
    if multiple.abs() < SMALLEST_POSITIVE {
        return value;
    }
    (value / multiple).round_ties_even().trunc() * multiple
}

/// `round_to_multiple` over optional inputs.
///
/// An absent value yields `None`; an absent multiple returns the value
/// unchanged.
///
/// # Examples
///
/// ```rust
/// # use numext_core::math::rounding::round_to_multiple_opt;
/// assert_eq!(round_to_multiple_opt(Some(7.3), Some(0.5)), Some(7.5));
/// assert_eq!(round_to_multiple_opt(Some(7.3), None), Some(7.3));
/// assert_eq!(round_to_multiple_opt(None, Some(0.5)), None);
/// ```
#[inline]
pub fn round_to_multiple_opt(value: Option<f64>, multiple: Option<f64>) -> Option<f64> {
    let value = value?;
    Some(match multiple {
        Some(multiple) => round_to_multiple(value, multiple),
        None => value,
    })
}

/// Rounds `value` to `digits` significant digits.
///
/// Zero and non-finite values are returned unchanged. A digit count of `0`
/// is treated as `1`, and 17 or more digits leave the value unchanged.
/// Subnormal values round like any other; a value that would round past
/// `f64::MAX` is returned unchanged.
///
/// # Examples
///
/// ```rust
/// # use numext_core::math::rounding::round_to_significant;
/// assert_eq!(round_to_significant(1234.5678, 3), 1230.0);
/// assert_eq!(round_to_significant(-0.0012345, 2), -0.0012);
/// ```
pub fn round_to_significant(value: f64, digits: u32) -> f64 {
    if value == 0.0 || !value.is_finite() {
        return value;
    }

    // Seventeen significant digits identify every `f64` exactly.
    if digits >= MAX_SIGNIFICANT_DIGITS {
        return value;
    }

    let digits = digits.max(1) as i32;
    let scale = digits - 1 - magnitude(value);

    // Only ever scale by exact powers of ten, never by their reciprocals.
    let rounded = if scale > 300 {
        // 10^scale overflows near the subnormal range; apply it in halves.
        let half = scale / 2;
        let (low, high) = (10f64.powi(half), 10f64.powi(scale - half));
        (value * low * high).round() / high / low
    } else if scale >= 0 {
        let factor = 10f64.powi(scale);
        (value * factor).round() / factor
    } else {
        let factor = 10f64.powi(-scale);
        (value / factor).round() * factor
    };

    // Rounding up next to `f64::MAX` leaves the finite range.
    if rounded.is_finite() { rounded } else { value }
}

/// Converts an angle from radians to degrees, `radians / π * 180`.
///
/// # Examples
///
/// ```rust
/// # use numext_core::math::rounding::to_degrees;
/// assert_eq!(to_degrees(std::f64::consts::PI), 180.0);
/// ```
#[inline]
pub fn to_degrees(radians: f64) -> f64 {
    radians / PI * 180.0
}

/// Converts an angle from degrees to radians, `degrees / 180 * π`.
///
/// # Examples
///
/// ```rust
/// # use numext_core::math::rounding::to_radians;
/// assert_eq!(to_radians(180.0), std::f64::consts::PI);
/// ```
#[inline]
pub fn to_radians(degrees: f64) -> f64 {
    degrees / 180.0 * PI
}
