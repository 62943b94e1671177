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

//! # Invariant Formatting
//!
//! Renders numbers with `.` as the decimal point and no grouping, the
//! counterpart of `parse_invariant_double`. Every finite value formatted here
//! parses back with `parse_invariant_double`.

use crate::math::{magnitude::magnitude, rounding::round_to_significant};

/// Formats `value` with exactly `decimals` digits after the decimal point.
///
/// # Examples
///
/// ```rust
/// # use numext_core::text::format::format_fixed;
/// assert_eq!(format_fixed(3.14159, 2), "3.14");
/// assert_eq!(format_fixed(1234567.0, 1), "1234567.0");
/// assert_eq!(format_fixed(2.7, 0), "3");
/// ```
#[inline]
pub fn format_fixed(value: f64, decimals: usize) -> String {
    format!("{value:.decimals$}")
}

/// Formats `value` rounded to `digits` significant digits.
///
/// Only as many decimals as the significant digits require are rendered, so
/// `format_significant(1234.5678, 3)` yields `"1230"` and
/// `format_significant(0.012345, 3)` yields `"0.0123"`. A digit count of `0`
/// is treated as `1`.
///
/// # Examples
///
/// ```rust
/// # use numext_core::text::format::format_significant;
/// assert_eq!(format_significant(1234.5678, 3), "1230");
/// assert_eq!(format_significant(0.012345, 3), "0.0123");
/// assert_eq!(format_significant(2.0, 3), "2.00");
/// ```
pub fn format_significant(value: f64, digits: u32) -> String {
    let digits = digits.max(1);
    let rounded = round_to_significant(value, digits);
    let decimals = (digits as i64 - 1 - magnitude(rounded) as i64).max(0) as usize;
    format_fixed(rounded, decimals)
}
