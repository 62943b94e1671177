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

//! # Range Specifications
//!
//! A textual interval notation with independently inclusive, exclusive or
//! unbounded ends, evaluated under an absolute tolerance.
//!
//! ## Grammar
//!
//! ```raw
//! range := ws ( '[' | '(' ) ws [number] ws ',' ws [number] ws ( ']' | ')' ) ws
//! ```
//!
//! `[` and `]` mark inclusive bounds, `(` and `)` exclusive ones, and an
//! empty side is unbounded. Numbers use the invariant convention (see
//! `text::parse`), since `,` is reserved as the bound separator.
//!
//! | spec      | meaning          |
//! |-----------|------------------|
//! | `[0,10)`  | `0 <= x < 10`    |
//! | `(30,)`   | `x > 30`         |
//! | `[,5]`    | `x <= 5`         |
//! | `(,)`     | every number     |

use crate::{
    error::{FormatError, RangeSyntaxError},
    num::tolerance::{
        Tolerance, greater_than, greater_than_or_equal, less_than, less_than_or_equal,
    },
    text::parse::parse_invariant_double,
};
use std::{
    fmt::{self, Display},
    ops::{Bound, RangeBounds},
    str::FromStr,
};

/// An interval of `f64` values with optional inclusive or exclusive bounds.
///
/// Membership is tested under a tolerance: an inclusive bound admits values
/// within tolerance of it, and an exclusive bound rejects them.
///
/// A lower bound above the upper bound is allowed and simply contains no
/// number.
///
/// # Examples
///
/// ```rust
/// # use numext_core::math::range::ToleranceRange;
/// let range: ToleranceRange = "[0,10)".parse().unwrap();
/// assert!(range.contains(0.0, 0.0));
/// assert!(range.contains(9.99, 0.0));
/// assert!(!range.contains(10.0, 0.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToleranceRange {
    lower: Bound<f64>,
    upper: Bound<f64>,
}

impl Default for ToleranceRange {
    /// The range containing every number, `(,)`.
    #[inline]
    fn default() -> Self {
        Self::unbounded()
    }
}

impl ToleranceRange {
    /// Creates a range from its two bounds.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use numext_core::math::range::ToleranceRange;
    /// use std::ops::Bound;
    ///
    /// let range = ToleranceRange::new(Bound::Excluded(30.0), Bound::Unbounded);
    /// assert_eq!(range.to_string(), "(30,)");
    /// ```
    #[inline]
    pub const fn new(lower: Bound<f64>, upper: Bound<f64>) -> Self {
        Self { lower, upper }
    }

    /// Creates the range containing every number.
    #[inline]
    pub const fn unbounded() -> Self {
        Self::new(Bound::Unbounded, Bound::Unbounded)
    }

    /// Creates the closed range `[lower, upper]`.
    #[inline]
    pub const fn closed(lower: f64, upper: f64) -> Self {
        Self::new(Bound::Included(lower), Bound::Included(upper))
    }

    /// Creates the half-open range `[lower, upper)`.
    #[inline]
    pub const fn closed_open(lower: f64, upper: f64) -> Self {
        Self::new(Bound::Included(lower), Bound::Excluded(upper))
    }

    /// Returns the lower bound.
    #[inline]
    pub const fn lower(&self) -> Bound<f64> {
        self.lower
    }

    /// Returns the upper bound.
    #[inline]
    pub const fn upper(&self) -> Bound<f64> {
        self.upper
    }

    /// Returns `true` if neither side is bounded.
    #[inline]
    pub fn is_unbounded(&self) -> bool {
        matches!(self.lower, Bound::Unbounded) && matches!(self.upper, Bound::Unbounded)
    }

    /// Returns `true` if `number` lies in the range under an absolute `tolerance`.
    ///
    /// An inclusive lower bound uses `greater_than_or_equal`, an exclusive one
    /// `greater_than`; the upper bound uses `less_than_or_equal` or
    /// `less_than`. Both checks must hold.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use numext_core::math::range::ToleranceRange;
    /// let range = ToleranceRange::closed_open(0.0, 10.0);
    /// // 9.95 is within 0.1 of the exclusive end, so it is rejected...
    /// assert!(!range.contains(9.95, 0.1));
    /// // ...while -0.05 is within 0.1 of the inclusive start and accepted.
    /// assert!(range.contains(-0.05, 0.1));
    /// ```
    #[inline]
    pub fn contains(&self, number: f64, tolerance: f64) -> bool {
        let above = match self.lower {
            Bound::Included(lower) => greater_than_or_equal(number, lower, tolerance),
            Bound::Excluded(lower) => greater_than(number, lower, tolerance),
            Bound::Unbounded => true,
        };
        let below = match self.upper {
            Bound::Included(upper) => less_than_or_equal(number, upper, tolerance),
            Bound::Excluded(upper) => less_than(number, upper, tolerance),
            Bound::Unbounded => true,
        };
        above && below
    }

    /// Returns `true` if `number` lies in the range under `tolerance`.
    ///
    /// Each bound resolves the tolerance against `number` separately, so a
    /// relative tolerance scales with the bound it is compared to.
    #[inline]
    pub fn contains_with(&self, number: f64, tolerance: &Tolerance) -> bool {
        let above = match self.lower {
            Bound::Included(lower) => tolerance.greater_than_or_equal(number, lower),
            Bound::Excluded(lower) => tolerance.greater_than(number, lower),
            Bound::Unbounded => true,
        };
        let below = match self.upper {
            Bound::Included(upper) => tolerance.less_than_or_equal(number, upper),
            Bound::Excluded(upper) => tolerance.less_than(number, upper),
            Bound::Unbounded => true,
        };
        above && below
    }
}

/// Parses `spec` and tests whether `number` lies in it under `tolerance`.
///
/// # Errors
///
/// Returns `FormatError::MalformedRange` if the brackets or the separator are
/// wrong, and `FormatError::InvalidBound` if a bound is not a number.
///
/// # Examples
///
/// ```rust
/// # use numext_core::math::range::is_in_range;
/// assert!(is_in_range(5.0, 0.0, "[0,10)").unwrap());
/// assert!(!is_in_range(10.0, 0.0, "[0,10)").unwrap());
/// assert!(is_in_range(10.0, 0.0, "[0,10]").unwrap());
/// assert!(is_in_range(31.0, 0.0, "(30,)").unwrap());
/// assert!(!is_in_range(30.0, 0.0, "(30,)").unwrap());
/// assert!(is_in_range(0.0, 0.0, "[0;10]").is_err());
/// ```
pub fn is_in_range(number: f64, tolerance: f64, spec: &str) -> Result<bool, FormatError> {
    let range: ToleranceRange = spec.parse()?;
    Ok(range.contains(number, tolerance))
}

fn malformed(text: &str, reason: RangeSyntaxError) -> FormatError {
    log::debug!("rejected range '{text}': {reason}");
    FormatError::MalformedRange {
        text: text.to_owned(),
        reason,
    }
}

fn parse_bound(spec: &str, bound: &str, inclusive: bool) -> Result<Bound<f64>, FormatError> {
    let bound = bound.trim_ascii();
    if bound.is_empty() {
        return Ok(Bound::Unbounded);
    }

    let value = parse_invariant_double(bound).map_err(|source| {
        log::debug!("rejected range '{spec}': {source}");
        FormatError::InvalidBound {
            text: spec.to_owned(),
            source,
        }
    })?;

    Ok(if inclusive {
        Bound::Included(value)
    } else {
        Bound::Excluded(value)
    })
}

impl FromStr for ToleranceRange {
    type Err = FormatError;

    fn from_str(spec: &str) -> Result<Self, Self::Err> {
        let trimmed = spec.trim_ascii();
        if trimmed.is_empty() {
            return Err(malformed(spec, RangeSyntaxError::Empty));
        }

        let (lower_inclusive, rest) = if let Some(rest) = trimmed.strip_prefix('[') {
            (true, rest)
        } else if let Some(rest) = trimmed.strip_prefix('(') {
            (false, rest)
        } else {
            return Err(malformed(spec, RangeSyntaxError::MissingOpenBracket));
        };

        let (upper_inclusive, body) = if let Some(body) = rest.strip_suffix(']') {
            (true, body)
        } else if let Some(body) = rest.strip_suffix(')') {
            (false, body)
        } else {
            return Err(malformed(spec, RangeSyntaxError::MissingCloseBracket));
        };

        let mut parts = body.split(',');
        let lower_text = parts.next().unwrap_or_default();
        let Some(upper_text) = parts.next() else {
            return Err(malformed(spec, RangeSyntaxError::MissingSeparator));
        };
        if parts.next().is_some() {
            return Err(malformed(spec, RangeSyntaxError::TooManySeparators));
        }

        Ok(Self {
            lower: parse_bound(spec, lower_text, lower_inclusive)?,
            upper: parse_bound(spec, upper_text, upper_inclusive)?,
        })
    }
}

impl Display for ToleranceRange {
    /// Writes the canonical specification, e.g. `[0,10)`.
    ///
    /// Unbounded sides are written as an empty bound with an exclusive
    /// bracket. Finite bounds round-trip through `FromStr`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.lower {
            Bound::Included(lower) => write!(f, "[{lower}")?,
            Bound::Excluded(lower) => write!(f, "({lower}")?,
            Bound::Unbounded => f.write_str("(")?,
        }
        f.write_str(",")?;
        match self.upper {
            Bound::Included(upper) => write!(f, "{upper}]"),
            Bound::Excluded(upper) => write!(f, "{upper})"),
            Bound::Unbounded => f.write_str(")"),
        }
    }
}

impl RangeBounds<f64> for ToleranceRange {
    fn start_bound(&self) -> Bound<&f64> {
        self.lower.as_ref()
    }

    fn end_bound(&self) -> Bound<&f64> {
        self.upper.as_ref()
    }
}

impl From<std::ops::Range<f64>> for ToleranceRange {
    #[inline]
    fn from(range: std::ops::Range<f64>) -> Self {
        Self::closed_open(range.start, range.end)
    }
}

impl From<std::ops::RangeInclusive<f64>> for ToleranceRange {
    #[inline]
    fn from(range: std::ops::RangeInclusive<f64>) -> Self {
        let (start, end) = range.into_inner();
        Self::closed(start, end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(spec: &str) -> ToleranceRange {
        spec.parse().unwrap()
    }

    fn reason(spec: &str) -> RangeSyntaxError {
        match spec.parse::<ToleranceRange>() {
            Err(FormatError::MalformedRange { reason, .. }) => reason,
            other => panic!("expected a malformed range for {spec:?}, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_bounds() {
        let r = parse("[0,10)");
        assert_eq!(r.lower(), Bound::Included(0.0));
        assert_eq!(r.upper(), Bound::Excluded(10.0));

        let r = parse("(30,)");
        assert_eq!(r.lower(), Bound::Excluded(30.0));
        assert_eq!(r.upper(), Bound::Unbounded);

        let r = parse("[,5.5]");
        assert_eq!(r.lower(), Bound::Unbounded);
        assert_eq!(r.upper(), Bound::Included(5.5));
    }

    #[test]
    fn test_parse_tolerates_whitespace() {
        let r = parse("  [ -1.5 , 2e1 ]  ");
        assert_eq!(r, ToleranceRange::closed(-1.5, 20.0));
    }

    #[test]
    fn test_parse_fully_unbounded() {
        assert!(parse("(,)").is_unbounded());
        assert!(parse("[,]").is_unbounded());
        assert!(parse("[ , ]").is_unbounded());
    }

    #[test]
    fn test_parse_malformed_structure() {
        assert_eq!(reason(""), RangeSyntaxError::Empty);
        assert_eq!(reason("   "), RangeSyntaxError::Empty);
        assert_eq!(reason("0,10]"), RangeSyntaxError::MissingOpenBracket);
        assert_eq!(reason("{0,10}"), RangeSyntaxError::MissingOpenBracket);
        assert_eq!(reason("[0,10"), RangeSyntaxError::MissingCloseBracket);
        assert_eq!(reason("["), RangeSyntaxError::MissingCloseBracket);
        assert_eq!(reason("[0;10]"), RangeSyntaxError::MissingSeparator);
        assert_eq!(reason("[]"), RangeSyntaxError::MissingSeparator);
        assert_eq!(reason("[0,5,10]"), RangeSyntaxError::TooManySeparators);
        assert_eq!(reason("[0,5,]"), RangeSyntaxError::TooManySeparators);
    }

    #[test]
    fn test_parse_invalid_bound() {
        match "[a,10]".parse::<ToleranceRange>() {
            Err(FormatError::InvalidBound { text, source }) => {
                assert_eq!(text, "[a,10]");
                assert_eq!(source.text, "a");
            }
            other => panic!("unexpected result: {other:?}"),
        }
        assert!(matches!(
            "[0,inf)".parse::<ToleranceRange>(),
            Err(FormatError::InvalidBound { .. })
        ));
    }

    #[test]
    fn test_contains_without_tolerance() {
        let r = parse("[0,10)");
        assert!(r.contains(0.0, 0.0));
        assert!(r.contains(5.0, 0.0));
        assert!(!r.contains(10.0, 0.0));
        assert!(!r.contains(-0.001, 0.0));

        let r = parse("[0,10]");
        assert!(r.contains(10.0, 0.0));

        let r = parse("(30,)");
        assert!(r.contains(31.0, 0.0));
        assert!(!r.contains(30.0, 0.0));
        assert!(r.contains(1e300, 0.0));
    }

    #[test]
    fn test_contains_with_tolerance() {
        let r = parse("(0,10]");
        // Within tolerance of the exclusive lower bound: rejected.
        assert!(!r.contains(0.05, 0.1));
        assert!(r.contains(0.2, 0.1));
        // Within tolerance above the inclusive upper bound: accepted.
        assert!(r.contains(10.05, 0.1));
        assert!(!r.contains(10.2, 0.1));
    }

    #[test]
    fn test_unbounded_contains_everything() {
        let r = ToleranceRange::unbounded();
        assert!(r.contains(f64::MIN, 0.0));
        assert!(r.contains(f64::MAX, 0.0));
        assert!(r.contains(f64::NAN, 0.0));
        assert_eq!(ToleranceRange::default(), r);
    }

    #[test]
    fn test_inverted_range_is_empty() {
        let r = parse("[10,0]");
        for x in [-5.0, 0.0, 5.0, 10.0, 15.0] {
            assert!(!r.contains(x, 0.0));
        }
    }

    #[test]
    fn test_contains_with_tolerance_config() {
        let r = parse("[100,200)");
        let rel = Tolerance::Relative(0.01);
        // 99.5 is within 1% of 100.
        assert!(rel.greater_than_or_equal(99.5, 100.0));
        assert!(r.contains_with(99.5, &rel));
        // 199 is within 1% of 200, so the exclusive end rejects it.
        assert!(!r.contains_with(199.0, &rel));
        assert!(r.contains_with(150.0, &Tolerance::Absolute(0.0)));
    }

    #[test]
    fn test_is_in_range() {
        assert!(is_in_range(5.0, 0.0, "[0,10)").unwrap());
        assert!(!is_in_range(10.0, 0.0, "[0,10)").unwrap());
        assert!(is_in_range(10.0, 0.0, "[0,10]").unwrap());
        assert!(is_in_range(31.0, 0.0, "(30,)").unwrap());
        assert!(!is_in_range(30.0, 0.0, "(30,)").unwrap());
        assert!(is_in_range(-1e9, 0.0, "(,)").unwrap());
        assert!(is_in_range(1.0, 0.0, "(1,2").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(parse("[0,10)").to_string(), "[0,10)");
        assert_eq!(parse("( 30 , )").to_string(), "(30,)");
        assert_eq!(parse("[,]").to_string(), "(,)");
        assert_eq!(ToleranceRange::closed(-0.5, 1e-7).to_string(), "[-0.5,0.0000001]");
    }

    #[test]
    fn test_display_round_trips() {
        for spec in ["[0,10)", "(-2.5,3.75]", "(,100]", "[1e-7,)"] {
            let range = parse(spec);
            assert_eq!(parse(&range.to_string()), range, "{spec}");
        }
    }

    #[test]
    fn test_range_bounds_and_conversions() {
        let r = ToleranceRange::from(1.0..2.0);
        assert_eq!(r.start_bound(), Bound::Included(&1.0));
        assert_eq!(r.end_bound(), Bound::Excluded(&2.0));

        let r = ToleranceRange::from(1.0..=2.0);
        assert_eq!(r, ToleranceRange::closed(1.0, 2.0));
        assert!(RangeBounds::contains(&r, &2.0));
    }
}
