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

//! # Tolerance Comparator
//!
//! Equality and ordering of `f64` values that allow for floating-point
//! imprecision. Two values are *equal under tolerance* when their absolute
//! difference does not exceed the tolerance; the ordering predicates are
//! derived from that test so that values within tolerance of each other are
//! never reported as strictly greater or strictly less.
//!
//! Tolerances are either absolute (supplied per call) or relative to the
//! smaller operand (`equals_with_auto_tolerance`). `Tolerance` bundles the
//! choice into a value that can be stored in configuration.
//!
//! ## Limitations
//!
//! Equality under tolerance is not transitive: `a == b` and `b == c` do not
//! imply `a == c`, and chained `compare_with_tolerance` calls with different
//! tolerances do not form a consistent total order.

use crate::num::constants::DEFAULT_PRECISION;
use std::cmp::Ordering;

/// Returns `true` if `|x - y| <= tolerance`.
///
/// # Panics
///
/// In debug builds, panics if `tolerance` is negative.
///
/// # Examples
///
/// ```rust
/// # use numext_core::num::tolerance::equals_with_tolerance;
/// assert!(equals_with_tolerance(1.0, 1.05, 0.1));
/// assert!(!equals_with_tolerance(1.0, 1.2, 0.1));
/// assert!(equals_with_tolerance(3.5, 3.5, 0.0));
/// ```
#[inline]
pub fn equals_with_tolerance(x: f64, y: f64, tolerance: f64) -> bool {
    debug_assert!(
        tolerance >= 0.0,
        "called `equals_with_tolerance` with a negative tolerance: {tolerance}"
    );
    (x - y).abs() <= tolerance
}

/// Returns `true` if `|x - y| <= |min(x, y) * precision|`.
///
/// The tolerance scales with the smaller operand, so large values need a
/// proportionally larger difference to be unequal. If the smaller operand is
/// zero the tolerance collapses to zero and only exact equality passes.
///
/// # Examples
///
/// ```rust
/// # use numext_core::num::tolerance::equals_with_auto_tolerance;
/// assert!(equals_with_auto_tolerance(1_000_000.0, 1_000_000.5, 1e-6));
/// assert!(!equals_with_auto_tolerance(1.0, 1.5, 1e-6));
/// assert!(!equals_with_auto_tolerance(0.0, 1e-300, 1e-6));
/// ```
#[inline]
pub fn equals_with_auto_tolerance(x: f64, y: f64, precision: f64) -> bool {
    (x - y).abs() <= relative_tolerance(x, y, precision)
}

/// `equals_with_auto_tolerance` with `DEFAULT_PRECISION` (`1e-6`).
#[inline]
pub fn equals_with_default_tolerance(x: f64, y: f64) -> bool {
    equals_with_auto_tolerance(x, y, DEFAULT_PRECISION)
}

#[inline(always)]
fn relative_tolerance(x: f64, y: f64, precision: f64) -> f64 {
    (x.min(y) * precision).abs()
}

/// Returns `true` if `x > y` and the two are not equal under `tolerance`.
///
/// # Examples
///
/// ```rust
/// # use numext_core::num::tolerance::greater_than;
/// assert!(greater_than(2.0, 1.0, 0.5));
/// assert!(!greater_than(1.2, 1.0, 0.5));
/// ```
#[inline]
pub fn greater_than(x: f64, y: f64, tolerance: f64) -> bool {
    x > y && !equals_with_tolerance(x, y, tolerance)
}

/// Returns `true` if `x > y` or the two are equal under `tolerance`.
#[inline]
pub fn greater_than_or_equal(x: f64, y: f64, tolerance: f64) -> bool {
    x > y || equals_with_tolerance(x, y, tolerance)
}

/// Returns `true` if `x < y` and the two are not equal under `tolerance`.
///
/// # Examples
///
/// ```rust
/// # use numext_core::num::tolerance::less_than;
/// assert!(less_than(1.0, 2.0, 0.5));
/// assert!(!less_than(1.0, 1.2, 0.5));
/// ```
#[inline]
pub fn less_than(x: f64, y: f64, tolerance: f64) -> bool {
    x < y && !equals_with_tolerance(x, y, tolerance)
}

/// Returns `true` if `x < y` or the two are equal under `tolerance`.
#[inline]
pub fn less_than_or_equal(x: f64, y: f64, tolerance: f64) -> bool {
    x < y || equals_with_tolerance(x, y, tolerance)
}

/// Three-way comparison under an absolute tolerance.
///
/// Returns `Ordering::Equal` if `x` and `y` are equal under `tolerance`,
/// otherwise `Less` if `x < y` and `Greater` in every remaining case
/// (including `NaN` operands). Cast with `as i8` to obtain `-1`, `0` or `+1`.
///
/// # Examples
///
/// ```rust
/// # use numext_core::num::tolerance::compare_with_tolerance;
/// use std::cmp::Ordering;
///
/// assert_eq!(compare_with_tolerance(1.0, 1.05, 0.1), Ordering::Equal);
/// assert_eq!(compare_with_tolerance(1.0, 2.0, 0.1) as i8, -1);
/// assert_eq!(compare_with_tolerance(3.0, 2.0, 0.1) as i8, 1);
/// ```
#[inline]
pub fn compare_with_tolerance(x: f64, y: f64, tolerance: f64) -> Ordering {
    if equals_with_tolerance(x, y, tolerance) {
        Ordering::Equal
    } else if x < y {
        Ordering::Less
    } else {
        Ordering::Greater
    }
}

/// An equality tolerance, either absolute or relative to the smaller operand.
///
/// `Tolerance` resolves to an absolute tolerance per comparison and then
/// applies the free functions of this module, so `Tolerance::Absolute(t)`
/// behaves exactly like passing `t` to them and `Tolerance::Relative(p)`
/// behaves like `equals_with_auto_tolerance(x, y, p)`.
///
/// # Examples
///
/// ```rust
/// # use numext_core::num::tolerance::Tolerance;
/// let abs = Tolerance::absolute(0.1).unwrap();
/// assert!(abs.equals(1.0, 1.05));
///
/// let rel = Tolerance::default();
/// assert!(rel.equals(1e9, 1e9 + 100.0));
/// assert!(!rel.equals(1.0, 1.01));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Tolerance {
    /// A fixed maximum absolute difference.
    Absolute(f64),
    /// A precision factor applied to the smaller operand's magnitude.
    Relative(f64),
}

impl Default for Tolerance {
    #[inline]
    fn default() -> Self {
        Self::Relative(DEFAULT_PRECISION)
    }
}

impl Tolerance {
    /// Creates an absolute tolerance.
    ///
    /// Returns `None` if `tolerance` is negative or not finite.
    #[inline]
    pub fn absolute(tolerance: f64) -> Option<Self> {
        is_valid(tolerance).then_some(Self::Absolute(tolerance))
    }

    /// Creates a tolerance relative to the smaller operand.
    ///
    /// Returns `None` if `precision` is negative or not finite.
    #[inline]
    pub fn relative(precision: f64) -> Option<Self> {
        is_valid(precision).then_some(Self::Relative(precision))
    }

    /// Returns the absolute tolerance this value resolves to for `x` and `y`.
    #[inline]
    pub fn resolve(&self, x: f64, y: f64) -> f64 {
        match *self {
            Self::Absolute(tolerance) => tolerance,
            Self::Relative(precision) => relative_tolerance(x, y, precision),
        }
    }

    /// Returns `true` if `x` and `y` are equal under this tolerance.
    #[inline]
    pub fn equals(&self, x: f64, y: f64) -> bool {
        equals_with_tolerance(x, y, self.resolve(x, y))
    }

    /// Three-way comparison under this tolerance.
    #[inline]
    pub fn compare(&self, x: f64, y: f64) -> Ordering {
        compare_with_tolerance(x, y, self.resolve(x, y))
    }

    /// Returns `true` if `x > y` and the two are not equal under this tolerance.
    #[inline]
    pub fn greater_than(&self, x: f64, y: f64) -> bool {
        greater_than(x, y, self.resolve(x, y))
    }

    /// Returns `true` if `x > y` or the two are equal under this tolerance.
    #[inline]
    pub fn greater_than_or_equal(&self, x: f64, y: f64) -> bool {
        greater_than_or_equal(x, y, self.resolve(x, y))
    }

    /// Returns `true` if `x < y` and the two are not equal under this tolerance.
    #[inline]
    pub fn less_than(&self, x: f64, y: f64) -> bool {
        less_than(x, y, self.resolve(x, y))
    }

    /// Returns `true` if `x < y` or the two are equal under this tolerance.
    #[inline]
    pub fn less_than_or_equal(&self, x: f64, y: f64) -> bool {
        less_than_or_equal(x, y, self.resolve(x, y))
    }
}

#[inline(always)]
fn is_valid(tolerance: f64) -> bool {
    tolerance.is_finite() && tolerance >= 0.0
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn test_tolerance_serializes_snake_case() {
        let json = serde_json::to_string(&Tolerance::Absolute(0.5)).unwrap();
        assert_eq!(json, r#"{"absolute":0.5}"#);
        let json = serde_json::to_string(&Tolerance::Relative(0.25)).unwrap();
        assert_eq!(json, r#"{"relative":0.25}"#);
    }

    #[test]
    fn test_tolerance_round_trips_through_json() {
        for tolerance in [Tolerance::Absolute(0.25), Tolerance::Relative(1e-9)] {
            let json = serde_json::to_string(&tolerance).unwrap();
            let back: Tolerance = serde_json::from_str(&json).unwrap();
            assert_eq!(back, tolerance);
        }
    }

    #[test]
    fn test_tolerance_rejects_unknown_variant() {
        assert!(serde_json::from_str::<Tolerance>(r#"{"Absolute":0.5}"#).is_err());
        assert!(serde_json::from_str::<Tolerance>(r#"{"ulps":4}"#).is_err());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn finite() -> impl Strategy<Value = f64> {
        -1e12_f64..1e12_f64
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn equals_is_reflexive_at_zero_tolerance(x in finite()) {
            prop_assert!(equals_with_tolerance(x, x, 0.0));
        }

        #[test]
        fn exactly_one_ordering_holds(x in finite(), y in finite(), tol in 0.0_f64..1e6) {
            let lt = less_than(x, y, tol);
            let eq = equals_with_tolerance(x, y, tol);
            let gt = greater_than(x, y, tol);
            prop_assert_eq!([lt, eq, gt].iter().filter(|&&b| b).count(), 1);
        }

        #[test]
        fn compare_agrees_with_predicates(x in finite(), y in finite(), tol in 0.0_f64..1e6) {
            let expected = if equals_with_tolerance(x, y, tol) {
                Ordering::Equal
            } else if less_than(x, y, tol) {
                Ordering::Less
            } else {
                Ordering::Greater
            };
            prop_assert_eq!(compare_with_tolerance(x, y, tol), expected);
        }

        #[test]
        fn equals_is_symmetric(x in finite(), y in finite(), tol in 0.0_f64..1e6) {
            prop_assert_eq!(equals_with_tolerance(x, y, tol), equals_with_tolerance(y, x, tol));
        }
    }
}
