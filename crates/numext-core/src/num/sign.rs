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

//! # Two-Valued Sign
//!
//! `sign` maps every non-negative input (zero included) to `+1.0` and every
//! negative input to `-1.0`. It never returns `0.0`, which distinguishes it
//! from `f64::signum` on integers and from three-valued sign functions.

use crate::num::constants::{MinusOne, PlusOne};
use num_traits::Zero;

/// Types with a two-valued sign.
///
/// Implemented for all primitive integers and floats.
///
/// # Examples
///
/// ```rust
/// # use numext_core::num::sign::Sign;
/// assert_eq!(0_i32.sign(), 1.0);
/// assert_eq!((-3_i64).sign(), -1.0);
/// assert_eq!((-0.0001_f64).sign(), -1.0);
/// ```
pub trait Sign: Copy {
    /// Returns `+1.0` if `self >= 0`, else `-1.0`.
    fn sign(self) -> f64;
}

macro_rules! impl_sign_for {
    ($($t:ty),* $(,)?) => {
        $(
            impl Sign for $t {
                #[inline(always)]
                fn sign(self) -> f64 {
                    if self >= <$t as Zero>::zero() {
                        <f64 as PlusOne>::PLUS_ONE
                    } else {
                        <f64 as MinusOne>::MINUS_ONE
                    }
                }
            }
        )*
    };
}

impl_sign_for!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64
);

/// Returns the two-valued sign of `n`: `+1.0` for `n >= 0`, else `-1.0`.
///
/// `NaN` compares false against zero and therefore maps to `-1.0`.
///
/// # Examples
///
/// ```rust
/// # use numext_core::num::sign::sign;
/// assert_eq!(sign(0.0), 1.0);
/// assert_eq!(sign(-0.0001), -1.0);
/// assert_eq!(sign(42_u8), 1.0);
/// ```
#[inline]
pub fn sign<T>(n: T) -> f64
where
    T: Sign,
{
    n.sign()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_is_positive() {
        assert_eq!(sign(0_i32), 1.0);
        assert_eq!(sign(0.0_f64), 1.0);
        assert_eq!(sign(0_u64), 1.0);
    }

    #[test]
    fn test_negative_zero_is_positive() {
        // -0.0 >= 0.0 under IEEE 754
        assert_eq!(sign(-0.0_f64), 1.0);
        assert_eq!(sign(-0.0_f32), 1.0);
    }

    #[test]
    fn test_negative_values() {
        assert_eq!(sign(-0.0001_f64), -1.0);
        assert_eq!(sign(-1_i8), -1.0);
        assert_eq!(sign(i128::MIN), -1.0);
        assert_eq!(sign(f64::NEG_INFINITY), -1.0);
    }

    #[test]
    fn test_positive_values() {
        assert_eq!(sign(7_isize), 1.0);
        assert_eq!(sign(u128::MAX), 1.0);
        assert_eq!(sign(f64::INFINITY), 1.0);
        assert_eq!(sign(1e-300_f64), 1.0);
    }

    #[test]
    fn test_nan_is_negative() {
        assert_eq!(sign(f64::NAN), -1.0);
    }
}
