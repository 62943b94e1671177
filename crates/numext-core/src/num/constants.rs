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

//! # Float Sentinels
//!
//! Associated-constant traits for the floating-point sentinels the
//! tolerance and rounding code guards against, implemented for `f32` and
//! `f64` so generic code can name them without per-type branches.

/// The default relative precision used by auto-tolerance comparisons.
pub const DEFAULT_PRECISION: f64 = 1e-6;

/// The smallest positive `f64` (the smallest subnormal, about `4.9e-324`).
///
/// Magnitudes below this value are indistinguishable from zero, so
/// rounding and magnitude extraction treat them as degenerate.
pub const SMALLEST_POSITIVE: f64 = <f64 as SmallestPositive>::SMALLEST_POSITIVE;

/// A trait for float types that have a constant representing -1.
pub trait MinusOne {
    /// The constant representing -1 for the implementing type.
    const MINUS_ONE: Self;
}

/// A trait for float types that have a constant representing +1.
pub trait PlusOne {
    /// The constant representing +1 for the implementing type.
    const PLUS_ONE: Self;
}

/// A trait for float types that expose their smallest positive value.
///
/// Unlike `f64::MIN_POSITIVE`, which is the smallest *normal* value, this is
/// the smallest subnormal, i.e. the bit pattern `1`.
pub trait SmallestPositive {
    /// The smallest strictly positive value representable by the type.
    const SMALLEST_POSITIVE: Self;
}

macro_rules! impl_const_for {
    ($trait_name:ident, $const_name:ident, $value:expr, $t:ty) => {
        impl $trait_name for $t {
            const $const_name: Self = $value;
        }
    };
}

impl_const_for!(MinusOne, MINUS_ONE, -1.0, f32);
impl_const_for!(MinusOne, MINUS_ONE, -1.0, f64);

impl_const_for!(PlusOne, PLUS_ONE, 1.0, f32);
impl_const_for!(PlusOne, PLUS_ONE, 1.0, f64);

impl_const_for!(SmallestPositive, SMALLEST_POSITIVE, f32::from_bits(1), f32);
impl_const_for!(SmallestPositive, SMALLEST_POSITIVE, f64::from_bits(1), f64);
