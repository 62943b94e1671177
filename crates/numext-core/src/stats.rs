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

//! # Aggregates
//!
//! `mean` consumes any sequence of `f64` in a single forward pass, so it
//! works on slices, vectors and lazy iterators alike.

use std::borrow::Borrow;

/// Computes the arithmetic mean of `values` in one pass.
///
/// An empty sequence yields `NaN` (`0.0 / 0.0`); callers that need a
/// different answer must check for emptiness themselves.
///
/// # Complexity
/// Time: O(n), Space: O(1)
///
/// # Examples
///
/// ```rust
/// # use numext_core::stats::mean;
/// assert_eq!(mean([1.0, 2.0, 3.0]), 2.0);
/// assert_eq!(mean(&vec![4.0, 8.0]), 6.0);
/// assert_eq!(mean((1..=4).map(f64::from)), 2.5);
/// assert!(mean(Vec::<f64>::new()).is_nan());
/// ```
pub fn mean<I>(values: I) -> f64
where
    I: IntoIterator,
    I::Item: Borrow<f64>,
{
    let (sum, count) = values
        .into_iter()
        .fold((0.0_f64, 0_u64), |(sum, count), value| {
            (sum + *value.borrow(), count + 1)
        });
    sum / count as f64
}
