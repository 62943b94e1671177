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

//! # Numeric Foundations
//!
//! Float sentinels, the two-valued sign and tolerance-aware comparison.
//!
//! ## Submodules
//!
//! - `constants`: Associated-constant traits (`MinusOne`, `PlusOne`,
//!   `SmallestPositive`) for `f32`/`f64`, plus `DEFAULT_PRECISION` and
//!   `SMALLEST_POSITIVE`.
//! - `sign`: A `Sign` trait and `sign` function returning `+1.0` for
//!   non-negative inputs and `-1.0` otherwise, for every primitive number.
//! - `tolerance`: Equality, ordering and three-way comparison of `f64`
//!   under an absolute or relative tolerance, and the `Tolerance`
//!   configuration type.

pub mod constants;
pub mod sign;
pub mod tolerance;
