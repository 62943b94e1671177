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

//! # Numext Core
//!
//! Tolerance-aware comparison, rounding, magnitude analysis and
//! locale-independent number parsing for `f64`. Every function is pure and
//! stateless, so all of them can be called from any thread without
//! coordination.
//!
//! ## Modules
//!
//! - `num`: Float sentinel constants, the two-valued `sign`, and the
//!   tolerance comparator (`equals_with_tolerance`, the ordering
//!   predicates, `compare_with_tolerance`, and the `Tolerance` type).
//! - `math`: Rounding to a multiple or to significant digits, degree/radian
//!   conversion, `magnitude` and `precision_difference`, and
//!   `ToleranceRange` for range specifications such as `[0,10)`.
//! - `text`: Invariant (`.` only) and smart (`.` or `,`) decimal parsing,
//!   and invariant fixed/significant-digit formatting.
//! - `stats`: Single-pass arithmetic mean.
//! - `error`: `ParseNumberError`, `FormatError` and `RangeSyntaxError`.
//!
//! ## Quick Tour
//!
//! ```rust
//! use numext_core::prelude::*;
//!
//! assert!(equals_with_tolerance(0.1 + 0.2, 0.3, 1e-12));
//! assert_eq!(round_to_multiple(7.3, 0.5), 7.5);
//! assert_eq!(magnitude(0.05), -2);
//! assert_eq!(parse_smart_double("1,2").unwrap(), 1.2);
//! assert!(is_in_range(5.0, 0.0, "[0,10)").unwrap());
//! assert_eq!(mean([1.0, 2.0, 3.0]), 2.0);
//! ```
//!
//! ## Features
//!
//! - `serde`: `Serialize`/`Deserialize` for `Tolerance`.

pub mod error;
pub mod math;
pub mod num;
pub mod stats;
pub mod text;

pub use error::{FormatError, ParseNumberError, RangeSyntaxError};

/// The commonly used functions and types in one import.
pub mod prelude {
    pub use crate::error::{FormatError, ParseNumberError, RangeSyntaxError};
    pub use crate::math::magnitude::{magnitude, precision_difference};
    pub use crate::math::range::{ToleranceRange, is_in_range};
    pub use crate::math::rounding::{
        round_to_multiple, round_to_multiple_opt, round_to_significant, to_degrees, to_radians,
    };
    pub use crate::num::constants::{DEFAULT_PRECISION, SMALLEST_POSITIVE};
    pub use crate::num::sign::{Sign, sign};
    pub use crate::num::tolerance::{
        Tolerance, compare_with_tolerance, equals_with_auto_tolerance,
        equals_with_default_tolerance, equals_with_tolerance, greater_than, greater_than_or_equal,
        less_than, less_than_or_equal,
    };
    pub use crate::stats::mean;
    pub use crate::text::format::{format_fixed, format_significant};
    pub use crate::text::parse::{DecimalSeparators, parse_invariant_double, parse_smart_double};
}
