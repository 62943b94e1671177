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

//! # Error Types
//!
//! Failures surfaced by the text-facing parts of the crate. Numeric
//! functions never fail: degenerate inputs such as a zero tolerance, a zero
//! rounding multiple or an empty mean are boundary behaviors, not errors.
//!
//! - `ParseNumberError`: the text is not an invariant decimal literal.
//! - `FormatError`: the text does not conform to the numeric or range
//!   grammar (ambiguous separators, malformed brackets, bad bounds).
//! - `RangeSyntaxError`: the specific structural reason a range
//!   specification was rejected.

/// The text could not be parsed as an invariant decimal number.
///
/// The invariant convention uses `.` as the only decimal separator and
/// accepts no grouping characters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("could not parse '{text}' as an invariant decimal number")]
pub struct ParseNumberError {
    /// The offending text, as supplied by the caller.
    pub text: String,
}

impl ParseNumberError {
    #[inline]
    pub(crate) fn new(text: &str) -> Self {
        Self {
            text: text.to_owned(),
        }
    }
}

/// The structural reason a range specification was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum RangeSyntaxError {
    /// The specification is empty or contains only whitespace.
    #[error("the range specification is empty")]
    Empty,
    /// The specification does not start with `[` or `(`.
    #[error("expected '[' or '(' at the start")]
    MissingOpenBracket,
    /// The specification does not end with `]` or `)`.
    #[error("expected ']' or ')' at the end")]
    MissingCloseBracket,
    /// No `,` separates the lower bound from the upper bound.
    #[error("expected ',' between the lower and upper bound")]
    MissingSeparator,
    /// More than one `,` appears between the brackets.
    #[error("expected exactly one ',' between the brackets")]
    TooManySeparators,
}

/// The text does not conform to the expected numeric or range grammar.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    /// The text is not a valid decimal number.
    #[error(transparent)]
    Number(#[from] ParseNumberError),
    /// The text contains a combination of `.` and `,` that does not
    /// identify a single decimal separator.
    #[error("'{text}' has ambiguous decimal separators ({dots} '.', {commas} ',')")]
    AmbiguousSeparators {
        /// The offending text.
        text: String,
        /// Number of `.` characters found.
        dots: usize,
        /// Number of `,` characters found.
        commas: usize,
    },
    /// The range specification is structurally malformed.
    #[error("'{text}' is not a valid range specification: {reason}")]
    MalformedRange {
        /// The offending range specification.
        text: String,
        /// Why the specification was rejected.
        reason: RangeSyntaxError,
    },
    /// A bound inside the range specification is not a number.
    #[error("'{text}' is not a valid range specification: {source}")]
    InvalidBound {
        /// The offending range specification.
        text: String,
        /// The parse failure of the bound.
        source: ParseNumberError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_parse_number_error_display() {
        let e = ParseNumberError::new("1,5");
        assert_eq!(
            e.to_string(),
            "could not parse '1,5' as an invariant decimal number"
        );
    }

    #[test]
    fn test_number_variant_is_transparent() {
        let e: FormatError = ParseNumberError::new("abc").into();
        assert_eq!(
            e.to_string(),
            "could not parse 'abc' as an invariant decimal number"
        );
    }

    #[test]
    fn test_ambiguous_separators_display() {
        let e = FormatError::AmbiguousSeparators {
            text: "1.2.3".to_string(),
            dots: 2,
            commas: 0,
        };
        assert_eq!(
            e.to_string(),
            "'1.2.3' has ambiguous decimal separators (2 '.', 0 ',')"
        );
    }

    #[test]
    fn test_malformed_range_display() {
        let e = FormatError::MalformedRange {
            text: "[0;10]".to_string(),
            reason: RangeSyntaxError::MissingSeparator,
        };
        assert_eq!(
            e.to_string(),
            "'[0;10]' is not a valid range specification: expected ',' between the lower and upper bound"
        );
    }

    #[test]
    fn test_invalid_bound_exposes_source() {
        let e = FormatError::InvalidBound {
            text: "[a,1]".to_string(),
            source: ParseNumberError::new("a"),
        };
        let source = e.source().expect("bound error carries its cause");
        assert_eq!(
            source.to_string(),
            "could not parse 'a' as an invariant decimal number"
        );
    }
}
