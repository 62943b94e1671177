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

//! # Invariant & Smart Decimal Parsing
//!
//! Parsing of decimal numbers that never consults a host locale.
//!
//! `parse_invariant_double` accepts exactly one convention: `.` as the
//! decimal point, no grouping separators, an optional sign and an optional
//! exponent. `parse_smart_double` additionally accepts a single `,` as the
//! decimal point, so a field can take either `"1.2"` or `"1,2"`, and rejects
//! any input where the separator is ambiguous (such as `"1.234,5"` or
//! `"1,234,567"`) instead of guessing.

use crate::error::{FormatError, ParseNumberError};

#[inline(always)]
fn is_invariant_byte(b: u8) -> bool {
    b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E')
}

/// Parses `text` as a decimal number using the invariant convention.
///
/// Leading and trailing ASCII whitespace is ignored. Named values such as
/// `inf` or `NaN` are rejected, as are grouping separators. A literal too
/// large for `f64` (`"1e999"`) is rejected rather than read as infinity;
/// one too small underflows to zero.
///
/// # Errors
///
/// Returns `ParseNumberError` if `text` is not a valid invariant decimal
/// literal or lies outside the finite `f64` range.
///
/// # Examples
///
/// ```rust
/// # use numext_core::text::parse::parse_invariant_double;
/// assert_eq!(parse_invariant_double("1.5").unwrap(), 1.5);
/// assert_eq!(parse_invariant_double(" -2e3 ").unwrap(), -2000.0);
/// assert!(parse_invariant_double("1,5").is_err());
/// assert!(parse_invariant_double("NaN").is_err());
/// ```
pub fn parse_invariant_double(text: &str) -> Result<f64, ParseNumberError> {
    let trimmed = text.trim_ascii();

    let well_formed = trimmed.bytes().all(is_invariant_byte)
        && trimmed.bytes().any(|b| b.is_ascii_digit());

    match well_formed.then(|| trimmed.parse::<f64>()) {
        Some(Ok(value)) if value.is_finite() => Ok(value),
        Some(Ok(_)) => {
            log::debug!("rejected '{text}': outside the finite f64 range");
            Err(ParseNumberError::new(text))
        }
        _ => {
            log::debug!("rejected '{text}': not an invariant decimal number");
            Err(ParseNumberError::new(text))
        }
    }
}

/// The number of `.` and `,` characters found in a piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DecimalSeparators {
    /// Occurrences of `.`.
    pub dots: usize,
    /// Occurrences of `,`.
    pub commas: usize,
}

impl DecimalSeparators {
    /// Counts the separators in `text`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use numext_core::text::parse::DecimalSeparators;
    /// let s = DecimalSeparators::count("1.234,5");
    /// assert_eq!((s.dots, s.commas), (1, 1));
    /// ```
    pub fn count(text: &str) -> Self {
        text.bytes().fold(Self::default(), |mut acc, b| {
            match b {
                b'.' => acc.dots += 1,
                b',' => acc.commas += 1,
                _ => {}
            }
            acc
        })
    }

    /// Returns `true` if the text identifies at most one decimal separator.
    #[inline]
    pub fn is_unambiguous(&self) -> bool {
        matches!((self.dots, self.commas), (0, 0) | (1, 0) | (0, 1))
    }
}

/// Parses `text` accepting either `.` or `,` as the decimal separator.
///
/// | dots | commas | behavior                                |
/// |------|--------|-----------------------------------------|
/// | 0    | 0      | parse as invariant decimal              |
/// | 1    | 0      | parse as invariant decimal              |
/// | 0    | 1      | replace `,` with `.`, then parse        |
/// | any other combination | | `FormatError::AmbiguousSeparators` |
///
/// # Errors
///
/// Returns `FormatError::AmbiguousSeparators` for ambiguous separators and
/// `FormatError::Number` if the text is otherwise not a decimal number.
///
/// # Examples
///
/// ```rust
/// # use numext_core::text::parse::parse_smart_double;
/// assert_eq!(parse_smart_double("1.2").unwrap(), 1.2);
/// assert_eq!(parse_smart_double("1,2").unwrap(), 1.2);
/// assert!(parse_smart_double("1.2.3").is_err());
/// ```
pub fn parse_smart_double(text: &str) -> Result<f64, FormatError> {
    let separators = DecimalSeparators::count(text);

    match (separators.dots, separators.commas) {
        (0, 0) | (1, 0) => Ok(parse_invariant_double(text)?),
        (0, 1) => parse_invariant_double(&text.replace(',', "."))
            .map_err(|_| ParseNumberError::new(text).into()),
        (dots, commas) => {
            log::debug!("rejected '{text}': ambiguous separators ({dots} '.', {commas} ',')");
            Err(FormatError::AmbiguousSeparators {
                text: text.to_owned(),
                dots,
                commas,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invariant_accepts_plain_decimals() {
        assert_eq!(parse_invariant_double("0").unwrap(), 0.0);
        assert_eq!(parse_invariant_double("42").unwrap(), 42.0);
        assert_eq!(parse_invariant_double("-3.25").unwrap(), -3.25);
        assert_eq!(parse_invariant_double("+0.5").unwrap(), 0.5);
        assert_eq!(parse_invariant_double(".5").unwrap(), 0.5);
        assert_eq!(parse_invariant_double("5.").unwrap(), 5.0);
    }

    #[test]
    fn test_invariant_accepts_exponents() {
        assert_eq!(parse_invariant_double("1e3").unwrap(), 1000.0);
        assert_eq!(parse_invariant_double("2.5E-2").unwrap(), 0.025);
    }

    #[test]
    fn test_invariant_trims_whitespace() {
        assert_eq!(parse_invariant_double("  7.5\t\n").unwrap(), 7.5);
    }

    #[test]
    fn test_invariant_rejects_grouping_and_comma() {
        assert!(parse_invariant_double("1,000").is_err());
        assert!(parse_invariant_double("1 000").is_err());
        assert!(parse_invariant_double("1_000").is_err());
        assert!(parse_invariant_double("1,5").is_err());
    }

    #[test]
    fn test_invariant_rejects_named_values() {
        for text in ["inf", "-infinity", "NaN", "Infinity"] {
            assert!(parse_invariant_double(text).is_err(), "accepted {text}");
        }
    }

    #[test]
    fn test_invariant_rejects_overflowing_literals() {
        for text in ["1e999", "-1e999", "1797693134862315708e291"] {
            let err = parse_invariant_double(text).unwrap_err();
            assert_eq!(err.text, text);
        }
        assert!(matches!(
            parse_smart_double("1,5e999"),
            Err(FormatError::Number(_))
        ));
        assert_eq!(parse_invariant_double("1.7976931348623157e308").unwrap(), f64::MAX);
    }

    #[test]
    fn test_invariant_underflow_is_zero() {
        assert_eq!(parse_invariant_double("1e-999").unwrap(), 0.0);
        assert_eq!(parse_invariant_double("5e-324").unwrap(), f64::from_bits(1));
    }

    #[test]
    fn test_invariant_rejects_malformed() {
        for text in ["", "   ", ".", "-", "e5", "1e", "1.2.3", "--1", "1-", "abc"] {
            assert!(parse_invariant_double(text).is_err(), "accepted {text:?}");
        }
    }

    #[test]
    fn test_invariant_error_names_original_text() {
        let err = parse_invariant_double(" x ").unwrap_err();
        assert_eq!(err.text, " x ");
    }

    #[test]
    fn test_count_separators() {
        assert_eq!(
            DecimalSeparators::count("1,234,567.89"),
            DecimalSeparators { dots: 1, commas: 2 }
        );
        assert_eq!(DecimalSeparators::count("12"), DecimalSeparators::default());
        assert!(DecimalSeparators::count("1,5").is_unambiguous());
        assert!(!DecimalSeparators::count("1.5,5").is_unambiguous());
    }

    #[test]
    fn test_smart_policy_table() {
        assert_eq!(parse_smart_double("12").unwrap(), 12.0);
        assert_eq!(parse_smart_double("1.2").unwrap(), 1.2);
        assert_eq!(parse_smart_double("1,2").unwrap(), 1.2);
        assert_eq!(parse_smart_double("-0,75").unwrap(), -0.75);
    }

    #[test]
    fn test_smart_rejects_ambiguous() {
        match parse_smart_double("1.2.3") {
            Err(FormatError::AmbiguousSeparators { text, dots, commas }) => {
                assert_eq!(text, "1.2.3");
                assert_eq!((dots, commas), (2, 0));
            }
            other => panic!("unexpected result: {other:?}"),
        }

        assert!(matches!(
            parse_smart_double("1.234,5"),
            Err(FormatError::AmbiguousSeparators { dots: 1, commas: 1, .. })
        ));
        assert!(matches!(
            parse_smart_double("1,234,567"),
            Err(FormatError::AmbiguousSeparators { dots: 0, commas: 2, .. })
        ));
    }

    #[test]
    fn test_smart_reports_non_numbers_with_original_text() {
        match parse_smart_double("x,5") {
            Err(FormatError::Number(e)) => assert_eq!(e.text, "x,5"),
            other => panic!("unexpected result: {other:?}"),
        }
        assert!(matches!(parse_smart_double("abc"), Err(FormatError::Number(_))));
    }
}
