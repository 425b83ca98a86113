//! The linter catalogue.
//!
//! Every linter is a pure function over the bytes of one AI component:
//! `fn(data: &[u8]) -> LintResult`. On failure the returned
//! [`LintError`](common::LintError) names the kind and the offending span,
//! measured from the start of `data`. Linters that consult reference data
//! also expose a `*_with` variant taking a
//! [`ReferenceData`](crate::reference::ReferenceData).

pub mod charset;
pub mod checksum;
pub mod codelist;
pub mod coupon;
pub mod datetime;
pub mod deprecated;
pub mod gcp;
pub mod geo;
pub mod iban;
pub mod sequence;
pub mod simple;

use common::{LintError, LintErrorKind, LintResult};

/// Position of the first byte of `data` that is not an ASCII digit.
pub(crate) fn first_non_digit(data: &[u8]) -> Option<usize> {
    data.iter().position(|byte| !byte.is_ascii_digit())
}

/// Rejects the first non-digit with a one-byte [`LintErrorKind::NonDigitCharacter`].
pub(crate) fn require_digits(data: &[u8]) -> LintResult {
    match first_non_digit(data) {
        Some(position) => Err(LintError::new(LintErrorKind::NonDigitCharacter, position, 1)),
        None => Ok(()),
    }
}

/// Decimal value of an all-digit slice.
///
/// Callers check the digits first and keep the slice short enough for a
/// `u64`; overflow saturates rather than wrapping.
pub(crate) fn decimal_value(digits: &[u8]) -> u64 {
    digits.iter().fold(0_u64, |value, &digit| {
        value
            .saturating_mul(10)
            .saturating_add(u64::from(digit.wrapping_sub(b'0')))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(b"", None)]
    #[case(b"0123", None)]
    #[case(b"01a3", Some(2))]
    #[case(b" 1", Some(0))]
    fn finds_the_first_non_digit(#[case] data: &[u8], #[case] expected: Option<usize>) {
        assert_eq!(first_non_digit(data), expected);
    }

    #[rstest]
    #[case(b"0", 0)]
    #[case(b"0023", 23)]
    #[case(b"3600000000", 3_600_000_000)]
    fn reads_decimal_values(#[case] digits: &[u8], #[case] expected: u64) {
        assert_eq!(decimal_value(digits), expected);
    }
}
