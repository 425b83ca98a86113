//! Retired linters that still resolve by name.
//!
//! Older AI tables refer to these; each now accepts any input. The checks
//! they once made are covered by the linters noted on each function, and the
//! registry only resolves these names while deprecated linters are enabled.

use common::LintResult;

/// Formerly validated an `HHMM` time; see [`hhmi`](super::datetime::hhmi).
///
/// # Errors
///
/// Never fails.
pub const fn hhmm(_data: &[u8]) -> LintResult {
    Ok(())
}

/// Formerly validated a run of ISO 3166 codes; see
/// [`iso3166`](super::codelist::iso3166).
///
/// # Errors
///
/// Never fails.
pub const fn iso3166list(_data: &[u8]) -> LintResult {
    Ok(())
}

/// Formerly validated optional minutes and seconds; see
/// [`mi`](super::datetime::mi) and [`ss`](super::datetime::ss).
///
/// # Errors
///
/// Never fails.
pub const fn mmoptss(_data: &[u8]) -> LintResult {
    Ok(())
}

/// Formerly validated a date with hour; see
/// [`yymmdd`](super::datetime::yymmdd) and [`hh`](super::datetime::hh).
///
/// # Errors
///
/// Never fails.
pub const fn yymmddhh(_data: &[u8]) -> LintResult {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::test_support::assert_lint_passes;
    use rstest::rstest;

    #[rstest]
    #[case(hhmm, b"")]
    #[case(hhmm, b"9999")]
    #[case(iso3166list, b"XXX")]
    #[case(mmoptss, b"ZZ")]
    #[case(yymmddhh, b"99999999")]
    fn accepts_anything(#[case] lint: fn(&[u8]) -> LintResult, #[case] data: &[u8]) {
        assert_lint_passes(lint, data);
    }
}
