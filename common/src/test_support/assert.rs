//! Assertions over linter outcomes written in highlight notation.

use super::marked::{Marked, highlight};
use crate::diagnostics::LintResult;
use crate::error::LintErrorKind;

/// Runs `lint` over the unmarked input and asserts that it fails with `kind`
/// over the marked span.
///
/// # Panics
///
/// Panics if the notation is malformed or the linter succeeds. A different
/// kind or span also panics, rendering the actual span in the same notation.
///
/// # Examples
///
/// ```
/// use common::{LintError, LintErrorKind, LintResult};
/// use common::test_support::assert_lint_fails;
///
/// fn first_byte_is_bad(data: &[u8]) -> LintResult {
///     Err(LintError::new(LintErrorKind::NonDigitCharacter, 0, data.len().min(1)))
/// }
///
/// assert_lint_fails(first_byte_is_bad, "*a*bc", LintErrorKind::NonDigitCharacter);
/// ```
#[track_caller]
pub fn assert_lint_fails(lint: impl Fn(&[u8]) -> LintResult, marked: &str, kind: LintErrorKind) {
    let Some(case) = Marked::parse(marked) else {
        panic!("`{marked}` should carry exactly two markers");
    };
    match lint(case.bytes()) {
        Ok(()) => panic!("`{}` should fail with {kind:?}", case.data()),
        Err(error) => {
            let actual = highlight(case.bytes(), error.span());
            assert_eq!(
                (error.kind(), actual.as_str()),
                (kind, marked),
                "unexpected failure for `{}`",
                case.data()
            );
        }
    }
}

/// Asserts that `lint` accepts `data`.
///
/// # Panics
///
/// Panics with the rendered failure when the linter rejects the input.
#[track_caller]
pub fn assert_lint_passes(lint: impl Fn(&[u8]) -> LintResult, data: &[u8]) {
    if let Err(error) = lint(data) {
        panic!(
            "`{}` should pass but failed with {:?} at `{}`",
            String::from_utf8_lossy(data),
            error.kind(),
            highlight(data, error.span())
        );
    }
}
