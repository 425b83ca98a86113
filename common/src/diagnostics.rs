//! Linter outcomes: the failing kind together with its span.

use thiserror::Error;

use crate::error::LintErrorKind;
use crate::span::ErrorSpan;

/// Outcome of a single linter invocation.
pub type LintResult = Result<(), LintError>;

/// A rejected component: what was wrong and where.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq, Hash)]
#[error("{} (at {}..{})", .kind.description(), .span.offset(), .span.end())]
pub struct LintError {
    kind: LintErrorKind,
    span: ErrorSpan,
}

impl LintError {
    /// Creates a new error.
    ///
    /// # Examples
    ///
    /// ```
    /// use common::diagnostics::LintError;
    /// use common::error::LintErrorKind;
    ///
    /// let error = LintError::new(LintErrorKind::IncorrectCheckDigit, 7, 1);
    /// assert_eq!(error.span().offset(), 7);
    /// assert_eq!(
    ///     error.to_string(),
    ///     "The numeric check digit is incorrect. (at 7..8)"
    /// );
    /// ```
    #[must_use]
    pub const fn new(kind: LintErrorKind, offset: usize, length: usize) -> Self {
        Self::with_span(kind, ErrorSpan::new(offset, length))
    }

    /// Creates an error from an existing span.
    #[must_use]
    pub const fn with_span(kind: LintErrorKind, span: ErrorSpan) -> Self {
        Self { kind, span }
    }

    /// Creates an error covering the whole of a `len`-byte input.
    #[must_use]
    pub const fn whole(kind: LintErrorKind, len: usize) -> Self {
        Self::with_span(kind, ErrorSpan::whole(len))
    }

    /// Returns the error kind.
    #[must_use]
    pub const fn kind(self) -> LintErrorKind {
        self.kind
    }

    /// Returns the offending span.
    #[must_use]
    pub const fn span(self) -> ErrorSpan {
        self.span
    }

    /// Returns the stable ordinal of the kind.
    #[must_use]
    pub const fn ordinal(self) -> u16 {
        self.kind.ordinal()
    }

    /// Translates the span right by `by` bytes, keeping the kind.
    #[must_use]
    pub const fn shifted(self, by: usize) -> Self {
        Self::with_span(self.kind, self.span.shifted(by))
    }

    /// Replaces the kind, keeping the span.
    ///
    /// Composite linters use this when a delegate's failure should surface
    /// under the composite's own error kind.
    #[must_use]
    pub const fn rekind(self, kind: LintErrorKind) -> Self {
        Self::with_span(kind, self.span)
    }
}
