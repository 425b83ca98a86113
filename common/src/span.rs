//! Byte spans locating the offending part of a linted component.

use std::ops::Range;

use thiserror::Error;

/// Errors produced when constructing spans.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum SpanError {
    /// The span reaches past the end of the input it describes.
    #[error("span {offset}+{length} exceeds input of {input_len} bytes")]
    OutOfBounds {
        /// Start of the rejected span.
        offset: usize,
        /// Length of the rejected span.
        length: usize,
        /// Length of the input the span was checked against.
        input_len: usize,
    },
}

/// Half-open byte range `offset..offset + length` within a linter's input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ErrorSpan {
    offset: usize,
    length: usize,
}

impl ErrorSpan {
    /// Builds a span without checking it against an input.
    ///
    /// # Examples
    ///
    /// ```
    /// use common::span::ErrorSpan;
    ///
    /// let span = ErrorSpan::new(7, 1);
    /// assert_eq!(span.end(), 8);
    /// ```
    #[must_use]
    pub const fn new(offset: usize, length: usize) -> Self {
        Self { offset, length }
    }

    /// Builds a span after checking that it lies within `input_len` bytes.
    ///
    /// # Examples
    ///
    /// ```
    /// use common::span::{ErrorSpan, SpanError};
    ///
    /// assert!(ErrorSpan::checked(2, 2, 4).is_ok());
    /// assert_eq!(
    ///     ErrorSpan::checked(3, 2, 4),
    ///     Err(SpanError::OutOfBounds { offset: 3, length: 2, input_len: 4 })
    /// );
    /// ```
    pub const fn checked(offset: usize, length: usize, input_len: usize) -> Result<Self, SpanError> {
        match offset.checked_add(length) {
            Some(end) if end <= input_len => Ok(Self { offset, length }),
            _ => Err(SpanError::OutOfBounds {
                offset,
                length,
                input_len,
            }),
        }
    }

    /// Span covering the whole of an input of `input_len` bytes.
    #[must_use]
    pub const fn whole(input_len: usize) -> Self {
        Self::new(0, input_len)
    }

    /// Returns the start of the span.
    #[must_use]
    pub const fn offset(self) -> usize {
        self.offset
    }

    /// Returns the length of the span.
    #[must_use]
    pub const fn length(self) -> usize {
        self.length
    }

    /// Returns the exclusive end of the span.
    #[must_use]
    pub const fn end(self) -> usize {
        self.offset + self.length
    }

    /// Whether the span lies within an input of `input_len` bytes.
    #[must_use]
    pub const fn fits(self, input_len: usize) -> bool {
        self.end() <= input_len
    }

    /// Moves the span right by `by` bytes.
    ///
    /// Composite linters use this to translate a delegate's span into their
    /// own coordinate space.
    ///
    /// # Examples
    ///
    /// ```
    /// use common::span::ErrorSpan;
    ///
    /// assert_eq!(ErrorSpan::new(0, 2).shifted(2), ErrorSpan::new(2, 2));
    /// ```
    #[must_use]
    pub const fn shifted(self, by: usize) -> Self {
        Self::new(self.offset + by, self.length)
    }

    /// Moves the span left by `by` bytes, stopping at zero.
    #[must_use]
    pub const fn unshifted(self, by: usize) -> Self {
        Self::new(self.offset.saturating_sub(by), self.length)
    }

    /// Returns the span as a byte range.
    #[must_use]
    pub const fn range(self) -> Range<usize> {
        self.offset..self.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, 0, 0)]
    #[case(0, 3, 3)]
    #[case(2, 1, 3)]
    #[case(3, 0, 3)]
    fn checked_accepts_spans_within_the_input(
        #[case] offset: usize,
        #[case] length: usize,
        #[case] input_len: usize,
    ) {
        let span = ErrorSpan::checked(offset, length, input_len).expect("span should fit");
        assert!(span.fits(input_len));
        assert_eq!(span.range().len(), length);
    }

    #[rstest]
    #[case(0, 4, 3)]
    #[case(4, 0, 3)]
    #[case(usize::MAX, 2, 3)]
    fn checked_rejects_spans_past_the_end(
        #[case] offset: usize,
        #[case] length: usize,
        #[case] input_len: usize,
    ) {
        assert!(ErrorSpan::checked(offset, length, input_len).is_err());
    }

    #[rstest]
    fn unshifted_saturates_at_zero() {
        assert_eq!(ErrorSpan::new(1, 2).unshifted(2), ErrorSpan::new(0, 2));
        assert_eq!(ErrorSpan::new(6, 2).unshifted(2), ErrorSpan::new(4, 2));
    }
}
