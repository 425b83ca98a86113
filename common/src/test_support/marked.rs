//! Highlight notation for expected failure spans.

use crate::span::ErrorSpan;

const MARKER: char = '*';

/// An input together with the span marked in its highlight notation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Marked {
    data: String,
    span: ErrorSpan,
}

impl Marked {
    /// Parses the highlight notation.
    ///
    /// Returns `None` unless the text carries exactly two markers.
    ///
    /// # Examples
    ///
    /// ```
    /// use common::span::ErrorSpan;
    /// use common::test_support::Marked;
    ///
    /// let marked = Marked::parse("BE*71*096123456760").expect("two markers");
    /// assert_eq!(marked.data(), "BE71096123456760");
    /// assert_eq!(marked.span(), ErrorSpan::new(2, 2));
    ///
    /// assert!(Marked::parse("BE71").is_none());
    /// ```
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let mut pieces = text.split(MARKER);
        let before = pieces.next()?;
        let inside = pieces.next()?;
        let after = pieces.next()?;
        if pieces.next().is_some() {
            return None;
        }

        Some(Self {
            data: [before, inside, after].concat(),
            span: ErrorSpan::new(before.len(), inside.len()),
        })
    }

    /// Returns the input with the markers removed.
    #[must_use]
    pub fn data(&self) -> &str {
        &self.data
    }

    /// Returns the input as bytes.
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        self.data.as_bytes()
    }

    /// Returns the marked span.
    #[must_use]
    pub const fn span(&self) -> ErrorSpan {
        self.span
    }
}

/// Renders `data` with `span` wrapped in markers.
///
/// Spans reaching past the end of the data are clamped so that a faulty span
/// still renders for the assertion message.
///
/// # Examples
///
/// ```
/// use common::span::ErrorSpan;
/// use common::test_support::highlight;
///
/// assert_eq!(highlight(b"210229", ErrorSpan::new(4, 2)), "2102*29*");
/// assert_eq!(highlight(b"", ErrorSpan::new(0, 0)), "**");
/// ```
#[must_use]
pub fn highlight(data: &[u8], span: ErrorSpan) -> String {
    let start = span.offset().min(data.len());
    let end = span.end().min(data.len());
    let (before, rest) = data.split_at(start);
    let (inside, after) = rest.split_at(end - start);

    let mut rendered = String::with_capacity(data.len() + 2);
    rendered.push_str(&String::from_utf8_lossy(before));
    rendered.push(MARKER);
    rendered.push_str(&String::from_utf8_lossy(inside));
    rendered.push(MARKER);
    rendered.push_str(&String::from_utf8_lossy(after));
    rendered
}
