//! Shared linter infrastructure: the error taxonomy and its English strings,
//! error spans, linter outcomes, and the lookup primitives used by the
//! reference tables.

pub mod diagnostics;
pub mod error;
pub mod lookup;
pub mod span;
pub mod test_support;

pub use diagnostics::{LintError, LintResult};
pub use error::{
    ERROR_ORDINAL_COUNT, ERROR_STRINGS_EN, LintErrorKind, OK_DESCRIPTION, OK_ORDINAL,
    RETIRED_ORDINALS, error_string,
};
pub use lookup::{alphabet_contains, bitfield_contains, contains_sorted, first_unsorted, prefix_len};
pub use span::{ErrorSpan, SpanError};
