//! Shared test helpers for the linter crates.
//!
//! Expected failures are written in a highlight notation where the failing
//! span is wrapped in asterisks: `"0*12*"` means the input `"012"` failed at
//! offset 1 with length 2, and `"**"` marks an empty span at the start. The
//! notation cannot describe inputs that themselves contain `*`; tests for
//! such inputs compare offsets directly.

pub mod assert;
pub mod marked;

pub use assert::{assert_lint_fails, assert_lint_passes};
pub use marked::{Marked, highlight};
