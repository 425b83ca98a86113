//! Syntax linters for GS1 Application Identifier data components.
//!
//! Each linter in [`lints`] validates one component of an AI's data field,
//! such as a check digit, a date, a country code or a coupon. It returns
//! `Ok(())` or a [`LintError`] naming what is wrong and where, as a byte
//! span of the input. Linters that depend on outside knowledge, such as GS1
//! Company Prefix allocation, consult a [`ReferenceData`] hook.
//!
//! ```
//! use common::LintErrorKind;
//! use gs1syntax::lints::checksum::csum;
//!
//! assert!(csum(b"9501101020917").is_ok());
//!
//! let error = csum(b"9501101020912").unwrap_err();
//! assert_eq!(error.kind(), LintErrorKind::IncorrectCheckDigit);
//! assert_eq!((error.span().offset(), error.span().length()), (12, 1));
//! ```

pub mod config;
pub mod lints;
pub mod reference;

pub use common::{ErrorSpan, LintError, LintErrorKind, LintResult};
pub use config::{ConfigError, GcpConfig, SyntaxConfig};
pub use reference::{
    BUILTIN, BuiltinReferenceData, GcpLookup, PrefixListReferenceData, ReferenceData,
};
