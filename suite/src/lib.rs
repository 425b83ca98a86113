//! Name-addressed registry of the GS1 syntax linters.
//!
//! AI tables refer to linters by short names such as `csum` or `yymmdd`.
//! This crate maps those names onto the linter functions of [`gs1syntax`]
//! and applies the deployment's configuration: whether the retired names
//! still resolve, and which reference data the linters consult.

mod registry;

pub use registry::{LINTERS, Linter, LinterFn, Registry, linter_names, resolve_linter};
