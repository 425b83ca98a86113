//! GS1 Company Prefix linters.
//!
//! The syntax check only establishes that a component is long enough to hold
//! the shortest GCP and that its leading digits could form one. Whether the
//! prefix is allocated is a question for [`ReferenceData::gcp`].

use common::{LintError, LintErrorKind, LintResult};

use crate::reference::{BUILTIN, GcpLookup, ReferenceData};

/// Length of the shortest GS1 Company Prefix.
pub const GCP_MIN_LENGTH: usize = 4;

fn check_prefix(
    data: &[u8],
    too_short: LintErrorKind,
    reference: &dyn ReferenceData,
) -> LintResult {
    if data.len() < GCP_MIN_LENGTH {
        return Err(LintError::whole(too_short, data.len()));
    }
    let (leading, _) = data.split_at(GCP_MIN_LENGTH);
    if let Some(position) = leading.iter().position(|byte| !byte.is_ascii_digit()) {
        return Err(LintError::new(LintErrorKind::InvalidGcpPrefix, position, 1));
    }

    match reference.gcp(data) {
        GcpLookup::Valid => Ok(()),
        GcpLookup::NotFound => Err(LintError::new(LintErrorKind::InvalidGcpPrefix, 0, 0)),
        GcpLookup::Offline => Err(LintError::new(LintErrorKind::GcpDatasourceOffline, 0, 0)),
    }
}

/// Runs `lint` over everything after the first character and moves the
/// failure back into the caller's coordinates.
fn after_first(
    data: &[u8],
    too_short: LintErrorKind,
    lint: impl Fn(&[u8]) -> LintResult,
) -> LintResult {
    match data.split_first() {
        Some((_, rest)) if !rest.is_empty() => lint(rest).map_err(|error| error.shifted(1)),
        _ => Err(LintError::whole(too_short, data.len())),
    }
}

/// Validates that the component starts with a GCP.
///
/// # Errors
///
/// See [`gcppos1_with`].
///
/// # Examples
///
/// ```
/// use common::LintErrorKind;
/// use gs1syntax::lints::gcp::gcppos1;
///
/// assert!(gcppos1(b"0123").is_ok());
/// assert_eq!(gcppos1(b"012").unwrap_err().kind(), LintErrorKind::TooShortForGcp);
/// ```
pub fn gcppos1(data: &[u8]) -> LintResult {
    gcppos1_with(data, &BUILTIN)
}

/// Validates that the component starts with a GCP known to `reference`.
///
/// # Errors
///
/// * [`LintErrorKind::TooShortForGcp`] over the whole input below
///   [`GCP_MIN_LENGTH`] characters.
/// * [`LintErrorKind::InvalidGcpPrefix`] at the first non-digit among the
///   leading [`GCP_MIN_LENGTH`] characters, or with an empty span when the
///   reference data holds no matching prefix.
/// * [`LintErrorKind::GcpDatasourceOffline`] with an empty span when the
///   reference data is unavailable.
pub fn gcppos1_with(data: &[u8], reference: &dyn ReferenceData) -> LintResult {
    check_prefix(data, LintErrorKind::TooShortForGcp, reference)
}

/// Validates that the component holds a GCP from its second character.
///
/// # Errors
///
/// See [`gcppos2_with`].
pub fn gcppos2(data: &[u8]) -> LintResult {
    gcppos2_with(data, &BUILTIN)
}

/// Validates that the component holds a GCP known to `reference` from its
/// second character.
///
/// # Errors
///
/// [`LintErrorKind::TooShortForGcp`] over the whole input below two
/// characters, otherwise the failures of [`gcppos1_with`] moved one place
/// right.
pub fn gcppos2_with(data: &[u8], reference: &dyn ReferenceData) -> LintResult {
    after_first(data, LintErrorKind::TooShortForGcp, |rest| gcppos1_with(rest, reference))
}

/// Validates that a key starts with a GCP.
///
/// Superseded by [`gcppos1`], which it matches except for reporting
/// [`LintErrorKind::TooShortForKey`].
///
/// # Errors
///
/// See [`key_with`].
pub fn key(data: &[u8]) -> LintResult {
    key_with(data, &BUILTIN)
}

/// Validates that a key starts with a GCP known to `reference`.
///
/// # Errors
///
/// As [`gcppos1_with`], with [`LintErrorKind::TooShortForKey`] for short
/// input.
pub fn key_with(data: &[u8], reference: &dyn ReferenceData) -> LintResult {
    check_prefix(data, LintErrorKind::TooShortForKey, reference)
}

/// Validates that a key holds a GCP from its second character.
///
/// Superseded by [`gcppos2`].
///
/// # Errors
///
/// See [`keyoff1_with`].
pub fn keyoff1(data: &[u8]) -> LintResult {
    keyoff1_with(data, &BUILTIN)
}

/// Validates that a key holds a GCP known to `reference` from its second
/// character.
///
/// # Errors
///
/// [`LintErrorKind::TooShortForKey`] over the whole input below two
/// characters, otherwise the failures of [`key_with`] moved one place right.
pub fn keyoff1_with(data: &[u8], reference: &dyn ReferenceData) -> LintResult {
    after_first(data, LintErrorKind::TooShortForKey, |rest| key_with(rest, reference))
}
