//! Linters that look the whole component up in a published code list.
//!
//! A miss is reported over the whole input. The alpha-2 country, media type
//! and package type lists are consulted through [`ReferenceData`] so an
//! embedder can substitute a maintained source.

pub mod tables;

use common::lookup::contains_sorted;
use common::{LintError, LintErrorKind, LintResult};

use crate::reference::{BUILTIN, ReferenceData};

fn require(found: bool, kind: LintErrorKind, data: &[u8]) -> LintResult {
    if found {
        Ok(())
    } else {
        Err(LintError::whole(kind, data.len()))
    }
}

/// Validates an ISO 3166 numeric-3 country code.
///
/// # Errors
///
/// [`LintErrorKind::NotIso3166`] over the whole input.
///
/// # Examples
///
/// ```
/// use gs1syntax::lints::codelist::iso3166;
///
/// assert!(iso3166(b"826").is_ok());
/// assert!(iso3166(b"000").is_err());
/// ```
pub fn iso3166(data: &[u8]) -> LintResult {
    require(
        contains_sorted(tables::ISO3166_NUMERIC, data),
        LintErrorKind::NotIso3166,
        data,
    )
}

/// Validates an ISO 3166 numeric-3 country code or the literal `999`.
///
/// # Errors
///
/// [`LintErrorKind::NotIso3166Or999`] over the whole input.
pub fn iso3166999(data: &[u8]) -> LintResult {
    if data == b"999" {
        return Ok(());
    }
    iso3166(data).map_err(|error| error.rekind(LintErrorKind::NotIso3166Or999))
}

/// Validates an ISO 3166 alpha-2 country code against the built-in list.
///
/// # Errors
///
/// [`LintErrorKind::NotIso3166Alpha2`] over the whole input.
pub fn iso3166alpha2(data: &[u8]) -> LintResult {
    iso3166alpha2_with(data, &BUILTIN)
}

/// Validates an ISO 3166 alpha-2 country code through `reference`.
///
/// # Errors
///
/// [`LintErrorKind::NotIso3166Alpha2`] over the whole input.
pub fn iso3166alpha2_with(data: &[u8], reference: &dyn ReferenceData) -> LintResult {
    require(
        reference.iso3166_alpha2(data),
        LintErrorKind::NotIso3166Alpha2,
        data,
    )
}

/// Validates an ISO 4217 numeric-3 currency code.
///
/// # Errors
///
/// [`LintErrorKind::NotIso4217`] over the whole input.
pub fn iso4217(data: &[u8]) -> LintResult {
    require(
        contains_sorted(tables::ISO4217_NUMERIC, data),
        LintErrorKind::NotIso4217,
        data,
    )
}

/// Validates an AIDC media type against the built-in list.
///
/// # Errors
///
/// [`LintErrorKind::InvalidMediaType`] over the whole input.
pub fn mediatype(data: &[u8]) -> LintResult {
    mediatype_with(data, &BUILTIN)
}

/// Validates an AIDC media type through `reference`.
///
/// # Errors
///
/// [`LintErrorKind::InvalidMediaType`] over the whole input.
pub fn mediatype_with(data: &[u8], reference: &dyn ReferenceData) -> LintResult {
    require(reference.media_type(data), LintErrorKind::InvalidMediaType, data)
}

/// Validates a UN/ECE Recommendation 21 PackageTypeCode against the built-in
/// list.
///
/// # Errors
///
/// [`LintErrorKind::InvalidPackageType`] over the whole input.
pub fn packagetype(data: &[u8]) -> LintResult {
    packagetype_with(data, &BUILTIN)
}

/// Validates a PackageTypeCode through `reference`.
///
/// # Errors
///
/// [`LintErrorKind::InvalidPackageType`] over the whole input.
pub fn packagetype_with(data: &[u8], reference: &dyn ReferenceData) -> LintResult {
    require(
        reference.package_type(data),
        LintErrorKind::InvalidPackageType,
        data,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::test_support::{assert_lint_fails, assert_lint_passes};
    use rstest::rstest;

    struct EverythingListed;

    impl ReferenceData for EverythingListed {
        fn iso3166_alpha2(&self, _code: &[u8]) -> bool {
            true
        }

        fn media_type(&self, _code: &[u8]) -> bool {
            true
        }

        fn package_type(&self, _code: &[u8]) -> bool {
            true
        }
    }

    #[rstest]
    #[case(iso3166, b"004")]
    #[case(iso3166, b"826")]
    #[case(iso3166, b"894")]
    #[case(iso3166999, b"250")]
    #[case(iso3166999, b"999")]
    #[case(iso3166alpha2, b"AD")]
    #[case(iso3166alpha2, b"GB")]
    #[case(iso3166alpha2, b"ZW")]
    #[case(iso4217, b"008")]
    #[case(iso4217, b"826")]
    #[case(iso4217, b"978")]
    #[case(iso4217, b"999")]
    #[case(mediatype, b"01")]
    #[case(mediatype, b"10")]
    #[case(mediatype, b"80")]
    #[case(mediatype, b"99")]
    #[case(packagetype, b"1A")]
    #[case(packagetype, b"APE")]
    #[case(packagetype, b"ON")]
    #[case(packagetype, b"ZZ")]
    fn accepts_listed_codes(#[case] lint: fn(&[u8]) -> LintResult, #[case] data: &[u8]) {
        assert_lint_passes(lint, data);
    }

    #[rstest]
    #[case(iso3166, "*000*", LintErrorKind::NotIso3166)]
    #[case(iso3166, "*999*", LintErrorKind::NotIso3166)]
    #[case(iso3166, "*82*", LintErrorKind::NotIso3166)]
    #[case(iso3166, "*8260*", LintErrorKind::NotIso3166)]
    #[case(iso3166, "**", LintErrorKind::NotIso3166)]
    #[case(iso3166999, "*000*", LintErrorKind::NotIso3166Or999)]
    #[case(iso3166999, "*9999*", LintErrorKind::NotIso3166Or999)]
    #[case(iso3166alpha2, "*XX*", LintErrorKind::NotIso3166Alpha2)]
    #[case(iso3166alpha2, "*gb*", LintErrorKind::NotIso3166Alpha2)]
    #[case(iso3166alpha2, "*GBR*", LintErrorKind::NotIso3166Alpha2)]
    #[case(iso4217, "*000*", LintErrorKind::NotIso4217)]
    #[case(iso4217, "*97*", LintErrorKind::NotIso4217)]
    #[case(mediatype, "*00*", LintErrorKind::InvalidMediaType)]
    #[case(mediatype, "*11*", LintErrorKind::InvalidMediaType)]
    #[case(mediatype, "*79*", LintErrorKind::InvalidMediaType)]
    #[case(mediatype, "*1*", LintErrorKind::InvalidMediaType)]
    #[case(packagetype, "*1C*", LintErrorKind::InvalidPackageType)]
    #[case(packagetype, "*ap*", LintErrorKind::InvalidPackageType)]
    #[case(packagetype, "**", LintErrorKind::InvalidPackageType)]
    fn rejects_unlisted_codes(
        #[case] lint: fn(&[u8]) -> LintResult,
        #[case] marked: &str,
        #[case] kind: LintErrorKind,
    ) {
        assert_lint_fails(lint, marked, kind);
    }

    #[rstest]
    fn reference_data_replaces_the_builtin_lists() {
        let reference = EverythingListed;

        assert_lint_passes(|data: &[u8]| iso3166alpha2_with(data, &reference), b"XX");
        assert_lint_passes(|data: &[u8]| mediatype_with(data, &reference), b"00");
        assert_lint_passes(|data: &[u8]| packagetype_with(data, &reference), b"none");
    }
}
