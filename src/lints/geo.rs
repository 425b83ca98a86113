//! Fixed-point latitude and longitude linters.
//!
//! Coordinates are ten-digit offsets: latitude from -90 degrees in units of
//! 1e-7 (so at most `1800000000`), longitude from -180 degrees (at most
//! `3600000000`).

use common::{LintError, LintErrorKind, LintResult};

use super::{decimal_value, require_digits};

/// Width of one encoded coordinate.
pub const COORDINATE_LENGTH: usize = 10;

/// Largest encoded latitude.
pub const LATITUDE_MAX: u64 = 1_800_000_000;

/// Largest encoded longitude.
pub const LONGITUDE_MAX: u64 = 3_600_000_000;

fn coordinate(
    data: &[u8],
    invalid_length: LintErrorKind,
    invalid: LintErrorKind,
    max: u64,
) -> LintResult {
    if data.len() != COORDINATE_LENGTH {
        return Err(LintError::whole(invalid_length, data.len()));
    }
    require_digits(data)?;
    if decimal_value(data) > max {
        return Err(LintError::whole(invalid, COORDINATE_LENGTH));
    }
    Ok(())
}

/// Validates a ten-digit latitude.
///
/// # Errors
///
/// [`LintErrorKind::LatitudeInvalidLength`] over the whole input,
/// [`LintErrorKind::NonDigitCharacter`] at the first non-digit, or
/// [`LintErrorKind::InvalidLatitude`] when above [`LATITUDE_MAX`].
pub fn latitude(data: &[u8]) -> LintResult {
    coordinate(
        data,
        LintErrorKind::LatitudeInvalidLength,
        LintErrorKind::InvalidLatitude,
        LATITUDE_MAX,
    )
}

/// Validates a ten-digit longitude.
///
/// # Errors
///
/// [`LintErrorKind::LongitudeInvalidLength`] over the whole input,
/// [`LintErrorKind::NonDigitCharacter`] at the first non-digit, or
/// [`LintErrorKind::InvalidLongitude`] when above [`LONGITUDE_MAX`].
pub fn longitude(data: &[u8]) -> LintResult {
    coordinate(
        data,
        LintErrorKind::LongitudeInvalidLength,
        LintErrorKind::InvalidLongitude,
        LONGITUDE_MAX,
    )
}

/// Validates a latitude immediately followed by a longitude.
///
/// # Errors
///
/// [`LintErrorKind::LatlongInvalidLength`] over the whole input unless it is
/// twenty characters, [`LintErrorKind::NonDigitCharacter`] at the first
/// non-digit, then the range failures of [`latitude`] and [`longitude`] over
/// their half.
///
/// # Examples
///
/// ```
/// use common::LintErrorKind;
/// use gs1syntax::lints::geo::latlong;
///
/// assert!(latlong(b"18000000003600000000").is_ok());
/// let error = latlong(b"18000000003600000001").unwrap_err();
/// assert_eq!(error.kind(), LintErrorKind::InvalidLongitude);
/// assert_eq!(error.span().offset(), 10);
/// ```
pub fn latlong(data: &[u8]) -> LintResult {
    if data.len() != 2 * COORDINATE_LENGTH {
        return Err(LintError::whole(LintErrorKind::LatlongInvalidLength, data.len()));
    }
    require_digits(data)?;
    let (lat, long) = data.split_at(COORDINATE_LENGTH);
    latitude(lat)?;
    longitude(long).map_err(|error| error.shifted(COORDINATE_LENGTH))
}
