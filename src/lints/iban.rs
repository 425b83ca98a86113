//! International Bank Account Number linter.

use common::{LintError, LintErrorKind, LintResult};

use crate::reference::{BUILTIN, ReferenceData};

/// Longest IBAN permitted by ISO 13616.
pub const IBAN_MAX_LENGTH: usize = 34;

/// An IBAN must be longer than this.
pub const IBAN_MIN_LENGTH: usize = 10;

const IBAN_MODULUS: u32 = 97;

/// Numeric expansion of an IBAN character: digits stand for themselves and
/// letters for 10 to 35. The second value is the decimal shift the expansion
/// needs.
fn expansion(byte: u8) -> Option<(u32, u32)> {
    match byte {
        b'0'..=b'9' => Some((u32::from(byte - b'0'), 10)),
        b'A'..=b'Z' => Some((u32::from(byte - b'A') + 10, 100)),
        _ => None,
    }
}

/// Validates an IBAN against the built-in country codes.
///
/// # Errors
///
/// See [`iban_with`].
///
/// # Examples
///
/// ```
/// use common::LintErrorKind;
/// use gs1syntax::lints::iban::iban;
///
/// assert!(iban(b"GB98MIDL07009312345678").is_ok());
/// let error = iban(b"BE71096123456760").unwrap_err();
/// assert_eq!(error.kind(), LintErrorKind::IncorrectIbanChecksum);
/// ```
pub fn iban(data: &[u8]) -> LintResult {
    iban_with(data, &BUILTIN)
}

/// Validates an IBAN, resolving the country code through `reference`.
///
/// The four leading characters are rotated to the end and the result is read
/// as one large number, letters expanding to two digits; a well-formed IBAN
/// leaves a remainder of 1 modulo 97.
///
/// # Errors
///
/// In order of precedence:
///
/// * [`LintErrorKind::IbanTooShort`] over the whole input below four
///   characters.
/// * [`LintErrorKind::IllegalIbanCountryCode`] over the first two characters.
/// * [`LintErrorKind::IbanTooLong`] over the whole input beyond
///   [`IBAN_MAX_LENGTH`] characters.
/// * [`LintErrorKind::IbanTooShort`] over the whole input up to
///   [`IBAN_MIN_LENGTH`] characters.
/// * [`LintErrorKind::InvalidIbanCharacter`] at the first character, in
///   rotated order, that is neither a digit nor an uppercase letter.
/// * [`LintErrorKind::IncorrectIbanChecksum`] over the two check digits.
pub fn iban_with(data: &[u8], reference: &dyn ReferenceData) -> LintResult {
    if data.len() < 4 {
        return Err(LintError::whole(LintErrorKind::IbanTooShort, data.len()));
    }

    let (country, _) = data.split_at(2);
    if !reference.iso3166_alpha2(country) {
        return Err(LintError::new(LintErrorKind::IllegalIbanCountryCode, 0, 2));
    }

    if data.len() > IBAN_MAX_LENGTH {
        return Err(LintError::whole(LintErrorKind::IbanTooLong, data.len()));
    }
    if data.len() <= IBAN_MIN_LENGTH {
        return Err(LintError::whole(LintErrorKind::IbanTooShort, data.len()));
    }

    let (head, tail) = data.split_at(4);
    let rotated = tail
        .iter()
        .enumerate()
        .map(|(index, &byte)| (index + 4, byte))
        .chain(head.iter().copied().enumerate());

    let mut remainder = 0_u32;
    for (position, byte) in rotated {
        let (value, shift) = expansion(byte)
            .ok_or_else(|| LintError::new(LintErrorKind::InvalidIbanCharacter, position, 1))?;
        remainder = (remainder * shift + value) % IBAN_MODULUS;
    }

    if remainder != 1 {
        return Err(LintError::new(LintErrorKind::IncorrectIbanChecksum, 2, 2));
    }
    Ok(())
}
