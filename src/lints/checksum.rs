//! Check-digit and check-character-pair linters.

use common::{LintError, LintErrorKind, LintResult};

use super::charset::{CSET32, CSET82, is_cset82};

/// Weights for the alphanumeric check pair, applied from the rightmost data
/// character leftwards.
const PRIMES: [u32; 97] = [
    2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89,
    97, 101, 103, 107, 109, 113, 127, 131, 137, 139, 149, 151, 157, 163, 167, 173, 179, 181, 191,
    193, 197, 199, 211, 223, 227, 229, 233, 239, 241, 251, 257, 263, 269, 271, 277, 281, 283, 293,
    307, 311, 313, 317, 331, 337, 347, 349, 353, 359, 367, 373, 379, 383, 389, 397, 401, 409, 419,
    421, 431, 433, 439, 443, 449, 457, 461, 463, 467, 479, 487, 491, 499, 503, 509,
];

/// Longest input `csumalpha` can weigh: one prime per data character plus
/// the pair.
pub const CHECK_PAIR_MAX_LENGTH: usize = PRIMES.len() + 2;

const CHECK_PAIR_MODULUS: u32 = 1021;

/// Computes the GS1 mod-10 check digit to append to `body`.
///
/// Weights alternate 3, 1, 3, ... from the rightmost body digit.
///
/// # Errors
///
/// [`LintErrorKind::NonDigitCharacter`] at the first non-digit of `body`.
///
/// # Examples
///
/// ```
/// use gs1syntax::lints::checksum::check_digit;
///
/// assert_eq!(check_digit(b"950110102091"), Ok(b'7'));
/// ```
pub fn check_digit(body: &[u8]) -> Result<u8, LintError> {
    let mut sum = 0_u32;
    for (position, &byte) in body.iter().enumerate() {
        if !byte.is_ascii_digit() {
            return Err(LintError::new(LintErrorKind::NonDigitCharacter, position, 1));
        }
        let weight = if (body.len() - position) % 2 == 1 { 3 } else { 1 };
        sum += weight * u32::from(byte - b'0');
    }
    let digit = (10 - sum % 10) % 10;
    Ok(b'0' + u8::try_from(digit).unwrap_or_default())
}

/// Validates a trailing GS1 mod-10 check digit.
///
/// # Errors
///
/// * [`LintErrorKind::TooShortForCheckDigit`] with an empty span for empty
///   input.
/// * [`LintErrorKind::NonDigitCharacter`] at the first non-digit.
/// * [`LintErrorKind::IncorrectCheckDigit`] at the final position.
///
/// # Examples
///
/// ```
/// use common::LintErrorKind;
/// use gs1syntax::lints::checksum::csum;
///
/// assert!(csum(b"9501101020917").is_ok());
/// let error = csum(b"9501101020918").unwrap_err();
/// assert_eq!(error.kind(), LintErrorKind::IncorrectCheckDigit);
/// assert_eq!(error.span().offset(), 12);
/// ```
pub fn csum(data: &[u8]) -> LintResult {
    let Some((&check, body)) = data.split_last() else {
        return Err(LintError::new(LintErrorKind::TooShortForCheckDigit, 0, 0));
    };
    let expected = check_digit(body)?;
    if !check.is_ascii_digit() {
        return Err(LintError::new(LintErrorKind::NonDigitCharacter, body.len(), 1));
    }
    if check != expected {
        return Err(LintError::new(LintErrorKind::IncorrectCheckDigit, body.len(), 1));
    }
    Ok(())
}

/// Value of a CSET 82 character: its position within the alphabet.
#[must_use]
pub fn cset82_value(byte: u8) -> Option<u8> {
    CSET82
        .iter()
        .position(|&member| member == byte)
        .and_then(|value| u8::try_from(value).ok())
}

/// Computes the CSET 32 check-character pair for the CSET 82 `body`.
///
/// # Errors
///
/// * [`LintErrorKind::TooLongForCheckPairImplementation`] when the body has
///   more characters than there are prime weights.
/// * [`LintErrorKind::InvalidCset82Character`] at the first character outside
///   CSET 82.
///
/// # Examples
///
/// ```
/// use gs1syntax::lints::checksum::check_pair;
///
/// assert_eq!(check_pair(b"1987654Ad4X4bL5ttr2310c"), Ok(*b"2K"));
/// assert_eq!(check_pair(b""), Ok(*b"22"));
/// ```
pub fn check_pair(body: &[u8]) -> Result<[u8; 2], LintError> {
    if body.len() > PRIMES.len() {
        return Err(LintError::whole(
            LintErrorKind::TooLongForCheckPairImplementation,
            body.len(),
        ));
    }

    if let Some(position) = body.iter().position(|&byte| !is_cset82(byte)) {
        return Err(LintError::new(LintErrorKind::InvalidCset82Character, position, 1));
    }

    let sum = body
        .iter()
        .rev()
        .zip(PRIMES)
        .filter_map(|(&byte, prime)| cset82_value(byte).map(|value| u32::from(value) * prime))
        .sum::<u32>()
        % CHECK_PAIR_MODULUS;

    let high = CSET32.get(usize::try_from(sum >> 5).unwrap_or(usize::MAX));
    let low = CSET32.get(usize::try_from(sum & 31).unwrap_or(usize::MAX));
    match (high, low) {
        (Some(&first), Some(&second)) => Ok([first, second]),
        _ => Err(LintError::whole(
            LintErrorKind::TooLongForCheckPairImplementation,
            body.len(),
        )),
    }
}

/// Validates a trailing pair of CSET 32 check characters over CSET 82 data.
///
/// # Errors
///
/// * [`LintErrorKind::TooShortForCheckPair`] over the whole input when it
///   holds fewer than two characters.
/// * [`LintErrorKind::TooLongForCheckPairImplementation`] over the whole input
///   beyond [`CHECK_PAIR_MAX_LENGTH`] characters.
/// * [`LintErrorKind::InvalidCset82Character`] or
///   [`LintErrorKind::InvalidCset32Character`] at the first character outside
///   the alphabet for its position.
/// * [`LintErrorKind::IncorrectCheckPair`] spanning the pair.
pub fn csumalpha(data: &[u8]) -> LintResult {
    if data.len() < 2 {
        return Err(LintError::whole(LintErrorKind::TooShortForCheckPair, data.len()));
    }
    if data.len() > CHECK_PAIR_MAX_LENGTH {
        return Err(LintError::whole(
            LintErrorKind::TooLongForCheckPairImplementation,
            data.len(),
        ));
    }

    let (body, pair) = data.split_at(data.len() - 2);
    if let Some(position) = body.iter().position(|&byte| !is_cset82(byte)) {
        return Err(LintError::new(LintErrorKind::InvalidCset82Character, position, 1));
    }
    if let Some(position) = pair.iter().position(|byte| !CSET32.contains(byte)) {
        return Err(LintError::new(
            LintErrorKind::InvalidCset32Character,
            body.len() + position,
            1,
        ));
    }

    if check_pair(body)? != pair {
        return Err(LintError::new(LintErrorKind::IncorrectCheckPair, body.len(), 2));
    }
    Ok(())
}
