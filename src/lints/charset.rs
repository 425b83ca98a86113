//! Character-set linters for the named GS1 alphabets.
//!
//! Each linter finds the longest prefix of the component drawn from its
//! alphabet and reports the first byte outside it.

use common::lookup::{alphabet_contains, prefix_len};
use common::{LintError, LintErrorKind, LintResult};

use super::require_digits;

/// The 82 characters of CSET 82, in the order that assigns their check-pair
/// values.
pub const CSET82: &[u8; 82] =
    b"!\"%&'()*+,-./0123456789:;<=>?ABCDEFGHIJKLMNOPQRSTUVWXYZ_abcdefghijklmnopqrstuvwxyz";

/// The 39 characters of CSET 39.
pub const CSET39: &[u8; 39] = b"#-/0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// The 32 characters of CSET 32, in check-pair value order.
pub const CSET32: &[u8; 32] = b"23456789ABCDEFGHJKLMNPQRSTUVWXYZ";

const CSET82_BITFIELD: [u64; 4] = [0x0000_0000_67ff_ffff, 0x7fff_ffe1_7fff_ffe0, 0, 0];

/// URL- and file-safe base64 alphabet: `0-9`, `-`, `A-Z`, `_` and `a-z`.
const CSET64_BITFIELD: [u64; 4] = [0x0000_0000_0004_ffc0, 0x7fff_ffe1_7fff_ffe0, 0, 0];

const CSET64_PAD: u8 = b'=';

/// Whether `byte` belongs to CSET 82.
#[must_use]
pub fn is_cset82(byte: u8) -> bool {
    alphabet_contains(&CSET82_BITFIELD, byte)
}

/// Whether `byte` belongs to CSET 39.
#[must_use]
pub fn is_cset39(byte: u8) -> bool {
    CSET39.contains(&byte)
}

/// Whether `byte` belongs to the CSET 64 alphabet, padding excluded.
#[must_use]
pub fn is_cset64(byte: u8) -> bool {
    alphabet_contains(&CSET64_BITFIELD, byte)
}

fn reject_outside(data: &[u8], accept: impl Fn(u8) -> bool, kind: LintErrorKind) -> LintResult {
    let valid = prefix_len(data, accept);
    if valid < data.len() {
        return Err(LintError::new(kind, valid, 1));
    }
    Ok(())
}

/// Ensures that every character of the component is in CSET 82.
///
/// # Errors
///
/// [`LintErrorKind::InvalidCset82Character`] at the first character outside
/// the alphabet.
///
/// # Examples
///
/// ```
/// use gs1syntax::lints::charset::cset82;
///
/// assert!(cset82(b"ABC-123/xyz").is_ok());
/// assert_eq!(cset82(b"AB C").unwrap_err().span().offset(), 2);
/// ```
pub fn cset82(data: &[u8]) -> LintResult {
    reject_outside(data, is_cset82, LintErrorKind::InvalidCset82Character)
}

/// Ensures that every character of the component is in CSET 39.
///
/// # Errors
///
/// [`LintErrorKind::InvalidCset39Character`] at the first character outside
/// the alphabet.
pub fn cset39(data: &[u8]) -> LintResult {
    reject_outside(data, is_cset39, LintErrorKind::InvalidCset39Character)
}

/// Ensures that the component is CSET 64 with valid trailing padding.
///
/// Up to two `=` pad characters may end the data, in which case the content
/// length plus the pad count must be a multiple of three.
///
/// # Errors
///
/// [`LintErrorKind::InvalidCset64Padding`] spanning the pad run, or
/// [`LintErrorKind::InvalidCset64Character`] at the first bad content
/// character.
pub fn cset64(data: &[u8]) -> LintResult {
    let pads = data.iter().rev().take_while(|&&byte| byte == CSET64_PAD).count();
    let content_len = data.len() - pads;
    if pads > 2 || (pads > 0 && data.len() % 3 != 0) {
        return Err(LintError::new(
            LintErrorKind::InvalidCset64Padding,
            content_len,
            pads,
        ));
    }

    let (content, _) = data.split_at(content_len);
    reject_outside(content, is_cset64, LintErrorKind::InvalidCset64Character)
}

/// Ensures that the component consists only of digits.
///
/// # Errors
///
/// [`LintErrorKind::NonDigitCharacter`] at the first non-digit.
pub fn csetnumeric(data: &[u8]) -> LintResult {
    require_digits(data)
}
