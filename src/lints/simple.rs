//! Linters for single flags, fixed values and small character rules.

use common::{LintError, LintErrorKind, LintResult};

use super::charset::is_cset64;
use super::{first_non_digit, require_digits};

/// Fails with `kind` over the whole input unless it is one of `accepted`.
fn one_of(data: &[u8], accepted: &[&[u8]], kind: LintErrorKind) -> LintResult {
    if accepted.contains(&data) {
        Ok(())
    } else {
        Err(LintError::whole(kind, data.len()))
    }
}

/// Fails with `kind` over the whole input unless it is a non-empty run of
/// `byte`.
fn repeated(data: &[u8], byte: u8, kind: LintErrorKind) -> LintResult {
    if !data.is_empty() && data.iter().all(|&candidate| candidate == byte) {
        Ok(())
    } else {
        Err(LintError::whole(kind, data.len()))
    }
}

/// Validates a numeric value other than zero.
///
/// # Errors
///
/// [`LintErrorKind::NonDigitCharacter`] at the first non-digit, otherwise
/// [`LintErrorKind::IllegalZeroValue`] over the whole input when every digit
/// is zero.
///
/// # Examples
///
/// ```
/// use gs1syntax::lints::simple::nonzero;
///
/// assert!(nonzero(b"0009").is_ok());
/// assert!(nonzero(b"000").is_err());
/// ```
pub fn nonzero(data: &[u8]) -> LintResult {
    require_digits(data)?;
    if data.iter().all(|&digit| digit == b'0') {
        return Err(LintError::whole(LintErrorKind::IllegalZeroValue, data.len()));
    }
    Ok(())
}

/// Validates a component made only of zeros.
///
/// # Errors
///
/// [`LintErrorKind::NotZero`] over the whole input when it is empty or holds
/// anything other than `0`.
pub fn zero(data: &[u8]) -> LintResult {
    repeated(data, b'0', LintErrorKind::NotZero)
}

/// Validates a number without a leading zero.
///
/// # Errors
///
/// [`LintErrorKind::NonDigitCharacter`] at the first non-digit, otherwise
/// [`LintErrorKind::IllegalZeroPrefix`] on a leading `0`.
pub fn nozeroprefix(data: &[u8]) -> LintResult {
    require_digits(data)?;
    if data.starts_with(b"0") {
        return Err(LintError::new(LintErrorKind::IllegalZeroPrefix, 0, 1));
    }
    Ok(())
}

/// Validates a boolean flag, `0` or `1`.
///
/// # Errors
///
/// [`LintErrorKind::NotZeroOrOne`] over the whole input.
pub fn yesno(data: &[u8]) -> LintResult {
    one_of(data, &[b"0", b"1"], LintErrorKind::NotZeroOrOne)
}

/// Validates a winding direction: `0` face out, `1` face in, `9` unknown.
///
/// # Errors
///
/// [`LintErrorKind::InvalidWindingDirection`] over the whole input.
pub fn winding(data: &[u8]) -> LintResult {
    one_of(data, &[b"0", b"1", b"9"], LintErrorKind::InvalidWindingDirection)
}

/// Validates a component made only of hyphens.
///
/// # Errors
///
/// [`LintErrorKind::NotHyphen`] over the whole input when it is empty or
/// holds anything other than `-`.
pub fn hyphen(data: &[u8]) -> LintResult {
    repeated(data, b'-', LintErrorKind::NotHyphen)
}

/// Validates an ISO/IEC 5218 biological sex code.
///
/// # Errors
///
/// [`LintErrorKind::InvalidBiologicalSexCode`] over the whole input unless
/// it is `0`, `1`, `2` or `9`.
pub fn iso5218(data: &[u8]) -> LintResult {
    one_of(
        data,
        &[b"0", b"1", b"2", b"9"],
        LintErrorKind::InvalidBiologicalSexCode,
    )
}

/// Validates an importer index: one character from the URI-safe base64
/// alphabet.
///
/// # Errors
///
/// [`LintErrorKind::ImporterIdxMustBeOneCharacter`] over the whole input
/// unless it is one byte, otherwise
/// [`LintErrorKind::InvalidImporterIdxCharacter`].
///
/// # Examples
///
/// ```
/// use common::LintErrorKind;
/// use gs1syntax::lints::simple::importeridx;
///
/// assert!(importeridx(b"_").is_ok());
/// let error = importeridx(b"=").unwrap_err();
/// assert_eq!(error.kind(), LintErrorKind::InvalidImporterIdxCharacter);
/// ```
pub fn importeridx(data: &[u8]) -> LintResult {
    let &[index] = data else {
        return Err(LintError::whole(
            LintErrorKind::ImporterIdxMustBeOneCharacter,
            data.len(),
        ));
    };
    if !is_cset64(index) {
        return Err(LintError::new(LintErrorKind::InvalidImporterIdxCharacter, 0, 1));
    }
    Ok(())
}

/// Validates that the component holds at least one non-digit.
///
/// # Errors
///
/// [`LintErrorKind::RequiresNonDigitCharacter`] over the whole input.
pub fn hasnondigit(data: &[u8]) -> LintResult {
    match first_non_digit(data) {
        Some(_) => Ok(()),
        None => Err(LintError::whole(
            LintErrorKind::RequiresNonDigitCharacter,
            data.len(),
        )),
    }
}

/// Validates the percent-encoding of a component: every `%` starts a `%hh`
/// sequence of two hex digits in either case.
///
/// # Errors
///
/// [`LintErrorKind::InvalidPercentSequence`] over the first bad sequence, or
/// from the `%` to the end of the input when fewer than two characters
/// follow it.
///
/// # Examples
///
/// ```
/// use gs1syntax::lints::simple::pcenc;
///
/// assert!(pcenc(b"ABC%20DEF").is_ok());
/// assert_eq!(pcenc(b"AB%g").unwrap_err().span().offset(), 2);
/// ```
pub fn pcenc(data: &[u8]) -> LintResult {
    let mut rest = data;
    while let Some(percent) = rest.iter().position(|&byte| byte == b'%') {
        let offset = data.len() - rest.len() + percent;
        let (_, sequence) = rest.split_at(percent);
        match sequence {
            [_, high, low, tail @ ..] => {
                if !high.is_ascii_hexdigit() || !low.is_ascii_hexdigit() {
                    return Err(LintError::new(LintErrorKind::InvalidPercentSequence, offset, 3));
                }
                rest = tail;
            }
            _ => {
                return Err(LintError::new(
                    LintErrorKind::InvalidPercentSequence,
                    offset,
                    sequence.len(),
                ));
            }
        }
    }
    Ok(())
}
