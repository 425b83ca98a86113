//! Linters for "n of total" style components.

use common::{LintError, LintErrorKind, LintResult};

use super::{first_non_digit, require_digits};

/// Compares two unsigned decimal strings without leading zeros by value.
fn exceeds(position: &[u8], end: &[u8]) -> bool {
    position.len() > end.len() || (position.len() == end.len() && position > end)
}

/// Validates a piece number followed by a total piece count of the same
/// width, such as `0304` for piece 3 of 4.
///
/// # Errors
///
/// * [`LintErrorKind::InvalidLengthForPieceOfTotal`] over the whole input
///   when it is empty or of odd length.
/// * [`LintErrorKind::NonDigitCharacter`] at the first non-digit.
/// * [`LintErrorKind::ZeroPieceNumber`] or [`LintErrorKind::ZeroTotalPieces`]
///   over the offending half.
/// * [`LintErrorKind::PieceNumberExceedsTotal`] over the whole input.
///
/// # Examples
///
/// ```
/// use gs1syntax::lints::sequence::pieceoftotal;
///
/// assert!(pieceoftotal(b"0304").is_ok());
/// assert!(pieceoftotal(b"0403").is_err());
/// ```
pub fn pieceoftotal(data: &[u8]) -> LintResult {
    if data.is_empty() || data.len() % 2 != 0 {
        return Err(LintError::whole(
            LintErrorKind::InvalidLengthForPieceOfTotal,
            data.len(),
        ));
    }
    require_digits(data)?;

    let half = data.len() / 2;
    let (piece, total) = data.split_at(half);
    let is_zero = |digits: &[u8]| digits.iter().all(|&digit| digit == b'0');
    if is_zero(piece) {
        return Err(LintError::new(LintErrorKind::ZeroPieceNumber, 0, half));
    }
    if is_zero(total) {
        return Err(LintError::new(LintErrorKind::ZeroTotalPieces, half, half));
    }
    if piece > total {
        return Err(LintError::whole(
            LintErrorKind::PieceNumberExceedsTotal,
            data.len(),
        ));
    }
    Ok(())
}

/// Validates a position in a sequence written as `position/end`.
///
/// Both numbers must be present, free of leading zeros, and the position
/// must not exceed the end.
///
/// # Errors
///
/// * [`LintErrorKind::PositionInSequenceMalformed`] over the whole input
///   unless it is digits, one slash, then digits.
/// * [`LintErrorKind::IllegalZeroPrefix`] over the number with a leading
///   zero.
/// * [`LintErrorKind::PositionExceedsEnd`] over the whole input.
pub fn posinseqslash(data: &[u8]) -> LintResult {
    let malformed = LintError::whole(LintErrorKind::PositionInSequenceMalformed, data.len());

    let slash = first_non_digit(data).ok_or(malformed)?;
    let (position, rest) = data.split_at(slash);
    let Some((b'/', end)) = rest.split_first() else {
        return Err(malformed);
    };
    if position.is_empty() || end.is_empty() || first_non_digit(end).is_some() {
        return Err(malformed);
    }

    if position.starts_with(b"0") {
        return Err(LintError::new(LintErrorKind::IllegalZeroPrefix, 0, position.len()));
    }
    if end.starts_with(b"0") {
        return Err(LintError::new(
            LintErrorKind::IllegalZeroPrefix,
            slash + 1,
            end.len(),
        ));
    }

    if exceeds(position, end) {
        return Err(LintError::whole(LintErrorKind::PositionExceedsEnd, data.len()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::test_support::{assert_lint_fails, assert_lint_passes};
    use rstest::rstest;

    #[rstest]
    #[case(b"11")]
    #[case(b"0304")]
    #[case(b"0404")]
    #[case(b"001999")]
    fn accepts_pieces_within_the_total(#[case] data: &[u8]) {
        assert_lint_passes(pieceoftotal, data);
    }

    #[rstest]
    #[case("**", LintErrorKind::InvalidLengthForPieceOfTotal)]
    #[case("*123*", LintErrorKind::InvalidLengthForPieceOfTotal)]
    #[case("01*A*2", LintErrorKind::NonDigitCharacter)]
    #[case("*00*04", LintErrorKind::ZeroPieceNumber)]
    #[case("*00*00", LintErrorKind::ZeroPieceNumber)]
    #[case("03*00*", LintErrorKind::ZeroTotalPieces)]
    #[case("*0403*", LintErrorKind::PieceNumberExceedsTotal)]
    #[case("*21*", LintErrorKind::PieceNumberExceedsTotal)]
    fn rejects_malformed_pieces(#[case] marked: &str, #[case] kind: LintErrorKind) {
        assert_lint_fails(pieceoftotal, marked, kind);
    }

    #[rstest]
    #[case(b"1/1")]
    #[case(b"1/9")]
    #[case(b"9/10")]
    #[case(b"10/10")]
    #[case(b"123/999")]
    fn accepts_positions_within_the_sequence(#[case] data: &[u8]) {
        assert_lint_passes(posinseqslash, data);
    }

    #[rstest]
    #[case("**", LintErrorKind::PositionInSequenceMalformed)]
    #[case("*/*", LintErrorKind::PositionInSequenceMalformed)]
    #[case("*1/*", LintErrorKind::PositionInSequenceMalformed)]
    #[case("*/1*", LintErrorKind::PositionInSequenceMalformed)]
    #[case("*12*", LintErrorKind::PositionInSequenceMalformed)]
    #[case("*1/2/3*", LintErrorKind::PositionInSequenceMalformed)]
    #[case("*1-2*", LintErrorKind::PositionInSequenceMalformed)]
    #[case("*1/A*", LintErrorKind::PositionInSequenceMalformed)]
    #[case("*01*/10", LintErrorKind::IllegalZeroPrefix)]
    #[case("1/*010*", LintErrorKind::IllegalZeroPrefix)]
    #[case("*0*/0", LintErrorKind::IllegalZeroPrefix)]
    #[case("*2/1*", LintErrorKind::PositionExceedsEnd)]
    #[case("*10/9*", LintErrorKind::PositionExceedsEnd)]
    #[case("*124/123*", LintErrorKind::PositionExceedsEnd)]
    fn rejects_malformed_positions(#[case] marked: &str, #[case] kind: LintErrorKind) {
        assert_lint_fails(posinseqslash, marked, kind);
    }
}
