//! Known-answer scenarios for the headline linters.

use common::{LintErrorKind, LintResult};
use gs1syntax::lints::{checksum, coupon, datetime, gcp, iban};
use rstest::rstest;

fn failure(outcome: LintResult) -> (LintErrorKind, usize, usize) {
    let error = outcome.expect_err("the linter should fail");
    (error.kind(), error.span().offset(), error.span().length())
}

#[rstest]
fn csum_checks_the_trailing_digit() {
    assert_eq!(checksum::csum(b"02345673"), Ok(()));
    assert_eq!(
        failure(checksum::csum(b"12345673")),
        (LintErrorKind::IncorrectCheckDigit, 7, 1)
    );
}

#[rstest]
fn csumalpha_accepts_a_known_pair() {
    assert_eq!(checksum::csumalpha(b"1987654Ad4X4bL5ttr2310c2K"), Ok(()));
}

#[rstest]
fn iban_checks_the_mod_97_remainder() {
    assert_eq!(iban::iban(b"FR7630006000011234567890189"), Ok(()));
    assert_eq!(
        failure(iban::iban(b"BE71096123456760")),
        (LintErrorKind::IncorrectIbanChecksum, 2, 2)
    );
}

#[rstest]
fn yymmdd_knows_leap_years() {
    assert_eq!(datetime::yymmdd(b"200229"), Ok(()));
    assert_eq!(
        failure(datetime::yymmdd(b"210229")),
        (LintErrorKind::IllegalDay, 4, 2)
    );
}

#[rstest]
fn couponcode_needs_a_gcp_vli() {
    assert_eq!(coupon::couponcode(b"012345612345611110123"), Ok(()));
    assert_eq!(
        failure(coupon::couponcode(b"")),
        (LintErrorKind::CouponMissingGcpVli, 0, 0)
    );
}

#[rstest]
fn gcppos1_needs_the_shortest_gcp() {
    assert_eq!(gcp::gcppos1(b"0123"), Ok(()));
    assert_eq!(
        failure(gcp::gcppos1(b"012")),
        (LintErrorKind::TooShortForGcp, 0, 3)
    );
}
