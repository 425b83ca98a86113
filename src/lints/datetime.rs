//! Date and time-of-day linters.
//!
//! Dates are validated against the Gregorian calendar. The `d0` forms accept
//! a day of `00`, meaning "end of month"; the `dd` forms reject it. Two-digit
//! years are placed in a century using a sliding horizon around
//! [`CURRENT_YEAR`].

use std::cmp::Ordering;

use common::{LintError, LintErrorKind, LintResult};

use super::{decimal_value, require_digits};

/// Two-digit year of the reference point for the century horizon.
///
/// Years more than 50 ahead of it fall in the previous century, and years
/// 50 or more behind it fall in the next one.
pub const CURRENT_YEAR: u64 = 21;

const YYYYMMDD_LENGTH: usize = 8;
const YYMMDD_LENGTH: usize = 6;

/// Whether `year` is a leap year in the Gregorian calendar.
#[must_use]
pub const fn is_leap_year(year: u64) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` (1 to 12) of `year`, or zero for any other
/// month.
#[must_use]
pub const fn days_in_month(year: u64, month: u64) -> u64 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Full year for a two-digit year, following the [`CURRENT_YEAR`] horizon.
#[must_use]
pub const fn expand_year(yy: u64) -> u64 {
    let century = if yy >= CURRENT_YEAR + 51 {
        19
    } else if yy + 50 > CURRENT_YEAR {
        20
    } else {
        21
    };
    century * 100 + yy
}

/// Checks that a date is all digits and exactly `width` long.
///
/// Only the first `width` characters are checked for digits, so an overlong
/// date reports its length over the date plus the first extra character.
fn require_date_shape(data: &[u8], width: usize) -> LintResult {
    let (checked, _) = data.split_at(data.len().min(width));
    require_digits(checked)?;
    match data.len().cmp(&width) {
        Ordering::Less => Err(LintError::whole(LintErrorKind::DateTooShort, data.len())),
        Ordering::Greater => Err(LintError::new(LintErrorKind::DateTooLong, 0, width + 1)),
        Ordering::Equal => Ok(()),
    }
}

/// Validates a `YYYYMMDD` date whose day may be `00`.
///
/// # Errors
///
/// * [`LintErrorKind::NonDigitCharacter`] at the first non-digit.
/// * [`LintErrorKind::DateTooShort`] over the whole input.
/// * [`LintErrorKind::DateTooLong`] over the date and the first extra
///   character.
/// * [`LintErrorKind::IllegalMonth`] over the month.
/// * [`LintErrorKind::IllegalDay`] over the day.
pub fn yyyymmd0(data: &[u8]) -> LintResult {
    require_date_shape(data, YYYYMMDD_LENGTH)?;

    let (year, rest) = data.split_at(4);
    let (month, day) = rest.split_at(2);
    let month_value = decimal_value(month);
    if !(1..=12).contains(&month_value) {
        return Err(LintError::new(LintErrorKind::IllegalMonth, 4, 2));
    }
    if decimal_value(day) > days_in_month(decimal_value(year), month_value) {
        return Err(LintError::new(LintErrorKind::IllegalDay, 6, 2));
    }
    Ok(())
}

/// Validates a `YYYYMMDD` date.
///
/// # Errors
///
/// As [`yyyymmd0`], and [`LintErrorKind::IllegalDay`] for a day of `00`.
///
/// # Examples
///
/// ```
/// use gs1syntax::lints::datetime::yyyymmdd;
///
/// assert!(yyyymmdd(b"20000229").is_ok());
/// assert!(yyyymmdd(b"19000229").is_err());
/// ```
pub fn yyyymmdd(data: &[u8]) -> LintResult {
    yyyymmd0(data)?;
    if data.ends_with(b"00") {
        return Err(LintError::new(LintErrorKind::IllegalDay, 6, 2));
    }
    Ok(())
}

/// Validates a `YYMMDD` date whose day may be `00`.
///
/// # Errors
///
/// As [`yyyymmd0`], with spans in the coordinates of the six-digit input.
pub fn yymmd0(data: &[u8]) -> LintResult {
    require_date_shape(data, YYMMDD_LENGTH)?;
    let &[y0, y1, m0, m1, d0, d1] = data else {
        return Err(LintError::whole(LintErrorKind::DateTooShort, data.len()));
    };

    let year = expand_year(decimal_value(&[y0, y1]));
    let [c0, c1] = [year / 1000 % 10, year / 100 % 10].map(|digit| b'0' + digit_byte(digit));
    let full = [c0, c1, y0, y1, m0, m1, d0, d1];

    yyyymmd0(&full).map_err(|error| LintError::with_span(error.kind(), error.span().unshifted(2)))
}

/// Validates a `YYMMDD` date.
///
/// # Errors
///
/// As [`yymmd0`], and [`LintErrorKind::IllegalDay`] for a day of `00`.
///
/// # Examples
///
/// ```
/// use common::LintErrorKind;
/// use gs1syntax::lints::datetime::yymmdd;
///
/// assert!(yymmdd(b"200229").is_ok());
/// let error = yymmdd(b"210229").unwrap_err();
/// assert_eq!(error.kind(), LintErrorKind::IllegalDay);
/// assert_eq!(error.span().offset(), 4);
/// ```
pub fn yymmdd(data: &[u8]) -> LintResult {
    yymmd0(data)?;
    if data.ends_with(b"00") {
        return Err(LintError::new(LintErrorKind::IllegalDay, 4, 2));
    }
    Ok(())
}

fn digit_byte(digit: u64) -> u8 {
    u8::try_from(digit % 10).unwrap_or_default()
}

/// Kinds reported by one fixed two-digit time field.
struct TimeField {
    too_short: LintErrorKind,
    too_long: LintErrorKind,
    illegal: LintErrorKind,
    max: u64,
}

impl TimeField {
    fn check(&self, data: &[u8]) -> LintResult {
        match data.len().cmp(&2) {
            Ordering::Less => return Err(LintError::whole(self.too_short, data.len())),
            Ordering::Greater => return Err(LintError::whole(self.too_long, data.len())),
            Ordering::Equal => {}
        }
        require_digits(data)?;
        if decimal_value(data) > self.max {
            return Err(LintError::whole(self.illegal, 2));
        }
        Ok(())
    }
}

const HOUR: TimeField = TimeField {
    too_short: LintErrorKind::HourTooShort,
    too_long: LintErrorKind::HourTooLong,
    illegal: LintErrorKind::IllegalHour,
    max: 23,
};

const MINUTE: TimeField = TimeField {
    too_short: LintErrorKind::MinuteTooShort,
    too_long: LintErrorKind::MinuteTooLong,
    illegal: LintErrorKind::IllegalMinute,
    max: 59,
};

const SECOND: TimeField = TimeField {
    too_short: LintErrorKind::SecondTooShort,
    too_long: LintErrorKind::SecondTooLong,
    illegal: LintErrorKind::IllegalSecond,
    max: 59,
};

/// Validates a two-digit hour, `00` to `23`.
///
/// # Errors
///
/// [`LintErrorKind::HourTooShort`] or [`LintErrorKind::HourTooLong`] over the
/// whole input, [`LintErrorKind::NonDigitCharacter`] at the first non-digit,
/// then [`LintErrorKind::IllegalHour`].
pub fn hh(data: &[u8]) -> LintResult {
    HOUR.check(data)
}

/// Validates a two-digit minute, `00` to `59`.
///
/// # Errors
///
/// As [`hh`], with the minute kinds.
pub fn mi(data: &[u8]) -> LintResult {
    MINUTE.check(data)
}

/// Validates a two-digit second, `00` to `59`.
///
/// # Errors
///
/// As [`hh`], with the second kinds.
pub fn ss(data: &[u8]) -> LintResult {
    SECOND.check(data)
}

/// Validates an `HHMI` time of day.
///
/// # Errors
///
/// [`LintErrorKind::HourWithMinuteTooShort`] or
/// [`LintErrorKind::HourWithMinuteTooLong`] over the whole input, then the
/// failures of [`hh`] and [`mi`] in place.
pub fn hhmi(data: &[u8]) -> LintResult {
    match data.len().cmp(&4) {
        Ordering::Less => {
            return Err(LintError::whole(LintErrorKind::HourWithMinuteTooShort, data.len()));
        }
        Ordering::Greater => {
            return Err(LintError::whole(LintErrorKind::HourWithMinuteTooLong, data.len()));
        }
        Ordering::Equal => {}
    }
    let (hour, minute) = data.split_at(2);
    hh(hour)?;
    mi(minute).map_err(|error| error.shifted(2))
}
