//! Lookup primitives for the constant reference tables.
//!
//! Code lists are stored as ascending arrays of strings and searched with a
//! binary search. Small alphabets and dense two-letter code spaces are stored
//! as packed bit fields where bit `n` is found in word `n / 64`, counting from
//! the most significant bit.

use std::cmp::Ordering;

/// Returns `true` when `needle` occurs in the ascending `haystack`.
///
/// Comparison is bytewise, so the table must be sorted by byte value.
///
/// # Examples
///
/// ```
/// use common::lookup::contains_sorted;
///
/// const CODES: &[&str] = &["008", "012", "016"];
/// assert!(contains_sorted(CODES, b"012"));
/// assert!(!contains_sorted(CODES, b"013"));
/// ```
#[must_use]
pub fn contains_sorted(haystack: &[&str], needle: &[u8]) -> bool {
    haystack
        .binary_search_by(|entry| entry.as_bytes().cmp(needle))
        .is_ok()
}

/// Returns `true` when bit `bit` is set in `field`, addressed MSB-first.
///
/// Bits beyond the end of the field read as unset.
///
/// # Examples
///
/// ```
/// use common::lookup::bitfield_contains;
///
/// let field = [0x8000_0000_0000_0001_u64, 0x4000_0000_0000_0000];
/// assert!(bitfield_contains(&field, 0));
/// assert!(bitfield_contains(&field, 63));
/// assert!(bitfield_contains(&field, 65));
/// assert!(!bitfield_contains(&field, 64));
/// assert!(!bitfield_contains(&field, 500));
/// ```
#[must_use]
pub fn bitfield_contains(field: &[u64], bit: usize) -> bool {
    field
        .get(bit / 64)
        .is_some_and(|word| word & (1_u64 << (63 - bit % 64)) != 0)
}

/// Returns `true` when the byte `value` is a member of a 256-bit alphabet.
#[must_use]
pub fn alphabet_contains(alphabet: &[u64; 4], value: u8) -> bool {
    bitfield_contains(alphabet, usize::from(value))
}

/// Length of the longest prefix of `data` whose bytes satisfy `accept`.
///
/// # Examples
///
/// ```
/// use common::lookup::prefix_len;
///
/// assert_eq!(prefix_len(b"123a5", |byte| byte.is_ascii_digit()), 3);
/// assert_eq!(prefix_len(b"", |byte| byte.is_ascii_digit()), 0);
/// ```
#[must_use]
pub fn prefix_len(data: &[u8], accept: impl Fn(u8) -> bool) -> usize {
    data.iter().take_while(|&&byte| accept(byte)).count()
}

/// Position of the first pair of adjacent entries that are not strictly
/// ascending, if any.
///
/// Used by tests to machine-check the sortedness of constant tables.
#[must_use]
pub fn first_unsorted<T: Ord>(entries: &[T]) -> Option<usize> {
    entries
        .windows(2)
        .position(|pair| matches!(pair, [left, right] if left.cmp(right) != Ordering::Less))
}
