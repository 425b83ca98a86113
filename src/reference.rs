//! Reference-data hooks consulted by the linters that validate against an
//! external authority.
//!
//! Embedders replace the built-in tables by implementing [`ReferenceData`]
//! and passing it to the `*_with` variant of a linter (or to the registry).
//! Every method has a default backed by the tables compiled into this crate,
//! so an implementation only overrides the lookups it has a better source
//! for.
//!
//! The GCP lookup distinguishes "prefix not found" from "data source
//! unavailable". Whether an outage should fail open or closed is a decision
//! for the implementation: return [`GcpLookup::Valid`] to fail open or
//! [`GcpLookup::Offline`] to report the outage.

use std::collections::BTreeSet;

use crate::lints::codelist::tables;
use common::lookup::{bitfield_contains, contains_sorted};

/// Result of a GS1 Company Prefix lookup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GcpLookup {
    /// The data starts with an allocated GS1 Company Prefix.
    Valid,
    /// The data source was consulted and holds no matching prefix.
    NotFound,
    /// The data source could not be consulted.
    Offline,
}

/// Lookups the linters delegate to an embedder-supplied authority.
pub trait ReferenceData: Send + Sync {
    /// Looks up the GS1 Company Prefix that `data` starts with.
    ///
    /// `data` is the whole candidate, which is at least
    /// [`GCP_MIN_LENGTH`](crate::lints::gcp::GCP_MIN_LENGTH) bytes long with a
    /// numeric leading run of that length. The built-in data accepts every
    /// candidate.
    fn gcp(&self, data: &[u8]) -> GcpLookup {
        let _ = data;
        GcpLookup::Valid
    }

    /// Whether `code` is an ISO 3166 alpha-2 country code.
    fn iso3166_alpha2(&self, code: &[u8]) -> bool {
        builtin_iso3166_alpha2(code)
    }

    /// Whether `code` is an AIDC media type.
    fn media_type(&self, code: &[u8]) -> bool {
        contains_sorted(tables::MEDIA_TYPES, code)
    }

    /// Whether `code` is a UN/ECE Recommendation 21 PackageTypeCode.
    fn package_type(&self, code: &[u8]) -> bool {
        contains_sorted(tables::PACKAGE_TYPES, code)
    }
}

/// Reference data drawn entirely from the compiled-in tables.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BuiltinReferenceData;

impl ReferenceData for BuiltinReferenceData {}

/// Shared instance of the compiled-in reference data.
pub static BUILTIN: BuiltinReferenceData = BuiltinReferenceData;

/// Membership test against the packed ISO 3166 alpha-2 bit field.
///
/// The index of a code is `(c0 - 'A') * 26 + (c1 - 'A')`; anything other
/// than two uppercase ASCII letters is rejected.
///
/// # Examples
///
/// ```
/// use gs1syntax::reference::builtin_iso3166_alpha2;
///
/// assert!(builtin_iso3166_alpha2(b"GB"));
/// assert!(!builtin_iso3166_alpha2(b"XX"));
/// assert!(!builtin_iso3166_alpha2(b"gb"));
/// ```
#[must_use]
pub fn builtin_iso3166_alpha2(code: &[u8]) -> bool {
    match code {
        &[first, second] if first.is_ascii_uppercase() && second.is_ascii_uppercase() => {
            let index = usize::from(first - b'A') * 26 + usize::from(second - b'A');
            bitfield_contains(&tables::ISO3166_ALPHA2_BITFIELD, index)
        }
        _ => false,
    }
}

/// Reference data that treats a fixed list of GCPs as the authority.
///
/// A candidate is valid when it starts with one of the listed prefixes.
/// Setting `offline` makes every lookup report an unreachable data source.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PrefixListReferenceData {
    prefixes: BTreeSet<String>,
    offline: bool,
}

impl PrefixListReferenceData {
    /// Builds the hook from the allocated prefixes.
    ///
    /// # Examples
    ///
    /// ```
    /// use gs1syntax::reference::{GcpLookup, PrefixListReferenceData, ReferenceData};
    ///
    /// let data = PrefixListReferenceData::new(["0614141", "952"], false);
    /// assert_eq!(data.gcp(b"0614141000418"), GcpLookup::Valid);
    /// assert_eq!(data.gcp(b"0614142000418"), GcpLookup::NotFound);
    /// ```
    #[must_use]
    pub fn new<I, S>(prefixes: I, offline: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            prefixes: prefixes.into_iter().map(Into::into).collect(),
            offline,
        }
    }

    /// Number of distinct prefixes held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.prefixes.len()
    }

    /// Whether no prefixes are held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty()
    }

    /// Whether the hook reports the data source as unavailable.
    #[must_use]
    pub const fn is_offline(&self) -> bool {
        self.offline
    }
}

impl ReferenceData for PrefixListReferenceData {
    fn gcp(&self, data: &[u8]) -> GcpLookup {
        if self.offline {
            return GcpLookup::Offline;
        }
        let found = (1..=data.len())
            .filter_map(|len| data.get(..len))
            .filter_map(|candidate| std::str::from_utf8(candidate).ok())
            .any(|candidate| self.prefixes.contains(candidate));
        if found {
            GcpLookup::Valid
        } else {
            GcpLookup::NotFound
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    /// ISO 3166-1 alpha-2 codes in alphabetical order.
    const ALPHA2_CODES: &str = "AD AE AF AG AI AL AM AO AQ AR AS AT AU AW AX AZ BA BB BD BE BF BG \
        BH BI BJ BL BM BN BO BQ BR BS BT BV BW BY BZ CA CC CD CF CG CH CI CK CL CM CN CO CR CU CV \
        CW CX CY CZ DE DJ DK DM DO DZ EC EE EG EH ER ES ET FI FJ FK FM FO FR GA GB GD GE GF GG GH \
        GI GL GM GN GP GQ GR GS GT GU GW GY HK HM HN HR HT HU ID IE IL IM IN IO IQ IR IS IT JE JM \
        JO JP KE KG KH KI KM KN KP KR KW KY KZ LA LB LC LI LK LR LS LT LU LV LY MA MC MD ME MF MG \
        MH MK ML MM MN MO MP MQ MR MS MT MU MV MW MX MY MZ NA NC NE NF NG NI NL NO NP NR NU NZ OM \
        PA PE PF PG PH PK PL PM PN PR PS PT PW PY QA RE RO RS RU RW SA SB SC SD SE SG SH SI SJ SK \
        SL SM SN SO SR SS ST SV SX SY SZ TC TD TF TG TH TJ TK TL TM TN TO TR TT TV TW TZ UA UG UM \
        US UY UZ VA VC VE VG VI VN VU WF WS YE YT ZA ZM ZW";

    #[rstest]
    fn alpha2_bitfield_matches_the_canonical_list_exactly() {
        let canonical: BTreeSet<&str> = ALPHA2_CODES.split_whitespace().collect();
        assert_eq!(canonical.len(), 249);

        for first in b'A'..=b'Z' {
            for second in b'A'..=b'Z' {
                let code = [first, second];
                let text = std::str::from_utf8(&code).expect("ASCII letters");
                assert_eq!(
                    builtin_iso3166_alpha2(&code),
                    canonical.contains(text),
                    "mismatch for {text}"
                );
            }
        }
    }

    #[rstest]
    #[case(b"")]
    #[case(b"G")]
    #[case(b"GBR")]
    #[case(b"G1")]
    #[case(b"@A")]
    #[case(b"[A")]
    fn alpha2_rejects_malformed_codes(#[case] code: &[u8]) {
        assert!(!builtin_iso3166_alpha2(code));
    }

    #[rstest]
    fn builtin_accepts_every_gcp() {
        assert_eq!(BUILTIN.gcp(b"0000"), GcpLookup::Valid);
    }

    #[rstest]
    fn prefix_list_reports_outages_before_lookups() {
        let data = PrefixListReferenceData::new(["0614141"], true);

        assert!(data.is_offline());
        assert_eq!(data.gcp(b"0614141000418"), GcpLookup::Offline);
    }

    #[rstest]
    #[case(b"9520001", GcpLookup::Valid)]
    #[case(b"9510001", GcpLookup::Valid)]
    #[case(b"95", GcpLookup::Valid)]
    #[case(b"9", GcpLookup::NotFound)]
    #[case(b"9610001", GcpLookup::NotFound)]
    #[case(b"0614141", GcpLookup::Valid)]
    #[case(b"061414", GcpLookup::NotFound)]
    #[case(b"", GcpLookup::NotFound)]
    fn prefix_list_matches_any_listed_prefix(#[case] candidate: &[u8], #[case] expected: GcpLookup) {
        let data = PrefixListReferenceData::new(["95", "951", "0614141", "0614141"], false);

        assert_eq!(data.len(), 3);
        assert_eq!(data.gcp(candidate), expected);
    }

    #[rstest]
    fn prefix_list_keeps_the_builtin_code_lists() {
        let data = PrefixListReferenceData::default();

        assert!(data.is_empty());
        assert!(data.iso3166_alpha2(b"FR"));
        assert!(data.media_type(b"01"));
        assert!(data.package_type(b"1A"));
    }
}
