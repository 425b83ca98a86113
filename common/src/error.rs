//! Error taxonomy shared by every linter.
//!
//! Each [`LintErrorKind`] carries a fixed ordinal. Ordinals form a stable,
//! append-only contract: consumers may persist them or switch on them, so a
//! retired ordinal is never reassigned. Ordinal 0 means "no issues" and has
//! no variant of its own; a clean lint is `Ok(())`.
//!
//! The English sentence for each ordinal is available through
//! [`LintErrorKind::description`] and the ordinal-indexed
//! [`ERROR_STRINGS_EN`] table.

/// Ordinal reserved for the absence of an error.
pub const OK_ORDINAL: u16 = 0;

/// Description reported for [`OK_ORDINAL`].
pub const OK_DESCRIPTION: &str = "No issues were detected by the linter.";

/// Ordinals retired from earlier releases. They map to an empty description.
pub const RETIRED_ORDINALS: &[u16] = &[11, 30, 31, 32, 35, 102];

macro_rules! lint_error_kinds {
    ($($variant:ident = $ordinal:literal => $text:literal,)+) => {
        /// Reason a linter rejected its input.
        ///
        /// Variant discriminants are the public ordinals.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[repr(u16)]
        pub enum LintErrorKind {
            $(
                #[doc = $text]
                $variant = $ordinal,
            )+
        }

        impl LintErrorKind {
            /// Every kind in ascending ordinal order.
            pub const ALL: &'static [Self] = &[$(Self::$variant,)+];

            /// Looks up a kind by its ordinal.
            ///
            /// Returns `None` for [`OK_ORDINAL`], for retired ordinals and for
            /// ordinals beyond the end of the taxonomy.
            ///
            /// # Examples
            ///
            /// ```
            /// use common::error::LintErrorKind;
            ///
            /// assert_eq!(LintErrorKind::from_ordinal(5), Some(LintErrorKind::IncorrectCheckDigit));
            /// assert_eq!(LintErrorKind::from_ordinal(11), None);
            /// ```
            #[must_use]
            pub const fn from_ordinal(ordinal: u16) -> Option<Self> {
                match ordinal {
                    $($ordinal => Some(Self::$variant),)+
                    _ => None,
                }
            }

            /// Returns the fixed English sentence describing the kind.
            #[must_use]
            pub const fn description(self) -> &'static str {
                match self {
                    $(Self::$variant => $text,)+
                }
            }
        }
    };
}

lint_error_kinds! {
    NonDigitCharacter = 1 => "A non-digit character was found where a digit is expected.",
    InvalidCset82Character = 2 => "A non-CSET 82 character was found where a CSET 82 character is expected.",
    InvalidCset39Character = 3 => "A non-CSET 39 character was found where a CSET 39 character is expected.",
    InvalidCset32Character = 4 => "A non-CSET 32 character was found where a CSET 32 character is expected.",
    IncorrectCheckDigit = 5 => "The numeric check digit is incorrect.",
    TooShortForCheckDigit = 6 => "The component is too short to perform a numeric check digit calculation.",
    IncorrectCheckPair = 7 => "The alphanumeric check-character pair are incorrect.",
    TooShortForCheckPair = 8 => "The component is too short to perform an alphanumeric check character pair calculation.",
    TooLongForCheckPairImplementation = 9 => "The component is too long to perform an alphanumeric check character pair calculation.",
    GcpDatasourceOffline = 10 => "The data source for GCP lookups is offline.",
    InvalidGcpPrefix = 12 => "The GS1 Company Prefix is invalid.",
    ImporterIdxMustBeOneCharacter = 13 => "The Importer Index must be a single character.",
    InvalidImporterIdxCharacter = 14 => "The Importer Index is an invalid character.",
    IllegalZeroValue = 15 => "A non-zero value is required.",
    NotZero = 16 => "A zero is required.",
    IllegalZeroPrefix = 17 => "A zero prefix is not permitted.",
    NotZeroOrOne = 18 => "A \"0\" or \"1\" is required.",
    InvalidWindingDirection = 19 => "The winding direction must be either \"0\", \"1\" or \"9\".",
    NotIso3166 = 20 => "A valid ISO 3166 three-digit country code is required.",
    NotIso3166Or999 = 21 => "A valid ISO 3166 three-digit country code or \"999\" is required.",
    NotIso3166Alpha2 = 22 => "A valid ISO 3166 two-character country code is required.",
    NotIso4217 = 23 => "A valid ISO 4217 three-digit currency code is required.",
    IbanTooShort = 24 => "The IBAN is too short.",
    InvalidIbanCharacter = 25 => "The IBAN contains an invalid character.",
    IllegalIbanCountryCode = 26 => "The IBAN must start with a valid ISO 3166 two-character country code.",
    IncorrectIbanChecksum = 27 => "The IBAN is invalid since the check characters are incorrect.",
    DateTooShort = 28 => "The date is too short.",
    DateTooLong = 29 => "The date is too long.",
    HourWithMinuteTooShort = 33 => "The hour with minute is too short for HHMI format.",
    HourWithMinuteTooLong = 34 => "The hour with minute is too long for HHMI format.",
    IllegalMonth = 36 => "The date contains an illegal month of the year.",
    IllegalDay = 37 => "The date contains an illegal day of the month.",
    IllegalHour = 38 => "The time contains an illegal hour.",
    IllegalMinute = 39 => "The time contains an illegal minute.",
    IllegalSecond = 40 => "The time contains an illegal seconds.",
    InvalidLengthForPieceOfTotal = 41 => "The piece with total must have an even length, having equal-length components.",
    ZeroPieceNumber = 42 => "The piece number must not have a value of zero.",
    ZeroTotalPieces = 43 => "The piece total must not have a value of zero.",
    PieceNumberExceedsTotal = 44 => "The piece number must not exceed the piece total.",
    InvalidPercentSequence = 45 => "The input contains an invalid percent hex-encoding \"%hh\" sequence.",
    CouponMissingFormatCode = 46 => "The coupon's Format Code is missing.",
    CouponInvalidFormatCode = 47 => "The coupon's Format Code must be \"0\" or \"1\".",
    CouponMissingFunderVli = 48 => "The coupon's Funder VLI is missing.",
    CouponInvalidFunderLength = 49 => "The coupon's Funder VLI must be \"0\" to \"6\".",
    CouponTruncatedFunder = 50 => "The coupon's Funder is shorter than what is indicated by its VLI.",
    CouponTruncatedOfferCode = 51 => "The coupon's Offer Code is shorter than the required six digits.",
    CouponMissingSerialNumberVli = 52 => "The coupon's Serial Number VLI is missing.",
    CouponTruncatedSerialNumber = 53 => "The coupon's Serial Number is shorter than what is indicated by its VLI.",
    CouponMissingGcpVli = 54 => "The coupon's primary GS1 Company Prefix VLI is missing.",
    CouponInvalidGcpLength = 55 => "The coupon's primary GS1 Company Prefix VLI must be \"0\" to \"6\".",
    CouponTruncatedGcp = 56 => "The coupon's primary GS1 Company Prefix is shorter than what is indicated by its VLI.",
    CouponMissingSaveValueVli = 57 => "The coupon's Save Value VLI is missing.",
    CouponInvalidSaveValueLength = 58 => "The coupon's Save Value VLI must be \"1\" to \"5\".",
    CouponTruncatedSaveValue = 59 => "The coupon's Save Value is shorter than what is indicated by its VLI.",
    CouponMissingFirstPurchaseRequirementVli = 60 => "The coupon's primary purchase Requirement VLI is missing.",
    CouponInvalidFirstPurchaseRequirementLength = 61 => "The coupon's primary purchase Requirement VLI must be \"1\" to \"5\".",
    CouponTruncatedFirstPurchaseRequirement = 62 => "The coupon's primary purchase Requirement is shorter than what is indicated by its VLI.",
    CouponMissingFirstPurchaseRequirementCode = 63 => "The coupon's primary purchase Requirement Code is missing.",
    CouponInvalidFirstPurchaseRequirementCode = 64 => "The coupon's primary purchase Requirement Code must be \"0\" to \"4\" or \"9\".",
    CouponTruncatedFirstPurchaseFamilyCode = 65 => "The coupon's primary purchase Family Code is shorter than the required three digits.",
    CouponMissingAdditionalPurchaseRulesCode = 66 => "The coupon's Additional Purchase Rules Code is missing.",
    CouponInvalidAdditionalPurchaseRulesCode = 67 => "The coupon's Additional Purchase Rules Code must be \"0\" to \"3\".",
    CouponMissingSecondPurchaseRequirementVli = 68 => "The coupon's second purchase Requirement VLI is missing.",
    CouponInvalidSecondPurchaseRequirementLength = 69 => "The coupon's second purchase Requirement VLI must be \"1\" to \"5\".",
    CouponTruncatedSecondPurchaseRequirement = 70 => "The coupon's second purchase Requirement is shorter than what is indicated by its VLI.",
    CouponMissingSecondPurchaseRequirementCode = 71 => "The coupon's second purchase Requirement Code is missing.",
    CouponInvalidSecondPurchaseRequirementCode = 72 => "The coupon's second purchase Requirement Code must be \"0\" to \"4\" or \"9\".",
    CouponTruncatedSecondPurchaseFamilyCode = 73 => "The coupon's second purchase Family Code is shorter than the required three digits.",
    CouponMissingSecondPurchaseGcpVli = 74 => "The coupon's second purchase GS1 Company Prefix VLI is missing.",
    CouponInvalidSecondPurchaseGcpLength = 75 => "The coupon's second purchase GS1 Company Prefix VLI must be \"0\" to \"6\" or \"9\".",
    CouponTruncatedSecondPurchaseGcp = 76 => "The coupon's second purchase GS1 Company Prefix is shorter than what is indicated by its VLI.",
    CouponMissingThirdPurchaseRequirementVli = 77 => "The coupon's third purchase Requirement VLI is missing.",
    CouponInvalidThirdPurchaseRequirementLength = 78 => "The coupon's third purchase Requirement VLI must be \"1\" to \"5\".",
    CouponTruncatedThirdPurchaseRequirement = 79 => "The coupon's third purchase Requirement is shorter than what is indicated by its VLI.",
    CouponMissingThirdPurchaseRequirementCode = 80 => "The coupon's third purchase Requirement Code is missing.",
    CouponInvalidThirdPurchaseRequirementCode = 81 => "The coupon's third purchase Requirement Code must be \"0\" to \"4\" or \"9\".",
    CouponTruncatedThirdPurchaseFamilyCode = 82 => "The coupon's third purchase Family Code is shorter than the required three digits.",
    CouponMissingThirdPurchaseGcpVli = 83 => "The coupon's third purchase GS1 Company Prefix VLI is missing.",
    CouponInvalidThirdPurchaseGcpLength = 84 => "The coupon's third purchase GS1 Company Prefix VLI must be \"0\" to \"6\" or \"9\".",
    CouponTruncatedThirdPurchaseGcp = 85 => "The coupon's third purchase GS1 Company Prefix is shorter than what is indicated by its VLI.",
    CouponTooShortForExpirationDate = 86 => "The coupon's expiration date is too short for YYMMDD format.",
    CouponInvalidExpirationDate = 87 => "The coupon's expiration date is invalid.",
    CouponTooShortForStartDate = 88 => "The coupon's start date is too short to YYMMDD format.",
    CouponInvalidStartDate = 89 => "The coupon's start date is invalid.",
    CouponExpirationBeforeStart = 90 => "The coupon's expiration date precede the start date.",
    CouponMissingRetailerGcpOrGlnVli = 91 => "The coupon's Retailer GCP/GLN VLI is missing.",
    CouponInvalidRetailerGcpOrGlnLength = 92 => "The coupon's Retailer GCP/GLN VLI must be \"1\" to \"7\".",
    CouponTruncatedRetailerGcpOrGln = 93 => "The coupon's Retailer GCP/GLN is shorter than what is indicated by its VLI.",
    CouponMissingSaveValueCode = 94 => "The coupon's Save Value Code is missing.",
    CouponInvalidSaveValueCode = 95 => "The coupon's Save Value Code must be \"0\", \"1\", \"2\", \"5\" or \"6\".",
    CouponMissingSaveValueAppliesToItem = 96 => "The coupon's Save Value Applies to Item is missing.",
    CouponInvalidSaveValueAppliesToItem = 97 => "The coupon's Save Value Applies to Item must be \"0\" to \"2\".",
    CouponMissingStoreCouponFlag = 98 => "The coupon's Store Coupon Flag is missing.",
    CouponMissingDontMultiplyFlag = 99 => "The coupon's Don't Multiply Flag is missing.",
    CouponInvalidDontMultiplyFlag = 100 => "The coupon's Don't Multiply Flag must be \"0\" or \"1\".",
    CouponExcessData = 101 => "The coupon contains excess data after the recognised optional fields.",
    InvalidLatitude = 103 => "The latitude is outside of the range \"0000000000\" to \"1800000000\".",
    InvalidLongitude = 104 => "The longitude is outside of the range \"0000000000\" to \"3600000000\".",
    InvalidMediaType = 105 => "A valid AIDC media type is required.",
    LatitudeInvalidLength = 106 => "The latitude must be 10 digits.",
    LongitudeInvalidLength = 107 => "The longitude must be 10 digits.",
    InvalidCset64Character = 108 => "A non-CSET 64 character was found where a CSET 64 character is expected.",
    InvalidCset64Padding = 109 => "Incorrect number of CSET 64 pad characters.",
    NotHyphen = 110 => "Only hyphens are permitted.",
    InvalidBiologicalSexCode = 111 => "A valid ISO/IEC 5218 biological sex code required.",
    PositionInSequenceMalformed = 112 => "The data must have the format \"<pos>/<end>\".",
    PositionExceedsEnd = 113 => "The position number must not exceed the end number.",
    RequiresNonDigitCharacter = 114 => "A non-digit character is required.",
    HourTooShort = 115 => "The hour is too short for HH format.",
    HourTooLong = 116 => "The hour is too long for HH format.",
    MinuteTooShort = 117 => "The minute is too short for MI format.",
    MinuteTooLong = 118 => "The minute is too long for MI format.",
    SecondTooShort = 119 => "The second is too short for SS format.",
    SecondTooLong = 120 => "The second is too long for SS format.",
    InvalidPackageType = 121 => "A valid PackageTypeCode is required.",
    TooShortForGcp = 122 => "The component is shorter than the minimum length GS1 Company Prefix.",
    IbanTooLong = 123 => "The IBAN is too long.",
    TooShortForKey = 124 => "The component is too short to start with a GS1 Company Prefix.",
    LatlongInvalidLength = 125 => "The latitude with longitude must be 20 digits.",
}

impl LintErrorKind {
    /// Returns the stable ordinal of the kind.
    #[must_use]
    pub const fn ordinal(self) -> u16 {
        self as u16
    }
}

/// Number of ordinals in the taxonomy, including [`OK_ORDINAL`] and the
/// retired ordinals.
pub const ERROR_ORDINAL_COUNT: usize = 126;

/// English descriptions indexed by ordinal.
pub const ERROR_STRINGS_EN: [&str; ERROR_ORDINAL_COUNT] = build_error_strings();

const fn build_error_strings() -> [&'static str; ERROR_ORDINAL_COUNT] {
    let mut table = [""; ERROR_ORDINAL_COUNT];
    table[OK_ORDINAL as usize] = OK_DESCRIPTION;
    let mut index = 0;
    while index < LintErrorKind::ALL.len() {
        let kind = LintErrorKind::ALL[index];
        table[kind.ordinal() as usize] = kind.description();
        index += 1;
    }
    table
}

/// Returns the English description for `ordinal`.
///
/// Retired ordinals yield an empty string and unknown ordinals yield `None`.
///
/// # Examples
///
/// ```
/// use common::error::error_string;
///
/// assert_eq!(error_string(0), Some("No issues were detected by the linter."));
/// assert_eq!(error_string(102), Some(""));
/// assert_eq!(error_string(4096), None);
/// ```
#[must_use]
pub fn error_string(ordinal: usize) -> Option<&'static str> {
    ERROR_STRINGS_EN.get(ordinal).copied()
}
