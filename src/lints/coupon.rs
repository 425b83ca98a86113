//! Coupon linters for the North American coupon code (AI 8110) and the
//! positive offer file coupon (AI 8112).
//!
//! Both components are digit strings made of fields, most of them sized by
//! a preceding variable length indicator (VLI). The linters walk the fields
//! in order and stop at the first one that is missing, out of range or cut
//! short. A field missing at the end of the input is reported over the whole
//! input; a field cut short is reported from its start to the end of the
//! input.

use common::{LintError, LintErrorKind, LintResult};

use super::datetime::yymmdd;
use super::gcp::gcppos1_with;
use super::require_digits;
use crate::reference::{BUILTIN, ReferenceData};

/// VLI value marking an absent purchase GCP.
const NO_GCP: u8 = 9;

/// Cursor over the fields of a coupon.
struct Fields<'a> {
    data: &'a [u8],
    cursor: usize,
}

impl<'a> Fields<'a> {
    fn new(data: &'a [u8]) -> Result<Self, LintError> {
        require_digits(data)?;
        Ok(Self { data, cursor: 0 })
    }

    fn peek(&self) -> Option<u8> {
        self.data.get(self.cursor).copied()
    }

    fn missing(&self, kind: LintErrorKind) -> LintError {
        LintError::whole(kind, self.data.len())
    }

    fn truncated(&self, kind: LintErrorKind) -> LintError {
        if self.cursor >= self.data.len() {
            self.missing(kind)
        } else {
            LintError::new(kind, self.cursor, self.data.len() - self.cursor)
        }
    }

    /// Consumes `tag` when it is the next character.
    fn optional(&mut self, tag: u8) -> bool {
        let present = self.peek() == Some(tag);
        if present {
            self.cursor += 1;
        }
        present
    }

    /// Consumes a one-digit code admitted by `accepts` and returns its value.
    fn code(
        &mut self,
        missing: LintErrorKind,
        invalid: LintErrorKind,
        accepts: impl Fn(u8) -> bool,
    ) -> Result<u8, LintError> {
        let byte = self.peek().ok_or_else(|| self.missing(missing))?;
        if !accepts(byte) {
            return Err(LintError::new(invalid, self.cursor, 1));
        }
        self.cursor += 1;
        Ok(byte - b'0')
    }

    /// Consumes a field of `width` characters, returning its offset and
    /// contents.
    fn field(
        &mut self,
        width: usize,
        truncated: LintErrorKind,
    ) -> Result<(usize, &'a [u8]), LintError> {
        let data = self.data;
        let start = self.cursor;
        let field = data
            .get(start..start + width)
            .ok_or_else(|| self.truncated(truncated))?;
        self.cursor += width;
        Ok((start, field))
    }

    fn finish(&self) -> LintResult {
        if self.cursor < self.data.len() {
            return Err(LintError::new(
                LintErrorKind::CouponExcessData,
                self.cursor,
                self.data.len() - self.cursor,
            ));
        }
        Ok(())
    }
}

/// Kinds reported for one VLI-sized GCP field.
struct GcpField {
    missing_vli: LintErrorKind,
    invalid_length: LintErrorKind,
    truncated: LintErrorKind,
    accepts: fn(u8) -> bool,
}

const PRIMARY_GCP: GcpField = GcpField {
    missing_vli: LintErrorKind::CouponMissingGcpVli,
    invalid_length: LintErrorKind::CouponInvalidGcpLength,
    truncated: LintErrorKind::CouponTruncatedGcp,
    accepts: |byte| byte <= b'6',
};

const SECOND_PURCHASE_GCP: GcpField = GcpField {
    missing_vli: LintErrorKind::CouponMissingSecondPurchaseGcpVli,
    invalid_length: LintErrorKind::CouponInvalidSecondPurchaseGcpLength,
    truncated: LintErrorKind::CouponTruncatedSecondPurchaseGcp,
    accepts: |byte| byte <= b'6' || byte == b'0' + NO_GCP,
};

const THIRD_PURCHASE_GCP: GcpField = GcpField {
    missing_vli: LintErrorKind::CouponMissingThirdPurchaseGcpVli,
    invalid_length: LintErrorKind::CouponInvalidThirdPurchaseGcpLength,
    truncated: LintErrorKind::CouponTruncatedThirdPurchaseGcp,
    accepts: |byte| byte <= b'6' || byte == b'0' + NO_GCP,
};

const RETAILER_GCP_OR_GLN: GcpField = GcpField {
    missing_vli: LintErrorKind::CouponMissingRetailerGcpOrGlnVli,
    invalid_length: LintErrorKind::CouponInvalidRetailerGcpOrGlnLength,
    truncated: LintErrorKind::CouponTruncatedRetailerGcpOrGln,
    accepts: |byte| (b'1'..=b'7').contains(&byte),
};

impl GcpField {
    /// Reads the field and checks it with [`gcppos1_with`], reporting any
    /// failure over the whole field.
    fn read(&self, fields: &mut Fields<'_>, reference: &dyn ReferenceData) -> LintResult {
        let vli = fields.code(self.missing_vli, self.invalid_length, self.accepts)?;
        if vli == NO_GCP {
            return Ok(());
        }
        let (start, gcp) = fields.field(usize::from(vli) + 6, self.truncated)?;
        gcppos1_with(gcp, reference).map_err(|error| LintError::new(error.kind(), start, gcp.len()))
    }
}

/// Kinds reported for one purchase requirement with its code and family.
struct PurchaseRequirement {
    missing_vli: LintErrorKind,
    invalid_length: LintErrorKind,
    truncated: LintErrorKind,
    missing_code: LintErrorKind,
    invalid_code: LintErrorKind,
    truncated_family: LintErrorKind,
}

const FIRST_PURCHASE: PurchaseRequirement = PurchaseRequirement {
    missing_vli: LintErrorKind::CouponMissingFirstPurchaseRequirementVli,
    invalid_length: LintErrorKind::CouponInvalidFirstPurchaseRequirementLength,
    truncated: LintErrorKind::CouponTruncatedFirstPurchaseRequirement,
    missing_code: LintErrorKind::CouponMissingFirstPurchaseRequirementCode,
    invalid_code: LintErrorKind::CouponInvalidFirstPurchaseRequirementCode,
    truncated_family: LintErrorKind::CouponTruncatedFirstPurchaseFamilyCode,
};

const SECOND_PURCHASE: PurchaseRequirement = PurchaseRequirement {
    missing_vli: LintErrorKind::CouponMissingSecondPurchaseRequirementVli,
    invalid_length: LintErrorKind::CouponInvalidSecondPurchaseRequirementLength,
    truncated: LintErrorKind::CouponTruncatedSecondPurchaseRequirement,
    missing_code: LintErrorKind::CouponMissingSecondPurchaseRequirementCode,
    invalid_code: LintErrorKind::CouponInvalidSecondPurchaseRequirementCode,
    truncated_family: LintErrorKind::CouponTruncatedSecondPurchaseFamilyCode,
};

const THIRD_PURCHASE: PurchaseRequirement = PurchaseRequirement {
    missing_vli: LintErrorKind::CouponMissingThirdPurchaseRequirementVli,
    invalid_length: LintErrorKind::CouponInvalidThirdPurchaseRequirementLength,
    truncated: LintErrorKind::CouponTruncatedThirdPurchaseRequirement,
    missing_code: LintErrorKind::CouponMissingThirdPurchaseRequirementCode,
    invalid_code: LintErrorKind::CouponInvalidThirdPurchaseRequirementCode,
    truncated_family: LintErrorKind::CouponTruncatedThirdPurchaseFamilyCode,
};

impl PurchaseRequirement {
    fn read(&self, fields: &mut Fields<'_>) -> LintResult {
        let vli = fields.code(self.missing_vli, self.invalid_length, is_one_to_five)?;
        fields.field(usize::from(vli), self.truncated)?;
        fields.code(self.missing_code, self.invalid_code, |code| {
            code <= b'4' || code == b'9'
        })?;
        fields.field(3, self.truncated_family)?;
        Ok(())
    }
}

fn is_one_to_five(byte: u8) -> bool {
    (b'1'..=b'5').contains(&byte)
}

fn any_digit(_: u8) -> bool {
    true
}

/// Reads a six-digit date and checks it with [`yymmdd`], reporting any
/// failure over the whole date.
fn read_date<'a>(
    fields: &mut Fields<'a>,
    too_short: LintErrorKind,
    invalid: LintErrorKind,
) -> Result<(usize, &'a [u8]), LintError> {
    let (start, date) = fields.field(6, too_short)?;
    yymmdd(date).map_err(|_| LintError::new(invalid, start, date.len()))?;
    Ok((start, date))
}

fn read_serial_number(fields: &mut Fields<'_>) -> LintResult {
    let vli = fields.code(
        LintErrorKind::CouponMissingSerialNumberVli,
        LintErrorKind::CouponMissingSerialNumberVli,
        any_digit,
    )?;
    fields.field(usize::from(vli) + 6, LintErrorKind::CouponTruncatedSerialNumber)?;
    Ok(())
}

/// Validates a North American coupon code (AI 8110) against the built-in
/// reference data.
///
/// # Errors
///
/// See [`couponcode_with`].
///
/// # Examples
///
/// ```
/// use common::LintErrorKind;
/// use gs1syntax::lints::coupon::couponcode;
///
/// assert!(couponcode(b"012345612345611110123").is_ok());
/// let error = couponcode(b"").unwrap_err();
/// assert_eq!(error.kind(), LintErrorKind::CouponMissingGcpVli);
/// ```
pub fn couponcode(data: &[u8]) -> LintResult {
    couponcode_with(data, &BUILTIN)
}

/// Validates a North American coupon code (AI 8110), checking its GCPs
/// through `reference`.
///
/// The mandatory fields are the primary GCP, offer code, save value and
/// first purchase requirement. Optional fields follow in ascending order of
/// their one-digit tag: `1` second purchase, `2` third purchase, `3`
/// expiration date, `4` start date, `5` serial number, `6` retailer GCP or
/// GLN and `9` miscellaneous flags.
///
/// # Errors
///
/// [`LintErrorKind::NonDigitCharacter`] at the first non-digit, otherwise
/// the `Coupon*` kind for the first faulty field. GCP failures keep the kind
/// reported by [`gcppos1_with`] and span the GCP field. Dates that fail
/// [`yymmdd`] span the date field, and a start date after the expiration
/// date spans both tagged fields.
pub fn couponcode_with(data: &[u8], reference: &dyn ReferenceData) -> LintResult {
    let mut fields = Fields::new(data)?;

    PRIMARY_GCP.read(&mut fields, reference)?;
    fields.field(6, LintErrorKind::CouponTruncatedOfferCode)?;
    let save_value = fields.code(
        LintErrorKind::CouponMissingSaveValueVli,
        LintErrorKind::CouponInvalidSaveValueLength,
        is_one_to_five,
    )?;
    fields.field(usize::from(save_value), LintErrorKind::CouponTruncatedSaveValue)?;
    FIRST_PURCHASE.read(&mut fields)?;

    if fields.optional(b'1') {
        fields.code(
            LintErrorKind::CouponMissingAdditionalPurchaseRulesCode,
            LintErrorKind::CouponInvalidAdditionalPurchaseRulesCode,
            |code| code <= b'3',
        )?;
        SECOND_PURCHASE.read(&mut fields)?;
        SECOND_PURCHASE_GCP.read(&mut fields, reference)?;
    }

    if fields.optional(b'2') {
        THIRD_PURCHASE.read(&mut fields)?;
        THIRD_PURCHASE_GCP.read(&mut fields, reference)?;
    }

    let mut expiration = None;
    if fields.optional(b'3') {
        let (_, date) = read_date(
            &mut fields,
            LintErrorKind::CouponTooShortForExpirationDate,
            LintErrorKind::CouponInvalidExpirationDate,
        )?;
        expiration = Some(date);
    }

    if fields.optional(b'4') {
        let (start, date) = read_date(
            &mut fields,
            LintErrorKind::CouponTooShortForStartDate,
            LintErrorKind::CouponInvalidStartDate,
        )?;
        if expiration.is_some_and(|expires| date > expires) {
            return Err(LintError::new(
                LintErrorKind::CouponExpirationBeforeStart,
                start.saturating_sub(8),
                14,
            ));
        }
    }

    if fields.optional(b'5') {
        read_serial_number(&mut fields)?;
    }

    if fields.optional(b'6') {
        RETAILER_GCP_OR_GLN.read(&mut fields, reference)?;
    }

    if fields.optional(b'9') {
        fields.code(
            LintErrorKind::CouponMissingSaveValueCode,
            LintErrorKind::CouponInvalidSaveValueCode,
            |code| matches!(code, b'0' | b'1' | b'2' | b'5' | b'6'),
        )?;
        fields.code(
            LintErrorKind::CouponMissingSaveValueAppliesToItem,
            LintErrorKind::CouponInvalidSaveValueAppliesToItem,
            |code| code <= b'2',
        )?;
        fields.code(
            LintErrorKind::CouponMissingStoreCouponFlag,
            LintErrorKind::CouponMissingStoreCouponFlag,
            any_digit,
        )?;
        fields.code(
            LintErrorKind::CouponMissingDontMultiplyFlag,
            LintErrorKind::CouponInvalidDontMultiplyFlag,
            |flag| flag <= b'1',
        )?;
    }

    fields.finish()
}

/// Validates a positive offer file coupon (AI 8112).
///
/// The fields are a format code of `0` or `1`, the coupon funder ID sized by
/// its VLI, a six-digit offer code and the serial number sized by its VLI.
///
/// # Errors
///
/// [`LintErrorKind::NonDigitCharacter`] at the first non-digit, otherwise
/// the `Coupon*` kind for the first faulty field.
///
/// # Examples
///
/// ```
/// use common::LintErrorKind;
/// use gs1syntax::lints::coupon::couponposoffer;
///
/// assert!(couponposoffer(b"001234561234560123456").is_ok());
/// let error = couponposoffer(b"07").unwrap_err();
/// assert_eq!(error.kind(), LintErrorKind::CouponInvalidFunderLength);
/// ```
pub fn couponposoffer(data: &[u8]) -> LintResult {
    let mut fields = Fields::new(data)?;

    fields.code(
        LintErrorKind::CouponMissingFormatCode,
        LintErrorKind::CouponInvalidFormatCode,
        |code| code <= b'1',
    )?;
    let funder = fields.code(
        LintErrorKind::CouponMissingFunderVli,
        LintErrorKind::CouponInvalidFunderLength,
        |vli| vli <= b'6',
    )?;
    fields.field(usize::from(funder) + 6, LintErrorKind::CouponTruncatedFunder)?;
    fields.field(6, LintErrorKind::CouponTruncatedOfferCode)?;
    read_serial_number(&mut fields)?;

    fields.finish()
}
