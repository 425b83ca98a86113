//! The linter table and name resolution.

use std::fmt;
use std::sync::Arc;

use common::LintResult;
use gs1syntax::SyntaxConfig;
use gs1syntax::lints::{
    charset, checksum, codelist, coupon, datetime, deprecated, gcp, geo, iban, sequence, simple,
};
use gs1syntax::reference::{BUILTIN, ReferenceData};

const LOG_TARGET: &str = "gs1syntax::registry";

/// Uniform signature every registered linter is called through.
pub type LinterFn = fn(&[u8], &dyn ReferenceData) -> LintResult;

/// A named linter.
#[derive(Clone, Copy, Debug)]
pub struct Linter {
    name: &'static str,
    run: LinterFn,
    deprecated: bool,
}

impl Linter {
    const fn new(name: &'static str, run: LinterFn) -> Self {
        Self {
            name,
            run,
            deprecated: false,
        }
    }

    const fn retired(name: &'static str, run: LinterFn) -> Self {
        Self {
            name,
            run,
            deprecated: true,
        }
    }

    /// Name the linter is registered under.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Whether the linter is retired and resolves only while deprecated
    /// linters are enabled.
    #[must_use]
    pub const fn is_deprecated(&self) -> bool {
        self.deprecated
    }

    /// Runs the linter against the built-in reference data.
    ///
    /// # Errors
    ///
    /// Returns the linter's [`LintError`](common::LintError) when `data` is
    /// invalid.
    ///
    /// # Examples
    ///
    /// ```
    /// use gs1syntax_suite::resolve_linter;
    ///
    /// let csum = resolve_linter("csum").expect("csum is registered");
    /// assert!(csum.lint(b"9501101020917").is_ok());
    /// ```
    pub fn lint(&self, data: &[u8]) -> LintResult {
        self.lint_with(data, &BUILTIN)
    }

    /// Runs the linter against `reference`.
    ///
    /// # Errors
    ///
    /// Returns the linter's [`LintError`](common::LintError) when `data` is
    /// invalid.
    pub fn lint_with(&self, data: &[u8], reference: &dyn ReferenceData) -> LintResult {
        (self.run)(data, reference)
    }
}

/// Every registered linter, in ascending name order.
pub const LINTERS: &[Linter] = &[
    Linter::new("couponcode", coupon::couponcode_with),
    Linter::new("couponposoffer", |data, _| coupon::couponposoffer(data)),
    Linter::new("cset39", |data, _| charset::cset39(data)),
    Linter::new("cset64", |data, _| charset::cset64(data)),
    Linter::new("cset82", |data, _| charset::cset82(data)),
    Linter::new("csetnumeric", |data, _| charset::csetnumeric(data)),
    Linter::new("csum", |data, _| checksum::csum(data)),
    Linter::new("csumalpha", |data, _| checksum::csumalpha(data)),
    Linter::new("gcppos1", gcp::gcppos1_with),
    Linter::new("gcppos2", gcp::gcppos2_with),
    Linter::new("hasnondigit", |data, _| simple::hasnondigit(data)),
    Linter::new("hh", |data, _| datetime::hh(data)),
    Linter::new("hhmi", |data, _| datetime::hhmi(data)),
    Linter::retired("hhmm", |data, _| deprecated::hhmm(data)),
    Linter::new("hyphen", |data, _| simple::hyphen(data)),
    Linter::new("iban", iban::iban_with),
    Linter::new("importeridx", |data, _| simple::importeridx(data)),
    Linter::new("iso3166", |data, _| codelist::iso3166(data)),
    Linter::new("iso3166999", |data, _| codelist::iso3166999(data)),
    Linter::new("iso3166alpha2", codelist::iso3166alpha2_with),
    Linter::retired("iso3166list", |data, _| deprecated::iso3166list(data)),
    Linter::new("iso4217", |data, _| codelist::iso4217(data)),
    Linter::new("iso5218", |data, _| simple::iso5218(data)),
    Linter::retired("key", gcp::key_with),
    Linter::retired("keyoff1", gcp::keyoff1_with),
    Linter::new("latitude", |data, _| geo::latitude(data)),
    Linter::new("latlong", |data, _| geo::latlong(data)),
    Linter::new("longitude", |data, _| geo::longitude(data)),
    Linter::new("mediatype", codelist::mediatype_with),
    Linter::new("mi", |data, _| datetime::mi(data)),
    Linter::retired("mmoptss", |data, _| deprecated::mmoptss(data)),
    Linter::new("nonzero", |data, _| simple::nonzero(data)),
    Linter::new("nozeroprefix", |data, _| simple::nozeroprefix(data)),
    Linter::new("packagetype", codelist::packagetype_with),
    Linter::new("pcenc", |data, _| simple::pcenc(data)),
    Linter::new("pieceoftotal", |data, _| sequence::pieceoftotal(data)),
    Linter::new("posinseqslash", |data, _| sequence::posinseqslash(data)),
    Linter::new("ss", |data, _| datetime::ss(data)),
    Linter::new("winding", |data, _| simple::winding(data)),
    Linter::new("yesno", |data, _| simple::yesno(data)),
    Linter::new("yymmd0", |data, _| datetime::yymmd0(data)),
    Linter::new("yymmdd", |data, _| datetime::yymmdd(data)),
    Linter::retired("yymmddhh", |data, _| deprecated::yymmddhh(data)),
    Linter::new("yyyymmd0", |data, _| datetime::yyyymmd0(data)),
    Linter::new("yyyymmdd", |data, _| datetime::yyyymmdd(data)),
    Linter::new("zero", |data, _| simple::zero(data)),
];

/// Looks up a linter by name, deprecated names included.
///
/// # Examples
///
/// ```
/// use gs1syntax_suite::resolve_linter;
///
/// assert!(resolve_linter("gcppos1").is_some());
/// assert!(resolve_linter("dummy").is_none());
/// ```
#[must_use]
pub fn resolve_linter(name: &str) -> Option<Linter> {
    LINTERS
        .binary_search_by(|linter| linter.name.cmp(name))
        .ok()
        .and_then(|index| LINTERS.get(index))
        .copied()
}

/// Returns an iterator over every registered name in ascending order.
#[must_use = "Discarding the iterator hides registry contents"]
pub fn linter_names() -> impl Iterator<Item = &'static str> {
    LINTERS.iter().map(Linter::name)
}

/// Linter resolution bound to a deployment's configuration.
#[derive(Clone)]
pub struct Registry {
    include_deprecated: bool,
    reference: Arc<dyn ReferenceData>,
}

impl Registry {
    /// Builds a registry from loaded configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use gs1syntax::SyntaxConfig;
    /// use gs1syntax_suite::Registry;
    ///
    /// let config = SyntaxConfig::from_toml_str("include_deprecated = false\n")?;
    /// let registry = Registry::from_config(&config);
    ///
    /// assert!(registry.resolve("key").is_none());
    /// assert_eq!(registry.lint("csum", b"9501101020917"), Some(Ok(())));
    /// # Ok::<(), gs1syntax::ConfigError>(())
    /// ```
    #[must_use]
    pub fn from_config(config: &SyntaxConfig) -> Self {
        Self {
            include_deprecated: config.include_deprecated,
            reference: config.reference_data(),
        }
    }

    /// Replaces the reference data the linters consult.
    #[must_use]
    pub fn with_reference_data(mut self, reference: Arc<dyn ReferenceData>) -> Self {
        self.reference = reference;
        self
    }

    /// Looks up a linter by name, honouring the deprecated-name policy.
    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<Linter> {
        let Some(linter) = resolve_linter(name) else {
            log::debug!(target: LOG_TARGET, "no linter is registered as `{name}`");
            return None;
        };
        if linter.is_deprecated() {
            if !self.include_deprecated {
                log::debug!(
                    target: LOG_TARGET,
                    "linter `{name}` is deprecated and disabled by configuration"
                );
                return None;
            }
            log::warn!(target: LOG_TARGET, "linter `{name}` is deprecated");
        }
        Some(linter)
    }

    /// Runs the named linter against the configured reference data.
    ///
    /// Returns `None` when the name does not resolve.
    #[must_use]
    pub fn lint(&self, name: &str, data: &[u8]) -> Option<LintResult> {
        self.resolve(name)
            .map(|linter| linter.lint_with(data, self.reference.as_ref()))
    }

    /// Names this registry resolves, in ascending order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        LINTERS
            .iter()
            .filter(|linter| self.include_deprecated || !linter.is_deprecated())
            .map(Linter::name)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::from_config(&SyntaxConfig::default())
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Registry")
            .field("include_deprecated", &self.include_deprecated)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::LintErrorKind;
    use gs1syntax::reference::PrefixListReferenceData;
    use rstest::rstest;

    const RETIRED: [&str; 6] = ["hhmm", "iso3166list", "key", "keyoff1", "mmoptss", "yymmddhh"];

    #[rstest]
    fn name_function_map_is_sorted() {
        for pair in LINTERS.windows(2) {
            if let [first, second] = pair {
                assert!(
                    first.name < second.name,
                    "`{}` must sort before `{}`",
                    first.name,
                    second.name
                );
            }
        }
    }

    #[rstest]
    fn deprecated_flags_match_the_retired_names() {
        let flagged: Vec<_> = LINTERS
            .iter()
            .filter(|linter| linter.is_deprecated())
            .map(Linter::name)
            .collect();

        assert_eq!(flagged, RETIRED);
    }

    #[rstest]
    #[case("couponcode")]
    #[case("gcppos1")]
    #[case("key")]
    #[case("latlong")]
    #[case("zero")]
    fn resolves_registered_names(#[case] name: &str) {
        let linter = resolve_linter(name).expect("name is registered");

        assert_eq!(linter.name(), name);
    }

    #[rstest]
    #[case("dummy")]
    #[case("")]
    #[case("CSUM")]
    #[case("csum ")]
    fn unknown_names_do_not_resolve(#[case] name: &str) {
        assert!(resolve_linter(name).is_none());
    }

    #[rstest]
    #[case("csum", b"9501101020917")]
    #[case("csumalpha", b"1987654Ad4X4bL5ttr2310c2K")]
    #[case("iban", b"GB82WEST12345698765432")]
    #[case("yymmdd", b"200229")]
    #[case("latlong", b"09000000001800000000")]
    #[case("couponposoffer", b"001234561234560123456")]
    #[case("mmoptss", b"anything")]
    fn dispatches_to_the_named_linter(#[case] name: &str, #[case] data: &[u8]) {
        let linter = resolve_linter(name).expect("name is registered");

        assert_eq!(linter.lint(data), Ok(()));
    }

    #[rstest]
    fn reports_the_failure_of_the_named_linter() {
        let linter = resolve_linter("csum").expect("csum is registered");

        let error = linter.lint(b"9501101020912").expect_err("check digit is wrong");

        assert_eq!(error.kind(), LintErrorKind::IncorrectCheckDigit);
        assert_eq!(error.span().offset(), 12);
    }

    #[rstest]
    fn registry_hides_deprecated_names_when_disabled() {
        let config = SyntaxConfig {
            include_deprecated: false,
            ..SyntaxConfig::default()
        };
        let registry = Registry::from_config(&config);

        for name in RETIRED {
            assert!(registry.resolve(name).is_none(), "`{name}` should be hidden");
        }
        assert_eq!(registry.names().count(), LINTERS.len() - RETIRED.len());
        assert!(registry.resolve("gcppos1").is_some());
    }

    #[rstest]
    fn default_registry_resolves_every_name() {
        let registry = Registry::default();

        assert!(registry.names().eq(linter_names()));
        assert_eq!(registry.lint("key", b"0000"), Some(Ok(())));
        assert_eq!(registry.lint("dummy", b"0000"), None);
    }

    #[rstest]
    fn registry_passes_its_reference_data_to_the_linters() {
        let registry = Registry::default().with_reference_data(Arc::new(
            PrefixListReferenceData::new(["0614141"], false),
        ));

        assert_eq!(registry.lint("gcppos2", b"90614141123"), Some(Ok(())));
        let outcome = registry.lint("gcppos1", b"0614142123").expect("gcppos1 is registered");
        assert_eq!(
            outcome.map_err(|error| error.kind()),
            Err(LintErrorKind::InvalidGcpPrefix)
        );
    }
}
