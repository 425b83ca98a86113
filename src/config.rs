//! Linter configuration loaded from TOML.
//!
//! A deployment keeps its settings in a small TOML document:
//!
//! ```toml
//! include_deprecated = false
//!
//! [gcp]
//! known_prefixes = ["0614141", "952"]
//! offline = false
//! ```
//!
//! Every key is optional. Omitted keys take the defaults described on each
//! field, and unknown keys are rejected so that typos surface at load time
//! rather than silently falling back.

use std::sync::Arc;

use camino::{Utf8Path, Utf8PathBuf};
use serde::Deserialize;
use thiserror::Error;

use crate::reference::{BuiltinReferenceData, PrefixListReferenceData, ReferenceData};

const LOG_TARGET: &str = "gs1syntax::config";

/// Settings for the linter registry.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SyntaxConfig {
    /// Whether the retired linter names still resolve. Defaults to `true` so
    /// that older AI tables keep working.
    pub include_deprecated: bool,
    /// GS1 Company Prefix data source.
    pub gcp: GcpConfig,
}

impl Default for SyntaxConfig {
    fn default() -> Self {
        Self {
            include_deprecated: true,
            gcp: GcpConfig::default(),
        }
    }
}

/// GS1 Company Prefix settings.
///
/// With neither key set, the built-in reference data accepts every
/// well-formed prefix.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GcpConfig {
    /// Allocated prefixes treated as the authoritative data source.
    pub known_prefixes: Vec<String>,
    /// Reports the data source as unavailable to every GCP lookup.
    pub offline: bool,
}

impl GcpConfig {
    /// Whether the settings replace the built-in GCP data.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.offline || !self.known_prefixes.is_empty()
    }
}

/// Errors raised while loading a [`SyntaxConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read configuration file {path}: {source}")]
    Read {
        /// File that could not be read.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },
    /// The configuration file is not a valid configuration document.
    #[error("invalid configuration file {path}: {source}")]
    ParseFile {
        /// File holding the invalid document.
        path: Utf8PathBuf,
        /// Parser diagnostic.
        source: Box<toml::de::Error>,
    },
    /// The configuration text is not a valid configuration document.
    #[error("invalid configuration: {source}")]
    Parse {
        /// Parser diagnostic.
        source: Box<toml::de::Error>,
    },
}

impl SyntaxConfig {
    /// Parses a configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when the text is not TOML, a value has
    /// the wrong type, or a key is unknown.
    ///
    /// # Examples
    ///
    /// ```
    /// use gs1syntax::SyntaxConfig;
    ///
    /// let config = SyntaxConfig::from_toml_str("include_deprecated = false\n")?;
    /// assert!(!config.include_deprecated);
    /// assert!(config.gcp.known_prefixes.is_empty());
    /// # Ok::<(), gs1syntax::ConfigError>(())
    /// ```
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        toml::from_str(source).map_err(|error| ConfigError::Parse {
            source: Box::new(error),
        })
    }

    /// Reads and parses the configuration file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] when the file cannot be read and
    /// [`ConfigError::ParseFile`] when its contents are invalid.
    pub fn load_from_path(path: &Utf8Path) -> Result<Self, ConfigError> {
        log::debug!(target: LOG_TARGET, "loading linter configuration from {path}");

        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&source).map_err(|error| ConfigError::ParseFile {
            path: path.to_path_buf(),
            source: Box::new(error),
        })
    }

    /// Loads configuration using the supplied loader.
    ///
    /// `name` identifies the configuration namespace the loader should
    /// resolve, which lets embedders and tests substitute their own source.
    ///
    /// # Errors
    ///
    /// Propagates whatever the loader reports.
    ///
    /// # Examples
    ///
    /// ```
    /// use gs1syntax::SyntaxConfig;
    ///
    /// let config = SyntaxConfig::load_with("gs1syntax", |_| Ok(SyntaxConfig::default()))?;
    /// assert!(config.include_deprecated);
    /// # Ok::<(), gs1syntax::ConfigError>(())
    /// ```
    pub fn load_with<F>(name: &str, loader: F) -> Result<Self, ConfigError>
    where
        F: FnOnce(&str) -> Result<Self, ConfigError>,
    {
        loader(name)
    }

    /// Builds the reference data these settings describe.
    ///
    /// Returns a [`PrefixListReferenceData`] when the `[gcp]` table is
    /// configured and the built-in reference data otherwise.
    #[must_use]
    pub fn reference_data(&self) -> Arc<dyn ReferenceData> {
        if !self.gcp.is_configured() {
            return Arc::new(BuiltinReferenceData);
        }

        log::debug!(
            target: LOG_TARGET,
            "using {} configured GCP prefixes (offline: {})",
            self.gcp.known_prefixes.len(),
            self.gcp.offline,
        );
        Arc::new(PrefixListReferenceData::new(
            self.gcp.known_prefixes.iter().cloned(),
            self.gcp.offline,
        ))
    }
}
