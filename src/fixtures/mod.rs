//! Fixtures
//!
//! Catalog seed data in YAML. A fixture set lives at `<base>/catalog/<name>.yml`; the `default`
//! set is also embedded in the binary.

use std::{fs, path::PathBuf};

use jiff::Timestamp;
use thiserror::Error;
use tracing::info;

use crate::catalog::{CatalogError, PromoCatalog};

pub mod catalog;

const DEFAULT_CATALOG_YAML: &str = include_str!("../../fixtures/catalog/default.yml");

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// A promo references a store missing from the fixture
    #[error("Promo {promo} references unknown store: {store}")]
    UnknownStore {
        /// Promo id
        promo: String,

        /// Referenced store id
        store: String,
    },

    /// A promo has neither an absolute nor a relative timestamp for a field
    #[error("Promo {promo} is missing `{field}`")]
    MissingTimestamp {
        /// Promo id
        promo: String,

        /// Field name
        field: &'static str,
    },

    /// A relative timestamp falls outside the supported range
    #[error("Promo {promo} has an out of range `{field}`: {reason}")]
    InvalidTimestamp {
        /// Promo id
        promo: String,

        /// Field name
        field: &'static str,

        /// Underlying arithmetic error
        reason: String,
    },

    /// The records do not form a valid catalog
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Fixture loader
#[derive(Debug, Clone)]
pub struct Fixture {
    /// Base path for fixture files
    base_path: PathBuf,
}

impl Fixture {
    /// Loader rooted at `./fixtures`
    pub fn new() -> Self {
        Self::with_base_path("./fixtures")
    }

    /// Loader rooted at a custom base path
    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    /// Load the catalog fixture set `name`, resolving relative dates against `now`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if its records are invalid.
    pub fn load(&self, name: &str, now: Timestamp) -> Result<PromoCatalog, FixtureError> {
        let file_path = self.base_path.join("catalog").join(format!("{name}.yml"));
        let contents = fs::read_to_string(&file_path)?;

        info!(fixture = name, path = %file_path.display(), "loading catalog fixture");

        Self::from_yaml(&contents, now)
    }

    /// Parse a catalog fixture from YAML, resolving relative dates against `now`.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed or its records are invalid.
    pub fn from_yaml(contents: &str, now: Timestamp) -> Result<PromoCatalog, FixtureError> {
        let fixture: catalog::CatalogFixture = serde_norway::from_str(contents)?;

        fixture.into_catalog(now)
    }

    /// The embedded `default` seed catalog.
    ///
    /// # Errors
    ///
    /// Returns an error only if the embedded fixture is invalid.
    pub fn seeded(now: Timestamp) -> Result<PromoCatalog, FixtureError> {
        Self::from_yaml(DEFAULT_CATALOG_YAML, now)
    }
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}
