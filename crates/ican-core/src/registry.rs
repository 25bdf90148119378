//! The immutable table of specifications, keyed by country code.
//!
//! [`countries`] exposes the process-wide built-in registry, constructed once
//! on first access from the static table in `countries.rs`. Callers needing a
//! different set of rules build their own [`Registry`] with
//! [`Registry::from_entries`]; nothing can mutate a registry after it is
//! built.
use std::collections::BTreeMap;
use std::sync::LazyLock;

use crate::countries::BUILTIN;
use crate::crypto::{CryptoClass, CryptoFilter};
use crate::specification::{Specification, SpecificationError};

/// A literal specification record, as written in a static table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpecEntry<'a> {
    /// Two-letter country or network code.
    pub country_code: &'a str,
    /// Total length of a code in electronic format.
    pub length: usize,
    /// BCAN structure string.
    pub structure: &'a str,
    /// Crypto classification.
    pub crypto: CryptoClass,
    /// A code that must validate against this entry.
    pub example: &'a str,
}

impl<'a> SpecEntry<'a> {
    /// Creates an entry; usable in `static` initializers.
    pub const fn new(
        country_code: &'a str,
        length: usize,
        structure: &'a str,
        crypto: CryptoClass,
        example: &'a str,
    ) -> Self {
        Self {
            country_code,
            length,
            structure,
            crypto,
            example,
        }
    }

    /// Builds and checks the [`Specification`] described by this entry.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Specification`] if the record is inconsistent
    /// and [`RegistryError::InvalidExample`] if its example does not validate.
    pub fn build(&self) -> Result<Specification, RegistryError> {
        let spec = Specification::new(
            self.country_code,
            self.length,
            self.structure,
            self.crypto,
            self.example,
        )?;
        if !spec.example_is_valid() {
            return Err(RegistryError::InvalidExample {
                country_code: self.country_code.to_owned(),
                example: self.example.to_owned(),
            });
        }
        Ok(spec)
    }
}

/// Errors produced while building a [`Registry`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// A record is internally inconsistent.
    #[error(transparent)]
    Specification(#[from] SpecificationError),

    /// A record's example fails its own validation.
    #[error("example {example:?} does not validate against specification {country_code}")]
    InvalidExample {
        /// The country being defined.
        country_code: String,
        /// The rejected example.
        example: String,
    },

    /// Two records share a country code.
    #[error("duplicate specification for country code {country_code}")]
    Duplicate {
        /// The repeated code.
        country_code: String,
    },
}

/// An immutable mapping from country code to [`Specification`].
#[derive(Debug, Clone, Default)]
pub struct Registry {
    specs: BTreeMap<String, Specification>,
}

impl Registry {
    /// Builds a registry from literal records, rejecting the first bad one.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] for an inconsistent record, an example that
    /// does not validate, or a repeated country code.
    ///
    /// # Examples
    ///
    /// ```
    /// use ican_core::{CryptoClass, Registry, SpecEntry};
    ///
    /// let registry = Registry::from_entries(&[SpecEntry::new(
    ///     "BE",
    ///     16,
    ///     "F03F07F02",
    ///     CryptoClass::NotCrypto,
    ///     "BE68539007547034",
    /// )])
    /// .expect("consistent table");
    /// assert_eq!(registry.len(), 1);
    /// ```
    pub fn from_entries(entries: &[SpecEntry<'_>]) -> Result<Self, RegistryError> {
        let mut specs = BTreeMap::new();
        for entry in entries {
            let spec = entry.build()?;
            if specs.insert(entry.country_code.to_owned(), spec).is_some() {
                return Err(RegistryError::Duplicate {
                    country_code: entry.country_code.to_owned(),
                });
            }
        }
        Ok(Self { specs })
    }

    /// Builds the registry shipped with the crate.
    ///
    /// # Errors
    ///
    /// Fails as a whole on the first malformed or duplicate entry, exactly
    /// like [`Registry::from_entries`].
    pub fn builtin() -> Result<Self, RegistryError> {
        let registry = Self::from_entries(BUILTIN)?;
        tracing::debug!(count = registry.len(), "built specification registry");
        Ok(registry)
    }

    /// Looks up a specification by exact country code.
    pub fn get(&self, country_code: &str) -> Option<&Specification> {
        self.specs.get(country_code)
    }

    /// Returns `true` if a specification is registered under `country_code`.
    pub fn contains(&self, country_code: &str) -> bool {
        self.specs.contains_key(country_code)
    }

    /// Returns the number of registered specifications.
    pub fn len(&self) -> usize {
        self.specs.len()
    }

    /// Returns `true` if no specification is registered.
    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// Iterates over all specifications in country-code order.
    pub fn iter(&self) -> impl Iterator<Item = &Specification> {
        self.specs.values()
    }

    /// Iterates over registered country codes in order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.specs.keys().map(String::as_str)
    }

    /// Iterates over the specifications accepted by `filter`.
    pub fn crypto(&self, filter: CryptoFilter) -> impl Iterator<Item = &Specification> {
        self.iter().filter(move |spec| filter.matches(spec.crypto()))
    }

    /// Returns the codes of specifications whose example fails validation.
    ///
    /// Always empty for a registry built through [`Registry::from_entries`];
    /// kept as a self-check for the built-in table.
    pub fn verify_examples(&self) -> Vec<&str> {
        self.iter()
            .filter(|spec| !spec.example_is_valid())
            .map(Specification::country_code)
            .collect()
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a Specification;
    type IntoIter = std::collections::btree_map::Values<'a, String, Specification>;

    fn into_iter(self) -> Self::IntoIter {
        self.specs.values()
    }
}

static COUNTRIES: LazyLock<Result<Registry, RegistryError>> = LazyLock::new(|| {
    Registry::builtin().inspect_err(|e| {
        tracing::error!(error = %e, "built-in specification table is inconsistent");
    })
});

static EMPTY: LazyLock<Registry> = LazyLock::new(|| Registry {
    specs: BTreeMap::new(),
});

/// Returns the built-in registry, or the error that stopped it from
/// building.
///
/// The table is built once on first access. Binaries call this at startup
/// so that an inconsistent table is a configuration error reported once,
/// never a string of per-call failures.
///
/// # Errors
///
/// Returns the [`RegistryError`] of the first rejected entry.
pub fn try_countries() -> Result<&'static Registry, &'static RegistryError> {
    COUNTRIES.as_ref()
}

/// Returns the built-in registry of every known specification.
///
/// If the built-in table failed to build (see [`try_countries`]) this is an
/// empty registry and every lookup misses.
///
/// # Examples
///
/// ```
/// let be = ican_core::countries().get("BE").expect("Belgium is registered");
/// assert_eq!(be.length(), 16);
/// ```
pub fn countries() -> &'static Registry {
    try_countries().unwrap_or(&EMPTY)
}
