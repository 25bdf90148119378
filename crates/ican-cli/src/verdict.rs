//! Explaining why a code is or is not valid.
//!
//! The library only answers yes or no. The CLI re-runs the same checks in
//! the same order through public accessors so that it can name the first one
//! that failed.
use std::fmt;

use ican_core::{CryptoFilter, Specification, country_of, electronic_format, is_valid_checksum};
use serde::Serialize;

/// The outcome of checking one code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "verdict", rename_all = "snake_case")]
pub enum Verdict {
    /// Every check passed.
    Valid,
    /// The prefix names no registered specification.
    UnknownCountry {
        /// The prefix that was looked up.
        prefix: String,
    },
    /// The code has the wrong number of characters.
    WrongLength {
        /// Length the country requires.
        expected: usize,
        /// Length of the electronic form.
        actual: usize,
    },
    /// The crypto filter excludes this country.
    FilteredOut {
        /// The country's classification.
        crypto: String,
    },
    /// The body does not fit the country's structure.
    StructureMismatch {
        /// The structure string applied.
        structure: String,
    },
    /// The MOD 97-10 check failed.
    ChecksumMismatch,
}

impl Verdict {
    /// Returns `true` for [`Verdict::Valid`].
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Returns the failure reason, or `None` for a valid code.
    pub fn reason(&self) -> Option<String> {
        (!self.is_valid()).then(|| self.to_string())
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Valid => f.write_str("valid"),
            Self::UnknownCountry { prefix } => write!(f, "unknown country code {prefix:?}"),
            Self::WrongLength { expected, actual } => {
                write!(f, "length {actual}, expected {expected}")
            }
            Self::FilteredOut { crypto } => {
                write!(f, "crypto classification {crypto} excluded by filter")
            }
            Self::StructureMismatch { structure } => {
                write!(f, "body does not match structure {structure}")
            }
            Self::ChecksumMismatch => f.write_str("check digits do not match"),
        }
    }
}

/// Checks `code` against its country's specification.
pub fn check(code: &str, filter: CryptoFilter) -> Verdict {
    let electronic = electronic_format(code);
    match country_of(&electronic) {
        Some(spec) => check_against(spec, &electronic, filter),
        None => Verdict::UnknownCountry {
            prefix: electronic.chars().take(2).collect(),
        },
    }
}

/// Checks an electronic-format `code` against `spec`.
pub fn check_against(spec: &Specification, electronic: &str, filter: CryptoFilter) -> Verdict {
    if electronic.len() != spec.length() {
        return Verdict::WrongLength {
            expected: spec.length(),
            actual: electronic.len(),
        };
    }
    if !filter.matches(spec.crypto()) {
        return Verdict::FilteredOut {
            crypto: spec.crypto().to_string(),
        };
    }
    let body_fits = electronic
        .get(4..)
        .is_some_and(|body| spec.is_valid_bcan(body, CryptoFilter::Off));
    if !body_fits {
        return Verdict::StructureMismatch {
            structure: spec.structure().to_string(),
        };
    }
    if !is_valid_checksum(electronic) {
        return Verdict::ChecksumMismatch;
    }
    Verdict::Valid
}
