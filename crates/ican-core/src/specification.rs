//! One country's (or network's) account-code rules.
//!
//! A [`Specification`] knows the total code length, the BCAN structure, the
//! crypto classification and a known-good example. All methods expect input
//! already in electronic format (see [`crate::electronic_format`]); the free
//! functions in [`crate::api`] take care of normalizing first.
use std::sync::OnceLock;

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::check_digits::{compute_check_digits, is_valid_checksum};
use crate::crypto::{CryptoClass, CryptoFilter};
use crate::error::IcanError;
use crate::newtypes::{CountryCode, NewtypeError};
use crate::structure::{BcanMatcher, Structure, StructureError};

/// Characters taken by the country code and check digits.
const PREFIX_LEN: usize = 4;

/// Errors produced when a specification record is inconsistent.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SpecificationError {
    /// The country code is not two uppercase ASCII letters.
    #[error(transparent)]
    CountryCode(#[from] NewtypeError),

    /// The structure string is malformed.
    #[error(transparent)]
    Structure(#[from] StructureError),

    /// The structure does not account for exactly `length - 4` characters.
    #[error(
        "specification {country_code}: length {length} does not match structure {structure} ({bcan_length} + 4)"
    )]
    LengthMismatch {
        /// The country being defined.
        country_code: String,
        /// The declared total length.
        length: usize,
        /// The structure string.
        structure: String,
        /// The BCAN length the structure describes.
        bcan_length: usize,
    },
}

/// Validation and conversion rules for one country or network code.
///
/// The compiled [`BcanMatcher`] is built on first use and cached for the
/// lifetime of the specification.
#[derive(Debug, Clone)]
pub struct Specification {
    country_code: CountryCode,
    length: usize,
    structure: Structure,
    crypto: CryptoClass,
    example: String,
    matcher: OnceLock<Option<BcanMatcher>>,
}

impl Specification {
    /// Creates a specification after checking that its fields agree.
    ///
    /// # Errors
    ///
    /// - [`SpecificationError::CountryCode`]: `country_code` is not `^[A-Z]{2}$`.
    /// - [`SpecificationError::Structure`]: `structure` is malformed.
    /// - [`SpecificationError::LengthMismatch`]: the structure does not
    ///   describe `length - 4` characters.
    ///
    /// # Examples
    ///
    /// ```
    /// use ican_core::{CryptoClass, CryptoFilter, Specification};
    ///
    /// let be = Specification::new("BE", 16, "F03F07F02", CryptoClass::NotCrypto, "BE68539007547034")
    ///     .expect("consistent record");
    /// assert!(be.is_valid("BE68539007547034", CryptoFilter::Off));
    /// ```
    pub fn new(
        country_code: &str,
        length: usize,
        structure: &str,
        crypto: CryptoClass,
        example: &str,
    ) -> Result<Self, SpecificationError> {
        let country_code = CountryCode::try_from(country_code)?;
        let structure = Structure::parse(structure)?;

        let bcan_length = structure.bcan_length();
        if bcan_length + PREFIX_LEN != length {
            return Err(SpecificationError::LengthMismatch {
                country_code: country_code.to_string(),
                length,
                structure: structure.to_string(),
                bcan_length,
            });
        }

        Ok(Self {
            country_code,
            length,
            structure,
            crypto,
            example: example.to_owned(),
            matcher: OnceLock::new(),
        })
    }

    /// Returns the two-letter code this specification is registered under.
    pub fn country_code(&self) -> &str {
        self.country_code.as_str()
    }

    /// Returns the total length of a code in electronic format.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Returns the length of a bare BCAN.
    pub fn bcan_length(&self) -> usize {
        self.length - PREFIX_LEN
    }

    /// Returns the parsed BCAN structure.
    pub fn structure(&self) -> &Structure {
        &self.structure
    }

    /// Returns the crypto classification.
    pub fn crypto(&self) -> CryptoClass {
        self.crypto
    }

    /// Returns the example code shipped with the specification.
    pub fn example(&self) -> &str {
        &self.example
    }

    /// Returns the compiled matcher, building it on first access.
    ///
    /// `None` only if the regex engine refused a pattern built from a
    /// structure that already parsed; every matching operation then fails.
    fn matcher(&self) -> Option<&BcanMatcher> {
        self.matcher
            .get_or_init(|| match self.structure.compile() {
                Ok(matcher) => Some(matcher),
                Err(e) => {
                    tracing::error!(
                        country_code = %self.country_code,
                        error = %e,
                        "structure failed to compile"
                    );
                    None
                }
            })
            .as_ref()
    }

    fn matches_structure(&self, bcan: &str) -> bool {
        self.matcher().is_some_and(|m| m.is_match(bcan))
    }

    /// Returns `true` if `code` is a valid account code for this specification.
    ///
    /// All of the following must hold: the length equals [`Self::length`], the
    /// code starts with [`Self::country_code`], `filter` accepts this
    /// specification's crypto classification, the body after the check digits
    /// matches the structure, and the MOD 97-10 checksum is 1.
    pub fn is_valid(&self, code: &str, filter: CryptoFilter) -> bool {
        code.len() == self.length
            && code.get(..2) == Some(self.country_code.as_str())
            && filter.matches(self.crypto)
            && code
                .get(PREFIX_LEN..)
                .is_some_and(|body| self.matches_structure(body))
            && is_valid_checksum(code)
    }

    /// Splits the body of `code` into its BCAN blocks, joined by `separator`.
    ///
    /// Neither the country prefix nor the check digits are verified; use
    /// [`Self::is_valid`] first when that matters.
    ///
    /// # Errors
    ///
    /// Returns [`IcanError::StructureMismatch`] if the body does not fit the
    /// structure.
    pub fn to_bcan(&self, code: &str, separator: &str) -> Result<String, IcanError> {
        self.bcan_blocks(code)
            .map(|blocks| blocks.join(separator))
            .ok_or_else(|| IcanError::StructureMismatch {
                country_code: self.country_code.to_string(),
                code: code.to_owned(),
            })
    }

    /// Returns the body of `code` split into its BCAN blocks.
    ///
    /// `None` when the body does not fit the structure. Like
    /// [`Self::to_bcan`], the prefix and check digits are not verified.
    pub fn bcan_blocks<'a>(&self, code: &'a str) -> Option<Vec<&'a str>> {
        code.get(PREFIX_LEN..)
            .and_then(|body| self.matcher()?.blocks(body))
    }

    /// Builds the full account code for `bcan`, computing its check digits.
    ///
    /// # Errors
    ///
    /// Returns [`IcanError::InvalidBcan`] if `bcan` fails
    /// [`Self::is_valid_bcan`].
    pub fn from_bcan(&self, bcan: &str) -> Result<String, IcanError> {
        let invalid = || IcanError::InvalidBcan {
            country_code: self.country_code.to_string(),
            bcan: bcan.to_owned(),
        };
        if !self.is_valid_bcan(bcan, CryptoFilter::Off) {
            return Err(invalid());
        }
        let check_digits = compute_check_digits(self.country_code(), bcan).ok_or_else(invalid)?;
        Ok(format!("{}{check_digits}{bcan}", self.country_code))
    }

    /// Returns `true` if `bcan` fits this specification's length and structure.
    ///
    /// No check digits are involved: `bcan` carries neither the country code
    /// nor the check digits.
    pub fn is_valid_bcan(&self, bcan: &str, filter: CryptoFilter) -> bool {
        bcan.len() == self.bcan_length()
            && filter.matches(self.crypto)
            && self.matches_structure(bcan)
    }

    /// Returns `true` if the shipped example validates against this
    /// specification.
    pub fn example_is_valid(&self) -> bool {
        self.is_valid(&self.example, CryptoFilter::Off)
    }
}

impl Serialize for Specification {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Specification", 5)?;
        state.serialize_field("country_code", &self.country_code)?;
        state.serialize_field("length", &self.length)?;
        state.serialize_field("structure", self.structure.as_str())?;
        state.serialize_field("crypto", &self.crypto)?;
        state.serialize_field("example", &self.example)?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]
    #![allow(clippy::panic)]

    use super::*;
    use crate::crypto::CryptoNetwork;

    fn belgium() -> Specification {
        Specification::new(
            "BE",
            16,
            "F03F07F02",
            CryptoClass::NotCrypto,
            "BE68539007547034",
        )
        .expect("valid specification")
    }

    fn core_mainnet() -> Specification {
        Specification::new(
            "CB",
            44,
            "H40",
            CryptoClass::Main,
            "CB661234567890ABCDEF1234567890ABCDEF12345678",
        )
        .expect("valid specification")
    }

    // ── construction ─────────────────────────────────────────────────────────

    #[test]
    fn new_rejects_lowercase_country_code() {
        let err = Specification::new("be", 16, "F03F07F02", CryptoClass::NotCrypto, "")
            .expect_err("lowercase code");
        assert!(matches!(err, SpecificationError::CountryCode(_)));
    }

    #[test]
    fn new_rejects_malformed_structure() {
        let err = Specification::new("BE", 16, "F03F07F2", CryptoClass::NotCrypto, "")
            .expect_err("misaligned structure");
        assert!(matches!(
            err,
            SpecificationError::Structure(StructureError::Misaligned { .. })
        ));
    }

    #[test]
    fn new_rejects_length_mismatch() {
        match Specification::new("BE", 17, "F03F07F02", CryptoClass::NotCrypto, "") {
            Err(SpecificationError::LengthMismatch {
                length,
                bcan_length,
                ..
            }) => {
                assert_eq!(length, 17);
                assert_eq!(bcan_length, 12);
            }
            other => panic!("expected LengthMismatch, got {other:?}"),
        }
    }

    #[test]
    fn accessors_expose_record() {
        let be = belgium();
        assert_eq!(be.country_code(), "BE");
        assert_eq!(be.length(), 16);
        assert_eq!(be.bcan_length(), 12);
        assert_eq!(be.structure().as_str(), "F03F07F02");
        assert_eq!(be.crypto(), CryptoClass::NotCrypto);
        assert_eq!(be.example(), "BE68539007547034");
    }

    // ── is_valid ─────────────────────────────────────────────────────────────

    #[test]
    fn is_valid_accepts_example() {
        assert!(belgium().example_is_valid());
        assert!(core_mainnet().example_is_valid());
    }

    #[test]
    fn is_valid_rejects_bad_checksum() {
        assert!(!belgium().is_valid("BE68539007547035", CryptoFilter::Off));
    }

    #[test]
    fn is_valid_rejects_wrong_length() {
        assert!(!belgium().is_valid("BE6853900754703", CryptoFilter::Off));
        assert!(!belgium().is_valid("", CryptoFilter::Off));
    }

    #[test]
    fn is_valid_rejects_other_country_prefix() {
        assert!(!belgium().is_valid("NL68539007547034", CryptoFilter::Off));
    }

    #[test]
    fn is_valid_rejects_structure_violation() {
        // Letters are not allowed in an all-numeric Belgian body.
        assert!(!belgium().is_valid("BE6853900754703A", CryptoFilter::Off));
    }

    #[test]
    fn is_valid_rejects_multibyte_input_without_panicking() {
        assert!(!belgium().is_valid("BÉ8539007547034", CryptoFilter::Off));
        assert!(!belgium().is_valid("BE6é539007547034", CryptoFilter::Off));
    }

    #[test]
    fn is_valid_applies_crypto_filter() {
        let be = belgium();
        assert!(!be.is_valid("BE68539007547034", CryptoFilter::AnyCrypto));

        let cb = core_mainnet();
        let code = "CB661234567890ABCDEF1234567890ABCDEF12345678";
        assert!(cb.is_valid(code, CryptoFilter::AnyCrypto));
        assert!(cb.is_valid(code, CryptoFilter::Network(CryptoNetwork::Main)));
        assert!(!cb.is_valid(code, CryptoFilter::Network(CryptoNetwork::Test)));
    }

    // ── to_bcan ──────────────────────────────────────────────────────────────

    #[test]
    fn to_bcan_joins_blocks() {
        assert_eq!(
            belgium()
                .to_bcan("BE68539007547034", "-")
                .expect("matching body"),
            "539-0075470-34"
        );
    }

    #[test]
    fn to_bcan_does_not_check_digits() {
        assert_eq!(
            belgium()
                .to_bcan("BE00539007547034", " ")
                .expect("matching body"),
            "539 0075470 34"
        );
    }

    #[test]
    fn to_bcan_reports_structure_mismatch() {
        let err = belgium()
            .to_bcan("BE6853900754703", " ")
            .expect_err("short body");
        assert!(matches!(err, IcanError::StructureMismatch { .. }));
    }

    #[test]
    fn bcan_blocks_splits_body() {
        assert_eq!(
            belgium().bcan_blocks("BE68539007547034"),
            Some(vec!["539", "0075470", "34"])
        );
        assert_eq!(belgium().bcan_blocks("BE6853900754703"), None);
    }

    #[test]
    fn bcan_blocks_keeps_empty_blocks() {
        let spec = Specification::new("XX", 7, "F00F03", CryptoClass::NotCrypto, "")
            .expect("valid specification");
        assert_eq!(spec.bcan_blocks("XX00123"), Some(vec!["", "123"]));
    }

    // ── from_bcan ────────────────────────────────────────────────────────────

    #[test]
    fn from_bcan_computes_check_digits() {
        assert_eq!(
            belgium().from_bcan("539007547034").expect("valid bcan"),
            "BE68539007547034"
        );
    }

    #[test]
    fn from_bcan_rejects_wrong_length() {
        match belgium().from_bcan("1539007547034") {
            Err(IcanError::InvalidBcan { country_code, bcan }) => {
                assert_eq!(country_code, "BE");
                assert_eq!(bcan, "1539007547034");
            }
            other => panic!("expected InvalidBcan, got {other:?}"),
        }
    }

    #[test]
    fn from_bcan_output_validates() {
        let cb = core_mainnet();
        let code = cb
            .from_bcan("FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF")
            .expect("hex bcan");
        assert!(cb.is_valid(&code, CryptoFilter::Off));
    }

    // ── is_valid_bcan ────────────────────────────────────────────────────────

    #[test]
    fn is_valid_bcan_checks_length_and_structure() {
        let be = belgium();
        assert!(be.is_valid_bcan("539007547034", CryptoFilter::Off));
        assert!(!be.is_valid_bcan("1539007547034", CryptoFilter::Off));
        assert!(!be.is_valid_bcan("ABC007547034", CryptoFilter::Off));
    }

    #[test]
    fn is_valid_bcan_applies_crypto_filter() {
        assert!(!belgium().is_valid_bcan("539007547034", CryptoFilter::AnyCrypto));
        assert!(core_mainnet().is_valid_bcan(
            "1234567890ABCDEF1234567890ABCDEF12345678",
            CryptoFilter::Network(CryptoNetwork::Main)
        ));
    }

    // ── caching and serialization ───────────────────────────────────────────

    #[test]
    fn matcher_is_cached_after_first_use() {
        let be = belgium();
        assert!(be.matcher.get().is_none());
        assert!(be.example_is_valid());
        assert!(be.matcher.get().is_some());
        let first = be.matcher().map(std::ptr::from_ref);
        let second = be.matcher().map(std::ptr::from_ref);
        assert_eq!(first, second);
    }

    #[test]
    fn serializes_record_fields_only() {
        let json = serde_json::to_value(belgium()).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({
                "country_code": "BE",
                "length": 16,
                "structure": "F03F07F02",
                "crypto": false,
                "example": "BE68539007547034",
            })
        );
    }
}
