//! Entry points that normalize their input and dispatch to the built-in
//! registry.
//!
//! Boolean checks never fail: an unknown country, a malformed code or a
//! non-string JSON value all read as "not valid". Conversions report
//! [`IcanError`] instead, since no sensible string result exists.
use serde_json::Value;

use crate::crypto::CryptoFilter;
use crate::error::IcanError;
use crate::format::electronic_format;
use crate::registry::countries;
use crate::specification::Specification;

/// Returns the specification registered for the country prefix of `code`.
///
/// `code` is reduced to electronic format first, so `"be68 …"` resolves to
/// Belgium.
pub fn country_of(code: &str) -> Option<&'static Specification> {
    lookup_prefix(&electronic_format(code))
}

fn lookup_prefix(electronic: &str) -> Option<&'static Specification> {
    electronic.get(..2).and_then(|prefix| countries().get(prefix))
}

/// Returns `true` if `code` is a valid account code.
///
/// `filter` restricts which crypto classifications are accepted; pass
/// `false` (or [`CryptoFilter::Off`]) to accept every specification.
///
/// # Examples
///
/// ```
/// use ican_core::{CryptoNetwork, is_valid};
///
/// assert!(is_valid("BE68 5390 0754 7034", false));
/// assert!(!is_valid("BE68 5390 0754 7035", false));
/// assert!(is_valid(
///     "CB661234567890ABCDEF1234567890ABCDEF12345678",
///     CryptoNetwork::Main,
/// ));
/// ```
pub fn is_valid(code: &str, filter: impl Into<CryptoFilter>) -> bool {
    let electronic = electronic_format(code);
    lookup_prefix(&electronic).is_some_and(|spec| spec.is_valid(&electronic, filter.into()))
}

/// Like [`is_valid`], for an untyped JSON value. Anything other than a
/// string is not valid.
pub fn is_valid_value(value: &Value, filter: impl Into<CryptoFilter>) -> bool {
    value.as_str().is_some_and(|code| is_valid(code, filter))
}

/// Returns `true` if `bcan` fits the structure of `country_code`.
///
/// The country code is looked up exactly as given; an unregistered code
/// yields `false`.
pub fn is_valid_bcan(country_code: &str, bcan: &str, filter: impl Into<CryptoFilter>) -> bool {
    countries()
        .get(country_code)
        .is_some_and(|spec| spec.is_valid_bcan(&electronic_format(bcan), filter.into()))
}

/// Like [`is_valid_bcan`], for an untyped JSON value. Anything other than a
/// string is not valid.
pub fn is_valid_bcan_value(
    country_code: &str,
    bcan: &Value,
    filter: impl Into<CryptoFilter>,
) -> bool {
    bcan.as_str()
        .is_some_and(|bcan| is_valid_bcan(country_code, bcan, filter))
}

/// Splits the body of `code` into its BCAN blocks joined by `separator`.
///
/// The check digits are not verified.
///
/// # Errors
///
/// Returns [`IcanError::UnknownCountry`] if the prefix is not registered and
/// [`IcanError::StructureMismatch`] if the body does not fit the country's
/// structure.
///
/// # Examples
///
/// ```
/// assert_eq!(
///     ican_core::to_bcan("BE68 5390 0754 7034", "-").expect("Belgian code"),
///     "539-0075470-34",
/// );
/// ```
pub fn to_bcan(code: &str, separator: &str) -> Result<String, IcanError> {
    let electronic = electronic_format(code);
    let spec = lookup_prefix(&electronic).ok_or_else(|| IcanError::UnknownCountry {
        code: electronic.get(..2).unwrap_or(&electronic).to_owned(),
    })?;
    spec.to_bcan(&electronic, separator)
}

/// Builds the full account code for `bcan` in `country_code`, computing the
/// check digits.
///
/// # Errors
///
/// Returns [`IcanError::UnknownCountry`] if `country_code` is not registered
/// and [`IcanError::InvalidBcan`] if `bcan` does not fit its structure.
///
/// # Examples
///
/// ```
/// assert_eq!(
///     ican_core::from_bcan("BE", "539-0075470-34").expect("valid BCAN"),
///     "BE68539007547034",
/// );
/// ```
pub fn from_bcan(country_code: &str, bcan: &str) -> Result<String, IcanError> {
    let spec = countries()
        .get(country_code)
        .ok_or_else(|| IcanError::UnknownCountry {
            code: country_code.to_owned(),
        })?;
    spec.from_bcan(&electronic_format(bcan))
}
