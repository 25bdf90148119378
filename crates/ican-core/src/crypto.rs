//! Crypto-network classification of specifications and the filters callers
//! use to select them.
//!
//! Every tag accepts two spellings per network (`main`/`mainnet`,
//! `test`/`testnet`, `enter`/`enterprise`); both collapse to one canonical
//! variant when parsed, so nothing downstream compares strings.
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

/// One of the three mutually exclusive blockchain network kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CryptoNetwork {
    /// Production network.
    Main,
    /// Public test network.
    Test,
    /// Permissioned enterprise network.
    Enter,
}

impl CryptoNetwork {
    /// Returns the canonical short tag (`main`, `test` or `enter`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Main => "main",
            Self::Test => "test",
            Self::Enter => "enter",
        }
    }

    /// Parses either accepted spelling of a network tag.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "main" | "mainnet" => Some(Self::Main),
            "test" | "testnet" => Some(Self::Test),
            "enter" | "enterprise" => Some(Self::Enter),
            _ => None,
        }
    }
}

impl fmt::Display for CryptoNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a crypto tag or filter string is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error(
    "unknown crypto tag {got:?}: expected one of main, mainnet, test, testnet, enter, enterprise, true, false"
)]
pub struct CryptoTagError {
    /// The rejected input.
    pub got: String,
}

// ---------------------------------------------------------------------------
// CryptoClass
// ---------------------------------------------------------------------------

/// The crypto classification carried by a [`crate::Specification`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CryptoClass {
    /// An ordinary bank account identifier.
    #[default]
    NotCrypto,
    /// A crypto identifier not tied to a single network kind.
    AllCrypto,
    /// A mainnet identifier.
    Main,
    /// A testnet identifier.
    Test,
    /// An enterprise network identifier.
    Enter,
}

impl CryptoClass {
    /// Returns `true` for every classification except [`CryptoClass::NotCrypto`].
    pub fn is_crypto(self) -> bool {
        !matches!(self, Self::NotCrypto)
    }

    /// Returns the network kind, if the classification names exactly one.
    pub fn network(self) -> Option<CryptoNetwork> {
        match self {
            Self::Main => Some(CryptoNetwork::Main),
            Self::Test => Some(CryptoNetwork::Test),
            Self::Enter => Some(CryptoNetwork::Enter),
            Self::NotCrypto | Self::AllCrypto => None,
        }
    }

    /// Returns the canonical tag used in serialized output.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NotCrypto => "false",
            Self::AllCrypto => "true",
            Self::Main => "main",
            Self::Test => "test",
            Self::Enter => "enter",
        }
    }
}

impl From<CryptoNetwork> for CryptoClass {
    fn from(network: CryptoNetwork) -> Self {
        match network {
            CryptoNetwork::Main => Self::Main,
            CryptoNetwork::Test => Self::Test,
            CryptoNetwork::Enter => Self::Enter,
        }
    }
}

impl FromStr for CryptoClass {
    type Err = CryptoTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "false" | "none" => Ok(Self::NotCrypto),
            "true" | "all" => Ok(Self::AllCrypto),
            other => CryptoNetwork::from_tag(other)
                .map(Self::from)
                .ok_or_else(|| CryptoTagError {
                    got: other.to_owned(),
                }),
        }
    }
}

impl fmt::Display for CryptoClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for CryptoClass {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::NotCrypto => serializer.serialize_bool(false),
            Self::AllCrypto => serializer.serialize_bool(true),
            Self::Main | Self::Test | Self::Enter => serializer.serialize_str(self.as_str()),
        }
    }
}

impl<'de> Deserialize<'de> for CryptoClass {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct CryptoClassVisitor;

        impl de::Visitor<'_> for CryptoClassVisitor {
            type Value = CryptoClass;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a boolean or a crypto network tag")
            }

            fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
                Ok(if v {
                    CryptoClass::AllCrypto
                } else {
                    CryptoClass::NotCrypto
                })
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                v.parse().map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_any(CryptoClassVisitor)
    }
}

// ---------------------------------------------------------------------------
// CryptoFilter
// ---------------------------------------------------------------------------

/// Restricts validation to specifications of a given crypto classification.
///
/// - [`CryptoFilter::Off`] accepts every specification.
/// - [`CryptoFilter::AnyCrypto`] accepts every crypto specification, whatever
///   its network kind.
/// - [`CryptoFilter::Network`] accepts only specifications classified with
///   exactly that network kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CryptoFilter {
    /// No crypto filtering.
    #[default]
    Off,
    /// Crypto specifications of any kind.
    AnyCrypto,
    /// Crypto specifications of one network kind.
    Network(CryptoNetwork),
}

impl CryptoFilter {
    /// Returns `true` if a specification classified as `class` passes the filter.
    ///
    /// # Examples
    ///
    /// ```
    /// use ican_core::{CryptoClass, CryptoFilter, CryptoNetwork};
    ///
    /// assert!(CryptoFilter::Off.matches(CryptoClass::NotCrypto));
    /// assert!(CryptoFilter::AnyCrypto.matches(CryptoClass::Test));
    /// assert!(!CryptoFilter::Network(CryptoNetwork::Main).matches(CryptoClass::Test));
    /// ```
    pub fn matches(self, class: CryptoClass) -> bool {
        match self {
            Self::Off => true,
            Self::AnyCrypto => class.is_crypto(),
            Self::Network(network) => class.network() == Some(network),
        }
    }
}

impl From<bool> for CryptoFilter {
    fn from(only_crypto: bool) -> Self {
        if only_crypto {
            Self::AnyCrypto
        } else {
            Self::Off
        }
    }
}

impl From<CryptoNetwork> for CryptoFilter {
    fn from(network: CryptoNetwork) -> Self {
        Self::Network(network)
    }
}

impl FromStr for CryptoFilter {
    type Err = CryptoTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "false" | "off" => Ok(Self::Off),
            "true" | "any" => Ok(Self::AnyCrypto),
            other => CryptoNetwork::from_tag(other)
                .map(Self::Network)
                .ok_or_else(|| CryptoTagError {
                    got: other.to_owned(),
                }),
        }
    }
}

impl fmt::Display for CryptoFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Off => f.write_str("off"),
            Self::AnyCrypto => f.write_str("any"),
            Self::Network(network) => write!(f, "{network}"),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;

    #[test]
    fn network_spellings_normalize() {
        for (tag, expected) in [
            ("main", CryptoNetwork::Main),
            ("mainnet", CryptoNetwork::Main),
            ("test", CryptoNetwork::Test),
            ("testnet", CryptoNetwork::Test),
            ("enter", CryptoNetwork::Enter),
            ("enterprise", CryptoNetwork::Enter),
        ] {
            assert_eq!(CryptoNetwork::from_tag(tag), Some(expected), "tag {tag}");
        }
    }

    #[test]
    fn network_tags_are_case_sensitive() {
        assert_eq!(CryptoNetwork::from_tag("Main"), None);
        assert_eq!(CryptoNetwork::from_tag(""), None);
    }

    #[test]
    fn class_parses_booleans_and_networks() {
        assert_eq!("false".parse::<CryptoClass>(), Ok(CryptoClass::NotCrypto));
        assert_eq!("true".parse::<CryptoClass>(), Ok(CryptoClass::AllCrypto));
        assert_eq!("testnet".parse::<CryptoClass>(), Ok(CryptoClass::Test));
        assert!("devnet".parse::<CryptoClass>().is_err());
    }

    #[test]
    fn class_is_crypto() {
        assert!(!CryptoClass::NotCrypto.is_crypto());
        assert!(CryptoClass::AllCrypto.is_crypto());
        assert!(CryptoClass::Enter.is_crypto());
    }

    #[test]
    fn filter_off_accepts_everything() {
        for class in [
            CryptoClass::NotCrypto,
            CryptoClass::AllCrypto,
            CryptoClass::Main,
            CryptoClass::Test,
            CryptoClass::Enter,
        ] {
            assert!(CryptoFilter::Off.matches(class), "{class}");
        }
    }

    #[test]
    fn filter_any_rejects_only_bank_codes() {
        assert!(!CryptoFilter::AnyCrypto.matches(CryptoClass::NotCrypto));
        assert!(CryptoFilter::AnyCrypto.matches(CryptoClass::AllCrypto));
        assert!(CryptoFilter::AnyCrypto.matches(CryptoClass::Main));
    }

    #[test]
    fn filter_network_requires_exact_kind() {
        let main = CryptoFilter::Network(CryptoNetwork::Main);
        assert!(main.matches(CryptoClass::Main));
        assert!(!main.matches(CryptoClass::Test));
        assert!(!main.matches(CryptoClass::AllCrypto));
        assert!(!main.matches(CryptoClass::NotCrypto));
    }

    #[test]
    fn filter_from_bool() {
        assert_eq!(CryptoFilter::from(false), CryptoFilter::Off);
        assert_eq!(CryptoFilter::from(true), CryptoFilter::AnyCrypto);
    }

    #[test]
    fn filter_parses_every_spelling() {
        assert_eq!("off".parse::<CryptoFilter>(), Ok(CryptoFilter::Off));
        assert_eq!("true".parse::<CryptoFilter>(), Ok(CryptoFilter::AnyCrypto));
        assert_eq!(
            "enterprise".parse::<CryptoFilter>(),
            Ok(CryptoFilter::Network(CryptoNetwork::Enter))
        );
        let err = "mainnett".parse::<CryptoFilter>().expect_err("typo rejected");
        assert!(err.to_string().contains("mainnett"));
    }

    #[test]
    fn class_serializes_like_the_table() {
        assert_eq!(
            serde_json::to_string(&CryptoClass::NotCrypto).expect("serialize"),
            "false"
        );
        assert_eq!(
            serde_json::to_string(&CryptoClass::Main).expect("serialize"),
            "\"main\""
        );
    }

    #[test]
    fn class_deserializes_either_spelling() {
        let class: CryptoClass = serde_json::from_str("\"mainnet\"").expect("deserialize");
        assert_eq!(class, CryptoClass::Main);
        let class: CryptoClass = serde_json::from_str("true").expect("deserialize");
        assert_eq!(class, CryptoClass::AllCrypto);
    }
}
