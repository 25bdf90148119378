//! Validated newtype wrappers for identifier parts.
//!
//! Each newtype checks its shape at construction time via [`TryFrom<&str>`].
//! Once constructed, the inner value is immutable (no `DerefMut`). Serde
//! `Deserialize` impls re-run validation so invalid data cannot enter the type
//! system from untrusted JSON.
use std::fmt;
use std::ops::Deref;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// Errors produced when constructing a validated newtype from an invalid string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NewtypeError {
    /// The string did not match the expected format.
    #[error("invalid {type_name}: expected {expected}, got {got:?}")]
    InvalidFormat {
        /// Name of the type that rejected the input.
        type_name: &'static str,
        /// A human-readable description of the expected format.
        expected: &'static str,
        /// The input that was rejected.
        got: String,
    },
}

// ---------------------------------------------------------------------------
// Regex statics
//
// The pattern is a compile-time literal; Regex::new never returns Err for it.
// The fallback only exists because the workspace bans expect() and unwrap().
// ---------------------------------------------------------------------------

/// Matches two uppercase ASCII letters.
static COUNTRY_CODE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Z]{2}$").unwrap_or_else(|_| {
        Regex::new("a^").unwrap_or_else(|_| unreachable!("regex engine broken"))
    })
});

// ---------------------------------------------------------------------------
// CountryCode
// ---------------------------------------------------------------------------

/// Two-letter country or network code prefixing every account identifier.
///
/// Validates that the string matches `^[A-Z]{2}$`. Membership in the registry
/// is not checked here; a well-formed code may still be unknown.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CountryCode(String);

impl TryFrom<&str> for CountryCode {
    type Error = NewtypeError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        if COUNTRY_CODE_RE.is_match(s) {
            Ok(Self(s.to_owned()))
        } else {
            Err(NewtypeError::InvalidFormat {
                type_name: "CountryCode",
                expected: "two uppercase ASCII letters (e.g. BE)",
                got: s.to_owned(),
            })
        }
    }
}

impl CountryCode {
    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for CountryCode {
    type Target = str;
    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for CountryCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for CountryCode {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for CountryCode {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let s = String::deserialize(d)?;
        Self::try_from(s.as_str()).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;

    #[test]
    fn accepts_two_uppercase_letters() {
        let cc = CountryCode::try_from("BE").expect("valid");
        assert_eq!(cc.as_str(), "BE");
        assert_eq!(&*cc, "BE");
        assert_eq!(cc.to_string(), "BE");
    }

    #[test]
    fn rejects_lowercase() {
        assert!(CountryCode::try_from("be").is_err());
    }

    #[test]
    fn rejects_wrong_length() {
        assert!(CountryCode::try_from("B").is_err());
        assert!(CountryCode::try_from("BEL").is_err());
        assert!(CountryCode::try_from("").is_err());
    }

    #[test]
    fn rejects_digits_and_trailing_newline() {
        assert!(CountryCode::try_from("B1").is_err());
        assert!(CountryCode::try_from("BE\n").is_err());
    }

    #[test]
    fn error_message_names_type_and_input() {
        let err = CountryCode::try_from("b3").expect_err("invalid");
        let msg = err.to_string();
        assert!(msg.contains("CountryCode"), "{msg}");
        assert!(msg.contains("\"b3\""), "{msg}");
    }

    #[test]
    fn serde_round_trip_revalidates() {
        let cc: CountryCode = serde_json::from_str("\"NL\"").expect("deserialize");
        assert_eq!(serde_json::to_string(&cc).expect("serialize"), "\"NL\"");
        assert!(serde_json::from_str::<CountryCode>("\"nl\"").is_err());
    }
}
