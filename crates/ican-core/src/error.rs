//! Errors surfaced by the conversion entry points.
//!
//! Boolean entry points (`is_valid`, `is_valid_bcan`) never return these;
//! an unknown country or a malformed input simply yields `false` there.

/// All error conditions that [`crate::to_bcan`], [`crate::from_bcan`] and
/// their [`crate::Specification`] counterparts can report.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IcanError {
    /// No specification is registered under the requested code.
    #[error("no country with code {code:?}")]
    UnknownCountry {
        /// The code that was looked up.
        code: String,
    },

    /// The BCAN does not satisfy the country's length and structure rules.
    #[error("invalid BCAN {bcan:?} for country {country_code}")]
    InvalidBcan {
        /// The country whose rules were applied.
        country_code: String,
        /// The rejected BCAN, in electronic format.
        bcan: String,
    },

    /// The body of an account code does not fit the country's structure, so
    /// it cannot be split into BCAN blocks.
    #[error("code {code:?} does not match the structure of country {country_code}")]
    StructureMismatch {
        /// The country whose structure was applied.
        country_code: String,
        /// The rejected code, in electronic format.
        code: String,
    },
}
