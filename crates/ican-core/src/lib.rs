#![deny(clippy::print_stdout, clippy::print_stderr)]

pub mod api;
pub mod check_digits;
mod countries;
pub mod crypto;
pub mod error;
pub mod format;
pub mod newtypes;
pub mod registry;
pub mod specification;
pub mod structure;

pub use api::{
    country_of, from_bcan, is_valid, is_valid_bcan, is_valid_bcan_value, is_valid_value, to_bcan,
};
pub use check_digits::{
    compute_check_digits, is_valid_checksum, iso7064_mod97, iso13616_prepare,
};
pub use crypto::{CryptoClass, CryptoFilter, CryptoNetwork, CryptoTagError};
pub use error::IcanError;
pub use format::{
    DEFAULT_SEPARATOR, DEFAULT_SHORT_SEPARATOR, ShortFormat, electronic_format, print_format,
    short_format,
};
pub use newtypes::{CountryCode, NewtypeError};
pub use registry::{Registry, RegistryError, SpecEntry, countries, try_countries};
pub use specification::{Specification, SpecificationError};
pub use structure::{BcanMatcher, Block, PatternClass, Structure, StructureError};

/// Returns the current version of the ican-core library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
