//! Account code generator and benchmark utilities for ICAN.
//!
//! This crate provides deterministic generation of valid account codes
//! across every registered country for benchmarking and property-based
//! testing of `ican-core`.

pub mod generator;

pub use generator::{
    GeneratorConfig, SizeTier, corrupt_check_digits, gen_bcan, gen_code, generate_codes,
};
