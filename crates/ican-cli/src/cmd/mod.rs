//! Command modules for the `ican` CLI.
//!
//! Each submodule implements one subcommand (or a closely related pair).
//! Every `run` function writes its results to the given writer and returns
//! `Ok(())` on success or a [`crate::error::CliError`] on failure.
pub mod convert;
pub mod countries;
pub mod format;
pub mod inspect;
pub mod validate;
pub mod validate_bcan;
