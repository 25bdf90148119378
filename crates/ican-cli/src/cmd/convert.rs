//! Implementation of `ican to-bcan` and `ican from-bcan`.
//!
//! Both print the converted value alone on stdout in human mode, or a single
//! JSON object in JSON mode.
//!
//! Exit codes: 0 = converted, 1 = input does not fit the country's
//! structure, 2 = unknown country.
use std::io::Write;

use ican_core::{electronic_format, from_bcan, to_bcan};
use serde_json::json;

use crate::OutputFormat;
use crate::error::CliError;
use crate::output::write_json_line;

/// Runs `to-bcan`: splits `code` into its BCAN blocks.
///
/// # Errors
///
/// Returns [`CliError::UnknownCountry`] or [`CliError::StructureMismatch`].
pub fn run_to_bcan<W: Write>(
    out: &mut W,
    code: &str,
    separator: &str,
    format: OutputFormat,
) -> Result<(), CliError> {
    let bcan = to_bcan(code, separator)?;
    match format {
        OutputFormat::Human => writeln!(out, "{bcan}"),
        OutputFormat::Json => write_json_line(
            out,
            &json!({ "code": electronic_format(code), "bcan": bcan }),
        ),
    }
    .map_err(|e| CliError::stdout(&e))
}

/// Runs `from-bcan`: builds the full code for `bcan` in `country`.
///
/// # Errors
///
/// Returns [`CliError::UnknownCountry`] or [`CliError::InvalidBcan`].
pub fn run_from_bcan<W: Write>(
    out: &mut W,
    country: &str,
    bcan: &str,
    format: OutputFormat,
) -> Result<(), CliError> {
    let code = from_bcan(country, bcan)?;
    tracing::debug!(country, %code, "computed check digits");
    match format {
        OutputFormat::Human => writeln!(out, "{code}"),
        OutputFormat::Json => write_json_line(
            out,
            &json!({
                "country_code": country,
                "bcan": electronic_format(bcan),
                "code": code,
            }),
        ),
    }
    .map_err(|e| CliError::stdout(&e))
}
