//! Implementation of `ican validate-bcan COUNTRY BCAN [--crypto FILTER]`.
//!
//! Exit codes: 0 = valid, 1 = invalid, 2 = unknown country.
use std::io::Write;

use ican_core::{CryptoFilter, countries, electronic_format, is_valid_bcan};
use serde_json::json;

use crate::OutputFormat;
use crate::error::CliError;
use crate::output::{OutputConfig, write_json_line, write_verdict};

/// Runs the `validate-bcan` command.
///
/// # Errors
///
/// - [`CliError::UnknownCountry`] when `country` is not registered.
/// - [`CliError::InvalidBcan`] when `bcan` does not fit its structure.
pub fn run<W: Write>(
    out: &mut W,
    country: &str,
    bcan: &str,
    filter: CryptoFilter,
    format: OutputFormat,
    config: &OutputConfig,
) -> Result<(), CliError> {
    let spec = countries()
        .get(country)
        .ok_or_else(|| CliError::UnknownCountry {
            code: country.to_owned(),
        })?;

    let electronic = electronic_format(bcan);
    let valid = is_valid_bcan(country, bcan, filter);
    let reason = (!valid).then(|| {
        format!(
            "expected {} characters matching {}",
            spec.bcan_length(),
            spec.structure()
        )
    });

    match format {
        OutputFormat::Human => write_verdict(out, bcan, reason.as_deref(), config),
        OutputFormat::Json => write_json_line(
            out,
            &json!({
                "country_code": spec.country_code(),
                "bcan": electronic,
                "valid": valid,
                "structure": spec.structure().as_str(),
            }),
        ),
    }
    .map_err(|e| CliError::stdout(&e))?;

    if valid {
        Ok(())
    } else {
        Err(CliError::InvalidBcan {
            country_code: country.to_owned(),
            bcan: electronic,
        })
    }
}
