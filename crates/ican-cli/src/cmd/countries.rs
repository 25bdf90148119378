//! Implementation of `ican countries [--crypto FILTER]`.
//!
//! Human mode prints an aligned table sorted by country code. JSON mode
//! prints one array of specification records.
use std::io::Write;

use ican_core::{CryptoFilter, Specification, countries};

use crate::OutputFormat;
use crate::error::CliError;
use crate::output::write_json_pretty;

/// Runs the `countries` command.
///
/// # Errors
///
/// Returns [`CliError::IoError`] only if writing to `out` fails.
pub fn run<W: Write>(out: &mut W, filter: CryptoFilter, format: OutputFormat) -> Result<(), CliError> {
    let specs: Vec<&Specification> = countries().crypto(filter).collect();
    tracing::debug!(count = specs.len(), %filter, "listing specifications");
    match format {
        OutputFormat::Human => print_table(out, &specs),
        OutputFormat::Json => write_json_pretty(out, &specs),
    }
    .map_err(|e| CliError::stdout(&e))
}

fn print_table<W: Write>(w: &mut W, specs: &[&Specification]) -> std::io::Result<()> {
    let structure_width = specs
        .iter()
        .map(|spec| spec.structure().as_str().len())
        .max()
        .unwrap_or(0)
        .max("STRUCTURE".len());
    writeln!(
        w,
        "{:<4}{:>6}  {:<structure_width$}  {:<6}  EXAMPLE",
        "CODE", "LENGTH", "STRUCTURE", "CRYPTO"
    )?;
    for spec in specs {
        writeln!(
            w,
            "{:<4}{:>6}  {:<structure_width$}  {:<6}  {}",
            spec.country_code(),
            spec.length(),
            spec.structure().as_str(),
            spec.crypto().as_str(),
            spec.example(),
        )?;
    }
    Ok(())
}
