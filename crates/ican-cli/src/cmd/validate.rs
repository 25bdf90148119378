//! Implementation of `ican validate [CODE]... [--file PATH] [--crypto FILTER]`.
//!
//! Prints one result per code to stdout, in input order: positional codes
//! first, then codes read from `--file`.
//!
//! Exit codes:
//! - 0 = every code valid
//! - 1 = at least one code invalid
//! - 2 = input unreadable, or no codes given
use std::io::Write;

use ican_core::{CryptoFilter, electronic_format};
use serde::Serialize;

use crate::OutputFormat;
use crate::error::CliError;
use crate::output::{OutputConfig, write_json_line, write_verdict};
use crate::verdict::{Verdict, check};

/// NDJSON record emitted per code.
#[derive(Debug, Serialize)]
struct CodeResult<'a> {
    input: &'a str,
    code: String,
    valid: bool,
    #[serde(flatten)]
    verdict: &'a Verdict,
}

/// Runs the `validate` command over already-collected `codes`.
///
/// # Errors
///
/// - [`CliError::NoInput`] when `codes` is empty.
/// - [`CliError::InvalidCodes`] when any code is invalid.
/// - [`CliError::IoError`] when writing to `out` fails.
pub fn run<W: Write>(
    out: &mut W,
    codes: &[String],
    filter: CryptoFilter,
    format: OutputFormat,
    config: &OutputConfig,
) -> Result<(), CliError> {
    if codes.is_empty() {
        return Err(CliError::NoInput);
    }

    let mut invalid = 0;
    for input in codes {
        let verdict = check(input, filter);
        if !verdict.is_valid() {
            invalid += 1;
        }
        match format {
            OutputFormat::Human => {
                write_verdict(out, input, verdict.reason().as_deref(), config)
            }
            OutputFormat::Json => write_json_line(
                out,
                &CodeResult {
                    input,
                    code: electronic_format(input),
                    valid: verdict.is_valid(),
                    verdict: &verdict,
                },
            ),
        }
        .map_err(|e| CliError::stdout(&e))?;
    }

    tracing::debug!(total = codes.len(), invalid, %filter, "validated codes");

    if invalid > 0 {
        Err(CliError::InvalidCodes {
            invalid,
            total: codes.len(),
        })
    } else {
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
