//! Implementation of `ican inspect CODE`.
//!
//! Prints everything known about one code: its normalized forms, the
//! matching specification, the BCAN blocks, and the validity verdict.
//!
//! In `--format json` mode a single JSON object is emitted to stdout.
//! In human mode, aligned key/value lines are printed.
//!
//! Inspection is informational; the exit code is 0 even for invalid codes.
use std::io::Write;

use ican_core::{
    CryptoFilter, DEFAULT_SEPARATOR, country_of, electronic_format, is_valid_checksum,
    print_format,
};
use serde::Serialize;

use crate::OutputFormat;
use crate::error::CliError;
use crate::output::{OutputConfig, write_field, write_json_pretty};
use crate::verdict::{Verdict, check};

/// Facts gathered about one code.
#[derive(Debug, Serialize)]
pub struct InspectReport {
    /// The code in electronic format.
    pub electronic: String,
    /// The code in print format.
    pub print: String,
    /// Registered country, if the prefix is known.
    pub country_code: Option<String>,
    /// Required total length for that country.
    pub expected_length: Option<usize>,
    /// Actual electronic length.
    pub length: usize,
    /// The country's structure string.
    pub structure: Option<String>,
    /// The country's crypto classification tag.
    pub crypto: Option<String>,
    /// BCAN blocks, when the body fits the structure.
    pub bcan_blocks: Option<Vec<String>>,
    /// Whether the MOD 97-10 check passes.
    pub checksum_ok: bool,
    /// The overall verdict.
    pub verdict: Verdict,
}

impl InspectReport {
    /// Builds the report for `code`.
    pub fn from_code(code: &str) -> Self {
        let electronic = electronic_format(code);
        let spec = country_of(&electronic);
        let bcan_blocks = spec
            .and_then(|spec| spec.bcan_blocks(&electronic))
            .map(|blocks| blocks.into_iter().map(str::to_owned).collect());
        Self {
            print: print_format(&electronic, DEFAULT_SEPARATOR),
            country_code: spec.map(|s| s.country_code().to_owned()),
            expected_length: spec.map(ican_core::Specification::length),
            length: electronic.len(),
            structure: spec.map(|s| s.structure().to_string()),
            crypto: spec.map(|s| s.crypto().to_string()),
            bcan_blocks,
            checksum_ok: is_valid_checksum(&electronic),
            verdict: check(&electronic, CryptoFilter::Off),
            electronic,
        }
    }
}

/// Runs the `inspect` command.
///
/// # Errors
///
/// Returns [`CliError::IoError`] only if writing to `out` fails.
pub fn run<W: Write>(
    out: &mut W,
    code: &str,
    format: OutputFormat,
    config: &OutputConfig,
) -> Result<(), CliError> {
    let report = InspectReport::from_code(code);
    match format {
        OutputFormat::Human => print_human(out, &report, config),
        OutputFormat::Json => write_json_pretty(out, &report),
    }
    .map_err(|e| CliError::stdout(&e))
}

fn print_human<W: Write>(
    w: &mut W,
    report: &InspectReport,
    config: &OutputConfig,
) -> std::io::Result<()> {
    let none = "-";
    write_field(w, "electronic", &report.electronic, config)?;
    write_field(w, "print", &report.print, config)?;
    write_field(
        w,
        "country",
        report.country_code.as_deref().unwrap_or("unknown"),
        config,
    )?;
    let length = match report.expected_length {
        Some(expected) => format!("{} (expected {expected})", report.length),
        None => report.length.to_string(),
    };
    write_field(w, "length", &length, config)?;
    write_field(w, "structure", report.structure.as_deref().unwrap_or(none), config)?;
    write_field(w, "crypto", report.crypto.as_deref().unwrap_or(none), config)?;
    let blocks = report
        .bcan_blocks
        .as_ref()
        .map_or_else(|| none.to_owned(), |blocks| blocks.join(" | "));
    write_field(w, "bcan", &blocks, config)?;
    write_field(
        w,
        "checksum",
        if report.checksum_ok { "ok" } else { "mismatch" },
        config,
    )?;
    write_field(w, "verdict", &report.verdict.to_string(), config)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;

    #[test]
    fn report_for_valid_code() {
        let report = InspectReport::from_code("gb29 nwbk 6016 1331 9268 19");
        assert_eq!(report.electronic, "GB29NWBK60161331926819");
        assert_eq!(report.print, "GB29 NWBK 6016 1331 9268 19");
        assert_eq!(report.country_code.as_deref(), Some("GB"));
        assert_eq!(report.expected_length, Some(22));
        assert_eq!(
            report.bcan_blocks,
            Some(vec![
                "NWBK".to_owned(),
                "601613".to_owned(),
                "31926819".to_owned()
            ])
        );
        assert!(report.checksum_ok);
        assert_eq!(report.verdict, Verdict::Valid);
    }

    #[test]
    fn report_for_unknown_country() {
        let report = InspectReport::from_code("ZZ68539007547034");
        assert!(report.country_code.is_none());
        assert!(report.bcan_blocks.is_none());
        assert!(matches!(report.verdict, Verdict::UnknownCountry { .. }));
    }

    #[test]
    fn report_for_bad_checksum_still_has_blocks() {
        let report = InspectReport::from_code("BE68539007547035");
        assert!(!report.checksum_ok);
        assert_eq!(report.bcan_blocks.as_ref().map(Vec::len), Some(3));
        assert_eq!(report.verdict, Verdict::ChecksumMismatch);
    }

    #[test]
    fn human_output_lists_fields() {
        let mut buf = Vec::new();
        run(
            &mut buf,
            "BE68539007547034",
            OutputFormat::Human,
            &OutputConfig::plain(),
        )
        .expect("inspect succeeds");
        let out = String::from_utf8(buf).expect("UTF-8");
        assert!(out.contains("country:      BE"), "{out}");
        assert!(out.contains("bcan:         539 | 0075470 | 34"), "{out}");
        assert!(out.contains("verdict:      valid"), "{out}");
    }

    #[test]
    fn json_output_is_one_object() {
        let mut buf = Vec::new();
        run(
            &mut buf,
            "BE68539007547034",
            OutputFormat::Json,
            &OutputConfig::plain(),
        )
        .expect("inspect succeeds");
        let value: serde_json::Value = serde_json::from_slice(&buf).expect("JSON");
        assert_eq!(value["country_code"], "BE");
        assert_eq!(value["verdict"]["verdict"], "valid");
    }
}
