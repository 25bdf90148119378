//! Result formatting: human-readable lines and JSON.
//!
//! Results go to stdout. In human mode each verdict is one line, colored
//! green or red when color is enabled; in JSON mode each record is one
//! NDJSON line, or a single pretty-printed document for listings.
use std::io::{IsTerminal as _, Write};

use serde::Serialize;

// ---------------------------------------------------------------------------
// Color support detection
// ---------------------------------------------------------------------------

/// Returns `true` if ANSI color codes should be emitted.
///
/// Colors are off when `--no-color` is passed, when `NO_COLOR` is set to
/// any value (<https://no-color.org>), or when stdout is not a TTY.
pub fn colors_enabled(no_color_flag: bool) -> bool {
    if no_color_flag || std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    std::io::stdout().is_terminal()
}

// ---------------------------------------------------------------------------
// ANSI escape sequences
// ---------------------------------------------------------------------------

const ANSI_GREEN: &str = "\x1b[32m";
const ANSI_RED: &str = "\x1b[31m";
const ANSI_BOLD: &str = "\x1b[1m";
const ANSI_RESET: &str = "\x1b[0m";

// ---------------------------------------------------------------------------
// OutputConfig
// ---------------------------------------------------------------------------

/// Output settings derived from the global CLI flags.
#[derive(Debug, Clone, Copy)]
pub struct OutputConfig {
    /// Whether ANSI colors are enabled.
    pub colors: bool,
    /// Print only invalid results.
    pub quiet: bool,
}

impl OutputConfig {
    /// Constructs an [`OutputConfig`] from the raw CLI flags.
    pub fn from_flags(no_color_flag: bool, quiet: bool) -> Self {
        Self {
            colors: colors_enabled(no_color_flag),
            quiet,
        }
    }

    /// Plain output: no colors, nothing suppressed.
    #[cfg(test)]
    pub fn plain() -> Self {
        Self {
            colors: false,
            quiet: false,
        }
    }
}

// ---------------------------------------------------------------------------
// Human mode
// ---------------------------------------------------------------------------

/// Writes one verdict line: `valid    <subject>` or
/// `invalid  <subject>: <reason>`.
///
/// In quiet mode valid verdicts are suppressed.
///
/// # Errors
///
/// Returns an error only if writing to `writer` fails.
pub fn write_verdict<W: Write>(
    writer: &mut W,
    subject: &str,
    reason: Option<&str>,
    config: &OutputConfig,
) -> std::io::Result<()> {
    match reason {
        None if config.quiet => Ok(()),
        None => {
            let tag = paint("valid", ANSI_GREEN, config);
            writeln!(writer, "{tag}    {subject}")
        }
        Some(reason) => {
            let tag = paint("invalid", ANSI_RED, config);
            writeln!(writer, "{tag}  {subject}: {reason}")
        }
    }
}

/// Writes `label:` padded to a fixed column, then `value`.
///
/// # Errors
///
/// Returns an error only if writing to `writer` fails.
pub fn write_field<W: Write>(
    writer: &mut W,
    label: &str,
    value: &str,
    config: &OutputConfig,
) -> std::io::Result<()> {
    let key = format!("{label}:");
    let key = paint(&format!("{key:<14}"), ANSI_BOLD, config);
    writeln!(writer, "{key}{value}")
}

fn paint(text: &str, color: &str, config: &OutputConfig) -> String {
    if config.colors {
        format!("{color}{text}{ANSI_RESET}")
    } else {
        text.to_owned()
    }
}

// ---------------------------------------------------------------------------
// JSON mode
// ---------------------------------------------------------------------------

/// Writes `value` as a single NDJSON line.
///
/// # Errors
///
/// Returns an error if serialization or the write fails.
pub fn write_json_line<W: Write, T: Serialize>(writer: &mut W, value: &T) -> std::io::Result<()> {
    serde_json::to_writer(&mut *writer, value).map_err(std::io::Error::other)?;
    writeln!(writer)
}

/// Writes `value` as pretty-printed JSON followed by a newline.
///
/// # Errors
///
/// Returns an error if serialization or the write fails.
pub fn write_json_pretty<W: Write, T: Serialize>(
    writer: &mut W,
    value: &T,
) -> std::io::Result<()> {
    serde_json::to_writer_pretty(&mut *writer, value).map_err(std::io::Error::other)?;
    writeln!(writer)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
