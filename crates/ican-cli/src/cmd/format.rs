//! Implementation of `ican format CODE [--style STYLE]`.
//!
//! Formatting never fails; the exit code is always 0 unless stdout breaks.
use std::io::Write;

use ican_core::{
    DEFAULT_SEPARATOR, DEFAULT_SHORT_SEPARATOR, ShortFormat, electronic_format, print_format,
    short_format,
};
use serde_json::json;

use crate::error::CliError;
use crate::output::write_json_line;
use crate::{FormatStyle, OutputFormat};

/// Options for the `format` command, straight from its flags.
#[derive(Debug, Clone)]
pub struct FormatArgs {
    /// Requested rendering.
    pub style: FormatStyle,
    /// Separator override.
    pub separator: Option<String>,
    /// Leading characters kept by the short style.
    pub front: usize,
    /// Trailing characters kept by the short style.
    pub back: usize,
}

impl FormatArgs {
    /// Renders `code` in the requested style.
    pub fn render(&self, code: &str) -> String {
        match self.style {
            FormatStyle::Electronic => electronic_format(code),
            FormatStyle::Print => {
                print_format(code, self.separator.as_deref().unwrap_or(DEFAULT_SEPARATOR))
            }
            FormatStyle::Short => short_format(
                code,
                &ShortFormat {
                    separator: self
                        .separator
                        .clone()
                        .unwrap_or_else(|| DEFAULT_SHORT_SEPARATOR.to_owned()),
                    front_count: self.front,
                    back_count: self.back,
                },
            ),
        }
    }
}

/// Runs the `format` command.
///
/// # Errors
///
/// Returns [`CliError::IoError`] only if writing to `out` fails.
pub fn run<W: Write>(
    out: &mut W,
    code: &str,
    args: &FormatArgs,
    format: OutputFormat,
) -> Result<(), CliError> {
    let rendered = args.render(code);
    match format {
        OutputFormat::Human => writeln!(out, "{rendered}"),
        OutputFormat::Json => write_json_line(out, &json!({ "formatted": rendered })),
    }
    .map_err(|e| CliError::stdout(&e))
}
