//! CLI error types with associated exit codes.
//!
//! [`CliError`] is the top-level error type for the `ican` binary. Every
//! variant maps to a stable exit code via [`CliError::exit_code`]:
//!
//! - Exit code **2**: input failure. The input could not be read, or names a
//!   country the registry does not know.
//! - Exit code **1**: logical failure. The input was understood but is not a
//!   valid code or BCAN.
use std::fmt;
use std::path::PathBuf;

use ican_core::IcanError;

// ---------------------------------------------------------------------------
// CliError
// ---------------------------------------------------------------------------

/// All error conditions that the `ican` CLI can produce.
#[derive(Debug)]
pub enum CliError {
    // --- Exit code 2: input failures ---
    /// A file argument could not be found on the filesystem.
    FileNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// The process lacks permission to read a file.
    PermissionDenied {
        /// The path that could not be read.
        path: PathBuf,
    },

    /// The input exceeds the configured `--max-input-size` limit.
    InputTooLarge {
        /// `"-"` for stdin, otherwise the filesystem path.
        source: String,
        /// The configured size limit in bytes.
        limit: u64,
        /// The actual size in bytes; unknown for stdin.
        actual: Option<u64>,
    },

    /// The input bytes are not valid UTF-8.
    InvalidUtf8 {
        /// A human-readable label for the source.
        source: String,
        /// The byte offset of the first invalid byte sequence.
        byte_offset: usize,
    },

    /// An I/O error occurred while reading from stdin.
    StdinReadError {
        /// The underlying I/O error message.
        detail: String,
    },

    /// Any other I/O error, including failures writing to stdout.
    IoError {
        /// A human-readable label for the source or sink.
        source: String,
        /// The underlying I/O error message.
        detail: String,
    },

    /// `validate` was given neither code arguments nor an input file with
    /// codes in it.
    NoInput,

    /// The built-in specification table failed to build.
    InvalidRegistry {
        /// The first rejected entry, as reported by the library.
        detail: String,
    },

    /// The requested country code has no specification.
    UnknownCountry {
        /// The code that was looked up.
        code: String,
    },

    // --- Exit code 1: logical failures ---
    /// At least one code checked by `validate` was invalid.
    ///
    /// Per-code results have already been printed.
    InvalidCodes {
        /// Number of invalid codes.
        invalid: usize,
        /// Number of codes checked.
        total: usize,
    },

    /// A BCAN does not fit its country's length and structure.
    InvalidBcan {
        /// The country whose rules were applied.
        country_code: String,
        /// The rejected BCAN.
        bcan: String,
    },

    /// A code's body cannot be split into its country's BCAN blocks.
    StructureMismatch {
        /// The country whose structure was applied.
        country_code: String,
        /// The rejected code.
        code: String,
    },
}

impl CliError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::FileNotFound { .. }
            | Self::PermissionDenied { .. }
            | Self::InputTooLarge { .. }
            | Self::InvalidUtf8 { .. }
            | Self::StdinReadError { .. }
            | Self::IoError { .. }
            | Self::NoInput
            | Self::InvalidRegistry { .. }
            | Self::UnknownCountry { .. } => 2,

            Self::InvalidCodes { .. } | Self::InvalidBcan { .. } | Self::StructureMismatch { .. } => {
                1
            }
        }
    }

    /// Returns a human-readable error message suitable for printing to stderr.
    pub fn message(&self) -> String {
        match self {
            Self::FileNotFound { path } => {
                format!("error: file not found: {}", path.display())
            }
            Self::PermissionDenied { path } => {
                format!("error: permission denied: {}", path.display())
            }
            Self::InputTooLarge {
                source,
                limit,
                actual: Some(actual),
            } => {
                format!("error: input too large: {source} is {actual} bytes, limit is {limit} bytes")
            }
            Self::InputTooLarge {
                source,
                limit,
                actual: None,
            } => {
                format!("error: input too large: {source} exceeded limit of {limit} bytes")
            }
            Self::InvalidUtf8 {
                source,
                byte_offset,
            } => {
                format!(
                    "error: invalid UTF-8 in {source}: first invalid byte at offset {byte_offset}"
                )
            }
            Self::StdinReadError { detail } => {
                format!("error: failed to read stdin: {detail}")
            }
            Self::IoError { source, detail } => {
                format!("error: I/O error on {source}: {detail}")
            }
            Self::NoInput => "error: no codes given (pass CODE arguments or --file)".to_owned(),
            Self::InvalidRegistry { detail } => {
                format!("error: built-in specification table is inconsistent: {detail}")
            }
            Self::UnknownCountry { code } => {
                format!("error: unknown country code {code:?}")
            }
            Self::InvalidCodes { invalid, total } => {
                format!("error: {invalid} of {total} codes invalid")
            }
            Self::InvalidBcan { country_code, bcan } => {
                format!("error: invalid BCAN {bcan:?} for country {country_code}")
            }
            Self::StructureMismatch { country_code, code } => {
                format!("error: {code:?} does not match the structure of country {country_code}")
            }
        }
    }

    /// Wraps a failed write to stdout.
    pub fn stdout(e: &std::io::Error) -> Self {
        Self::IoError {
            source: "stdout".to_owned(),
            detail: e.to_string(),
        }
    }
}

impl From<IcanError> for CliError {
    fn from(e: IcanError) -> Self {
        match e {
            IcanError::UnknownCountry { code } => Self::UnknownCountry { code },
            IcanError::InvalidBcan { country_code, bcan } => Self::InvalidBcan { country_code, bcan },
            IcanError::StructureMismatch { country_code, code } => {
                Self::StructureMismatch { country_code, code }
            }
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

impl std::error::Error for CliError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
