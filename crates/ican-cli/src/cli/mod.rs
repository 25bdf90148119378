//! Clap CLI definition: root struct, subcommands, and shared argument types.
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use ican_core::CryptoFilter;

/// A CLI argument that is either a filesystem path or the stdin sentinel `"-"`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PathOrStdin {
    /// Read from standard input.
    Stdin,
    /// Read from the given filesystem path.
    Path(PathBuf),
}

impl std::str::FromStr for PathOrStdin {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "-" {
            Ok(PathOrStdin::Stdin)
        } else {
            Ok(PathOrStdin::Path(PathBuf::from(s)))
        }
    }
}

/// Output format for CLI commands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable, optionally colored output (default).
    Human,
    /// Structured JSON / NDJSON output.
    Json,
}

/// Rendering chosen by the `format` subcommand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FormatStyle {
    /// Uppercase with every separator removed.
    Electronic,
    /// Groups of four characters (default).
    Print,
    /// Head and tail only, middle elided.
    Short,
}

/// Default `--crypto` value: no filtering.
const NO_FILTER: &str = "off";

/// All top-level subcommands exposed by the `ican` binary.
#[derive(Subcommand)]
pub enum Command {
    /// Check one or more account codes.
    ///
    /// Codes come from positional arguments, from `--file` (one per line,
    /// `#` starts a comment line), or both.
    Validate {
        /// Account codes, in any spacing or case.
        #[arg(value_name = "CODE")]
        codes: Vec<String>,
        /// Read additional codes from a file, or `-` for stdin.
        #[arg(long, value_name = "FILE")]
        file: Option<PathOrStdin>,
        /// Accept only crypto codes: off, any, or a network tag
        /// (main/mainnet, test/testnet, enter/enterprise).
        #[arg(long, value_name = "FILTER", default_value = NO_FILTER)]
        crypto: CryptoFilter,
    },

    /// Check a BCAN against a country's structure.
    #[command(name = "validate-bcan")]
    ValidateBcan {
        /// Two-letter country or network code.
        #[arg(value_name = "COUNTRY")]
        country: String,
        /// The BCAN, in any spacing or case.
        #[arg(value_name = "BCAN")]
        bcan: String,
        /// Crypto filter, as for `validate`.
        #[arg(long, value_name = "FILTER", default_value = NO_FILTER)]
        crypto: CryptoFilter,
    },

    /// Extract the BCAN from an account code.
    #[command(name = "to-bcan")]
    ToBcan {
        /// The account code.
        #[arg(value_name = "CODE")]
        code: String,
        /// Text placed between BCAN blocks.
        #[arg(long, default_value = " ")]
        separator: String,
    },

    /// Build the full account code for a BCAN, computing check digits.
    #[command(name = "from-bcan")]
    FromBcan {
        /// Two-letter country or network code.
        #[arg(value_name = "COUNTRY")]
        country: String,
        /// The BCAN, in any spacing or case.
        #[arg(value_name = "BCAN")]
        bcan: String,
    },

    /// Render an account code in electronic, print or short form.
    Format {
        /// The account code.
        #[arg(value_name = "CODE")]
        code: String,
        /// Output style.
        #[arg(long, value_enum, default_value = "print")]
        style: FormatStyle,
        /// Separator (default: a space for print, an ellipsis for short).
        #[arg(long)]
        separator: Option<String>,
        /// Leading characters kept by the short style.
        #[arg(long, default_value = "4")]
        front: usize,
        /// Trailing characters kept by the short style.
        #[arg(long, default_value = "4")]
        back: usize,
    },

    /// List registered country and network specifications.
    Countries {
        /// Crypto filter, as for `validate`.
        #[arg(long, value_name = "FILTER", default_value = NO_FILTER)]
        crypto: CryptoFilter,
    },

    /// Show everything known about one account code.
    Inspect {
        /// The account code.
        #[arg(value_name = "CODE")]
        code: String,
    },
}

/// Root CLI struct for the `ican` binary.
///
/// All global flags are marked `global = true` so that clap propagates them
/// to every subcommand.
#[derive(Parser)]
#[command(
    name = "ican",
    version,
    about = "Validate, format and convert ICAN/IBAN account codes",
    long_about = "Validates international account codes (ICAN, a superset of IBAN),\n\
                  converts between full codes and country-specific BCANs, and\n\
                  renders codes in electronic, print or short form."
)]
pub struct Cli {
    /// Active subcommand.
    #[command(subcommand)]
    pub command: Command,

    /// Output format: human (default) or json.
    #[arg(long, short = 'f', default_value = "human", global = true)]
    pub format: OutputFormat,

    /// Print only failures; log errors only (incompatible with `--verbose`).
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log debug detail to stderr (incompatible with `--quiet`).
    #[arg(long, short = 'v', global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Maximum size in bytes of a `--file` input.
    ///
    /// Can also be set via the `ICAN_MAX_INPUT_SIZE` environment variable.
    /// Default: 1048576 (1 MiB).
    #[arg(
        long,
        global = true,
        env = "ICAN_MAX_INPUT_SIZE",
        default_value = "1048576"
    )]
    pub max_input_size: u64,

    /// Disable ANSI color codes in human output.
    ///
    /// Also respects the `NO_COLOR` environment variable per
    /// <https://no-color.org>.
    ///
    /// Any value except `0`, `f`, `false`, `n`, `no`, `off` or empty enables it.
    #[arg(
        long,
        global = true,
        env = "NO_COLOR",
        value_parser = clap::builder::FalseyValueParser::new()
    )]
    pub no_color: bool,
}
