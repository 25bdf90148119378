mod cli;
mod cmd;
mod error;
mod io;
mod logging;
mod output;
mod verdict;

use clap::Parser;

pub use cli::{Cli, Command, FormatStyle, OutputFormat, PathOrStdin};

use crate::error::CliError;
use crate::logging::{LogConfig, init_logging};
use crate::output::OutputConfig;

fn main() {
    let cli = Cli::parse();

    let output = OutputConfig::from_flags(cli.no_color, cli.quiet);
    init_logging(&LogConfig::from_flags(cli.quiet, cli.verbose, output.colors));

    if let Err(e) = ensure_registry().and_then(|()| run(&cli, &output)) {
        eprintln!("{}", e.message());
        std::process::exit(e.exit_code());
    }
}

/// Fails once, up front, if the built-in specification table is inconsistent.
fn ensure_registry() -> Result<(), CliError> {
    ican_core::try_countries()
        .map(|_| ())
        .map_err(|e| CliError::InvalidRegistry {
            detail: e.to_string(),
        })
}

/// Dispatches the parsed command, writing results to stdout.
fn run(cli: &Cli, output: &OutputConfig) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match &cli.command {
        Command::Validate {
            codes,
            file,
            crypto,
        } => {
            let mut all = codes.clone();
            if let Some(source) = file {
                let content = io::read_input(source, cli.max_input_size)?;
                all.extend(io::code_lines(&content));
            }
            cmd::validate::run(&mut out, &all, *crypto, cli.format, output)
        }
        Command::ValidateBcan {
            country,
            bcan,
            crypto,
        } => cmd::validate_bcan::run(&mut out, country, bcan, *crypto, cli.format, output),
        Command::ToBcan { code, separator } => {
            cmd::convert::run_to_bcan(&mut out, code, separator, cli.format)
        }
        Command::FromBcan { country, bcan } => {
            cmd::convert::run_from_bcan(&mut out, country, bcan, cli.format)
        }
        Command::Format {
            code,
            style,
            separator,
            front,
            back,
        } => {
            let args = cmd::format::FormatArgs {
                style: *style,
                separator: separator.clone(),
                front: *front,
                back: *back,
            };
            cmd::format::run(&mut out, code, &args, cli.format)
        }
        Command::Countries { crypto } => cmd::countries::run(&mut out, *crypto, cli.format),
        Command::Inspect { code } => cmd::inspect::run(&mut out, code, cli.format, output),
    }
}
