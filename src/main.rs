//! Evalview - inspect, validate and compare evaluation job results
//!
//! Reads the results objects produced by evaluation workflows and renders
//! summaries, diagnostics, per-example rows and run-to-run deltas.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use cli::{Cli, OutputFormat};
use evalview_core::error::{EvalError, ExitCode as EvalExitCode};
use evalview_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let argv_formats = argv_format_values();
    let argv_format_json = argv_formats.iter().any(|v| v.eq_ignore_ascii_case("json"));

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // clap can fail before `Cli.format` exists; honour a JSON request from argv.
            if argv_format_json {
                let eval_error = match err.kind() {
                    clap::error::ErrorKind::DisplayHelp
                    | clap::error::ErrorKind::DisplayVersion => err.exit(),
                    clap::error::ErrorKind::ValueValidation
                    | clap::error::ErrorKind::InvalidValue
                    | clap::error::ErrorKind::InvalidSubcommand
                    | clap::error::ErrorKind::UnknownArgument
                    | clap::error::ErrorKind::MissingRequiredArgument
                    | clap::error::ErrorKind::TooFewValues => EvalError::UsageError(err.to_string()),
                    clap::error::ErrorKind::ArgumentConflict if argv_formats.len() > 1 => {
                        EvalError::DuplicateFormat
                    }
                    clap::error::ErrorKind::ArgumentConflict => EvalError::UsageError(err.to_string()),
                    _ => EvalError::Other(err.to_string()),
                };

                eprintln!("{}", eval_error.to_json());
                return ExitCode::from(eval_error.exit_code() as u8);
            }

            err.exit();
        }
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    // Errors render in the same format the command would have used.
    let (format, result) = match commands::dispatch::prepare(&cli, start) {
        Ok(session) => (session.format(), session.run(&cli)),
        Err(e) => (cli.format.unwrap_or_default(), Err(e)),
    };

    match result {
        Ok(()) => ExitCode::from(EvalExitCode::Success as u8),
        Err(e) => {
            let exit_code = e.exit_code();

            if format == OutputFormat::Json {
                eprintln!("{}", e.to_json());
            } else if !cli.quiet {
                eprintln!("error: {}", e);
            }

            ExitCode::from(exit_code as u8)
        }
    }
}

/// Values given to `--format` on the raw command line, in order
fn argv_format_values() -> Vec<String> {
    format_values(env::args().skip(1))
}

fn format_values(args: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut values = Vec::new();
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        if arg == "--format" {
            values.push(args.next().unwrap_or_default());
        } else if let Some(value) = arg.strip_prefix("--format=") {
            values.push(value.to_string());
        }
    }
    values
}
