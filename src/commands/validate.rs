//! `evalview validate` command - check a results file for contract violations

use std::path::Path;

use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;
use crate::commands::helpers::load_results;
use evalview_core::error::{EvalError, Result};
use evalview_core::records::{format_diagnostic, format_header};
use evalview_core::validate::{self, Severity, ValidationOptions, ValidationReport};

/// Execute the validate command
///
/// The report is always printed; an error-severity issue then fails the run.
pub fn execute(ctx: &CommandContext, file: &Path, options: ValidationOptions) -> Result<()> {
    let results = load_results(ctx, file)?;
    let report = validate::check(&results, &options);

    output_report(ctx, results.sample_count(), &report)?;

    if report.has_errors() {
        return Err(EvalError::ValidationFailed {
            errors: report.error_count,
            warnings: report.warning_count,
        });
    }
    Ok(())
}

fn output_report(ctx: &CommandContext, samples: usize, report: &ValidationReport) -> Result<()> {
    match ctx.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(report)?);
        }
        OutputFormat::Human => {
            if report.is_clean() {
                if !ctx.cli.quiet {
                    println!("Results are valid ({} samples checked)", samples);
                }
            } else {
                println!(
                    "Found {} issue(s) in {} samples:",
                    report.issues.len(),
                    samples
                );
                println!();

                for issue in &report.issues {
                    let severity_prefix = match issue.severity {
                        Severity::Error => "ERROR",
                        Severity::Warning => "WARN ",
                    };
                    println!(
                        "  {} [{}] {}",
                        severity_prefix, issue.category, issue.message
                    );
                    if let Some(field) = &issue.field {
                        println!("         at {}", field);
                    }
                }

                println!();
                println!(
                    "Summary: {} error(s), {} warning(s)",
                    report.error_count, report.warning_count
                );
            }
        }
        OutputFormat::Records => {
            println!(
                "{}",
                format_header(
                    "validate",
                    &[
                        ("samples", samples.to_string()),
                        ("errors", report.error_count.to_string()),
                        ("warnings", report.warning_count.to_string()),
                    ]
                )
            );
            for issue in &report.issues {
                println!(
                    "{}",
                    format_diagnostic(
                        &issue.severity.to_string(),
                        issue.category,
                        &issue.message,
                        issue.field.as_deref()
                    )
                );
            }
        }
    }

    Ok(())
}
