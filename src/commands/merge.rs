//! `evalview merge` command - combine partial result objects
//!
//! Inference and evaluation steps each write a result object holding only
//! the maps they produced. Merging them left to right, then decoding the
//! combined object, yields one complete results file.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::json;

use crate::cli::paths::resolve_input_path;
use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;
use crate::commands::helpers::{ensure_single_stdin, load_result_object};
use evalview_core::error::{EvalError, Result};
use evalview_core::job::JobResultObject;
use evalview_core::records::format_header;
use evalview_core::trace_time;
use tracing::debug;

/// Execute the merge command
pub fn execute(ctx: &CommandContext, files: &[PathBuf], output: Option<&Path>) -> Result<()> {
    ensure_single_stdin(files.iter().map(PathBuf::as_path))?;

    let mut merged = JobResultObject::default();
    for file in files {
        let object = load_result_object(ctx, file)?;
        debug!(file = %file.display(), "merge_object");
        merged.merge(object);
    }

    let results = merged.into_workflow_results("merged result")?;
    let content = results.to_json_pretty()?;
    trace_time!(ctx.start, "merge", inputs = files.len());

    let Some(output) = output else {
        println!("{}", content);
        return Ok(());
    };

    let target = resolve_input_path(ctx.root, output);
    fs::write(&target, format!("{}\n", content))
        .map_err(|e| EvalError::io_operation("write", target.display(), e))?;

    match ctx.format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&json!({
                    "output": target.display().to_string(),
                    "inputs": files.len(),
                    "samples": results.sample_count(),
                    "metrics": results.metrics.groups(),
                }))?
            );
        }
        OutputFormat::Human => {
            if !ctx.cli.quiet {
                println!(
                    "Merged {} file(s) into {} ({} samples)",
                    files.len(),
                    target.display(),
                    results.sample_count()
                );
            }
        }
        OutputFormat::Records => {
            println!(
                "{}",
                format_header(
                    "merge",
                    &[
                        ("output", target.display().to_string()),
                        ("inputs", files.len().to_string()),
                        ("samples", results.sample_count().to_string()),
                    ]
                )
            );
        }
    }
    Ok(())
}
