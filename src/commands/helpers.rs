//! Helper functions shared across commands

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use serde::Serialize;

use crate::cli::paths::{is_stdin, resolve_input_path};
use crate::commands::dispatch::CommandContext;
use evalview_core::error::{EvalError, Result};
use evalview_core::job::JobResultObject;
use evalview_core::results::{WorkflowResults, STDIN_SOURCE};
use evalview_core::{bail_usage, trace_time};

/// Load a typed results payload from a file or stdin
pub fn load_results(ctx: &CommandContext, path: &Path) -> Result<WorkflowResults> {
    if is_stdin(path) {
        let results = WorkflowResults::from_reader(io::stdin().lock())?;
        trace_time!(ctx.start, "load_stdin");
        return Ok(results);
    }
    WorkflowResults::load(&resolve_input_path(ctx.root, path))
}

/// Load a loose result object from a file or stdin
pub fn load_result_object(ctx: &CommandContext, path: &Path) -> Result<JobResultObject> {
    if is_stdin(path) {
        let mut content = String::new();
        io::stdin().read_to_string(&mut content)?;
        return JobResultObject::from_json_str(&content, STDIN_SOURCE);
    }

    let resolved = resolve_input_path(ctx.root, path);
    if !resolved.exists() {
        return Err(EvalError::ResultsNotFound { path: resolved });
    }
    let content = fs::read_to_string(&resolved)
        .map_err(|e| EvalError::io_operation("read", resolved.display(), e))?;
    JobResultObject::from_json_str(&content, &resolved.display().to_string())
}

/// Stdin can only be consumed once per invocation
pub fn ensure_single_stdin<'a>(paths: impl IntoIterator<Item = &'a Path>) -> Result<()> {
    if paths.into_iter().filter(|p| is_stdin(p)).count() > 1 {
        bail_usage!("`-` (stdin) may only be given once");
    }
    Ok(())
}

/// Print a value as pretty JSON on stdout
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
