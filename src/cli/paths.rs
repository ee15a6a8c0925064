//! Path resolution utilities for CLI commands
//!
//! Provides shared helpers for consistent path resolution across commands.

use std::env;
use std::path::{Path, PathBuf};

/// Path argument that selects standard input
pub const STDIN_PATH: &str = "-";

/// Resolve the root directory.
///
/// If a root path is provided, returns it. Otherwise, falls back to the
/// current working directory, or "." if that cannot be determined.
pub fn resolve_root_path(root: Option<PathBuf>) -> PathBuf {
    root.unwrap_or_else(|| env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

/// Resolve an input path against the root; absolute paths pass through
pub fn resolve_input_path(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

/// Whether a path argument selects standard input
pub fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == STDIN_PATH
}
