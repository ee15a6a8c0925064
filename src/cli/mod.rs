//! CLI argument parsing for evalview
//!
//! Uses clap for argument parsing.
//! Supports global flags: --root, --config, --format, --quiet, --verbose

pub mod args;
pub mod format;
pub mod parse;
pub mod paths;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use args::{CompareArgs, MergeArgs, SamplesArgs, ShowArgs, ValidateArgs};
pub use evalview_core::format::OutputFormat;
use parse::parse_output_format;

/// Evalview - inspect, validate and compare evaluation job results
#[derive(Parser, Debug)]
#[command(name = "evalview")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Base directory for resolving relative paths and evalview.toml
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    /// Explicit configuration file
    #[arg(long, global = true, env = "EVALVIEW_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format: human, json, or records
    #[arg(long, global = true, value_parser = parse_output_format)]
    pub format: Option<OutputFormat>,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level (error, warn, info, debug, trace) or a full filter directive
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Summarize the metrics of a results file
    Show(ShowArgs),

    /// Check a results file for contract violations
    Validate(ValidateArgs),

    /// Compare the metric means of two results files
    Compare(CompareArgs),

    /// Page through per-example inputs, predictions and scores
    Samples(SamplesArgs),

    /// Merge partial result objects into one results file
    Merge(MergeArgs),

    /// List known metric groups and their score series
    Metrics,
}
