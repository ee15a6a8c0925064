use std::path::PathBuf;

use clap::Args;
use evalview_core::metric::MetricKind;

use super::parse::{parse_limit, parse_metric_kind, parse_tolerance};

#[derive(Args, Debug, Clone)]
pub struct ShowArgs {
    /// Results file (`-` reads stdin)
    pub file: PathBuf,

    /// Only show these metric groups (can be specified multiple times)
    #[arg(long, short, value_parser = parse_metric_kind, action = clap::ArgAction::Append)]
    pub metric: Vec<MetricKind>,
}

#[derive(Args, Debug, Clone)]
pub struct ValidateArgs {
    /// Results file (`-` reads stdin)
    pub file: PathBuf,

    /// Allowed gap between reported and recomputed means
    #[arg(long, value_parser = parse_tolerance)]
    pub tolerance: Option<f64>,

    /// Skip comparing score series lengths against the prediction count
    #[arg(long)]
    pub no_length_check: bool,

    /// Warn about requested metrics missing from the results
    #[arg(long, conflicts_with = "no_require_requested")]
    pub require_requested: bool,

    /// Do not warn about requested metrics missing from the results
    #[arg(long)]
    pub no_require_requested: bool,
}

#[derive(Args, Debug, Clone)]
pub struct CompareArgs {
    /// Baseline results file
    pub baseline: PathBuf,

    /// Candidate results file
    pub candidate: PathBuf,

    /// Only compare these metric groups (can be specified multiple times)
    #[arg(long, short, value_parser = parse_metric_kind, action = clap::ArgAction::Append)]
    pub metric: Vec<MetricKind>,
}

#[derive(Args, Debug, Clone)]
pub struct SamplesArgs {
    /// Results file (`-` reads stdin)
    pub file: PathBuf,

    /// Index of the first sample to show
    #[arg(long, default_value_t = 0)]
    pub offset: usize,

    /// Maximum number of samples to show (defaults to display.sample_limit)
    #[arg(long, short = 'n', value_parser = parse_limit)]
    pub limit: Option<usize>,
}

#[derive(Args, Debug, Clone)]
pub struct MergeArgs {
    /// Partial result objects, merged left to right
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Write the merged results here instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}
