//! Configuration type definitions

use serde::{Deserialize, Serialize};

use crate::format::OutputFormat;

/// Current configuration format version
pub const CONFIG_FORMAT_VERSION: u32 = 1;

/// File name looked up under the root directory
pub const LOCAL_CONFIG_FILE: &str = "evalview.toml";

/// Evalview configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvalviewConfig {
    /// Configuration format version for compatibility checking
    #[serde(default = "default_version")]
    pub version: u32,

    /// Output format used when `--format` is not given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_format: Option<OutputFormat>,

    /// Validation thresholds
    #[serde(default)]
    pub validation: ValidationConfig,

    /// Display settings
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Configuration for result validation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Allowed gap between a reported mean and the recomputed mean
    #[serde(default = "default_mean_tolerance")]
    pub mean_tolerance: f64,

    /// Compare score series lengths against the prediction count
    #[serde(default = "default_true")]
    pub check_lengths: bool,

    /// Warn when a requested metric group is missing from the results
    #[serde(default = "default_true")]
    pub require_requested_metrics: bool,
}

/// Configuration for human-readable output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Decimal places for scores
    #[serde(default = "default_precision")]
    pub precision: usize,

    /// Rows shown by `samples` when no `--limit` is given
    #[serde(default = "default_sample_limit")]
    pub sample_limit: usize,

    /// Characters of example/prediction text shown per cell
    #[serde(default = "default_text_width")]
    pub text_width: usize,
}

impl Default for EvalviewConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            default_format: None,
            validation: ValidationConfig::default(),
            display: DisplayConfig::default(),
        }
    }
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            mean_tolerance: default_mean_tolerance(),
            check_lengths: true,
            require_requested_metrics: true,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            precision: default_precision(),
            sample_limit: default_sample_limit(),
            text_width: default_text_width(),
        }
    }
}

fn default_version() -> u32 {
    CONFIG_FORMAT_VERSION
}

fn default_mean_tolerance() -> f64 {
    1e-6
}

fn default_true() -> bool {
    true
}

fn default_precision() -> usize {
    4
}

fn default_sample_limit() -> usize {
    20
}

fn default_text_width() -> usize {
    60
}
