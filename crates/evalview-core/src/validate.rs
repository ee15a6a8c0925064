//! Structural and semantic checks over a results payload
//!
//! Checks never fail; they collect [`Issue`]s into a [`ValidationReport`].

use serde::Serialize;

use crate::metric::{MetricKind, ScoreSeries};
use crate::results::WorkflowResults;

/// Issue severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Warning - results are usable but suspicious
    Warning,
    /// Error - results contradict the contract
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// A single diagnostic issue
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Issue {
    pub severity: Severity,
    /// Issue category (e.g., "mean-mismatch", "length-mismatch")
    pub category: &'static str,
    pub message: String,
    /// Affected field, as a dotted path or qualified metric key
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl Issue {
    fn error(category: &'static str, field: impl Into<String>, message: String) -> Self {
        Self {
            severity: Severity::Error,
            category,
            message,
            field: Some(field.into()),
        }
    }

    fn warning(category: &'static str, field: impl Into<String>, message: String) -> Self {
        Self {
            severity: Severity::Warning,
            category,
            message,
            field: Some(field.into()),
        }
    }
}

/// Thresholds and toggles for [`check`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidationOptions {
    pub mean_tolerance: f64,
    pub check_lengths: bool,
    pub require_requested_metrics: bool,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        crate::config::ValidationConfig::default().options()
    }
}

/// Result of running all checks
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ValidationReport {
    pub error_count: usize,
    pub warning_count: usize,
    pub issues: Vec<Issue>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_issue(&mut self, issue: Issue) {
        match issue.severity {
            Severity::Error => self.error_count += 1,
            Severity::Warning => self.warning_count += 1,
        }
        self.issues.push(issue);
    }

    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }

    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    /// Categories of all issues, in the order they were found
    pub fn categories(&self) -> Vec<&'static str> {
        self.issues.iter().map(|i| i.category).collect()
    }
}

/// Run every check against `results`
pub fn check(results: &WorkflowResults, options: &ValidationOptions) -> ValidationReport {
    let mut report = ValidationReport::new();
    check_paths(results, &mut report);
    check_durations(results, &mut report);
    check_artifact_lengths(results, &mut report);
    for series in results.metrics.series() {
        check_series(&series, results.sample_count(), options, &mut report);
    }
    check_requested_metrics(results, options, &mut report);
    check_limits(results, &mut report);
    tracing::debug!(
        errors = report.error_count,
        warnings = report.warning_count,
        "validate"
    );
    report
}

fn check_paths(results: &WorkflowResults, report: &mut ValidationReport) {
    let params = &results.parameters;
    let fields = [
        ("artifacts.model", results.artifacts.model.as_str()),
        ("parameters.dataset.path", params.dataset.path.as_str()),
        ("parameters.storage_path", params.storage_path.as_str()),
        ("parameters.job.storage_path", params.job.storage_path.as_str()),
        ("parameters.hf_pipeline.model_uri", params.hf_pipeline.model_uri.as_str()),
    ];
    for (field, value) in fields {
        if value.trim().is_empty() {
            report.add_issue(Issue::error(
                "empty-path",
                field,
                format!("{} is empty", field),
            ));
        }
    }
}

fn check_durations(results: &WorkflowResults, report: &mut ValidationReport) {
    let durations = [
        ("artifacts.inference_time", results.artifacts.inference_time),
        ("artifacts.evaluation_time", results.artifacts.evaluation_time),
    ];
    for (field, value) in durations {
        if !value.is_finite() || value < 0.0 {
            report.add_issue(Issue::error(
                "negative-duration",
                field,
                format!("{} must be a non-negative number, got {}", field, value),
            ));
        }
    }
}

fn check_artifact_lengths(results: &WorkflowResults, report: &mut ValidationReport) {
    let artifacts = &results.artifacts;
    let predictions = artifacts.predictions.len();
    let input_optional = !results.parameters.return_input_data;
    let lists = [
        ("artifacts.examples", artifacts.examples.len()),
        ("artifacts.ground_truth", artifacts.ground_truth.len()),
    ];
    for (field, len) in lists {
        if len == predictions || (len == 0 && input_optional) {
            continue;
        }
        report.add_issue(Issue::error(
            "length-mismatch",
            field,
            format!(
                "{} has {} entries but there are {} predictions",
                field, len, predictions
            ),
        ));
    }
}

fn check_series(
    series: &ScoreSeries<'_>,
    sample_count: usize,
    options: &ValidationOptions,
    report: &mut ValidationReport,
) {
    let key = series.key();

    if series.values.is_empty() {
        report.add_issue(Issue::warning(
            "empty-series",
            key,
            format!("{} has no per-example scores", series.key()),
        ));
        return;
    }

    if let Some(position) = series.values.iter().position(|v| !v.is_finite()) {
        report.add_issue(Issue::error(
            "non-finite-score",
            key,
            format!("{} has a non-finite score at index {}", series.key(), position),
        ));
        return;
    }

    if options.check_lengths && series.values.len() != sample_count {
        report.add_issue(Issue::warning(
            "series-length",
            series.key(),
            format!(
                "{} has {} scores but there are {} predictions",
                series.key(),
                series.values.len(),
                sample_count
            ),
        ));
    }

    if !series.mean_consistent(options.mean_tolerance) {
        let recomputed = series.recomputed_mean().unwrap_or(f64::NAN);
        report.add_issue(Issue::warning(
            "mean-mismatch",
            key,
            format!(
                "{} reports mean {} but its scores average {}",
                series.key(),
                series.mean,
                recomputed
            ),
        ));
    }
}

fn check_requested_metrics(
    results: &WorkflowResults,
    options: &ValidationOptions,
    report: &mut ValidationReport,
) {
    let (requested, unknown) = results.parameters.requested_metrics();

    for name in unknown {
        report.add_issue(Issue::warning(
            "unknown-metric",
            "parameters.metrics",
            format!("requested metric {:?} is not a known metric", name),
        ));
    }

    if options.require_requested_metrics {
        for kind in &requested {
            if !results.metrics.has(*kind) {
                report.add_issue(Issue::warning(
                    "missing-metric",
                    format!("metrics.{}", kind),
                    format!("{} was requested but is missing from the results", kind),
                ));
            }
        }
    }

    if results.parameters.metrics.is_empty() {
        return;
    }
    let present: Vec<MetricKind> = results.metrics.groups();
    for kind in present.into_iter().filter(|k| !requested.contains(k)) {
        report.add_issue(Issue::warning(
            "unrequested-metric",
            format!("metrics.{}", kind),
            format!("{} is present but was not requested", kind),
        ));
    }
}

fn check_limits(results: &WorkflowResults, report: &mut ValidationReport) {
    if let Some(limit) = results.parameters.sample_limit() {
        let predictions = results.sample_count();
        if predictions > limit {
            report.add_issue(Issue::warning(
                "sample-limit",
                "parameters.evaluation.max_samples",
                format!(
                    "{} predictions exceed max_samples of {}",
                    predictions, limit
                ),
            ));
        }
    }

    if results.parameters.hf_pipeline.max_new_tokens == 0 {
        report.add_issue(Issue::warning(
            "zero-max-new-tokens",
            "parameters.hf_pipeline.max_new_tokens",
            "max_new_tokens is 0; predictions are likely empty".to_string(),
        ));
    }
}
