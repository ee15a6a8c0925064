//! Run-to-run comparison of reported metric means

use serde::Serialize;

use crate::results::WorkflowResults;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricDelta {
    pub metric: String,
    pub baseline: f64,
    pub candidate: f64,
    /// `candidate - baseline`
    pub delta: f64,
}

impl MetricDelta {
    /// Whether the candidate moved at all
    pub fn changed(&self) -> bool {
        self.delta != 0.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    pub baseline_model: String,
    pub candidate_model: String,
    pub rows: Vec<MetricDelta>,
    /// Metrics only the baseline reports
    pub only_baseline: Vec<String>,
    /// Metrics only the candidate reports
    pub only_candidate: Vec<String>,
}

impl Comparison {
    pub fn row(&self, metric: &str) -> Option<&MetricDelta> {
        self.rows.iter().find(|row| row.metric == metric)
    }
}

/// Compare the reported means of two runs, series by series
pub fn compare(baseline: &WorkflowResults, candidate: &WorkflowResults) -> Comparison {
    let baseline_series = baseline.metrics.series();
    let candidate_series = candidate.metrics.series();

    let mut rows = Vec::new();
    let mut only_baseline = Vec::new();
    for base in &baseline_series {
        match candidate_series
            .iter()
            .find(|c| c.kind == base.kind && c.name == base.name)
        {
            Some(cand) => rows.push(MetricDelta {
                metric: base.key(),
                baseline: base.mean,
                candidate: cand.mean,
                delta: cand.mean - base.mean,
            }),
            None => only_baseline.push(base.key()),
        }
    }

    let only_candidate = candidate_series
        .iter()
        .filter(|c| {
            !baseline_series
                .iter()
                .any(|b| b.kind == c.kind && b.name == c.name)
        })
        .map(|c| c.key())
        .collect();

    Comparison {
        baseline_model: baseline.artifacts.model.clone(),
        candidate_model: candidate.artifacts.model.clone(),
        rows,
        only_baseline,
        only_candidate,
    }
}
