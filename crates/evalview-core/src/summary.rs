//! Metric overview of a single results payload

use serde::Serialize;

use crate::metric::{MetricKind, ScoreSeries};
use crate::results::WorkflowResults;

/// One row per score series
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricRow {
    pub kind: MetricKind,
    /// Qualified key such as `rouge.rougeL`
    pub metric: String,
    pub count: usize,
    /// Mean as reported by the producer
    pub mean: f64,
    /// Mean recomputed from the per-example scores
    pub recomputed_mean: Option<f64>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl From<&ScoreSeries<'_>> for MetricRow {
    fn from(series: &ScoreSeries<'_>) -> Self {
        let range = series.min_max();
        Self {
            kind: series.kind,
            metric: series.key(),
            count: series.values.len(),
            mean: series.mean,
            recomputed_mean: series.recomputed_mean(),
            min: range.map(|(lo, _)| lo),
            max: range.map(|(_, hi)| hi),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub name: String,
    pub model: String,
    pub dataset: String,
    pub task: String,
    pub inference_time: f64,
    pub evaluation_time: f64,
    pub sample_count: usize,
    pub metrics: Vec<MetricRow>,
}

impl Summary {
    pub fn row(&self, metric: &str) -> Option<&MetricRow> {
        self.metrics.iter().find(|row| row.metric == metric)
    }
}

/// Build the summary for a results payload
pub fn build(results: &WorkflowResults) -> Summary {
    let params = &results.parameters;
    Summary {
        name: params.name.clone(),
        model: results.artifacts.model.clone(),
        dataset: params.dataset.path.clone(),
        task: params.hf_pipeline.task.clone(),
        inference_time: results.artifacts.inference_time,
        evaluation_time: results.artifacts.evaluation_time,
        sample_count: results.sample_count(),
        metrics: results
            .metrics
            .series()
            .iter()
            .map(MetricRow::from)
            .collect(),
    }
}
