//! Per-example rows: the inputs, references, predictions and scores of each sample

use std::collections::BTreeMap;

use serde::Serialize;

use crate::results::WorkflowResults;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SampleRow {
    pub index: usize,
    pub example: Option<String>,
    pub ground_truth: Option<String>,
    pub prediction: String,
    /// Score per qualified metric key, for series that cover this sample
    pub scores: BTreeMap<String, f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SamplePage {
    pub total: usize,
    pub offset: usize,
    pub rows: Vec<SampleRow>,
}

impl SamplePage {
    /// Whether rows exist past this page
    pub fn has_more(&self) -> bool {
        self.offset + self.rows.len() < self.total
    }
}

/// Page through per-example rows; an offset past the end yields an empty page
pub fn rows(results: &WorkflowResults, offset: usize, limit: usize) -> SamplePage {
    let total = results.sample_count();
    let series = results.metrics.series();
    let artifacts = &results.artifacts;

    let rows = artifacts
        .predictions
        .iter()
        .enumerate()
        .skip(offset)
        .take(limit)
        .map(|(index, prediction)| SampleRow {
            index,
            example: artifacts.example(index).map(str::to_string),
            ground_truth: artifacts.ground_truth(index).map(str::to_string),
            prediction: prediction.clone(),
            scores: series
                .iter()
                .filter_map(|s| s.value_at(index).map(|v| (s.key(), v)))
                .collect(),
        })
        .collect();

    SamplePage {
        total,
        offset,
        rows,
    }
}
