//! Metric kinds and per-example score series
//!
//! Every metric group in a results payload is one or more per-example score
//! sequences, each paired with a reported mean. [`ScoreSeries`] is a borrowed
//! view over one such pair, which is what summaries, validation and
//! comparisons operate on.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::bail_unsupported;
use crate::error::EvalError;

/// A metric group an evaluation job can compute
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricKind {
    Bertscore,
    Meteor,
    Rouge,
    Bleu,
    Comet,
}

impl MetricKind {
    /// All kinds in their stable display order
    pub const ALL: [MetricKind; 5] = [
        MetricKind::Bertscore,
        MetricKind::Meteor,
        MetricKind::Rouge,
        MetricKind::Bleu,
        MetricKind::Comet,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MetricKind::Bertscore => "bertscore",
            MetricKind::Meteor => "meteor",
            MetricKind::Rouge => "rouge",
            MetricKind::Bleu => "bleu",
            MetricKind::Comet => "comet",
        }
    }

    /// Names of the score series this group carries, as they appear on the wire
    pub fn series_names(&self) -> &'static [&'static str] {
        match self {
            MetricKind::Bertscore => &["f1", "precision", "recall"],
            MetricKind::Meteor => &["meteor"],
            MetricKind::Rouge => &["rouge1", "rouge2", "rougeL", "rougeLsum"],
            MetricKind::Bleu => &["bleu"],
            MetricKind::Comet => &["scores"],
        }
    }

    fn supported() -> String {
        MetricKind::ALL
            .iter()
            .map(|k| k.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MetricKind {
    type Err = EvalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        for kind in MetricKind::ALL {
            if kind.as_str() == normalized {
                return Ok(kind);
            }
        }
        bail_unsupported!("metric", s, MetricKind::supported())
    }
}

/// Borrowed view over one per-example score sequence and its reported mean
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreSeries<'a> {
    pub kind: MetricKind,
    pub name: &'static str,
    pub values: &'a [f64],
    pub mean: f64,
}

impl<'a> ScoreSeries<'a> {
    pub fn new(kind: MetricKind, name: &'static str, values: &'a [f64], mean: f64) -> Self {
        Self {
            kind,
            name,
            values,
            mean,
        }
    }

    /// Qualified key such as `rouge.rougeL`
    pub fn key(&self) -> String {
        format!("{}.{}", self.kind, self.name)
    }

    /// Mean recomputed from the per-example values
    pub fn recomputed_mean(&self) -> Option<f64> {
        mean(self.values)
    }

    pub fn min_max(&self) -> Option<(f64, f64)> {
        min_max(self.values)
    }

    /// Whether the reported mean matches the per-example values within `tolerance`.
    ///
    /// An empty series has nothing to contradict its mean and is consistent.
    pub fn mean_consistent(&self, tolerance: f64) -> bool {
        match self.recomputed_mean() {
            Some(recomputed) => (recomputed - self.mean).abs() <= tolerance,
            None => true,
        }
    }

    /// Score for a single sample, if the series covers it
    pub fn value_at(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied()
    }
}

/// A metric group that can enumerate its score series
pub trait MetricGroup {
    const KIND: MetricKind;

    fn series(&self) -> Vec<ScoreSeries<'_>>;
}

/// Arithmetic mean, `None` for an empty slice
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Smallest and largest value, `None` for an empty slice
pub fn min_max(values: &[f64]) -> Option<(f64, f64)> {
    let mut iter = values.iter().copied();
    let first = iter.next()?;
    Some(iter.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v))))
}
