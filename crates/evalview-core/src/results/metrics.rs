use std::fmt;

use serde::{Deserialize, Serialize};

use crate::metric::{MetricGroup, MetricKind, ScoreSeries};

/// Metric groups computed by a job; each group is independently optional
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricsResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bertscore: Option<Bertscore>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meteor: Option<Meteor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rouge: Option<Rouge>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bleu: Option<Bleu>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comet: Option<Comet>,
}

impl MetricsResult {
    /// Groups present in this result, in stable order
    pub fn groups(&self) -> Vec<MetricKind> {
        MetricKind::ALL
            .into_iter()
            .filter(|kind| self.has(*kind))
            .collect()
    }

    pub fn has(&self, kind: MetricKind) -> bool {
        match kind {
            MetricKind::Bertscore => self.bertscore.is_some(),
            MetricKind::Meteor => self.meteor.is_some(),
            MetricKind::Rouge => self.rouge.is_some(),
            MetricKind::Bleu => self.bleu.is_some(),
            MetricKind::Comet => self.comet.is_some(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.groups().is_empty()
    }

    /// Every score series of every present group, in stable order
    pub fn series(&self) -> Vec<ScoreSeries<'_>> {
        let mut out = Vec::new();
        if let Some(group) = &self.bertscore {
            out.extend(group.series());
        }
        if let Some(group) = &self.meteor {
            out.extend(group.series());
        }
        if let Some(group) = &self.rouge {
            out.extend(group.series());
        }
        if let Some(group) = &self.bleu {
            out.extend(group.series());
        }
        if let Some(group) = &self.comet {
            out.extend(group.series());
        }
        out
    }
}

/// Identifier of the BERTScore model configuration.
///
/// Producers emit either a numeric hash or the descriptive hash string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Hashcode {
    Number(f64),
    Text(String),
}

impl fmt::Display for Hashcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Hashcode::Number(n) => write!(f, "{}", n),
            Hashcode::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bertscore {
    pub f1: Vec<f64>,
    pub f1_mean: f64,
    pub hashcode: Hashcode,
    pub precision: Vec<f64>,
    pub precision_mean: f64,
    pub recall: Vec<f64>,
    pub recall_mean: f64,
}

impl MetricGroup for Bertscore {
    const KIND: MetricKind = MetricKind::Bertscore;

    fn series(&self) -> Vec<ScoreSeries<'_>> {
        vec![
            ScoreSeries::new(Self::KIND, "f1", &self.f1, self.f1_mean),
            ScoreSeries::new(Self::KIND, "precision", &self.precision, self.precision_mean),
            ScoreSeries::new(Self::KIND, "recall", &self.recall, self.recall_mean),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meteor {
    pub meteor: Vec<f64>,
    pub meteor_mean: f64,
}

impl MetricGroup for Meteor {
    const KIND: MetricKind = MetricKind::Meteor;

    fn series(&self) -> Vec<ScoreSeries<'_>> {
        vec![ScoreSeries::new(Self::KIND, "meteor", &self.meteor, self.meteor_mean)]
    }
}

/// ROUGE scores; the `L` variants keep their camel-case wire keys
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rouge {
    pub rouge1: Vec<f64>,
    pub rouge1_mean: f64,
    pub rouge2: Vec<f64>,
    pub rouge2_mean: f64,
    #[serde(rename = "rougeL")]
    pub rouge_l: Vec<f64>,
    #[serde(rename = "rougeL_mean")]
    pub rouge_l_mean: f64,
    #[serde(rename = "rougeLsum")]
    pub rouge_lsum: Vec<f64>,
    #[serde(rename = "rougeLsum_mean")]
    pub rouge_lsum_mean: f64,
}

impl MetricGroup for Rouge {
    const KIND: MetricKind = MetricKind::Rouge;

    fn series(&self) -> Vec<ScoreSeries<'_>> {
        vec![
            ScoreSeries::new(Self::KIND, "rouge1", &self.rouge1, self.rouge1_mean),
            ScoreSeries::new(Self::KIND, "rouge2", &self.rouge2, self.rouge2_mean),
            ScoreSeries::new(Self::KIND, "rougeL", &self.rouge_l, self.rouge_l_mean),
            ScoreSeries::new(Self::KIND, "rougeLsum", &self.rouge_lsum, self.rouge_lsum_mean),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bleu {
    pub bleu: Vec<f64>,
    pub bleu_mean: f64,
}

impl MetricGroup for Bleu {
    const KIND: MetricKind = MetricKind::Bleu;

    fn series(&self) -> Vec<ScoreSeries<'_>> {
        vec![ScoreSeries::new(Self::KIND, "bleu", &self.bleu, self.bleu_mean)]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comet {
    pub scores: Vec<f64>,
    pub mean_score: f64,
}

impl MetricGroup for Comet {
    const KIND: MetricKind = MetricKind::Comet;

    fn series(&self) -> Vec<ScoreSeries<'_>> {
        vec![ScoreSeries::new(Self::KIND, "scores", &self.scores, self.mean_score)]
    }
}
