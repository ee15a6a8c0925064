use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;
use crate::job::GenerationConfig;
use crate::metric::MetricKind;

/// Configuration a job ran with; supplied alongside the result and never mutated
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameters {
    pub dataset: DatasetParams,
    pub evaluation: EvaluationParams,
    /// Metric names the job was asked to compute
    pub metrics: Vec<String>,
    pub return_input_data: bool,
    pub return_predictions: bool,
    pub storage_path: String,
    pub hf_pipeline: HfPipeline,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inference_server: Option<Value>,
    pub name: String,
    pub job: JobParams,
    #[serde(default)]
    pub generation_config: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetParams {
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationParams {
    /// Sample cap; zero or negative means the whole dataset
    pub max_samples: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobParams {
    pub enable_tqdm: bool,
    pub max_samples: i64,
    pub output_field: String,
    pub storage_path: String,
}

/// Hugging Face inference pipeline settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HfPipeline {
    pub accelerator: String,
    pub max_new_tokens: i64,
    pub model_uri: String,
    pub revision: String,
    pub task: String,
    pub torch_dtype: String,
    pub truncation: bool,
    pub trust_remote_code: bool,
    pub use_fast: bool,
}

impl Parameters {
    /// Split the requested metric names into known kinds and unrecognised names
    pub fn requested_metrics(&self) -> (Vec<MetricKind>, Vec<String>) {
        let mut known = Vec::new();
        let mut unknown = Vec::new();
        for name in &self.metrics {
            match name.parse::<MetricKind>() {
                Ok(kind) if !known.contains(&kind) => known.push(kind),
                Ok(_) => {}
                Err(_) => unknown.push(name.clone()),
            }
        }
        (known, unknown)
    }

    /// Effective sample cap, `None` when the job evaluated the whole dataset
    pub fn sample_limit(&self) -> Option<usize> {
        usize::try_from(self.evaluation.max_samples)
            .ok()
            .filter(|limit| *limit > 0)
    }

    /// Decode the loosely-typed generation settings, if any were recorded
    pub fn generation_config(&self) -> Result<Option<GenerationConfig>> {
        match &self.generation_config {
            Value::Null => Ok(None),
            other => crate::results::decode_value(other.clone(), "parameters.generation_config")
                .map(Some),
        }
    }
}
