//! Job records exchanged with the job-results backend
//!
//! These are the envelope types around a [`WorkflowResults`] payload: job
//! identity and status, download locations, and the loose result object a job
//! writes before it is decoded into the typed contract.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use tracing::debug;
use uuid::Uuid;

use crate::error::{EvalError, Result};
use crate::results::WorkflowResults;

/// Kind of job a record describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum JobType {
    Inference,
    #[serde(rename = "evaluator")]
    Evaluation,
    #[serde(rename = "annotate")]
    Annotation,
}

impl JobType {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobType::Inference => "inference",
            JobType::Evaluation => "evaluator",
            JobType::Annotation => "annotate",
        }
    }
}

/// Lifecycle state of a job
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Created,
    Pending,
    Running,
    Failed,
    Succeeded,
    Stopped,
}

impl JobStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Created => "created",
            JobStatus::Pending => "pending",
            JobStatus::Running => "running",
            JobStatus::Failed => "failed",
            JobStatus::Succeeded => "succeeded",
            JobStatus::Stopped => "stopped",
        }
    }

    /// Whether the job can no longer change state
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            JobStatus::Failed | JobStatus::Succeeded | JobStatus::Stopped
        )
    }
}

/// Case-insensitive parsing; values are always written back lowercase
macro_rules! lowercase_enum {
    ($ty:ty, $context:expr, [$($variant:expr),+ $(,)?]) => {
        impl FromStr for $ty {
            type Err = EvalError;

            fn from_str(s: &str) -> Result<Self> {
                let normalized = s.trim().to_lowercase();
                [$($variant),+]
                    .into_iter()
                    .find(|v| v.as_str() == normalized)
                    .ok_or_else(|| {
                        let supported = [$($variant.as_str()),+].join(", ");
                        EvalError::unsupported($context, s, supported)
                    })
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
                let raw = String::deserialize(deserializer)?;
                raw.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

lowercase_enum!(
    JobType,
    "job type",
    [JobType::Inference, JobType::Evaluation, JobType::Annotation]
);

lowercase_enum!(
    JobStatus,
    "job status",
    [
        JobStatus::Created,
        JobStatus::Pending,
        JobStatus::Running,
        JobStatus::Failed,
        JobStatus::Succeeded,
        JobStatus::Stopped,
    ]
);

/// Generation settings; a limited subset of the Hugging Face generation config
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GenerationConfig {
    #[serde(default = "default_max_new_tokens")]
    pub max_new_tokens: i64,
    #[serde(default)]
    pub frequency_penalty: f64,
    #[serde(default = "default_sampling")]
    pub temperature: f64,
    #[serde(default = "default_sampling")]
    pub top_p: f64,
}

fn default_max_new_tokens() -> i64 {
    1024
}

fn default_sampling() -> f64 {
    0.5
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            max_new_tokens: default_max_new_tokens(),
            frequency_penalty: 0.0,
            temperature: default_sampling(),
            top_p: default_sampling(),
        }
    }
}

/// Job metadata as returned by the jobs listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobResponse {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub status: JobStatus,
    pub job_type: JobType,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub experiment_id: Option<Uuid>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Stored metrics and parameters of a job, with download locations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobResults {
    pub id: Uuid,
    #[serde(default)]
    pub metrics: Option<Vec<Map<String, Value>>>,
    #[serde(default)]
    pub parameters: Option<Vec<Map<String, Value>>>,
    pub metric_url: String,
    pub artifact_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobResultDownloadResponse {
    pub id: Uuid,
    pub download_url: String,
}

/// Loosely-typed result file written by a job.
///
/// Any object with these three maps is accepted; other top-level keys are
/// dropped and missing maps default to empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobResultObject {
    #[serde(default)]
    pub metrics: Map<String, Value>,
    #[serde(default)]
    pub parameters: Map<String, Value>,
    #[serde(default)]
    pub artifacts: Map<String, Value>,
}

impl JobResultObject {
    /// Parse a loose result object, naming `source_name` in errors
    pub fn from_json_str(input: &str, source_name: &str) -> Result<Self> {
        crate::results::decode_str(input, source_name)
    }

    /// Merge another result object into this one.
    ///
    /// For each map, a non-empty map in `other` has its keys inserted into
    /// ours, replacing existing keys. Empty maps never clobber.
    pub fn merge(&mut self, other: JobResultObject) {
        merge_map(&mut self.metrics, other.metrics);
        merge_map(&mut self.parameters, other.parameters);
        merge_map(&mut self.artifacts, other.artifacts);
    }

    /// Decode the merged object into the typed result contract
    pub fn into_workflow_results(self, source_name: &str) -> Result<WorkflowResults> {
        debug!(
            metrics = self.metrics.len(),
            parameters = self.parameters.len(),
            artifacts = self.artifacts.len(),
            "decode_result_object"
        );
        let value = serde_json::to_value(self)?;
        crate::results::decode_value(value, source_name)
    }
}

fn merge_map(target: &mut Map<String, Value>, incoming: Map<String, Value>) {
    if incoming.is_empty() {
        return;
    }
    target.extend(incoming);
}
