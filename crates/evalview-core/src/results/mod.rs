//! Typed result contract for evaluation jobs
//!
//! A [`WorkflowResults`] is the immutable snapshot a completed evaluation job
//! returns: the artifacts it produced, the metric groups it computed and the
//! parameters it ran with. Metric groups are independently optional.

pub mod artifacts;
pub mod metrics;
pub mod parameters;

use std::fs;
use std::io::{self, Read};
use std::path::Path;
use std::time::Instant;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{EvalError, Result};

pub use artifacts::Artifacts;
pub use metrics::{Bertscore, Bleu, Comet, Hashcode, Meteor, MetricsResult, Rouge};
pub use parameters::{DatasetParams, EvaluationParams, HfPipeline, JobParams, Parameters};

/// Source name used in errors when reading from standard input
pub const STDIN_SOURCE: &str = "<stdin>";

/// Top-level result record of a completed evaluation job
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowResults {
    pub artifacts: Artifacts,
    pub metrics: MetricsResult,
    pub parameters: Parameters,
}

impl WorkflowResults {
    /// Parse a results payload from a JSON string
    pub fn from_json_str(input: &str) -> Result<Self> {
        decode_str(input, "<input>")
    }

    /// Parse a results payload from any reader
    pub fn from_reader(reader: impl Read) -> Result<Self> {
        let mut de = serde_json::Deserializer::from_reader(io::BufReader::new(reader));
        let results = decode_with(&mut de, STDIN_SOURCE)?;
        de.end()
            .map_err(|e| EvalError::invalid_payload(STDIN_SOURCE, "<root>", e))?;
        Ok(results)
    }

    /// Load a results payload from a file
    pub fn load(path: &Path) -> Result<Self> {
        let start = Instant::now();
        if !path.exists() {
            return Err(EvalError::ResultsNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = fs::read_to_string(path)
            .map_err(|e| EvalError::io_operation("read", path.display(), e))?;
        let results: Self = decode_str(&content, path.display())?;
        debug!(
            path = %path.display(),
            groups = results.metrics.groups().len(),
            elapsed = ?start.elapsed(),
            "load_results"
        );
        Ok(results)
    }

    /// Number of evaluated samples, taken from the predictions artifact
    pub fn sample_count(&self) -> usize {
        self.artifacts.predictions.len()
    }

    /// Serialize back to the wire shape
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Decode a JSON document into `T`, reporting the path of the first bad field
pub(crate) fn decode_str<T: DeserializeOwned>(
    input: &str,
    source_name: impl std::fmt::Display,
) -> Result<T> {
    let source_name = source_name.to_string();
    let mut de = serde_json::Deserializer::from_str(input);
    let value = decode_with(&mut de, &source_name)?;
    de.end()
        .map_err(|e| EvalError::invalid_payload(&source_name, "<root>", e))?;
    Ok(value)
}

/// Decode an already-parsed JSON value into `T`
pub(crate) fn decode_value<T: DeserializeOwned>(
    value: serde_json::Value,
    source_name: &str,
) -> Result<T> {
    serde_path_to_error::deserialize(value)
        .map_err(|e| EvalError::invalid_payload(source_name, e.path(), e.inner()))
}

fn decode_with<'de, D, T>(de: D, source_name: &str) -> Result<T>
where
    D: serde::Deserializer<'de, Error = serde_json::Error>,
    T: DeserializeOwned,
{
    serde_path_to_error::deserialize(de)
        .map_err(|e| EvalError::invalid_payload(source_name, e.path(), e.inner()))
}
