use serde::{Deserialize, Serialize};

/// Files and measurements produced by an evaluation job
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artifacts {
    /// Input documents, present when the job returned its input data
    pub examples: Vec<String>,
    /// Reference outputs the predictions were scored against
    pub ground_truth: Vec<String>,
    /// Identifier of the model that produced the predictions
    pub model: String,
    /// Model outputs, one per evaluated sample
    pub predictions: Vec<String>,
    /// Wall-clock inference time in seconds
    pub inference_time: f64,
    /// Wall-clock metric computation time in seconds
    pub evaluation_time: f64,
}

impl Artifacts {
    /// Total time spent on inference and evaluation
    pub fn total_time(&self) -> f64 {
        self.inference_time + self.evaluation_time
    }

    /// Example at `index`, if the job returned input data
    pub fn example(&self, index: usize) -> Option<&str> {
        self.examples.get(index).map(String::as_str)
    }

    /// Ground truth at `index`, if present
    pub fn ground_truth(&self, index: usize) -> Option<&str> {
        self.ground_truth.get(index).map(String::as_str)
    }
}
