use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::{cargo::cargo_bin_cmd, Command};
use serde_json::{json, Value};

/// Get a Command for evalview with logging env cleared
pub fn evalview() -> Command {
    let mut cmd = cargo_bin_cmd!("evalview");
    cmd.env_remove("RUST_LOG")
        .env_remove("EVALVIEW_LOG")
        .env_remove("EVALVIEW_CONFIG")
        .env("EVALVIEW_CONFIG_DIR", "/nonexistent/evalview-test-config");
    cmd
}

/// A consistent two-sample results payload with rouge and bleu scores
pub fn sample_results() -> Value {
    json!({
        "artifacts": {
            "examples": [
                "The meeting was moved to Thursday.",
                "Please review the attached draft."
            ],
            "ground_truth": ["Meeting moved.", "Review the draft."],
            "model": "hf://facebook/bart-large-cnn",
            "predictions": ["Meeting is on Thursday.", "Draft needs review."],
            "inference_time": 2.5,
            "evaluation_time": 1.5
        },
        "metrics": {
            "rouge": {
                "rouge1": [0.5, 0.7],
                "rouge1_mean": 0.6,
                "rouge2": [0.0, 0.5],
                "rouge2_mean": 0.25,
                "rougeL": [0.5, 0.5],
                "rougeL_mean": 0.5,
                "rougeLsum": [0.5, 0.5],
                "rougeLsum_mean": 0.5
            },
            "bleu": {
                "bleu": [0.25, 0.375],
                "bleu_mean": 0.3125
            }
        },
        "parameters": {
            "dataset": { "path": "s3://bucket/datasets/mail/dataset.csv" },
            "evaluation": { "max_samples": 10 },
            "metrics": ["rouge", "bleu"],
            "return_input_data": true,
            "return_predictions": true,
            "storage_path": "s3://bucket/jobs/results/",
            "hf_pipeline": {
                "accelerator": "cpu",
                "max_new_tokens": 128,
                "model_uri": "hf://facebook/bart-large-cnn",
                "revision": "main",
                "task": "summarization",
                "torch_dtype": "float32",
                "truncation": true,
                "trust_remote_code": false,
                "use_fast": true
            },
            "inference_server": null,
            "name": "bart-mail/42",
            "job": {
                "enable_tqdm": false,
                "max_samples": 10,
                "output_field": "predictions",
                "storage_path": "s3://bucket/jobs/results/"
            },
            "generation_config": null
        }
    })
}

/// Write a JSON value to `dir/name` and return the path
pub fn write_json(dir: &Path, name: &str, value: &Value) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, serde_json::to_string_pretty(value).unwrap()).unwrap();
    path
}

/// Parse stdout of a finished command as JSON
pub fn stdout_json(output: &std::process::Output) -> Value {
    serde_json::from_slice(&output.stdout).unwrap()
}
