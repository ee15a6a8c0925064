use std::fs;

use crate::cli::support::{evalview, sample_results, stdout_json, write_json};
use predicates::prelude::*;
use serde_json::json;
use tempfile::tempdir;

/// Split a results payload the way the inference and evaluation steps write it
fn split_parts() -> (serde_json::Value, serde_json::Value) {
    let results = sample_results();
    let inference = json!({
        "artifacts": results["artifacts"],
        "parameters": results["parameters"],
        "metrics": {}
    });
    let evaluation = json!({
        "metrics": results["metrics"],
        "artifacts": {},
        "parameters": {}
    });
    (inference, evaluation)
}

/// The merged payload; a null inference server is omitted on write
fn expected() -> serde_json::Value {
    let mut results = sample_results();
    results["parameters"]
        .as_object_mut()
        .unwrap()
        .remove("inference_server");
    results
}

#[test]
fn test_merge_to_stdout() {
    let dir = tempdir().unwrap();
    let (inference, evaluation) = split_parts();
    let first = write_json(dir.path(), "inference.json", &inference);
    let second = write_json(dir.path(), "evaluation.json", &evaluation);

    let output = evalview()
        .arg("merge")
        .arg(&first)
        .arg(&second)
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(stdout_json(&output), expected());
}

#[test]
fn test_merge_empty_maps_do_not_clobber() {
    let dir = tempdir().unwrap();
    let (inference, evaluation) = split_parts();
    let first = write_json(dir.path(), "evaluation.json", &evaluation);
    let second = write_json(dir.path(), "inference.json", &inference);

    let output = evalview()
        .arg("merge")
        .arg(&first)
        .arg(&second)
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(stdout_json(&output)["metrics"]["bleu"]["bleu_mean"], 0.3125);
}

#[test]
fn test_merge_to_output_file() {
    let dir = tempdir().unwrap();
    let (inference, evaluation) = split_parts();
    write_json(dir.path(), "inference.json", &inference);
    write_json(dir.path(), "evaluation.json", &evaluation);

    evalview()
        .arg("--root")
        .arg(dir.path())
        .args(["merge", "inference.json", "evaluation.json", "-o", "merged.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Merged 2 file(s) into"))
        .stdout(predicate::str::contains("(2 samples)"));

    let merged = fs::read_to_string(dir.path().join("merged.json")).unwrap();
    let merged: serde_json::Value = serde_json::from_str(&merged).unwrap();
    assert_eq!(merged, expected());

    evalview()
        .arg("validate")
        .arg(dir.path().join("merged.json"))
        .assert()
        .success();
}

#[test]
fn test_merge_reads_stdin_part() {
    let dir = tempdir().unwrap();
    let (inference, evaluation) = split_parts();
    let first = write_json(dir.path(), "inference.json", &inference);

    evalview()
        .args(["--format", "json", "merge"])
        .arg(&first)
        .arg("-")
        .arg("--output")
        .arg(dir.path().join("merged.json"))
        .write_stdin(evaluation.to_string())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"inputs\": 2"))
        .stdout(predicate::str::contains("\"bleu\""));
}

#[test]
fn test_merge_incomplete_object_is_data_error() {
    let dir = tempdir().unwrap();
    let (_, evaluation) = split_parts();
    let only = write_json(dir.path(), "evaluation.json", &evaluation);

    evalview()
        .args(["--format", "json", "merge"])
        .arg(&only)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("\"type\":\"invalid_payload\""))
        .stderr(predicate::str::contains("merged result"));
}

#[test]
fn test_merge_requires_files() {
    evalview().arg("merge").assert().code(2);
}
