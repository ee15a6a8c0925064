use crate::cli::support::{evalview, sample_results, stdout_json, write_json};
use predicates::prelude::*;
use serde_json::json;
use tempfile::tempdir;

fn candidate() -> serde_json::Value {
    let mut results = sample_results();
    results["artifacts"]["model"] = json!("hf://google/flan-t5-base");
    results["metrics"]["bleu"] = json!({ "bleu": [0.375, 0.5], "bleu_mean": 0.4375 });
    results
}

#[test]
fn test_compare_human_deltas() {
    let dir = tempdir().unwrap();
    let baseline = write_json(dir.path(), "baseline.json", &sample_results());
    let candidate = write_json(dir.path(), "candidate.json", &candidate());

    evalview()
        .arg("compare")
        .arg(&baseline)
        .arg(&candidate)
        .assert()
        .success()
        .stdout(predicate::str::contains("baseline:  hf://facebook/bart-large-cnn"))
        .stdout(predicate::str::contains("candidate: hf://google/flan-t5-base"))
        .stdout(predicate::str::contains("+0.1250"))
        .stdout(predicate::str::contains("+0.0000"));
}

#[test]
fn test_compare_records_and_one_sided_metrics() {
    let dir = tempdir().unwrap();
    let mut other = candidate();
    other["metrics"].as_object_mut().unwrap().remove("rouge");
    let baseline = write_json(dir.path(), "baseline.json", &sample_results());
    let candidate = write_json(dir.path(), "candidate.json", &other);

    evalview()
        .args(["--format", "records", "compare"])
        .arg(&baseline)
        .arg(&candidate)
        .assert()
        .success()
        .stdout(predicate::str::contains("mode=compare"))
        .stdout(predicate::str::contains("shared=1"))
        .stdout(predicate::str::contains(
            "C bleu.bleu baseline=0.3125 candidate=0.4375 delta=+0.1250",
        ))
        .stdout(predicate::str::contains("C rouge.rouge1 side=baseline"));
}

#[test]
fn test_compare_json_with_metric_filter() {
    let dir = tempdir().unwrap();
    let baseline = write_json(dir.path(), "baseline.json", &sample_results());
    let candidate = write_json(dir.path(), "candidate.json", &candidate());

    let output = evalview()
        .args(["--format", "json", "compare", "--metric", "bleu"])
        .arg(&baseline)
        .arg(&candidate)
        .output()
        .unwrap();
    assert!(output.status.success());

    let comparison = stdout_json(&output);
    let rows = comparison["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["metric"], "bleu.bleu");
    assert_eq!(rows[0]["delta"], 0.125);
    assert_eq!(comparison["candidate_model"], "hf://google/flan-t5-base");
}

#[test]
fn test_compare_stdin_twice_is_usage_error() {
    evalview()
        .args(["compare", "-", "-"])
        .write_stdin(sample_results().to_string())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("stdin"));
}

#[test]
fn test_compare_missing_candidate() {
    let dir = tempdir().unwrap();
    let baseline = write_json(dir.path(), "baseline.json", &sample_results());

    evalview()
        .arg("compare")
        .arg(&baseline)
        .arg(dir.path().join("nope.json"))
        .assert()
        .code(3);
}
