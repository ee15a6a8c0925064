use crate::cli::support::{evalview, sample_results, stdout_json, write_json};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_show_human_summary() {
    let dir = tempdir().unwrap();
    let path = write_json(dir.path(), "results.json", &sample_results());

    evalview()
        .arg("show")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("bart-mail/42"))
        .stdout(predicate::str::contains("hf://facebook/bart-large-cnn"))
        .stdout(predicate::str::contains("samples:  2"))
        .stdout(predicate::str::contains("rouge.rougeLsum"))
        .stdout(predicate::str::contains("0.3125"));
}

#[test]
fn test_show_json_summary() {
    let dir = tempdir().unwrap();
    let path = write_json(dir.path(), "results.json", &sample_results());

    let output = evalview()
        .args(["--format", "json", "show"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(output.status.success());

    let summary = stdout_json(&output);
    assert_eq!(summary["sample_count"], 2);
    assert_eq!(summary["task"], "summarization");
    assert_eq!(summary["metrics"].as_array().unwrap().len(), 5);
    assert_eq!(summary["metrics"][4]["metric"], "bleu.bleu");
    assert_eq!(summary["metrics"][4]["kind"], "bleu");
}

#[test]
fn test_show_records_with_metric_filter() {
    let dir = tempdir().unwrap();
    let path = write_json(dir.path(), "results.json", &sample_results());

    evalview()
        .args(["--format", "records", "show", "--metric", "bleu"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "H evalview=1 records=1 mode=show",
        ))
        .stdout(predicate::str::contains("metrics=1"))
        .stdout(predicate::str::contains(
            "M bleu.bleu count=2 mean=0.3125 min=0.2500 max=0.3750",
        ))
        .stdout(predicate::str::contains("M rouge").not());
}

#[test]
fn test_show_relative_path_under_root() {
    let dir = tempdir().unwrap();
    write_json(dir.path(), "results.json", &sample_results());

    evalview()
        .arg("--root")
        .arg(dir.path())
        .args(["show", "results.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("bart-mail/42"));
}

#[test]
fn test_show_reads_stdin() {
    evalview()
        .args(["show", "-"])
        .write_stdin(sample_results().to_string())
        .assert()
        .success()
        .stdout(predicate::str::contains("rouge.rouge1"));
}

#[test]
fn test_show_missing_file_exit_code_3() {
    let dir = tempdir().unwrap();

    evalview()
        .arg("show")
        .arg(dir.path().join("missing.json"))
        .assert()
        .code(3)
        .stderr(predicate::str::contains("results file not found"));
}

#[test]
fn test_show_missing_field_names_path() {
    let dir = tempdir().unwrap();
    let mut results = sample_results();
    results["metrics"]["bleu"]
        .as_object_mut()
        .unwrap()
        .remove("bleu_mean");
    let path = write_json(dir.path(), "results.json", &results);

    evalview()
        .args(["--format", "json", "show"])
        .arg(&path)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("\"type\":\"invalid_payload\""))
        .stderr(predicate::str::contains("\"field\":\"metrics.bleu\""))
        .stderr(predicate::str::contains("bleu_mean"));
}

#[test]
fn test_show_malformed_stdin_exit_code_3() {
    evalview()
        .args(["show", "-"])
        .write_stdin("{\"artifacts\": [")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("<stdin>"));
}
