use std::fs;

use crate::cli::support::{evalview, sample_results, stdout_json, write_json};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_samples_human_rows() {
    let dir = tempdir().unwrap();
    let path = write_json(dir.path(), "results.json", &sample_results());

    evalview()
        .arg("samples")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("#0"))
        .stdout(predicate::str::contains("#1"))
        .stdout(predicate::str::contains("input:      The meeting was moved to Thursday."))
        .stdout(predicate::str::contains("reference:  Meeting moved."))
        .stdout(predicate::str::contains("prediction: Draft needs review."))
        .stdout(predicate::str::contains("bleu.bleu=0.2500"))
        .stdout(predicate::str::contains("Showing 0-1 of 2"));
}

#[test]
fn test_samples_json_page() {
    let dir = tempdir().unwrap();
    let path = write_json(dir.path(), "results.json", &sample_results());

    let output = evalview()
        .args(["--format", "json", "samples", "--offset", "1", "--limit", "5"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(output.status.success());

    let page = stdout_json(&output);
    assert_eq!(page["total"], 2);
    assert_eq!(page["offset"], 1);
    let rows = page["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["index"], 1);
    assert_eq!(rows[0]["scores"]["rouge.rouge2"], 0.5);
}

#[test]
fn test_samples_records() {
    let dir = tempdir().unwrap();
    let path = write_json(dir.path(), "results.json", &sample_results());

    evalview()
        .args(["--format", "records", "samples", "-n", "1"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "H evalview=1 records=1 mode=samples total=2 offset=0 count=1 truncated=true",
        ))
        .stdout(predicate::str::contains(
            "S 0 prediction=\"Meeting is on Thursday.\" reference=\"Meeting moved.\" bleu.bleu=0.2500",
        ))
        .stdout(predicate::str::contains("S 1").not());
}

#[test]
fn test_samples_limit_from_config() {
    let dir = tempdir().unwrap();
    write_json(dir.path(), "results.json", &sample_results());
    fs::write(
        dir.path().join("evalview.toml"),
        "[display]\nsample_limit = 1\nprecision = 2\n",
    )
    .unwrap();

    evalview()
        .arg("--root")
        .arg(dir.path())
        .args(["samples", "results.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("bleu.bleu=0.25"))
        .stdout(predicate::str::contains("Showing 0-0 of 2 (next: --offset 1)"));
}

#[test]
fn test_samples_offset_past_end() {
    let dir = tempdir().unwrap();
    let path = write_json(dir.path(), "results.json", &sample_results());

    evalview()
        .args(["samples", "--offset", "9"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("No samples at offset 9 (2 total)"));
}

#[test]
fn test_samples_zero_limit_is_usage_error() {
    let dir = tempdir().unwrap();
    let path = write_json(dir.path(), "results.json", &sample_results());

    evalview()
        .args(["samples", "--limit", "0"])
        .arg(&path)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("limit must be at least 1"));
}
