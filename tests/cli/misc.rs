use crate::cli::support::evalview;
use predicates::prelude::*;

// ============================================================================
// Help, version and error envelope tests
// ============================================================================

#[test]
fn test_help_flag() {
    evalview()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: evalview"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("validate"))
        .stdout(predicate::str::contains("compare"))
        .stdout(predicate::str::contains("merge"));
}

#[test]
fn test_version_flag() {
    evalview()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("evalview"));
}

#[test]
fn test_no_command_prints_hint() {
    evalview()
        .assert()
        .success()
        .stdout(predicate::str::contains("evalview "))
        .stdout(predicate::str::contains("Run `evalview --help`"));
}

#[test]
fn test_unknown_command_exit_code_2() {
    evalview().arg("nonexistent").assert().code(2);
}

#[test]
fn test_unknown_command_json_usage_error() {
    evalview()
        .args(["--format", "json", "nonexistent"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("\"type\":\"usage_error\""));
}

#[test]
fn test_duplicate_format_json_usage_error() {
    evalview()
        .args(["--format", "json", "--format", "human", "metrics"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("\"type\":\"duplicate_format\""));
}

#[test]
fn test_unknown_format_exit_code_2() {
    evalview()
        .args(["--format", "yaml", "metrics"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown format: yaml"));
}

#[test]
fn test_unknown_metric_filter_exit_code_2() {
    evalview()
        .args(["show", "results.json", "--metric", "wer"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unsupported metric"));
}

#[test]
fn test_missing_explicit_config_exit_code_3() {
    evalview()
        .args(["--config", "/nonexistent/evalview.toml", "metrics"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("config file not found"));
}

#[test]
fn test_metrics_lists_series() {
    evalview()
        .arg("metrics")
        .assert()
        .success()
        .stdout(predicate::str::contains("bertscore"))
        .stdout(predicate::str::contains("rouge.rougeLsum"))
        .stdout(predicate::str::contains("comet.scores"));
}

#[test]
fn test_metrics_records() {
    evalview()
        .args(["--format", "records", "metrics"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "H evalview=1 records=1 mode=metrics kinds=5",
        ))
        .stdout(predicate::str::contains("M bertscore.f1 kind=bertscore"));
}

#[test]
fn test_other_conflict_json_is_usage_error() {
    evalview()
        .args([
            "--format",
            "json",
            "validate",
            "results.json",
            "--require-requested",
            "--no-require-requested",
        ])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("\"type\":\"usage_error\""))
        .stderr(predicate::str::contains("duplicate_format").not());
}

#[test]
fn test_uppercase_json_format_gets_envelope() {
    evalview()
        .args(["--format", "JSON", "nonexistent"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("\"type\":\"usage_error\""));

    evalview()
        .args(["--format=Json", "nonexistent"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("\"type\":\"usage_error\""));
}

#[test]
fn test_configured_json_format_applies_to_errors() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("evalview.toml"), "default_format = \"json\"\n").unwrap();

    evalview()
        .arg("--root")
        .arg(dir.path())
        .args(["show", "missing.json"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("\"type\":\"results_not_found\""));
}
