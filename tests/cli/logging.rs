use crate::cli::support::evalview;
use predicates::prelude::*;

// ============================================================================
// Logging flag tests
// ============================================================================

#[test]
fn test_log_level_debug_shows_debug_messages() {
    evalview()
        .args(["--log-level", "debug", "metrics"])
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args"));
}

#[test]
fn test_log_level_warn_hides_debug_messages() {
    evalview()
        .args(["--log-level", "warn", "metrics"])
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args").not());
}

#[test]
fn test_verbose_shows_debug_messages() {
    evalview()
        .args(["--verbose", "metrics"])
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args"))
        .stderr(predicate::str::contains("resolve_config"));
}

#[test]
fn test_default_logging_is_quiet() {
    evalview()
        .arg("metrics")
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_log_json_emits_json_lines() {
    evalview()
        .args(["--verbose", "--log-json", "metrics"])
        .assert()
        .success()
        .stderr(predicate::str::contains("\"message\":\"parse_args\""));
}

#[test]
fn test_evalview_log_env_overrides_flags() {
    evalview()
        .env("EVALVIEW_LOG", "evalview=debug")
        .arg("metrics")
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args"));
}

#[test]
fn test_logs_never_pollute_json_stdout() {
    let output = evalview()
        .args(["--verbose", "--format", "json", "metrics"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value.as_array().unwrap().len(), 5);
}
