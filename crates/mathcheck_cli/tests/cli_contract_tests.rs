//! CLI contract tests for the mathcheck binary.
//!
//! These tests validate:
//! - Help output lists every subcommand
//! - verify in text and JSON mode, including the unchanged-answer path
//! - Config files widen the recovery scan
//! - normalize, format and classify output

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;

#[allow(deprecated)]
fn cli() -> Command {
    Command::cargo_bin("mathcheck").unwrap()
}

#[test]
fn test_help_lists_subcommands() {
    cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("verify"))
        .stdout(predicate::str::contains("normalize"))
        .stdout(predicate::str::contains("format"))
        .stdout(predicate::str::contains("classify"));
}

#[test]
fn test_verify_text_confirms_answer() {
    cli()
        .arg("verify")
        .write_stdin("Normalized Equation: x + 2 = 5\nSubtract 2.\nFinal Answer: x=3\n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Final Answer: x=3\n\n"))
        .stdout(predicate::str::contains("Subtract 2."));
}

#[test]
fn test_verify_text_recovers_roots() {
    cli()
        .args(["verify", "--answer-file", "-"])
        .write_stdin("Normalized Equation: x^2 - 4 = 0\nFinal Answer: x=5")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Final Answer: x1=-2, x2=2"))
        .stdout(predicate::str::contains("x=5").not());
}

#[test]
fn test_verify_text_leaves_unverifiable_answer_unchanged() {
    let answer = "The capital of France is Paris.\nFinal Answer: Paris\n";
    cli()
        .arg("verify")
        .write_stdin(answer)
        .assert()
        .success()
        .stdout(answer);
}

#[test]
fn test_verify_json_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("answer.md");
    fs::write(&path, "**Normalized Equation:** 3x - 1 = 0\n\nFinal Answer: x=0.333").unwrap();

    let output = cli()
        .args(["verify", "--format", "json", "--question", "Round to 2 decimal places."])
        .arg("--answer-file")
        .arg(&path)
        .output()
        .expect("Failed to run CLI");
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).expect("Invalid JSON output");
    assert_eq!(json["ok"], true);
    assert_eq!(json["equation"], "3x - 1 = 0");
    assert_eq!(json["decimals"], 2);
    assert_eq!(json["recovered"], true);
    assert_eq!(json["roots"][0]["formatted"], "0.33");
    assert!(json["augmented"]
        .as_str()
        .unwrap()
        .starts_with("Final Answer: x=0.33"));
}

#[test]
fn test_verify_json_reports_stage() {
    let output = cli()
        .args(["verify", "--format", "json"])
        .write_stdin("No equation here.")
        .output()
        .expect("Failed to run CLI");
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).expect("Invalid JSON output");
    assert_eq!(json["ok"], false);
    assert_eq!(json["stage"], "no-equation");
    assert!(json["error"].is_string());
}

#[test]
fn test_verify_missing_answer_file_fails() {
    cli()
        .args(["verify", "--answer-file", "/nonexistent/answer.md"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("reading answer file"));
}

#[test]
fn test_config_widens_scan_range() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("mathcheck.toml");
    fs::write(&config, "[verify.scan]\nmin = -1000.0\nmax = 1000.0\n").unwrap();
    let answer = "Normalized Equation: x - 500 = 0";

    cli()
        .arg("verify")
        .arg("--config")
        .arg(&config)
        .write_stdin(answer)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Final Answer: x=500"));

    // Default range stops at 200
    let empty = tempfile::tempdir().unwrap();
    cli()
        .current_dir(empty.path())
        .arg("verify")
        .write_stdin(answer)
        .assert()
        .success()
        .stdout(answer);
}

#[test]
fn test_config_init_writes_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mathcheck.toml");
    cli()
        .args(["config", "--init", "--path"])
        .arg(&path)
        .assert()
        .success();

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("tolerance"));
    assert!(content.contains("narrow_steps"));

    cli()
        .args(["config", "--path"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("max_iterations = 30"));
}

#[test]
fn test_normalize_argument_and_stdin() {
    cli()
        .args(["normalize", "x² − 4 = 0"])
        .assert()
        .success()
        .stdout("x^2 - 4 = 0\n");

    cli()
        .arg("normalize")
        .write_stdin("|x - 3| = 5")
        .assert()
        .success()
        .stdout("abs(x - 3) = 5\n");
}

#[test]
fn test_format_number() {
    cli()
        .args(["format", "1e11"])
        .assert()
        .success()
        .stdout("1E11\n");
    cli()
        .args(["format", "-0.001", "--decimals", "2"])
        .assert()
        .success()
        .stdout("0.00\n");
    cli()
        .args(["format", "abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a number"));
}

#[test]
fn test_classify_json_and_text() {
    let output = cli()
        .args(["classify", "What is the capital of France?", "--format", "json"])
        .output()
        .expect("Failed to run CLI");
    assert!(output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout).expect("Invalid JSON output");
    assert_eq!(json["kind"], "question");
    assert_eq!(json["expects_final_answer"], true);

    cli()
        .args(["classify", "Solve x^2 - 4 = 0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Kind: math"))
        .stdout(predicate::str::contains("Normalized Equation:"));
}
