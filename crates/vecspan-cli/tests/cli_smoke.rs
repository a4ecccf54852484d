//! CLI binary smoke tests using assert_cmd.
//!
//! These tests exercise the compiled `vecspan` binary end-to-end: flag
//! parsing, prompting over stdin, the repeat loop and config loading.

use assert_cmd::Command;
use predicates::prelude::*;

fn cmd() -> Command {
    Command::cargo_bin("vecspan").unwrap()
}

// ---------------------------------------------------------------------------
// Top-level
// ---------------------------------------------------------------------------

#[test]
fn help_flag() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--lower"))
        .stdout(predicate::str::contains("--once"));
}

#[test]
fn version_flag() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("vecspan"));
}

#[test]
fn non_integer_flag_is_rejected() {
    cmd().args(["--n", "three"]).assert().failure();
}

// ---------------------------------------------------------------------------
// Runs driven by flags
// ---------------------------------------------------------------------------

#[test]
fn single_run_from_flags() {
    cmd()
        .args(["--n", "3", "--r", "4", "--lower", "-5", "--upper", "5", "--seed", "1", "--once"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Variables:"))
        .stdout(predicate::str::contains("VECTORS: ["))
        .stdout(predicate::str::contains("MATRIX:"))
        .stdout(predicate::str::contains("RREF:"))
        .stdout(predicate::str::contains("Subspace dimension (d) = "))
        .stdout(predicate::str::contains("Start again").not());
}

#[test]
fn constant_coordinates_span_a_line() {
    cmd()
        .args(["-n", "3", "-r", "3", "-l", "2", "-u", "3", "--once"])
        .assert()
        .success()
        .stdout(predicate::str::contains("VECTORS: [(2, 2, 2), (2, 2, 2), (2, 2, 2)]"))
        .stdout(predicate::str::contains("1, 1, 1\n0, 0, 0\n0, 0, 0"))
        .stdout(predicate::str::contains("Subspace dimension (d) = 1"));
}

#[test]
fn seeded_runs_print_identical_output() {
    let args = ["--n", "4", "--r", "3", "--lower", "0", "--upper", "9", "--seed", "77", "--once"];
    let first = cmd().args(args).output().unwrap();
    let second = cmd().args(args).output().unwrap();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn empty_range_from_flags_fails() {
    cmd()
        .args(["--n", "3", "--r", "2", "--lower", "5", "--upper", "5", "--once"])
        .assert()
        .failure();
}

#[test]
fn invalid_partial_preset_fails_without_prompting() {
    cmd()
        .args(["--n", "0"])
        .write_stdin("2\n0\n5\nn\n")
        .assert()
        .failure()
        .stdout(predicate::str::contains("Enter an integer value").not());
}

// ---------------------------------------------------------------------------
// Interactive prompting
// ---------------------------------------------------------------------------

#[test]
fn prompts_for_all_values() {
    cmd()
        .write_stdin("2\n2\n0\n10\nn\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Enter an integer value for n: "))
        .stdout(predicate::str::contains("Enter an integer value for lower bound (inclusive): "))
        .stdout(predicate::str::contains("Subspace dimension (d) = "))
        .stdout(predicate::str::contains("Start again [y/n]: "));
}

#[test]
fn non_integer_reply_is_retried() {
    cmd()
        .args(["--lower", "0", "--upper", "4"])
        .write_stdin("two\n2\n3\nn\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid number. Try again."))
        .stdout(predicate::str::contains("Subspace dimension (d) = "));
}

#[test]
fn answering_y_starts_again() {
    let output = cmd()
        .args(["--n", "2", "--r", "2", "--lower", "0", "--upper", "3"])
        .write_stdin("y\nn\n")
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.matches("Subspace dimension (d) = ").count(), 2);
}

#[test]
fn closed_stdin_exits_cleanly() {
    cmd().assert().success();
}

// ---------------------------------------------------------------------------
// Config file
// ---------------------------------------------------------------------------

#[test]
fn config_file_supplies_values_and_flags_override() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("run.json");
    std::fs::write(&path, r#"{"n": 2, "r": 2, "lower": 4, "upper": 5}"#).unwrap();

    cmd()
        .arg("--config")
        .arg(&path)
        .args(["--n", "3", "--once"])
        .assert()
        .success()
        .stdout(predicate::str::contains("VECTORS: [(4, 4, 4), (4, 4, 4)]"))
        .stdout(predicate::str::contains("Enter an integer").not());
}

#[test]
fn missing_config_file_fails() {
    cmd()
        .args(["--config", "/nonexistent/run.json", "--once"])
        .assert()
        .failure();
}

#[test]
fn malformed_config_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("run.json");
    std::fs::write(&path, r#"{"n": "three"}"#).unwrap();

    cmd().arg("--config").arg(&path).assert().failure();
}
