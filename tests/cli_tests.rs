//! Integration tests for the CLI interface
//!
//! Tests the main entry point, parameter overrides, and pipeline file
//! handling end to end through the built binary.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

#[test]
fn test_default_run_without_arguments() {
    // No subcommand falls back to a run with the documented defaults
    let mut cmd = Command::cargo_bin("rangesum").unwrap();
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Sum of integers from 1 to 100 is: 5050"));
}

#[test]
fn test_run_with_overrides() {
    let mut cmd = Command::cargo_bin("rangesum").unwrap();
    cmd.args(["run", "--from", "1", "--to", "1000", "--chunk-size", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sum of integers from 1 to 1000 is: 500500"));
}

#[test]
fn test_run_reversed_range_totals_zero() {
    let mut cmd = Command::cargo_bin("rangesum").unwrap();
    cmd.args(["run", "--from", "10", "--to", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sum of integers from 10 to 1 is: 0"));
}

#[test]
fn test_run_rejects_zero_chunk_size() {
    let mut cmd = Command::cargo_bin("rangesum").unwrap();
    cmd.args(["run", "--chunk-size", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("chunk_size"));
}

#[test]
fn test_run_json_summary() {
    let mut cmd = Command::cargo_bin("rangesum").unwrap();
    cmd.args(["run", "--to", "10", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"total\": 55"));
}

#[test]
fn test_run_with_pipeline_file() {
    let temp_dir = TempDir::new().unwrap();
    let pipeline_path = temp_dir.path().join("pipeline.yml");
    std::fs::write(
        &pipeline_path,
        "name: file-run\nparams:\n  from_value: 1\n  to_value: 200\n  chunk_size: 20\n",
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("rangesum").unwrap();
    cmd.args(["run", "--config"])
        .arg(&pipeline_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Sum of integers from 1 to 200 is: 20100"));
}

#[test]
fn test_cli_flags_override_pipeline_file() {
    let temp_dir = TempDir::new().unwrap();
    let pipeline_path = temp_dir.path().join("pipeline.yml");
    std::fs::write(
        &pipeline_path,
        "params:\n  from_value: 1\n  to_value: 200\n",
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("rangesum").unwrap();
    cmd.args(["run", "--to", "100", "--config"])
        .arg(&pipeline_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Sum of integers from 1 to 100 is: 5050"));
}

#[test]
fn test_validate_accepts_good_pipeline() {
    let temp_dir = TempDir::new().unwrap();
    let pipeline_path = temp_dir.path().join("pipeline.yml");
    std::fs::write(
        &pipeline_path,
        "name: nightly\nparams:\n  to_value: 500\nmax_parallel: 4\n",
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("rangesum").unwrap();
    cmd.args(["validate", "--config"])
        .arg(&pipeline_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("'nightly' is valid"));
}

#[test]
fn test_validate_rejects_unknown_keys() {
    let temp_dir = TempDir::new().unwrap();
    let pipeline_path = temp_dir.path().join("pipeline.yml");
    std::fs::write(&pipeline_path, "params:\n  chunksize: 10\n").unwrap();

    let mut cmd = Command::cargo_bin("rangesum").unwrap();
    cmd.args(["validate", "--config"])
        .arg(&pipeline_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse pipeline file"));
}

#[test]
fn test_validate_rejects_missing_file() {
    let mut cmd = Command::cargo_bin("rangesum").unwrap();
    cmd.args(["validate", "--config", "/nonexistent/pipeline.yml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read pipeline file"));
}

#[test]
fn test_help_flag() {
    let mut cmd = Command::cargo_bin("rangesum").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("Commands:"));
}

#[test]
fn test_invalid_command() {
    let mut cmd = Command::cargo_bin("rangesum").unwrap();
    cmd.arg("invalid-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}
