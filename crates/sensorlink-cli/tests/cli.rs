use std::fs;

use assert_cmd::Command;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use serde_json::{Value, json};
use tempfile::TempDir;

fn cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("sensorlink"))
}

fn repo_root() -> std::path::PathBuf {
    let manifest = std::path::Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest
        .parent()
        .and_then(|p| p.parent())
        .expect("repo root")
        .to_path_buf()
}

fn golden_log(case: &str) -> std::path::PathBuf {
    repo_root()
        .join("tests")
        .join("golden")
        .join(case)
        .join("input.log")
}

fn stdout_json(output: &std::process::Output) -> Value {
    let stdout = String::from_utf8(output.stdout.clone()).expect("utf8 stdout");
    serde_json::from_str(&stdout).expect("valid json")
}

#[test]
fn help_supports_analyse_and_analyze() {
    cmd()
        .arg("log")
        .arg("analyse")
        .arg("--help")
        .assert()
        .success();
    cmd()
        .arg("log")
        .arg("analyze")
        .arg("--help")
        .assert()
        .success();
}

#[test]
fn version_includes_build_metadata() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn decode_prints_reading_json() {
    let assert = cmd().arg("decode").arg("02c8012c").assert().success();
    let value = stdout_json(assert.get_output());
    assert_eq!(
        value,
        json!({"header": 2, "voltage": 20.0, "temperature": 30.0})
    );
}

#[test]
fn decode_sentinels_as_null() {
    let assert = cmd()
        .arg("decode")
        .arg("01FF7FFF")
        .arg("--port")
        .arg("7")
        .arg("--pretty")
        .assert()
        .success();
    let value = stdout_json(assert.get_output());
    assert_eq!(value["header"], json!(1));
    assert!(value["voltage"].is_null());
    assert!(value["temperature"].is_null());
}

#[test]
fn decode_short_payload_fails_with_hint() {
    cmd()
        .arg("decode")
        .arg("01")
        .assert()
        .failure()
        .code(2)
        .stdout(predicates::str::is_empty())
        .stderr(contains("error:").and(contains("out of range")).and(contains("hint:")));
}

#[test]
fn decode_invalid_hex_fails_with_hint() {
    cmd()
        .arg("decode")
        .arg("01zz")
        .assert()
        .failure()
        .code(2)
        .stderr(contains("invalid payload").and(contains("hint:")));
}

#[test]
fn missing_input_shows_error_and_hint() {
    let temp = TempDir::new().expect("tempdir");
    let missing = temp.path().join("missing.log");
    let report = temp.path().join("report.json");

    cmd()
        .arg("log")
        .arg("analyze")
        .arg(missing)
        .arg("-o")
        .arg(report)
        .assert()
        .failure()
        .stderr(contains("error:").and(contains("hint:")));
}

#[test]
fn stdout_outputs_report_json() {
    let assert = cmd()
        .arg("log")
        .arg("analyze")
        .arg(golden_log("uplinks"))
        .arg("--stdout")
        .assert()
        .success();
    let value = stdout_json(assert.get_output());
    assert_eq!(value["summary"]["decoded"], json!(6));
    assert_eq!(value["readings"][0]["port"], json!(1));
}

#[test]
fn port_option_is_recorded() {
    let assert = cmd()
        .arg("log")
        .arg("analyse")
        .arg(golden_log("uplinks"))
        .arg("--stdout")
        .arg("--port")
        .arg("5")
        .assert()
        .success();
    let value = stdout_json(assert.get_output());
    assert_eq!(value["readings"][0]["port"], json!(5));
}

#[test]
fn stdout_and_report_conflict() {
    let temp = TempDir::new().expect("tempdir");
    let report = temp.path().join("report.json");

    cmd()
        .arg("log")
        .arg("analyze")
        .arg(golden_log("uplinks"))
        .arg("--stdout")
        .arg("-o")
        .arg(report)
        .assert()
        .failure()
        .stderr(contains("error:"));
}

#[test]
fn pretty_and_compact_conflict() {
    let temp = TempDir::new().expect("tempdir");
    let report = temp.path().join("report.json");

    cmd()
        .arg("log")
        .arg("analyze")
        .arg(golden_log("uplinks"))
        .arg("-o")
        .arg(report)
        .arg("--pretty")
        .arg("--compact")
        .assert()
        .failure()
        .stderr(contains("error:"));
}

#[test]
fn report_written_to_nested_directory() {
    let temp = TempDir::new().expect("tempdir");
    let report = temp.path().join("out").join("report.json");

    cmd()
        .arg("log")
        .arg("analyse")
        .arg(golden_log("uplinks"))
        .arg("-o")
        .arg(&report)
        .assert()
        .success()
        .stderr(contains("OK:"));

    let written = fs::read_to_string(&report).expect("report written");
    let value: Value = serde_json::from_str(&written).expect("valid json");
    assert_eq!(value["report_version"], json!(1));
}

#[test]
fn quiet_suppresses_ok_message() {
    let temp = TempDir::new().expect("tempdir");
    let report = temp.path().join("report.json");

    cmd()
        .arg("log")
        .arg("analyze")
        .arg(golden_log("uplinks"))
        .arg("-o")
        .arg(report)
        .arg("--quiet")
        .assert()
        .success()
        .stderr(predicates::str::is_empty());
}

#[test]
fn report_path_must_differ_from_input() {
    let temp = TempDir::new().expect("tempdir");
    let input = temp.path().join("device.log");
    fs::copy(golden_log("uplinks"), &input).expect("copy log");

    cmd()
        .arg("log")
        .arg("analyze")
        .arg(&input)
        .arg("-o")
        .arg(&input)
        .assert()
        .failure()
        .stderr(contains("must differ from input"));
}

#[test]
fn strict_fails_when_uplinks_fail() {
    cmd()
        .arg("log")
        .arg("analyze")
        .arg(golden_log("failures"))
        .arg("--stdout")
        .arg("--strict")
        .assert()
        .failure()
        .code(2)
        .stderr(contains("failed to decode").and(contains("--list-failures")));
}

#[test]
fn strict_passes_when_all_uplinks_decode() {
    cmd()
        .arg("log")
        .arg("analyze")
        .arg(golden_log("uplinks"))
        .arg("--stdout")
        .arg("--strict")
        .assert()
        .success();
}

#[test]
fn list_failures_outputs_lines() {
    cmd()
        .arg("log")
        .arg("analyze")
        .arg(golden_log("failures"))
        .arg("--stdout")
        .arg("--list-failures")
        .assert()
        .success()
        .stderr(contains("Decode failures:").and(contains("line 2 '01'")));
}

#[test]
fn glob_with_multiple_matches_is_rejected() {
    let temp = TempDir::new().expect("tempdir");
    fs::copy(golden_log("uplinks"), temp.path().join("a.log")).expect("copy log");
    fs::copy(golden_log("uplinks"), temp.path().join("b.log")).expect("copy log");
    let pattern = temp.path().join("*.log");

    cmd()
        .arg("log")
        .arg("analyze")
        .arg(pattern)
        .arg("--stdout")
        .assert()
        .failure()
        .stderr(contains("multiple files match pattern"));
}

#[test]
fn glob_with_single_match_is_analysed() {
    let temp = TempDir::new().expect("tempdir");
    fs::copy(golden_log("failures"), temp.path().join("only.log")).expect("copy log");
    let pattern = temp.path().join("*.log");

    let assert = cmd()
        .arg("log")
        .arg("analyze")
        .arg(pattern)
        .arg("--stdout")
        .assert()
        .success();
    let value = stdout_json(assert.get_output());
    assert_eq!(value["summary"]["failed"], json!(6));
}

#[test]
fn failed_uplinks_are_logged_as_warning() {
    cmd()
        .env_remove("RUST_LOG")
        .arg("log")
        .arg("analyze")
        .arg(golden_log("failures"))
        .arg("--stdout")
        .assert()
        .success()
        .stderr(contains("WARN").and(contains("6 of 7 uplinks failed to decode")));
}

#[test]
fn quiet_suppresses_failure_warning() {
    cmd()
        .env_remove("RUST_LOG")
        .arg("log")
        .arg("analyze")
        .arg(golden_log("failures"))
        .arg("--stdout")
        .arg("--quiet")
        .assert()
        .success()
        .stderr(predicates::str::is_empty());
}
