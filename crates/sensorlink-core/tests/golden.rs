use std::fs;
use std::path::{Path, PathBuf};

use sensorlink_core::{AnalyzeOptions, Report, analyze_log_file};

fn golden_dir(dir: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join(dir)
}

fn load_expected_report(dir: &str) -> Report {
    let expected_path = golden_dir(dir).join("expected_report.json");
    let expected_json = fs::read_to_string(&expected_path).expect("read expected_report.json");
    serde_json::from_str(&expected_json).expect("parse expected report")
}

fn run_golden(dir: &str) -> Report {
    let input = golden_dir(dir).join("input.log");
    let expected = load_expected_report(dir);

    let mut actual = analyze_log_file(&input, &AnalyzeOptions::default()).expect("analyze log");
    actual.input.path = expected.input.path.clone();

    let actual_value = serde_json::to_value(&actual).expect("serialize actual");
    let expected_value = serde_json::to_value(expected).expect("serialize expected");

    assert_eq!(actual_value, expected_value, "golden mismatch in {dir}");
    actual
}

#[test]
fn golden_uplinks() {
    run_golden("tests/golden/uplinks");
}

#[test]
fn golden_failures() {
    run_golden("tests/golden/failures");
}

#[test]
fn golden_empty() {
    run_golden("tests/golden/empty");
}

#[test]
fn golden_uplinks_has_sentinel_readings() {
    let report = run_golden("tests/golden/uplinks");
    let sentinel = report
        .readings
        .iter()
        .find(|record| record.payload_hex == "03ff7fff")
        .expect("sentinel uplink");
    assert_eq!(sentinel.reading.voltage, None);
    assert_eq!(sentinel.reading.temperature, None);
    assert_eq!(sentinel.header_kind, "button_hold");
}

#[test]
fn golden_failures_never_emit_partial_readings() {
    let report = run_golden("tests/golden/failures");
    for failure in &report.failures {
        assert!(
            report.readings.iter().all(|record| record.line != failure.line),
            "line {} is both a failure and a reading",
            failure.line
        );
    }
}
