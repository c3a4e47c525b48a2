use std::env;
use std::process::Command;

const UNKNOWN: &str = "unknown";

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=SENSORLINK_COMMIT");

    let commit = env::var("SENSORLINK_COMMIT")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .or_else(|| git(&["rev-parse", "HEAD"]))
        .map(|full| short_commit(full.trim()))
        .unwrap_or_else(|| UNKNOWN.to_string());

    let date = git(&["log", "-1", "--format=%cs"]).unwrap_or_else(|| UNKNOWN.to_string());

    println!("cargo:rustc-env=SENSORLINK_BUILD_COMMIT={commit}");
    println!("cargo:rustc-env=SENSORLINK_BUILD_DATE={date}");
}

fn git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let value = String::from_utf8_lossy(&output.stdout).trim().to_string();
    (!value.is_empty()).then_some(value)
}

fn short_commit(full: &str) -> String {
    full.chars().take(7).collect()
}
