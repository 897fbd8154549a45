//! End-to-end scenarios against the built binary.

use std::process::{Command, Output};

fn hostinfo(args: &[&str]) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_hostinfo"));
    cmd.args(args);
    // Tests control TEST_ENV explicitly; never inherit it.
    cmd.env_remove("TEST_ENV");
    cmd
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn no_args_prints_greeting_and_usage_hint() {
    let output = hostinfo(&[]).output().unwrap();
    assert!(output.status.success());

    let stdout = stdout_of(&output);
    assert!(stdout.contains("Hello from hostinfo"));
    assert!(stdout.contains("OS:"));
    assert!(stdout.contains("Architecture:"));
    assert!(stdout.contains("Toolchain:"));
    assert!(stdout.contains("Run 'hostinfo test'"));
    // No check lines on the report path.
    assert!(!stdout.contains("Math test"));
}

#[test]
fn unknown_argument_falls_through_to_report() {
    let output = hostinfo(&["frobnicate"]).output().unwrap();
    assert!(output.status.success());
    assert!(stdout_of(&output).contains("Hello from hostinfo"));
}

#[test]
fn json_report_parses_as_host_info() {
    let output = hostinfo(&["--format", "json"]).output().unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_str(&stdout_of(&output)).unwrap();
    assert!(value["os"].is_string());
    assert!(value["arch"].is_string());
    assert!(value["toolchain"].is_string());
}

#[test]
fn battery_with_env_unset() {
    let output = hostinfo(&["test"]).output().unwrap();
    assert!(output.status.success());

    let stdout = stdout_of(&output);
    assert!(stdout.contains("✓ Platform test passed"));
    assert!(stdout.contains("✓ Math test passed: 2 + 3 = 5"));
    assert!(stdout.contains("⚠ Environment test: TEST_ENV not set"));
    assert!(stdout.contains("=== All checks passed ==="));
}

#[test]
fn battery_with_env_set() {
    let output = hostinfo(&["test"]).env("TEST_ENV", "foo").output().unwrap();
    assert!(output.status.success());

    let stdout = stdout_of(&output);
    assert!(stdout.contains("✓ Environment test passed: TEST_ENV=foo"));
    assert!(stdout.contains("=== All checks passed ==="));
}

#[test]
fn battery_json_report() {
    let output = hostinfo(&["test", "--report", "json"]).output().unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_str(&stdout_of(&output)).unwrap();
    let checks = value["checks"].as_array().unwrap();
    assert_eq!(checks.len(), 3);
    assert_eq!(checks[0]["status"], "passed");
    assert_eq!(checks[1]["status"], "passed");
    assert_eq!(checks[2]["status"], "warning");
    assert!(value["fatal"].is_null());
}

#[test]
fn unknown_battery_format_exits_nonzero() {
    let output = hostinfo(&["test", "--report", "xml"]).output().unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown report format"));
}
