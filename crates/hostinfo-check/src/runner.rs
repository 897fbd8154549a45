//! The ordered check battery.
//!
//! Checks run in a fixed order: platform, math, environment. The math
//! check is the only fatal one; when it fails, the battery stops there
//! and the caller maps the fatal error to a non-zero exit code.

use std::fmt;

use serde::{Deserialize, Serialize};

use hostinfo_platform::HostInfo;

use crate::error::CheckError;
use crate::math::add;

/// Environment variable inspected by the environment check.
pub const TEST_ENV_VAR: &str = "TEST_ENV";

/// Expected sum of the arithmetic check's fixed operands (2 + 3).
const MATH_EXPECTED: i64 = 5;

/// Outcome status of a single check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CheckStatus {
    Passed,
    Failed,
    /// Advisory deviation; never affects the exit code.
    Warning,
}

/// One check's outcome, consumed immediately by the report output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct CheckOutcome {
    /// Check name (e.g., "Platform", "Math", "Environment").
    pub name: String,
    /// Pass/fail/warning status.
    pub status: CheckStatus,
    /// Human-readable detail for the output line.
    pub detail: String,
}

impl CheckOutcome {
    fn new(name: &str, status: CheckStatus, detail: String) -> Self {
        Self {
            name: name.to_string(),
            status,
            detail,
        }
    }
}

impl fmt::Display for CheckOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            CheckStatus::Passed => write!(f, "✓ {} test passed: {}", self.name, self.detail),
            CheckStatus::Failed => write!(f, "✗ {} test failed: {}", self.name, self.detail),
            CheckStatus::Warning => write!(f, "⚠ {} test: {}", self.name, self.detail),
        }
    }
}

/// Check 1: report the detected platform pair. Always passes.
pub fn platform_check(host: &HostInfo) -> CheckOutcome {
    CheckOutcome::new("Platform", CheckStatus::Passed, host.triple())
}

/// Check 2: exercise [`add`] with fixed operands.
///
/// A wrong sum yields a Failed outcome and the battery's one fatal
/// error.
pub fn math_check() -> (CheckOutcome, Option<CheckError>) {
    math_outcome(add(2, 3))
}

fn math_outcome(actual: i64) -> (CheckOutcome, Option<CheckError>) {
    if actual == MATH_EXPECTED {
        let outcome = CheckOutcome::new(
            "Math",
            CheckStatus::Passed,
            format!("2 + 3 = {MATH_EXPECTED}"),
        );
        (outcome, None)
    } else {
        let outcome = CheckOutcome::new(
            "Math",
            CheckStatus::Failed,
            format!("expected {MATH_EXPECTED}, got {actual}"),
        );
        let fatal = CheckError::Arithmetic {
            expected: MATH_EXPECTED,
            actual,
        };
        (outcome, Some(fatal))
    }
}

/// Check 3: report whether the designated environment variable is set.
///
/// `value` is the looked-up value of [`TEST_ENV_VAR`]; unset and empty
/// are both advisory warnings.
pub fn env_check(value: Option<&str>) -> CheckOutcome {
    match value {
        Some(v) if !v.is_empty() => CheckOutcome::new(
            "Environment",
            CheckStatus::Passed,
            format!("{TEST_ENV_VAR}={v}"),
        ),
        _ => CheckOutcome::new(
            "Environment",
            CheckStatus::Warning,
            format!("{TEST_ENV_VAR} not set"),
        ),
    }
}

/// Run the full battery in order.
///
/// Returns the outcomes produced (in run order) and the fatal error,
/// if any. A fatal math check skips the environment check entirely.
pub fn run_battery(
    host: &HostInfo,
    test_env: Option<&str>,
) -> (Vec<CheckOutcome>, Option<CheckError>) {
    let mut outcomes = vec![platform_check(host)];

    let (outcome, fatal) = math_check();
    outcomes.push(outcome);
    if fatal.is_some() {
        return (outcomes, fatal);
    }

    outcomes.push(env_check(test_env));
    (outcomes, None)
}
