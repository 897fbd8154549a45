//! Host description model.

use std::process::Command;

use serde::{Deserialize, Serialize};

/// Placeholder toolchain string used when no `rustc` is on PATH.
const TOOLCHAIN_UNKNOWN: &str = "rustc (version unknown)";

/// The (OS, architecture, toolchain version) triple of the execution host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct HostInfo {
    /// Operating system name (e.g., "linux", "macos", "windows").
    pub os: String,
    /// CPU architecture name (e.g., "x86_64", "aarch64").
    pub arch: String,
    /// Toolchain version line (e.g., "rustc 1.80.0 (051478957 2024-07-21)").
    pub toolchain: String,
}

impl HostInfo {
    /// Detect the current host.
    ///
    /// OS and architecture come from `std::env::consts`; the toolchain
    /// version is probed from `rustc --version`. Detection is total: a
    /// missing toolchain degrades to a placeholder string.
    pub fn detect() -> Self {
        Self {
            os: std::env::consts::OS.to_string(),
            arch: std::env::consts::ARCH.to_string(),
            toolchain: probe_toolchain(),
        }
    }

    /// The "os/arch" form used in check and report output.
    pub fn triple(&self) -> String {
        format!("{}/{}", self.os, self.arch)
    }
}

/// First line of `rustc --version`, or a placeholder if the probe fails.
fn probe_toolchain() -> String {
    match Command::new("rustc").arg("--version").output() {
        Ok(output) => {
            let version = String::from_utf8_lossy(&output.stdout);
            match version.lines().next() {
                Some(line) if !line.is_empty() => line.to_string(),
                _ => TOOLCHAIN_UNKNOWN.to_string(),
            }
        }
        Err(_) => TOOLCHAIN_UNKNOWN.to_string(),
    }
}
