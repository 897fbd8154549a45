//! Known-platform tables.
//!
//! These list the OS and architecture names the binaries are built and
//! exercised on. A name outside the tables is not an error: the report
//! path prints an advisory warning and everything else proceeds.

use serde::{Deserialize, Serialize};

/// Operating systems with official support, in `std::env::consts::OS` names.
pub const SUPPORTED_OS: &[&str] = &["linux", "macos", "windows"];

/// Architectures with official support, in `std::env::consts::ARCH` names.
pub const SUPPORTED_ARCHES: &[&str] = &["x86_64", "aarch64", "x86"];

/// Whether a platform name appears in the known-platform tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SupportTier {
    /// Name is in the table.
    Supported,
    /// Name is not in the table; advisory only.
    Unknown,
}

/// Look up an operating system name.
pub fn os_support(name: &str) -> SupportTier {
    tier_of(SUPPORTED_OS, name)
}

/// Look up an architecture name.
pub fn arch_support(name: &str) -> SupportTier {
    tier_of(SUPPORTED_ARCHES, name)
}

fn tier_of(table: &[&str], name: &str) -> SupportTier {
    if table.contains(&name) {
        SupportTier::Supported
    } else {
        SupportTier::Unknown
    }
}
