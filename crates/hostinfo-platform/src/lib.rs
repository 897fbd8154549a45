//! Host platform detection and support tables for hostinfo.
//!
//! A host is described by the triple (OS, architecture, toolchain
//! version), read fresh from the execution environment on every
//! invocation. Support tables record which OS and architecture names
//! the distributed binaries are built and exercised on; anything
//! outside them is advisory only, never an error.

pub mod host;
pub mod support;

pub use host::HostInfo;
pub use support::SupportTier;
