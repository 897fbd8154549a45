//! Self-check battery for hostinfo.
//!
//! A fixed, ordered battery of three checks run on demand via the
//! `test` CLI argument:
//!
//! 1. **Platform** — reports the detected OS/architecture pair.
//! 2. **Math** — exercises [`math::add`]; a wrong sum is the one fatal
//!    condition in the program and halts the battery.
//! 3. **Environment** — reports whether `TEST_ENV` is set; a missing
//!    value is an advisory warning, never a failure.

pub mod error;
pub mod math;
pub mod runner;

pub use error::{CheckError, Result};
pub use runner::{run_battery, CheckOutcome, CheckStatus, TEST_ENV_VAR};
