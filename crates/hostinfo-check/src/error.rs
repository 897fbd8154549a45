//! Error types for the self-check battery.

/// Errors that can occur while running the self-check battery.
///
/// Only the arithmetic check has a fatal path; every other deviation
/// is downgraded to an advisory warning in the check output.
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    /// The arithmetic check produced a wrong sum.
    #[error("math check failed: expected {expected}, got {actual}")]
    Arithmetic {
        /// The sum the check expected.
        expected: i64,
        /// The sum actually produced.
        actual: i64,
    },
}

/// Result type for check operations.
pub type Result<T> = std::result::Result<T, CheckError>;
