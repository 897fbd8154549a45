//! Arithmetic subject of the self-check battery.

/// Sum of two integers.
pub fn add(a: i64, b: i64) -> i64 {
    a + b
}
