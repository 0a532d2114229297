//! Assertion helpers for conformance scenarios.
//!
//! Scenario checks fail by panicking, which the test harness reports as an ordinary failed
//! test; these helpers keep the failure sites explicit and the messages descriptive.

/// Fail the current scenario with a descriptive message.
#[cold]
#[track_caller]
pub fn fail(msg: &str) -> ! {
    panic!("{msg}");
}

/// Assert that a float observation is within `tolerance` of `expected`.
///
/// # Panics
///
/// Panics with `msg` plus the expected/actual values when the difference exceeds the
/// tolerance.
#[track_caller]
pub fn assert_close(actual: f64, expected: f64, tolerance: f64, msg: &str) {
    if (actual - expected).abs() > tolerance {
        panic!("{msg}\n  expected: {expected} (within {tolerance})\n  actual:   {actual}");
    }
}
