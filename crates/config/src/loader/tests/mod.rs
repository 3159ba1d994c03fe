//! Tests for the option resolution pipeline.
//!
//! Responsibilities:
//! - Test the precedence order across defaults, files and environment.
//! - Test the `LDAPNOINIT` escape hatch and the `LDAPCONF`/`LDAPRC` stages.
//! - Test hard errors at each file stage.
//! - Test resolution against the real process environment and filesystem.
//!
//! Invariants:
//! - Tests touching process state use `serial_test` and `global_test_lock()`.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::sync::Mutex;

pub mod env_tests;

/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}
