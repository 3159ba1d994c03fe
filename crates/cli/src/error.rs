//! CLI exit codes for scripting and automation.
//!
//! Invariants:
//! - Exit code 1 covers every resolution or output failure.

/// Structured exit codes for ldap-options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - options resolved and printed.
    Success = 0,

    /// General error - a configuration file could not be read, or output failed.
    GeneralError = 1,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}
