//! Centralized constants for LDAP option resolution.
//!
//! This module contains the well-known environment variable names, file
//! locations and built-in defaults consumed by the loaders, so that the
//! precedence pipeline and its tests agree on a single set of names.

// =============================================================================
// Environment Variables
// =============================================================================

/// Prefix prepended to a known option name to form its environment variable.
pub const ENV_PREFIX: &str = "LDAP";

/// When present (any value), option resolution is skipped entirely.
pub const ENV_NO_INIT: &str = "LDAPNOINIT";

/// Names one additional configuration file, loaded after the fixed candidates.
pub const ENV_CONF: &str = "LDAPCONF";

/// Names an rc file looked up in the home directory and the current directory.
pub const ENV_RC: &str = "LDAPRC";

// =============================================================================
// Configuration Files
// =============================================================================

/// System-wide configuration file.
pub const SYSTEM_CONF_PATH: &str = "/etc/ldap/ldap.conf";

/// User rc file name, looked up in the home directory (plain and dot-prefixed)
/// and in the current directory.
pub const USER_RC_NAME: &str = "ldaprc";

// =============================================================================
// Options
// =============================================================================

/// Options that may be set from `LDAP<NAME>` environment variables.
///
/// Files may set any name; the environment only ever sets these.
pub const KNOWN_OPTIONS: &[&str] = &[
    "BASE",
    "BINDDN",
    "PASSWORD",
    "REFERRALS",
    "SASL_AUTHCID",
    "SASL_AUTHZID",
    "SASL_MECH",
    "TIMEOUT",
    "TLS_REQCERT",
    "NETWORK_TIMEOUT",
    "URI",
];

/// Options whose values must never reach diagnostics.
pub const SECRET_OPTIONS: &[&str] = &["PASSWORD"];

/// Built-in option values, applied before any file or environment source.
pub const DEFAULT_OPTIONS: &[(&str, &str)] = &[
    ("NETWORK_TIMEOUT", "30"),
    ("TIMEOUT", "30"),
    ("TLS_REQCERT", "try"),
];

/// Returns true if the option holds a credential.
pub fn is_secret_option(key: &str) -> bool {
    SECRET_OPTIONS.iter().any(|s| s.eq_ignore_ascii_case(key))
}
