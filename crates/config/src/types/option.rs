//! Raw option types.
//!
//! Responsibilities:
//! - Define `RawOption`, a single key/value pair with its provenance.
//! - Define `Origin`, the provenance tag rendered in diagnostics.
//!
//! Does NOT handle:
//! - Type coercion of values (see `accessors`).
//! - Merge decisions (see `store`); origin is informational only.
//!
//! Invariants:
//! - `RawOption::key` is always upper-cased.
//! - `Debug` output never includes the value of a secret option.

use std::fmt;
use std::path::PathBuf;

use crate::constants::is_secret_option;

/// Where an option value came from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Origin {
    /// Built-in default value.
    Default,
    /// `LDAP<NAME>` environment variable.
    Env,
    /// Configuration file, by absolute path.
    File(PathBuf),
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Origin::Default => write!(f, "default"),
            Origin::Env => write!(f, "env"),
            Origin::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// A single option with its raw string value.
///
/// Values are kept untyped; coercion happens on read.
#[derive(Clone, PartialEq, Eq)]
pub struct RawOption {
    pub key: String,
    pub value: String,
    pub origin: Origin,
}

impl RawOption {
    /// Create an option, upper-casing the key.
    pub fn new(key: impl AsRef<str>, value: impl Into<String>, origin: Origin) -> Self {
        Self {
            key: key.as_ref().to_uppercase(),
            value: value.into(),
            origin,
        }
    }

    /// Whether the value of this option is a credential.
    pub fn is_secret(&self) -> bool {
        is_secret_option(&self.key)
    }
}

impl fmt::Debug for RawOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value: &dyn fmt::Debug = if self.is_secret() {
            &"[REDACTED]"
        } else {
            &self.value
        };
        f.debug_struct("RawOption")
            .field("key", &self.key)
            .field("value", value)
            .field("origin", &self.origin)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_upper_cases_key() {
        let option = RawOption::new("sasl_mech", "EXTERNAL", Origin::Env);
        assert_eq!(option.key, "SASL_MECH");
        assert_eq!(option.value, "EXTERNAL");
    }

    #[test]
    fn test_origin_display() {
        assert_eq!(Origin::Default.to_string(), "default");
        assert_eq!(Origin::Env.to_string(), "env");
        assert_eq!(
            Origin::File(PathBuf::from("/etc/ldap/ldap.conf")).to_string(),
            "/etc/ldap/ldap.conf"
        );
    }

    #[test]
    fn test_debug_redacts_secret_value() {
        let option = RawOption::new("password", "hunter2", Origin::Env);
        let debug = format!("{option:?}");
        assert!(!debug.contains("hunter2"), "got: {debug}");
        assert!(debug.contains("[REDACTED]"));

        let option = RawOption::new("binddn", "cn=admin", Origin::Env);
        assert!(format!("{option:?}").contains("cn=admin"));
    }
}
