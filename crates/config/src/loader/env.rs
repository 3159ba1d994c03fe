//! Environment variable overrides.
//!
//! Responsibilities:
//! - Read `LDAP<NAME>` for every known option and apply it to the store.
//!
//! Does NOT handle:
//! - The `LDAPNOINIT`, `LDAPCONF` and `LDAPRC` control variables (see `builder`).
//!
//! Invariants:
//! - Only names in `KNOWN_OPTIONS` are read from the environment.
//! - A variable that is present overrides the store, even when empty.
//! - Environment values carry `Origin::Env`.

use crate::constants::{ENV_PREFIX, KNOWN_OPTIONS};
use crate::provider::SourceProvider;
use crate::types::{OptionsMap, Origin, RawOption};

/// Environment variable name for a known option.
pub(crate) fn env_name(option: &str) -> String {
    format!("{ENV_PREFIX}{option}")
}

/// Apply environment variable overrides to the store.
pub(crate) fn apply_env(options: &mut OptionsMap, provider: &dyn SourceProvider) {
    for name in KNOWN_OPTIONS {
        if let Some(value) = provider.var(&env_name(name)) {
            options.insert(RawOption::new(name, value, Origin::Env));
        }
    }
}
