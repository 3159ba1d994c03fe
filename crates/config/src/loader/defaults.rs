//! Built-in option values.
//!
//! Invariants:
//! - Defaults are: NETWORK_TIMEOUT=30, TIMEOUT=30, TLS_REQCERT=try.
//! - Every default carries `Origin::Default` and is overridable by any later source.

use crate::constants::DEFAULT_OPTIONS;
use crate::types::{OptionsMap, Origin, RawOption};

/// The built-in options, as a fresh store.
pub fn default_options() -> OptionsMap {
    DEFAULT_OPTIONS
        .iter()
        .map(|(key, value)| RawOption::new(key, *value, Origin::Default))
        .collect()
}

/// Apply the built-in options to a store.
pub(crate) fn apply_defaults(options: &mut OptionsMap) {
    options.extend(default_options().iter().cloned());
}
