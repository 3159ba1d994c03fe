//! Typed accessors over the resolved options store.
//!
//! Responsibilities:
//! - Read options as strings, secrets or durations.
//! - Emit a diagnostic for every read, with the value omitted for secrets.
//!
//! Does NOT handle:
//! - Schema validation; coercion happens only here, at read time.
//!
//! Invariants:
//! - Absent options yield a zero value (empty string, zero duration) and no log.
//! - Coercion failures are logged at WARN and never returned as errors.
//! - `get_secret` never passes the value to `tracing`.

use secrecy::SecretString;
use std::time::Duration;

use super::store::OptionsMap;

impl OptionsMap {
    /// Read an option as a string, or an empty string if unset.
    pub fn get_string(&self, name: &str) -> String {
        match self.get(name) {
            Some(option) => {
                tracing::debug!(
                    key = %option.key,
                    value = %option.value,
                    origin = %option.origin,
                    "Read LDAP option"
                );
                option.value.clone()
            }
            None => String::new(),
        }
    }

    /// Read an option holding a credential.
    ///
    /// Same lookup as [`OptionsMap::get_string`], but the diagnostic carries
    /// only the key and origin.
    pub fn get_secret(&self, name: &str) -> SecretString {
        match self.get(name) {
            Some(option) => {
                tracing::debug!(key = %option.key, origin = %option.origin, "Read LDAP option");
                SecretString::new(option.value.clone().into())
            }
            None => SecretString::new(String::new().into()),
        }
    }

    /// Read an option as a whole number of seconds.
    ///
    /// A value that is not a non-negative base-10 integer is logged and read
    /// as zero.
    pub fn get_seconds(&self, name: &str) -> Duration {
        let Some(option) = self.get(name) else {
            return Duration::ZERO;
        };
        match option.value.parse::<u64>() {
            Ok(secs) => {
                tracing::debug!(
                    key = %option.key,
                    value = %option.value,
                    origin = %option.origin,
                    "Read LDAP option"
                );
                Duration::from_secs(secs)
            }
            Err(e) => {
                tracing::warn!(
                    key = %option.key,
                    value = %option.value,
                    error = %e,
                    origin = %option.origin,
                    "Bad integer"
                );
                Duration::ZERO
            }
        }
    }
}
