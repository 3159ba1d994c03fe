//! LDAP client option resolution.
//!
//! This crate merges built-in defaults, `ldap.conf(5)`-style files and
//! `LDAP*` environment variables into a single [`OptionsMap`], following the
//! precedence order of the OpenLDAP client libraries, and exposes typed,
//! secret-aware accessors over the result.

pub mod constants;
mod loader;
pub mod provider;
pub mod types;

pub use loader::{
    ConfigError, FileOptions, OptionsLoader, Resolution, Stage, default_options, initialize,
    resolve,
};
pub use provider::{MemoryProvider, SourceProvider, SystemProvider};
pub use types::{OptionsMap, Origin, RawOption};
