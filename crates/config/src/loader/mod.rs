//! Option loader for defaults, configuration files and environment variables.
//!
//! Responsibilities:
//! - Parse `ldap.conf(5)` files lazily, one line at a time.
//! - Provide a builder-pattern `OptionsLoader` for ordered, last-write-wins merging.
//! - Enforce the `LDAPNOINIT` escape hatch before any source is read.
//!
//! Does NOT handle:
//! - Type coercion of option values (see `types::accessors`).
//! - Direct access to process state (delegated to `provider::SourceProvider`).
//!
//! Invariants / Assumptions:
//! - Environment variables take precedence over every file.
//! - Files take precedence over built-in defaults, later files over earlier ones.

mod builder;
mod defaults;
mod env;
mod error;
mod files;
mod parser;

pub use builder::{OptionsLoader, Resolution, Stage, initialize, resolve};
pub use defaults::default_options;
pub use error::ConfigError;
pub use parser::FileOptions;

#[cfg(test)]
mod tests;
