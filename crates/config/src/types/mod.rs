//! Option type definitions for LDAP option resolution.
//!
//! Responsibilities:
//! - Define `RawOption` and its `Origin`.
//! - Define the `OptionsMap` store and its typed accessors.
//!
//! Does NOT handle:
//! - Loading options from files or environment variables (see `loader` module).
//!
//! Invariants:
//! - Option keys are upper-cased on construction.
//! - Secret values are returned as `secrecy::SecretString` and never logged.

mod accessors;
mod option;
mod store;

pub use option::{Origin, RawOption};
pub use store::OptionsMap;
