//! Option resolution pipeline.
//!
//! Responsibilities:
//! - Provide a builder-pattern `OptionsLoader` exposing each source as a stage.
//! - Derive the candidate file lists from the home and current directories.
//! - Run the fixed precedence order in `resolve()`, honouring `LDAPNOINIT`.
//!
//! Does NOT handle:
//! - Line parsing (see `parser`), file probing (see `files`) or the
//!   environment mapping (see `env`).
//!
//! Invariants / Assumptions:
//! - Precedence, lowest to highest: defaults, system files, `LDAPCONF` file,
//!   `LDAPRC` files, environment.
//! - A hard error at any file stage discards the partially resolved store.
//! - When the home directory is unknown, home-relative candidates are skipped.

use std::fmt;
use std::path::{Path, PathBuf};

use super::defaults::apply_defaults;
use super::env::apply_env;
use super::error::ConfigError;
use super::files::apply_files;
use crate::constants::{ENV_CONF, ENV_NO_INIT, ENV_RC, SYSTEM_CONF_PATH, USER_RC_NAME};
use crate::provider::SourceProvider;
use crate::types::OptionsMap;

/// Resolution stages, in precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Stage {
    Defaults,
    /// `/etc/ldap/ldap.conf` and the user `ldaprc` files.
    SystemFiles,
    /// The file named by `LDAPCONF`.
    OverrideFile,
    /// The files derived from `LDAPRC`.
    NamedRc,
    Environment,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Defaults => write!(f, "defaults"),
            Stage::SystemFiles => write!(f, "system files"),
            Stage::OverrideFile => write!(f, "{ENV_CONF} file"),
            Stage::NamedRc => write!(f, "{ENV_RC} file"),
            Stage::Environment => write!(f, "environment"),
        }
    }
}

/// Outcome of a successful resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// `LDAPNOINIT` was set; no source was read.
    Skipped,
    Resolved(OptionsMap),
}

impl Resolution {
    pub fn is_skipped(&self) -> bool {
        matches!(self, Resolution::Skipped)
    }

    /// The resolved options; empty when resolution was skipped.
    pub fn into_options(self) -> OptionsMap {
        match self {
            Resolution::Skipped => OptionsMap::new(),
            Resolution::Resolved(options) => options,
        }
    }
}

/// Builds an `OptionsMap` by applying sources one stage at a time.
///
/// Each stage overwrites keys set by the stages before it.
pub struct OptionsLoader<'a> {
    provider: &'a dyn SourceProvider,
    options: OptionsMap,
}

impl<'a> OptionsLoader<'a> {
    /// Create a loader with an empty store.
    pub fn new(provider: &'a dyn SourceProvider) -> Self {
        Self {
            provider,
            options: OptionsMap::new(),
        }
    }

    /// Check whether `LDAPNOINIT` asks to skip resolution.
    pub fn skip_requested(&self) -> bool {
        self.provider.var(ENV_NO_INIT).is_some()
    }

    /// Apply the built-in defaults.
    pub fn load_defaults(mut self) -> Self {
        apply_defaults(&mut self.options);
        self
    }

    /// Load an explicit list of candidate files, in order.
    ///
    /// # Errors
    ///
    /// Returns an error if a candidate exists but cannot be opened or read.
    /// Missing candidates are silently skipped.
    pub fn load_files<P: AsRef<Path>>(
        mut self,
        stage: Stage,
        candidates: &[P],
    ) -> Result<Self, ConfigError> {
        apply_files(&mut self.options, self.provider, stage, candidates)?;
        Ok(self)
    }

    /// Load `/etc/ldap/ldap.conf`, then `~/ldaprc`, `~/.ldaprc` and `./ldaprc`.
    pub fn load_system_files(self) -> Result<Self, ConfigError> {
        let candidates = system_candidates(self.provider);
        self.load_files(Stage::SystemFiles, &candidates)
    }

    /// Load the file named by `LDAPCONF`, if set and non-empty.
    pub fn load_override_file(self) -> Result<Self, ConfigError> {
        match non_empty_var(self.provider, ENV_CONF) {
            Some(path) => self.load_files(Stage::OverrideFile, &[path]),
            None => Ok(self),
        }
    }

    /// Load the rc file named by `LDAPRC`, if set and non-empty, from
    /// `~/<rc>`, `~/.<rc>` and `./<rc>`.
    pub fn load_named_rc(self) -> Result<Self, ConfigError> {
        match non_empty_var(self.provider, ENV_RC) {
            Some(rc) => {
                let candidates = rc_candidates(self.provider, &rc);
                self.load_files(Stage::NamedRc, &candidates)
            }
            None => Ok(self),
        }
    }

    /// Apply `LDAP<NAME>` overrides for every known option.
    pub fn load_env(mut self) -> Self {
        apply_env(&mut self.options, self.provider);
        self
    }

    /// Hand off the resolved store.
    pub fn build(self) -> OptionsMap {
        self.options
    }
}

fn non_empty_var(provider: &dyn SourceProvider, name: &str) -> Option<String> {
    provider.var(name).filter(|value| !value.is_empty())
}

/// Candidates for an rc file name: home, dot-prefixed home, current directory.
///
/// Leading separators are stripped, so an absolute name is still looked up
/// under the home and current directories.
fn rc_candidates(provider: &dyn SourceProvider, rc: &str) -> Vec<PathBuf> {
    let rc = rc.trim_start_matches(std::path::is_separator);
    if rc.is_empty() {
        tracing::debug!("Empty rc file name; skipping rc files");
        return Vec::new();
    }

    let mut candidates = Vec::with_capacity(3);
    match provider.home_dir() {
        Some(home) => {
            candidates.push(home.join(rc));
            candidates.push(home.join(format!(".{rc}")));
        }
        None => tracing::debug!(rc, "Home directory unknown; skipping home rc files"),
    }
    candidates.push(PathBuf::from(rc));
    candidates
}

fn system_candidates(provider: &dyn SourceProvider) -> Vec<PathBuf> {
    let mut candidates = vec![PathBuf::from(SYSTEM_CONF_PATH)];
    candidates.extend(rc_candidates(provider, USER_RC_NAME));
    candidates
}

/// Resolve options from every source, in precedence order.
///
/// # Errors
///
/// Returns an error if any existing configuration file cannot be opened or
/// read; the partially resolved store is discarded.
pub fn resolve(provider: &dyn SourceProvider) -> Result<Resolution, ConfigError> {
    let loader = OptionsLoader::new(provider);
    if loader.skip_requested() {
        tracing::debug!("Skip LDAP initialization");
        return Ok(Resolution::Skipped);
    }

    let options = loader
        .load_defaults()
        .load_system_files()?
        .load_override_file()?
        .load_named_rc()?
        .load_env()
        .build();

    tracing::debug!(count = options.len(), "Resolved LDAP options");
    Ok(Resolution::Resolved(options))
}

/// Resolve options, returning an empty store when resolution is skipped.
pub fn initialize(provider: &dyn SourceProvider) -> Result<OptionsMap, ConfigError> {
    resolve(provider).map(Resolution::into_options)
}
