//! Error types for option resolution.
//!
//! Responsibilities:
//! - Define error variants for hard failures while loading configuration files.
//!
//! Does NOT handle:
//! - Missing files, malformed lines or bad integers; those are not errors and
//!   only surface as diagnostics.
//!
//! Invariants:
//! - Every variant names the failing path and the resolution stage.
//! - Errors NEVER include raw file line contents to prevent secret leakage.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use super::builder::Stage;

/// Errors that abort option resolution.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file exists but could not be opened.
    #[error("{stage}: failed to open {path}")]
    FileOpen {
        stage: Stage,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file was opened but reading it failed part-way.
    #[error("{stage}: failed to read {path}")]
    FileRead {
        stage: Stage,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ConfigError {
    /// The stage during which resolution failed.
    pub fn stage(&self) -> Stage {
        match self {
            ConfigError::FileOpen { stage, .. } | ConfigError::FileRead { stage, .. } => *stage,
        }
    }

    /// The candidate path that caused the failure.
    pub fn path(&self) -> &PathBuf {
        match self {
            ConfigError::FileOpen { path, .. } | ConfigError::FileRead { path, .. } => path,
        }
    }
}
