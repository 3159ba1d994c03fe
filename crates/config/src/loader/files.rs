//! Configuration file loading.
//!
//! Responsibilities:
//! - Resolve candidate paths to absolute form.
//! - Skip candidates that do not exist or cannot be stat'ed.
//! - Stream each existing candidate through the parser into the store.
//!
//! Does NOT handle:
//! - Choosing the candidate list (see `builder`).
//!
//! Invariants:
//! - Candidates are processed strictly in order; later files win.
//! - A missing candidate is logged at DEBUG and is not an error.
//! - A relative candidate that cannot be made absolute is skipped like a
//!   missing one.
//! - An existing candidate that fails to open or read aborts loading.

use std::io;
use std::path::{Path, PathBuf};

use super::builder::Stage;
use super::error::ConfigError;
use super::parser::FileOptions;
use crate::provider::SourceProvider;
use crate::types::OptionsMap;

/// Make a candidate absolute against the provider's current directory.
fn absolutize(provider: &dyn SourceProvider, candidate: &Path) -> io::Result<PathBuf> {
    if candidate.is_absolute() {
        return Ok(candidate.to_path_buf());
    }
    Ok(provider.current_dir()?.join(candidate))
}

/// Load every existing candidate into the store, in order.
pub(crate) fn apply_files<P: AsRef<Path>>(
    options: &mut OptionsMap,
    provider: &dyn SourceProvider,
    stage: Stage,
    candidates: &[P],
) -> Result<(), ConfigError> {
    for candidate in candidates {
        let path = match absolutize(provider, candidate.as_ref()) {
            Ok(path) => path,
            Err(e) => {
                tracing::debug!(
                    path = %candidate.as_ref().display(),
                    error = %e,
                    "Ignoring configuration file"
                );
                continue;
            }
        };

        if let Err(e) = provider.metadata(&path) {
            tracing::debug!(path = %path.display(), error = %e, "Ignoring configuration file");
            continue;
        }
        tracing::debug!(path = %path.display(), %stage, "Found LDAP configuration file");

        let reader = provider
            .open(&path)
            .map_err(|source| ConfigError::FileOpen {
                stage,
                path: path.clone(),
                source,
            })?;

        for option in FileOptions::new(reader, path.clone()) {
            let option = option.map_err(|source| ConfigError::FileRead {
                stage,
                path: path.clone(),
                source,
            })?;
            options.insert(option);
        }
    }
    Ok(())
}
