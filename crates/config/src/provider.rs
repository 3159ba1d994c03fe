//! Access to the process environment and filesystem.
//!
//! Responsibilities:
//! - Define `SourceProvider`, the seam through which loaders read environment
//!   variables, the home and current directories, and configuration files.
//! - Provide `SystemProvider` for the real process and `MemoryProvider` for
//!   tests and embedders that resolve options without touching global state.
//!
//! Does NOT handle:
//! - Parsing file contents (see `loader::parser`).
//! - Deciding which paths to probe (see `loader::builder`).
//!
//! Invariants:
//! - `var` reports presence: a variable set to the empty string is `Some("")`.
//!   A variable whose value is not valid UTF-8 is reported as unset, with a WARN.
//! - `metadata` failing means "skip this candidate"; `open` failing after a
//!   successful `metadata` is a hard error for the caller.

use std::collections::HashMap;
use std::env::VarError;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Cursor};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Source of environment variables, well-known directories and files.
pub trait SourceProvider {
    /// Look up an environment variable.
    fn var(&self, name: &str) -> Option<String>;

    /// The user's home directory, if one can be determined.
    fn home_dir(&self) -> Option<PathBuf>;

    /// The directory relative candidate paths are resolved against.
    fn current_dir(&self) -> io::Result<PathBuf>;

    /// Probe a path for existence and accessibility.
    fn metadata(&self, path: &Path) -> io::Result<()>;

    /// Open a file for buffered, line-by-line reading.
    fn open(&self, path: &Path) -> io::Result<Box<dyn BufRead + '_>>;
}

/// Reads the real process environment and filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemProvider;

impl SourceProvider for SystemProvider {
    fn var(&self, name: &str) -> Option<String> {
        match std::env::var(name) {
            Ok(value) => Some(value),
            Err(VarError::NotPresent) => None,
            Err(VarError::NotUnicode(_)) => {
                tracing::warn!(name, "Ignoring environment variable that is not valid UTF-8");
                None
            }
        }
    }

    fn home_dir(&self) -> Option<PathBuf> {
        directories::BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf())
    }

    fn current_dir(&self) -> io::Result<PathBuf> {
        std::env::current_dir()
    }

    fn metadata(&self, path: &Path) -> io::Result<()> {
        std::fs::metadata(path).map(|_| ())
    }

    fn open(&self, path: &Path) -> io::Result<Box<dyn BufRead + '_>> {
        let file = File::open(path)?;
        Ok(Box::new(BufReader::new(file)))
    }
}

/// In-memory environment and filesystem.
///
/// Records every path passed to `metadata`, so callers can assert which
/// candidates were probed.
#[derive(Debug, Default)]
pub struct MemoryProvider {
    vars: HashMap<String, String>,
    // `None` marks a file that exists but cannot be opened.
    files: HashMap<PathBuf, Option<String>>,
    home: Option<PathBuf>,
    // `None` makes `current_dir` fail with `NotFound`.
    current_dir: Option<PathBuf>,
    probed: Mutex<Vec<PathBuf>>,
}

impl MemoryProvider {
    /// An empty environment with no home directory and `/` as current directory.
    pub fn new() -> Self {
        Self {
            current_dir: Some(PathBuf::from("/")),
            ..Self::default()
        }
    }

    pub fn with_var(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }

    pub fn with_home(mut self, home: impl Into<PathBuf>) -> Self {
        self.home = Some(home.into());
        self
    }

    pub fn with_current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.current_dir = Some(dir.into());
        self
    }

    /// Make `current_dir` fail, as when the working directory was removed.
    pub fn without_current_dir(mut self) -> Self {
        self.current_dir = None;
        self
    }

    /// Add a readable file. Paths should be absolute.
    pub fn with_file(mut self, path: impl Into<PathBuf>, contents: impl Into<String>) -> Self {
        self.files.insert(path.into(), Some(contents.into()));
        self
    }

    /// Add a file that exists but fails to open with `PermissionDenied`.
    pub fn with_unreadable_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.files.insert(path.into(), None);
        self
    }

    /// Paths probed so far, in order.
    pub fn probed_paths(&self) -> Vec<PathBuf> {
        self.probed.lock().map(|p| p.clone()).unwrap_or_default()
    }
}

impl SourceProvider for MemoryProvider {
    fn var(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }

    fn home_dir(&self) -> Option<PathBuf> {
        self.home.clone()
    }

    fn current_dir(&self) -> io::Result<PathBuf> {
        self.current_dir
            .clone()
            .ok_or_else(|| io::Error::from(io::ErrorKind::NotFound))
    }

    fn metadata(&self, path: &Path) -> io::Result<()> {
        if let Ok(mut probed) = self.probed.lock() {
            probed.push(path.to_path_buf());
        }
        if self.files.contains_key(path) {
            Ok(())
        } else {
            Err(io::Error::from(io::ErrorKind::NotFound))
        }
    }

    fn open(&self, path: &Path) -> io::Result<Box<dyn BufRead + '_>> {
        match self.files.get(path) {
            Some(Some(contents)) => Ok(Box::new(Cursor::new(contents.as_bytes()))),
            Some(None) => Err(io::Error::from(io::ErrorKind::PermissionDenied)),
            None => Err(io::Error::from(io::ErrorKind::NotFound)),
        }
    }
}
