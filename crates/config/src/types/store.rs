//! The resolved options store.
//!
//! Responsibilities:
//! - Map canonical option names to their most recently applied `RawOption`.
//! - Provide read helpers for callers that need provenance or enumeration.
//!
//! Does NOT handle:
//! - Deciding which source runs when (see `loader::builder`).
//! - Type coercion and diagnostics on read (see `accessors`).
//!
//! Invariants:
//! - Keys are unique; `insert` overwrites and keeps no history.
//! - Lookups upper-case the requested name.

use std::collections::HashMap;

use super::option::RawOption;

/// Options resolved from defaults, files and environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionsMap {
    options: HashMap<String, RawOption>,
}

impl OptionsMap {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an option, replacing any previous value for its key.
    ///
    /// Returns the superseded option, if any.
    pub fn insert(&mut self, option: RawOption) -> Option<RawOption> {
        self.options.insert(option.key.clone(), option)
    }

    /// Look up an option by name.
    pub fn get(&self, name: &str) -> Option<&RawOption> {
        self.options.get(&name.to_uppercase())
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Iterate over options sorted by key.
    pub fn iter(&self) -> impl Iterator<Item = &RawOption> {
        let mut options: Vec<&RawOption> = self.options.values().collect();
        options.sort_by(|a, b| a.key.cmp(&b.key));
        options.into_iter()
    }
}

impl Extend<RawOption> for OptionsMap {
    fn extend<I: IntoIterator<Item = RawOption>>(&mut self, iter: I) {
        for option in iter {
            self.insert(option);
        }
    }
}

impl FromIterator<RawOption> for OptionsMap {
    fn from_iter<I: IntoIterator<Item = RawOption>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}
