//! Streaming parser for `ldap.conf(5)` files.
//!
//! Responsibilities:
//! - Turn a buffered reader into a lazy sequence of `RawOption`s, one per
//!   meaningful line, in file order.
//!
//! Does NOT handle:
//! - Opening files or deciding which files to read (see `files`).
//! - Merging options into a store.
//!
//! Invariants:
//! - One line is read per `next()`; nothing is buffered beyond the current line.
//! - Only ASCII whitespace separates or surrounds fields.
//! - Blank lines and lines whose first non-whitespace character is `#` are ignored.
//! - Single-token lines are skipped with a WARN naming the file and line number,
//!   never the line contents.
//! - The first read error is yielded once, then the iterator is exhausted.

use std::io::{self, BufRead, Lines};
use std::path::PathBuf;

use crate::types::{Origin, RawOption};

/// Classification of a single configuration line.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Line<'a> {
    Ignored,
    Option { key: &'a str, value: &'a str },
    Malformed,
}

/// Split a line at its first run of ASCII whitespace.
pub(crate) fn classify(line: &str) -> Line<'_> {
    let line = line.trim_matches(|c: char| c.is_ascii_whitespace());
    if line.is_empty() || line.starts_with('#') {
        return Line::Ignored;
    }
    match line.find(|c: char| c.is_ascii_whitespace()) {
        Some(idx) => Line::Option {
            key: &line[..idx],
            value: line[idx..].trim_start_matches(|c: char| c.is_ascii_whitespace()),
        },
        None => Line::Malformed,
    }
}

/// Lazy, single-pass iterator over the options of one file.
///
/// Options carry `Origin::File` with the path given at construction.
pub struct FileOptions<R> {
    lines: Lines<R>,
    path: PathBuf,
    line_number: usize,
    done: bool,
}

impl<R: BufRead> FileOptions<R> {
    pub fn new(reader: R, path: impl Into<PathBuf>) -> Self {
        Self {
            lines: reader.lines(),
            path: path.into(),
            line_number: 0,
            done: false,
        }
    }
}

impl<R: BufRead> Iterator for FileOptions<R> {
    type Item = io::Result<RawOption>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
            };
            self.line_number += 1;

            match classify(&line) {
                Line::Ignored => continue,
                Line::Malformed => {
                    tracing::warn!(
                        path = %self.path.display(),
                        line = self.line_number,
                        "Ignoring LDAP configuration line without a value"
                    );
                    continue;
                }
                Line::Option { key, value } => {
                    return Some(Ok(RawOption::new(
                        key,
                        value,
                        Origin::File(self.path.clone()),
                    )));
                }
            }
        }
    }
}
