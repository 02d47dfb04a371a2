//! Reverse lookup from hash values to known plaintext strings
//!
//! The word list is a UTF-8 text file with one candidate string per line.
//! It's read the first time a lookup happens and then kept for the life of
//! the registry.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use super::hash_str;
use crate::error::Error;

/// Default file name of the word list
pub const PLAINTEXT_FILE_NAME: &str = "nlg_hash_plaintext_data.txt";

/// Where the registry's strings come from
#[derive(Debug, Clone)]
enum Source {
    File(PathBuf),
    Lines(Vec<String>),
    Empty,
}

/// Lazily built map from hash value to known plaintext
///
/// Construction is cheap; the word list is loaded on the first
/// [`lookup`](Self::lookup). Concurrent first lookups are serialized by the
/// underlying [`OnceLock`], and no caller ever sees a partially built map.
#[derive(Debug)]
pub struct PlaintextRegistry {
    source: Source,
    table: OnceLock<HashMap<u32, String>>,
}

impl PlaintextRegistry {
    /// Registry backed by a word list file
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self::with_source(Source::File(path.into()))
    }

    /// Registry backed by an in-memory list of candidate strings
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_source(Source::Lines(lines.into_iter().map(Into::into).collect()))
    }

    /// Registry that knows no strings
    pub fn empty() -> Self {
        Self::with_source(Source::Empty)
    }

    fn with_source(source: Source) -> Self {
        Self {
            source,
            table: OnceLock::new(),
        }
    }

    /// Find the known plaintext for a hash value
    pub fn lookup(&self, id: u32) -> Option<&str> {
        self.table().get(&id).map(String::as_str)
    }

    /// Number of distinct hash values known
    pub fn len(&self) -> usize {
        self.table().len()
    }

    /// Check whether the registry knows no strings at all
    pub fn is_empty(&self) -> bool {
        self.table().is_empty()
    }

    /// Get the lookup table, building it on first use
    fn table(&self) -> &HashMap<u32, String> {
        self.table.get_or_init(|| match &self.source {
            Source::File(path) => load_word_list(path),
            Source::Lines(lines) => build_table(lines.iter().map(String::as_str)),
            Source::Empty => HashMap::new(),
        })
    }
}

impl Default for PlaintextRegistry {
    fn default() -> Self {
        Self::empty()
    }
}

/// Read a word list, degrading to an empty table if it can't be read
fn load_word_list(path: &Path) -> HashMap<u32, String> {
    if !path.is_file() {
        let err = Error::MissingResource {
            path: path.to_path_buf(),
        };
        tracing::warn!("{err}; hash values will be shown as hex");
        return HashMap::new();
    }

    match std::fs::read_to_string(path) {
        Ok(contents) => {
            let table = build_table(contents.lines());
            tracing::debug!(
                "Loaded {} plaintext strings from {}",
                table.len(),
                path.display()
            );
            table
        }
        Err(e) => {
            tracing::warn!("Couldn't read plaintext word list {}: {e}", path.display());
            HashMap::new()
        }
    }
}

/// Hash every line; later lines win on collisions
fn build_table<'a>(lines: impl Iterator<Item = &'a str>) -> HashMap<u32, String> {
    let mut table = HashMap::new();
    for line in lines {
        match hash_str(line) {
            Ok(h) => {
                table.insert(h, line.to_string());
            }
            Err(e) => tracing::debug!("Skipping plaintext {line:?}: {e}"),
        }
    }
    table
}
