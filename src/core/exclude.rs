//! Directory exclusion rules used during discovery

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use super::config::DEFAULT_EXCLUDES;

/// Set of directories that discovery never enters
///
/// A plain entry such as `build` matches any directory with exactly that name.
/// An entry containing a path separator such as `tools/legacy` matches the
/// directory at that location relative to the scan root. Matching is by whole
/// path components, so `build` does not exclude `rebuild-tools`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionSet {
    names: BTreeSet<String>,
    paths: BTreeSet<PathBuf>,
}

impl ExclusionSet {
    /// Creates an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a set holding the built-in exclusions
    pub fn with_defaults() -> Self {
        let mut set = Self::new();
        for name in DEFAULT_EXCLUDES {
            set.insert(name);
        }
        set
    }

    /// Adds one entry, ignoring blanks
    pub fn insert(&mut self, entry: &str) {
        let entry = entry.trim().trim_end_matches(['/', '\\']);
        if entry.is_empty() {
            return;
        }
        if entry.contains(['/', '\\']) {
            self.paths.insert(PathBuf::from(entry));
        } else {
            self.names.insert(entry.to_string());
        }
    }

    /// Adds every entry of a comma-separated list such as `"tools, legacy"`
    pub fn extend_from_list(&mut self, list: &str) {
        for entry in list.split(',') {
            self.insert(entry);
        }
    }

    /// Returns true if `entry` was added as a name or a relative path
    pub fn contains(&self, entry: &str) -> bool {
        self.names.contains(entry) || self.paths.contains(Path::new(entry))
    }

    /// Decides whether a directory is excluded
    ///
    /// `relative` is the directory's path relative to the scan root.
    pub fn is_excluded(&self, name: &str, relative: &Path) -> bool {
        self.names.contains(name) || self.paths.iter().any(|prefix| relative.starts_with(prefix))
    }

    pub fn len(&self) -> usize {
        self.names.len() + self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
