//! Repository discovery

use ignore::{DirEntry, WalkBuilder};
use std::collections::HashMap;
use std::fs;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

use super::config::{ESTIMATED_REPO_COUNT, GIT_METADATA_DIR};
use super::exclude::ExclusionSet;
use crate::error::DiscoveryError;

const UNKNOWN_REPO_NAME: &str = "unknown";

/// A discovered repository root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    /// Display name, the directory name with a numeric suffix for duplicates
    pub name: String,
    /// Path to the working copy
    pub path: PathBuf,
}

impl Repository {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}

/// Check if a .git file (for submodules/worktrees) contains gitdir reference
/// Only reads the first 5 lines
fn is_git_file(path: &Path) -> bool {
    match fs::File::open(path) {
        Ok(file) => BufReader::new(file)
            .lines()
            .take(5)
            .map_while(Result::ok)
            .any(|line| line.trim_start().starts_with("gitdir:")),
        Err(_) => false,
    }
}

/// Returns true if `dir` holds git metadata: a `.git` directory, or a `.git`
/// file pointing at one
pub fn is_repo_root(dir: &Path) -> bool {
    let metadata_path = dir.join(GIT_METADATA_DIR);
    match fs::metadata(&metadata_path) {
        Ok(metadata) if metadata.is_dir() => true,
        Ok(metadata) if metadata.is_file() => is_git_file(&metadata_path),
        _ => false,
    }
}

/// Decides whether the walker should yield and descend into `entry`
fn keep_entry(entry: &DirEntry, root: &Path, excludes: &ExclusionSet) -> bool {
    if entry.depth() == 0 {
        return true;
    }

    if !entry.file_type().is_some_and(|ft| ft.is_dir()) {
        return false;
    }

    let name = entry.file_name().to_string_lossy();
    if name.starts_with('.') {
        return false;
    }

    let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
    if excludes.is_excluded(&name, relative) {
        trace!(path = %entry.path().display(), "excluded");
        return false;
    }

    // Never descend into a repository; the parent was already recorded
    if entry.depth() > 1 && entry.path().parent().is_some_and(is_repo_root) {
        return false;
    }

    true
}

/// Walks `root` depth-first and returns every repository root below it
///
/// Siblings are visited in file-name order, so the result is stable for an
/// unchanged tree. Hidden and excluded directories are pruned with their whole
/// subtree, and a repository's own subdirectories are never searched, so
/// nested repositories are not reported. The root itself is never reported.
///
/// Any traversal error aborts the scan.
pub fn find_repos_from_path(
    root: impl AsRef<Path>,
    excludes: &ExclusionSet,
) -> Result<Vec<Repository>, DiscoveryError> {
    let root = root.as_ref();
    let filter_root = root.to_path_buf();
    let filter_excludes = excludes.clone();

    let walker = WalkBuilder::new(root)
        .standard_filters(false) // Exclusions are ours, not .gitignore's
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .filter_entry(move |entry| keep_entry(entry, &filter_root, &filter_excludes))
        .build();

    let mut repositories = Vec::with_capacity(ESTIMATED_REPO_COUNT);
    let mut name_counts: HashMap<String, usize> = HashMap::new();

    for entry in walker {
        let entry = entry.map_err(|source| DiscoveryError::Walk {
            root: root.to_path_buf(),
            source,
        })?;

        if entry.depth() == 0 || !is_repo_root(entry.path()) {
            continue;
        }

        let base_name = entry
            .path()
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(UNKNOWN_REPO_NAME)
            .to_string();

        // Handle duplicate names by adding a suffix
        let count = name_counts.entry(base_name.clone()).or_insert(0);
        *count += 1;
        let name = if *count > 1 {
            format!("{base_name}-{count}")
        } else {
            base_name
        };

        debug!(repo = %name, path = %entry.path().display(), "found repository");
        repositories.push(Repository::new(name, entry.into_path()));
    }

    Ok(repositories)
}
