//! Common test utilities and helpers
#![allow(dead_code, unused_imports)]

pub mod git;

pub use self::git::{
    create_branch, create_multiple_repos, create_test_commit, is_git_available, setup_git_repo,
};

use std::path::{Path, PathBuf};

/// Creates a directory that discovery treats as a repository, without git
pub fn make_fake_repo(path: &Path) -> PathBuf {
    std::fs::create_dir_all(path.join(".git")).expect("Failed to create .git directory");
    path.to_path_buf()
}

/// Creates a plain directory with its parents
pub fn make_dir(path: &Path) -> PathBuf {
    std::fs::create_dir_all(path).expect("Failed to create directory");
    path.to_path_buf()
}
