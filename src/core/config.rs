//! Configuration constants and the per-run configuration

use clap::ArgMatches;
use std::path::PathBuf;

use super::exclude::ExclusionSet;
use crate::cli::{
    ARG_COMMAND, ARG_EXCLUDE, ARG_FAIL_FAST, ARG_NO_COLOR, ARG_PATH, ARG_VERBOSE, ARG_WORKERS,
};
use crate::error::ConfigError;
use crate::utils::colors_enabled;

// Environment
pub const ROOT_PATH_ENV: &str = "GMULTI_PATH";
pub const LOG_FILTER_ENV: &str = "GMULTI_LOG";
pub const DEFAULT_LOG_FILTER: &str = "warn";

// Git
pub const GIT_EXECUTABLE: &str = "git";
pub const GIT_METADATA_DIR: &str = ".git";

// Directories excluded from every scan, merged with --exclude
pub const DEFAULT_EXCLUDES: &[&str] = &[
    "vendor",
    "node_modules",
    ".idea",
    ".vscode",
    "bin",
    "build",
    "dist",
];

// UI Constants
pub const SCANNING_MESSAGE: &str = "Discovering git repositories...";
pub const NO_REPOS_MESSAGE: &str = "No git repositories found";
pub const FAIL_FAST_MESSAGE: &str = "Fail-fast enabled, stopping execution";
pub const PROGRESS_TEMPLATE: &str = "{spinner} {pos}/{len} {wide_msg}";
pub const PROGRESS_TICK_MS: u64 = 120;

// Display formatting constants
pub const SUMMARY_RULE_WIDTH: usize = 80;
pub const PATH_DISPLAY_WIDTH: usize = 40;
pub const OUTPUT_INDENT: &str = "   ";

// Repository discovery configuration
pub const ESTIMATED_REPO_COUNT: usize = 50; // Pre-allocation hint for collections

/// Everything a single run needs, read-only once built
#[derive(Debug, Clone)]
pub struct RunConfiguration {
    /// Directory scanned for repositories
    pub root: PathBuf,
    /// Built-in exclusions merged with --exclude
    pub excludes: ExclusionSet,
    /// Concurrency cap, 0 means unbounded
    pub workers: usize,
    /// Show full output and error detail for every repository
    pub verbose: bool,
    /// Cancel the run on the first failure
    pub fail_fast: bool,
    /// Emit ANSI colors
    pub color: bool,
    /// Arguments passed verbatim to git
    pub command: Vec<String>,
}

impl RunConfiguration {
    /// Creates a configuration for `command` rooted at the current directory
    pub fn new(command: Vec<String>) -> Self {
        Self {
            root: PathBuf::from("."),
            excludes: ExclusionSet::with_defaults(),
            workers: 0,
            verbose: false,
            fail_fast: false,
            color: false,
            command,
        }
    }

    /// Builds the configuration from parsed command-line arguments
    ///
    /// The root comes from `--path`, then `GMULTI_PATH`, then the current directory.
    pub fn from_matches(matches: &ArgMatches) -> Result<Self, ConfigError> {
        let command: Vec<String> = matches
            .get_many::<String>(ARG_COMMAND)
            .map(|values| values.cloned().collect())
            .unwrap_or_default();
        if command.is_empty() {
            return Err(ConfigError::MissingCommand);
        }

        let root = resolve_root(
            matches.get_one::<PathBuf>(ARG_PATH).cloned(),
            std::env::var_os(ROOT_PATH_ENV).map(PathBuf::from),
        );

        let mut excludes = ExclusionSet::with_defaults();
        if let Some(list) = matches.get_one::<String>(ARG_EXCLUDE) {
            excludes.extend_from_list(list);
        }

        Ok(Self {
            root,
            excludes,
            workers: matches.get_one::<usize>(ARG_WORKERS).copied().unwrap_or(0),
            verbose: matches.get_flag(ARG_VERBOSE),
            fail_fast: matches.get_flag(ARG_FAIL_FAST),
            color: !matches.get_flag(ARG_NO_COLOR) && colors_enabled(),
            command,
        })
    }

    /// Checks that the root exists and is a directory
    pub fn validate(&self) -> Result<(), ConfigError> {
        match std::fs::metadata(&self.root) {
            Ok(metadata) if metadata.is_dir() => Ok(()),
            Ok(_) => Err(ConfigError::RootNotDirectory {
                path: self.root.clone(),
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(ConfigError::RootNotFound {
                path: self.root.clone(),
            }),
            Err(source) => Err(ConfigError::RootUnreadable {
                path: self.root.clone(),
                source,
            }),
        }
    }
}

/// Picks the scan root: explicit flag, then environment, then "."
fn resolve_root(flag: Option<PathBuf>, env: Option<PathBuf>) -> PathBuf {
    flag.filter(|p| !p.as_os_str().is_empty())
        .or_else(|| env.filter(|p| !p.as_os_str().is_empty()))
        .unwrap_or_else(|| PathBuf::from("."))
}
