//! Public API for the core module.
//!
//! This module provides the stable public API for core functionality including:
//! - Run configuration and exclusion rules
//! - Repository discovery
//! - Parallel execution
//! - Result reporting and statistics
//!
//! Internal implementation details are not exposed through this API.

// Configuration
pub use super::config::{
    RunConfiguration, DEFAULT_EXCLUDES, DEFAULT_LOG_FILTER, GIT_EXECUTABLE, LOG_FILTER_ENV,
    NO_REPOS_MESSAGE, ROOT_PATH_ENV, SCANNING_MESSAGE,
};
pub use super::exclude::ExclusionSet;

// Discovery
pub use super::discovery::{find_repos_from_path, is_repo_root, Repository};

// Execution
pub use super::executor::{execute_in_parallel, Execution, ExecutorOptions};

// Reporting
pub use super::report::{report_results, write_summary};
pub use super::stats::RunStatistics;

// Internal helpers for command modules
pub(crate) use super::progress::create_progress_bar;
