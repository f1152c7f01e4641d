//! Public API for running git.
//!
//! ## Example: Running a command in one repository
//!
//! ```rust,no_run
//! use git_multi::core::Repository;
//! use git_multi::git::{CommandRunner, ProcessRunner};
//!
//! async fn status(repo: &Repository) {
//!     let result = ProcessRunner::git().run(repo, &["status".to_string()]).await;
//!     println!("{}: {}", result.name, result.output);
//! }
//! ```

pub use super::runner::{combine_output, CommandRunner, ExecutionResult, ProcessRunner};
