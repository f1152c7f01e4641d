//! # git-multi
//!
//! `git-multi` runs a single git command in every repository found below a
//! root directory, in parallel, and reports which repositories succeeded and
//! which failed. It powers the `git-multi` CLI tool.
//!
//! ## Core Features
//!
//! - **Discovery**: Depth-first scan with name and path exclusions, skipping
//!   hidden directories and never descending into a repository.
//! - **Bounded Fan-out**: One task per repository, optionally capped by a
//!   permit pool.
//! - **Fail-fast**: The first failure cancels queued work and kills in-flight
//!   commands.
//! - **Reporting**: Results printed in discovery order with a final summary.
//!
//! ## Example
//!
//! ```rust,no_run
//! use git_multi::core::{find_repos_from_path, ExclusionSet};
//!
//! let repos = find_repos_from_path(".", &ExclusionSet::with_defaults()).unwrap();
//! for repo in repos {
//!     println!("{}: {}", repo.name, repo.path.display());
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod git;
pub mod utils;
