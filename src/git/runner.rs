//! Running one command in one repository

use async_trait::async_trait;
use std::path::PathBuf;
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

use crate::core::{Repository, GIT_EXECUTABLE};
use crate::error::CommandError;

/// Outcome of running the command in a single repository
#[derive(Debug)]
pub struct ExecutionResult {
    pub path: PathBuf,
    pub name: String,
    pub success: bool,
    /// stdout followed by stderr, trimmed
    pub output: String,
    pub error: Option<CommandError>,
}

impl ExecutionResult {
    pub fn succeeded(repo: &Repository, output: impl Into<String>) -> Self {
        Self {
            path: repo.path.clone(),
            name: repo.name.clone(),
            success: true,
            output: output.into(),
            error: None,
        }
    }

    pub fn failed(repo: &Repository, output: impl Into<String>, error: CommandError) -> Self {
        Self {
            path: repo.path.clone(),
            name: repo.name.clone(),
            success: false,
            output: output.into(),
            error: Some(error),
        }
    }
}

/// Runs a command inside a repository's working directory
///
/// Implementations never fail outright: every problem is captured in the
/// returned [`ExecutionResult`].
#[async_trait]
pub trait CommandRunner: Send + Sync {
    async fn run(&self, repo: &Repository, args: &[String]) -> ExecutionResult;
}

/// Spawns a real subprocess, `git` unless told otherwise
#[derive(Debug, Clone)]
pub struct ProcessRunner {
    program: String,
}

impl ProcessRunner {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn git() -> Self {
        Self::new(GIT_EXECUTABLE)
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Default for ProcessRunner {
    fn default() -> Self {
        Self::git()
    }
}

#[async_trait]
impl CommandRunner for ProcessRunner {
    async fn run(&self, repo: &Repository, args: &[String]) -> ExecutionResult {
        debug!(repo = %repo.name, program = %self.program, ?args, "running");

        // kill_on_drop lets fail-fast cancel an in-flight command by dropping this future
        let output = Command::new(&self.program)
            .args(args)
            .current_dir(&repo.path)
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .output()
            .await;

        match output {
            Ok(output) => {
                let combined = combine_output(&output.stdout, &output.stderr);
                if output.status.success() {
                    ExecutionResult::succeeded(repo, combined)
                } else {
                    debug!(repo = %repo.name, status = %output.status, "command failed");
                    ExecutionResult::failed(repo, combined, CommandError::ExitStatus(output.status))
                }
            }
            Err(source) => {
                debug!(repo = %repo.name, error = %source, "command did not start");
                ExecutionResult::failed(
                    repo,
                    String::new(),
                    CommandError::Spawn {
                        program: self.program.clone(),
                        source,
                    },
                )
            }
        }
    }
}

/// Joins stdout and stderr with a newline between them when both are present,
/// then trims surrounding whitespace
pub fn combine_output(stdout: &[u8], stderr: &[u8]) -> String {
    let mut combined = String::from_utf8_lossy(stdout).into_owned();
    if !stderr.is_empty() {
        if !combined.is_empty() {
            combined.push('\n');
        }
        combined.push_str(&String::from_utf8_lossy(stderr));
    }
    combined.trim().to_string()
}
