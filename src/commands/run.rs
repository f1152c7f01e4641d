//! Run command implementation
//!
//! This module wires the pieces together: validate the configuration,
//! discover repositories, run the git command in all of them, then print the
//! report and summary.

use anyhow::{Context, Result};
use std::io::Write;
use std::sync::Arc;
use tracing::info;

use crate::core::{
    create_progress_bar, execute_in_parallel, find_repos_from_path, report_results,
    write_summary, ExecutorOptions, Repository, RunConfiguration, RunStatistics,
    NO_REPOS_MESSAGE, SCANNING_MESSAGE,
};
use crate::core::config::{FAIL_FAST_MESSAGE, GIT_EXECUTABLE, PATH_DISPLAY_WIDTH};
use crate::git::{CommandRunner, ProcessRunner};
use crate::utils::{set_terminal_title, set_terminal_title_and_flush, shorten_path, Palette};

const RUNNING_TITLE: &str = "🚀 git-multi";
const DONE_TITLE: &str = "✅ git-multi";

/// Handles a run with the real `git` executable
pub async fn handle_run_command(config: RunConfiguration) -> Result<RunStatistics> {
    handle_run_command_with(Arc::new(ProcessRunner::git()), config).await
}

/// Handles a run with the given command runner
///
/// Configuration and discovery problems are returned as errors before anything
/// is executed. Per-repository failures are reported and counted in the
/// returned statistics; callers decide the exit status from them.
pub async fn handle_run_command_with<R>(
    runner: Arc<R>,
    config: RunConfiguration,
) -> Result<RunStatistics>
where
    R: CommandRunner + ?Sized + 'static,
{
    config.validate()?;

    let palette = Palette::new(config.color);
    set_terminal_title(RUNNING_TITLE);

    println!("{}", palette.blue(SCANNING_MESSAGE));
    let repos = discover(&config).await?;

    if repos.is_empty() {
        println!("{}", palette.yellow(NO_REPOS_MESSAGE));
        set_terminal_title_and_flush(DONE_TITLE);
        return Ok(RunStatistics::new());
    }

    let repo_word = if repos.len() == 1 { "repository" } else { "repositories" };
    println!("{}", palette.blue(&format!("Found {} {repo_word}", repos.len())));
    if config.verbose {
        print_repository_list(&repos, &palette);
    }
    println!();

    println!(
        "{}",
        palette.blue(&format!("Executing: {GIT_EXECUTABLE} {}", config.command.join(" ")))
    );
    println!();

    let progress = create_progress_bar(repos.len())?;
    let execution = execute_in_parallel(
        runner,
        &repos,
        &config.command,
        ExecutorOptions::new(config.workers, config.fail_fast),
        &progress,
    )
    .await;
    progress.finish_and_clear();

    if execution.aborted {
        eprintln!();
        eprintln!("{}", palette.red(FAIL_FAST_MESSAGE));
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let mut stats = report_results(execution.completed(), config.verbose, &palette, &mut out)
        .context("Failed to write report")?;
    stats.skipped = execution.skipped();
    write_summary(&stats, &palette, &mut out).context("Failed to write summary")?;
    out.flush()?;
    drop(out);

    info!(
        succeeded = stats.succeeded,
        failed = stats.failed,
        skipped = stats.skipped,
        "run finished"
    );
    set_terminal_title_and_flush(DONE_TITLE);

    Ok(stats)
}

/// Runs discovery on a blocking thread
async fn discover(config: &RunConfiguration) -> Result<Vec<Repository>> {
    let root = config.root.clone();
    let excludes = config.excludes.clone();

    let repos = tokio::task::spawn_blocking(move || find_repos_from_path(&root, &excludes))
        .await
        .context("Repository discovery task failed")?
        .context("Failed to discover repositories")?;

    Ok(repos)
}

fn print_repository_list(repos: &[Repository], palette: &Palette) {
    let width = repos.iter().map(|r| r.name.len()).max().unwrap_or(0);
    for repo in repos {
        println!(
            "{}",
            palette.gray(&format!(
                "   {:width$}  {}",
                repo.name,
                shorten_path(&repo.path, PATH_DISPLAY_WIDTH)
            ))
        );
    }
}
