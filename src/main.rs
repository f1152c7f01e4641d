//! git-multi: execute a git command across multiple repositories
//! This tool scans a directory for git repositories and runs the same git
//! command in each of them in parallel.

use std::process::ExitCode;

use git_multi::cli::build_cli;
use git_multi::commands::run::handle_run_command;
use git_multi::core::{RunConfiguration, DEFAULT_LOG_FILTER, LOG_FILTER_ENV};
use git_multi::error::ConfigError;
use git_multi::utils::{colors_enabled, Palette};
use tracing_subscriber::EnvFilter;

/// Sends diagnostics to stderr, filtered by `GMULTI_LOG` (default `warn`)
fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_FILTER_ENV)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    let mut cli = build_cli();
    let matches = cli.get_matches_mut();

    let config = match RunConfiguration::from_matches(&matches) {
        Ok(config) => config,
        Err(ConfigError::MissingCommand) => {
            let palette = Palette::new(colors_enabled());
            println!(
                "{}",
                palette.blue("git-multi - Execute git commands across multiple repositories")
            );
            println!();
            println!("{}", cli.render_help());
            return ExitCode::FAILURE;
        }
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let palette = Palette::new(config.color);
    match handle_run_command(config).await {
        Ok(stats) if stats.all_succeeded() => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("{}", palette.red(&format!("Error: {e:#}")));
            if let Some(ConfigError::RootNotFound { .. }) = e.downcast_ref::<ConfigError>() {
                eprintln!("Use --path flag to specify the correct directory");
            }
            ExitCode::FAILURE
        }
    }
}
