//! Command-line definition

use clap::{value_parser, Arg, ArgAction, Command};
use std::path::PathBuf;

pub const ARG_COMMAND: &str = "command";
pub const ARG_PATH: &str = "path";
pub const ARG_EXCLUDE: &str = "exclude";
pub const ARG_WORKERS: &str = "workers";
pub const ARG_VERBOSE: &str = "verbose";
pub const ARG_FAIL_FAST: &str = "fail-fast";
pub const ARG_NO_COLOR: &str = "no-color";

const EXAMPLES: &str = "\
Examples:
  git-multi checkout develop
  git-multi pull
  git-multi status
  git-multi fetch --all
  git-multi --path=/custom/path/to/workspace checkout develop
  git-multi --exclude=\"tools,game_proto\" checkout FA-279930
  git-multi --workers=5 pull
  git-multi --verbose status";

/// Builds the clap command for `git-multi`
///
/// Everything from the first positional argument on is the git command, so
/// `git-multi fetch --all` hands `--all` to git rather than parsing it here.
pub fn build_cli() -> Command {
    Command::new("git-multi")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Execute git commands across multiple repositories")
        .override_usage("git-multi [options] <git-command> [git-args...]")
        .after_help(EXAMPLES)
        .arg(
            Arg::new(ARG_PATH)
                .long("path")
                .value_name("DIR")
                .value_parser(value_parser!(PathBuf))
                .help("Directory containing the repositories (defaults to GMULTI_PATH, then the current directory)"),
        )
        .arg(
            Arg::new(ARG_EXCLUDE)
                .long("exclude")
                .value_name("NAMES")
                .help("Comma-separated list of directories to exclude"),
        )
        .arg(
            Arg::new(ARG_WORKERS)
                .long("workers")
                .value_name("N")
                .value_parser(value_parser!(usize))
                .default_value("0")
                .help("Limit parallel workers (0 = unlimited)"),
        )
        .arg(
            Arg::new(ARG_VERBOSE)
                .long("verbose")
                .help("Show full git output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new(ARG_FAIL_FAST)
                .long("fail-fast")
                .help("Stop on first failure")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new(ARG_NO_COLOR)
                .long("no-color")
                .help("Disable colored output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new(ARG_COMMAND)
                .value_name("GIT_ARGS")
                .num_args(1..)
                .trailing_var_arg(true)
                .allow_hyphen_values(true)
                .help("Git command and its arguments"),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command_of(matches: &clap::ArgMatches) -> Vec<String> {
        matches
            .get_many::<String>(ARG_COMMAND)
            .map(|values| values.cloned().collect())
            .unwrap_or_default()
    }

    #[test]
    fn test_cli_definition_is_valid() {
        build_cli().debug_assert();
    }

    #[test]
    fn test_git_flags_pass_through() {
        let matches = build_cli().get_matches_from(["git-multi", "fetch", "--all", "--prune"]);
        assert_eq!(command_of(&matches), vec!["fetch", "--all", "--prune"]);
        assert!(!matches.get_flag(ARG_VERBOSE));
    }

    #[test]
    fn test_options_after_command_belong_to_git() {
        let matches = build_cli().get_matches_from(["git-multi", "log", "--verbose"]);
        assert_eq!(command_of(&matches), vec!["log", "--verbose"]);
        assert!(!matches.get_flag(ARG_VERBOSE));
    }

    #[test]
    fn test_options_before_command() {
        let matches = build_cli().get_matches_from([
            "git-multi",
            "--verbose",
            "--workers",
            "4",
            "status",
        ]);
        assert!(matches.get_flag(ARG_VERBOSE));
        assert_eq!(matches.get_one::<usize>(ARG_WORKERS), Some(&4));
        assert_eq!(command_of(&matches), vec!["status"]);
    }

    #[test]
    fn test_no_command_parses() {
        let matches = build_cli().get_matches_from(["git-multi"]);
        assert!(command_of(&matches).is_empty());
        assert_eq!(matches.get_one::<usize>(ARG_WORKERS), Some(&0));
    }

    #[test]
    fn test_invalid_workers_rejected() {
        let result = build_cli().try_get_matches_from(["git-multi", "--workers=many", "pull"]);
        assert!(result.is_err());
    }
}
