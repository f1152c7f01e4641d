//! Error taxonomy for configuration, discovery and command execution

use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Fatal problems detected before discovery starts
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("No git command specified")]
    MissingCommand,

    #[error("Directory does not exist: {}", path.display())]
    RootNotFound { path: PathBuf },

    #[error("Not a directory: {}", path.display())]
    RootNotDirectory { path: PathBuf },

    #[error("Cannot access {}: {source}", path.display())]
    RootUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Fatal problems while walking the directory tree
#[derive(Error, Debug)]
pub enum DiscoveryError {
    #[error("Failed to scan {}: {source}", root.display())]
    Walk {
        root: PathBuf,
        #[source]
        source: ignore::Error,
    },
}

/// Why a command failed in one repository
#[derive(Error, Debug)]
pub enum CommandError {
    #[error("{0}")]
    ExitStatus(ExitStatus),

    #[error("failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
}
