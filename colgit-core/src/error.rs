//! Error types for ColGit.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur in ColGit operations.
#[derive(Error, Debug)]
pub enum ColGitError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Corrupt config file {}: {reason}", path.display())]
    CorruptConfig { path: PathBuf, reason: String },

    #[error("Corrupt reminders file {}: {reason}", path.display())]
    CorruptReminders { path: PathBuf, reason: String },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid name '{name}': {reason}")]
    InvalidName { name: String, reason: &'static str },

    #[error("Commit '{0}' already exists")]
    DuplicateCommit(String),

    #[error("Branch '{0}' already exists")]
    DuplicateBranch(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for ColGit operations.
pub type ColGitResult<T> = Result<T, ColGitError>;
