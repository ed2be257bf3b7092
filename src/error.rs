//! Error types for repodeck

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for repodeck
#[derive(Debug, Error)]
pub enum RepodeckError {
    #[error("Not a repodeck directory: {0}")]
    NotRepodeckDirectory(PathBuf),

    #[error("Please enter a repository URL")]
    MissingUrl,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Repository store error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl RepodeckError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            RepodeckError::NotRepodeckDirectory(_) => 2,
            RepodeckError::MissingUrl => 3,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            RepodeckError::NotRepodeckDirectory(path) => {
                format!(
                    "Not a repodeck directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'repodeck init' in this directory to start a registry\n\
                    • Navigate to an existing repodeck directory\n\
                    • Set REPODECK_ROOT environment variable to your registry path",
                    path.display()
                )
            }
            RepodeckError::MissingUrl => {
                "Please enter a repository URL\n\n\
                Example:\n\
                repodeck add https://github.com/username/repo --label 'My Project'"
                    .to_string()
            }
            RepodeckError::Json(err) => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • The repository list must be a JSON array of records\n\
                    • Check .repodeck/config.toml for the 'store_file' in use",
                    err
                )
            }
            RepodeckError::Config(msg) => {
                if msg.contains("Invalid date_format") {
                    format!(
                        "{}\n\n\
                        Use strftime specifiers such as %Y %m %d %H %M\n\
                        Example: repodeck config date_format '%Y-%m-%d %H:%M'",
                        msg
                    )
                } else if msg.contains("Unknown config key") {
                    format!(
                        "{}\n\n\
                        Example: repodeck config date_format '%d-%m-%Y %H:%M'",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using RepodeckError
pub type Result<T> = std::result::Result<T, RepodeckError>;
