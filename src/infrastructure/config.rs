//! Configuration management

use crate::error::{RepodeckError, Result};
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const REPODECK_DIR: &str = ".repodeck";
const CONFIG_FILE: &str = "config.toml";

fn default_store_file() -> String {
    "repositories.json".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d %H:%M".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// File name of the repository list inside .repodeck/
    #[serde(default = "default_store_file")]
    pub store_file: String,
    /// strftime pattern used to show last-synced times
    #[serde(default = "default_date_format")]
    pub date_format: String,
    pub created: DateTime<Utc>,
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Config {
            store_file: default_store_file(),
            date_format: default_date_format(),
            created: Utc::now(),
        }
    }

    /// Load config from .repodeck/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(REPODECK_DIR).join(CONFIG_FILE);

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                RepodeckError::NotRepodeckDirectory(path.to_path_buf())
            } else {
                RepodeckError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| RepodeckError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .repodeck/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let repodeck_dir = path.join(REPODECK_DIR);
        let config_path = repodeck_dir.join(CONFIG_FILE);

        if !repodeck_dir.exists() {
            fs::create_dir(&repodeck_dir)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Reject empty patterns and unknown strftime specifiers
    pub fn validate_date_format(pattern: &str) -> Result<()> {
        if pattern.trim().is_empty() {
            return Err(RepodeckError::Config("date_format cannot be empty".to_string()));
        }
        if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
            return Err(RepodeckError::Config(format!("Invalid date_format: '{}'", pattern)));
        }
        Ok(())
    }

    /// Reject store file names that would escape .repodeck/
    pub fn validate_store_file(name: &str) -> Result<()> {
        let trimmed = name.trim();
        if trimmed.is_empty()
            || trimmed.contains('/')
            || trimmed.contains('\\')
            || trimmed == "."
            || trimmed == ".."
            || trimmed == CONFIG_FILE
        {
            return Err(RepodeckError::Config(format!(
                "Invalid store file name: '{}'. Use a plain file name such as repositories.json",
                name
            )));
        }
        Ok(())
    }
}
