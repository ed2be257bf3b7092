//! Config management use case

use crate::error::{RepodeckError, Result};
use crate::infrastructure::{Config, FileSystemWorkspace, RepoStore};

/// Service for managing registry configuration
pub struct ConfigService {
    workspace: FileSystemWorkspace,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(workspace: FileSystemWorkspace) -> Self {
        ConfigService { workspace }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.workspace.load_config()?;

        match key {
            "store_file" => Ok(config.store_file),
            "date_format" => Ok(config.date_format),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(RepodeckError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: store_file, date_format, created",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.workspace.load_config()?;

        match key {
            "store_file" => {
                Config::validate_store_file(value)?;
                let old_store = self.workspace.store(&config);
                config.store_file = value.trim().to_string();
                let new_store = self.workspace.store(&config);
                // Keep existing records when switching files
                if old_store.path() != new_store.path() && !new_store.path().exists() {
                    new_store.save(&old_store.load()?)?;
                }
            }
            "date_format" => {
                Config::validate_date_format(value)?;
                config.date_format = value.to_string();
            }
            "created" => {
                return Err(RepodeckError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(RepodeckError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: store_file, date_format",
                    key
                )));
            }
        }

        self.workspace.save_config(&config)?;
        tracing::info!(key, value, "updated config");
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.workspace.load_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::init::init;
    use crate::domain::RepoList;
    use chrono::Utc;
    use tempfile::TempDir;

    fn service(temp: &TempDir) -> ConfigService {
        ConfigService::new(init(temp.path()).unwrap())
    }

    #[test]
    fn test_get_defaults() {
        let temp = TempDir::new().unwrap();
        let svc = service(&temp);
        assert_eq!(svc.get("store_file").unwrap(), "repositories.json");
        assert_eq!(svc.get("date_format").unwrap(), "%Y-%m-%d %H:%M");
        assert!(!svc.get("created").unwrap().is_empty());
    }

    #[test]
    fn test_set_date_format() {
        let temp = TempDir::new().unwrap();
        let svc = service(&temp);
        svc.set("date_format", "%d-%m-%Y").unwrap();
        assert_eq!(svc.get("date_format").unwrap(), "%d-%m-%Y");
    }

    #[test]
    fn test_set_invalid_date_format_keeps_old_value() {
        let temp = TempDir::new().unwrap();
        let svc = service(&temp);

        let err = svc.set("date_format", "%Q").unwrap_err();
        assert!(err.to_string().contains("Invalid date_format"));
        assert_eq!(svc.get("date_format").unwrap(), "%Y-%m-%d %H:%M");
    }

    #[test]
    fn test_set_created_is_read_only() {
        let temp = TempDir::new().unwrap();
        let svc = service(&temp);
        assert!(svc.set("created", "2025-01-01T00:00:00Z").is_err());
    }

    #[test]
    fn test_unknown_key() {
        let temp = TempDir::new().unwrap();
        let svc = service(&temp);
        let err = svc.get("colour").unwrap_err();
        assert!(err.to_string().contains("Unknown config key: 'colour'"));
    }

    #[test]
    fn test_switch_store_file_carries_records() {
        let temp = TempDir::new().unwrap();
        let ws = init(temp.path()).unwrap();
        let config = ws.load_config().unwrap();

        let mut list = RepoList::new();
        list.add("https://x/y/a", None, Utc::now()).unwrap();
        ws.store(&config).save(list.records()).unwrap();

        let svc = ConfigService::new(ws.clone());
        svc.set("store_file", "other.json").unwrap();

        let config = ws.load_config().unwrap();
        assert_eq!(config.store_file, "other.json");
        assert_eq!(ws.store(&config).load().unwrap().len(), 1);
    }

    #[test]
    fn test_reject_store_file_with_path() {
        let temp = TempDir::new().unwrap();
        let svc = service(&temp);
        assert!(svc.set("store_file", "../outside.json").is_err());
    }
}
