//! Registry directory discovery and layout

use crate::error::{RepodeckError, Result};
use crate::infrastructure::config::REPODECK_DIR;
use crate::infrastructure::{Config, JsonFileStore};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable overriding registry discovery
pub const ROOT_ENV: &str = "REPODECK_ROOT";

/// A directory holding a .repodeck/ registry
#[derive(Debug, Clone)]
pub struct FileSystemWorkspace {
    pub root: PathBuf,
}

impl FileSystemWorkspace {
    /// Create a workspace with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemWorkspace { root }
    }

    /// Find the registry root.
    /// REPODECK_ROOT wins when set; otherwise walk up from the current directory.
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var(ROOT_ENV) {
            let path = PathBuf::from(root_path);
            if Self::has_repodeck_dir(&path) {
                return Ok(FileSystemWorkspace::new(path));
            }
            return Err(RepodeckError::Config(format!(
                "{} is set to '{}' but no .repodeck directory found. \
                Run 'repodeck init' in that directory or unset {}.",
                ROOT_ENV,
                path.display(),
                ROOT_ENV
            )));
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Walk up from `start` until a directory containing .repodeck/ is found
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_repodeck_dir(&current) {
                tracing::debug!(root = %current.display(), "found registry");
                return Ok(FileSystemWorkspace::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Err(RepodeckError::NotRepodeckDirectory(start.to_path_buf())),
            }
        }
    }

    fn has_repodeck_dir(path: &Path) -> bool {
        path.join(REPODECK_DIR).is_dir()
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn is_initialized(&self) -> bool {
        Self::has_repodeck_dir(&self.root)
    }

    /// Create the .repodeck directory; fails if it already exists
    pub fn initialize(&self) -> Result<()> {
        let repodeck_dir = self.root.join(REPODECK_DIR);

        if repodeck_dir.exists() {
            return Err(RepodeckError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&repodeck_dir)?;
        Ok(())
    }

    pub fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    pub fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    /// The repository list store selected by the config
    pub fn store(&self, config: &Config) -> JsonFileStore {
        JsonFileStore::new(self.root.join(REPODECK_DIR).join(&config.store_file))
    }
}
