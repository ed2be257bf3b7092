//! Initialize registry use case

use crate::error::Result;
use crate::infrastructure::{Config, FileSystemWorkspace, RepoStore};
use std::fs;
use std::path::Path;

/// Initialize a new registry at the specified path.
pub fn init(path: &Path) -> Result<FileSystemWorkspace> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let workspace = FileSystemWorkspace::new(path.to_path_buf());
    workspace.initialize()?;

    let config = Config::new();
    workspace.save_config(&config)?;

    // Start with an empty list so the slot exists from the beginning
    workspace.store(&config).save(&[])?;

    tracing::info!(root = %path.display(), "initialized registry");
    Ok(workspace)
}
