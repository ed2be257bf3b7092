//! Persistent slot holding the serialized repository list

use crate::domain::RepoRecord;
use crate::error::{RepodeckError, Result};
use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

/// Key-value slot the repository list is serialized into
pub trait RepoStore {
    /// Read all records; an absent slot yields an empty list
    fn load(&self) -> Result<Vec<RepoRecord>>;

    /// Replace the slot contents with the given records
    fn save(&self, records: &[RepoRecord]) -> Result<()>;
}

impl<S: RepoStore + ?Sized> RepoStore for &S {
    fn load(&self) -> Result<Vec<RepoRecord>> {
        (**self).load()
    }

    fn save(&self, records: &[RepoRecord]) -> Result<()> {
        (**self).save(records)
    }
}

/// JSON array stored in a single file
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: PathBuf) -> Self {
        JsonFileStore { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RepoStore for JsonFileStore {
    fn load(&self) -> Result<Vec<RepoRecord>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "store file missing, starting empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(RepodeckError::Io(e)),
        };

        if contents.trim().is_empty() {
            return Ok(Vec::new());
        }

        let records: Vec<RepoRecord> = serde_json::from_str(&contents)?;
        tracing::debug!(path = %self.path.display(), count = records.len(), "loaded repositories");
        Ok(records)
    }

    fn save(&self, records: &[RepoRecord]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(records)?;
        fs::write(&self.path, json)?;
        tracing::debug!(path = %self.path.display(), count = records.len(), "saved repositories");
        Ok(())
    }
}

/// In-process slot holding the serialized JSON text
#[derive(Debug, Default)]
pub struct MemoryStore {
    slot: RefCell<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore::default()
    }

    /// Start from raw slot contents
    pub fn with_contents(json: impl Into<String>) -> Self {
        MemoryStore {
            slot: RefCell::new(Some(json.into())),
        }
    }

    /// Current raw slot contents
    pub fn contents(&self) -> Option<String> {
        self.slot.borrow().clone()
    }
}

impl RepoStore for MemoryStore {
    fn load(&self) -> Result<Vec<RepoRecord>> {
        match self.slot.borrow().as_deref() {
            Some(json) => Ok(serde_json::from_str(json)?),
            None => Ok(Vec::new()),
        }
    }

    fn save(&self, records: &[RepoRecord]) -> Result<()> {
        let json = serde_json::to_string(records)?;
        *self.slot.borrow_mut() = Some(json);
        Ok(())
    }
}
