//! Repository list manager use case

use crate::domain::{
    Clock, DeleteOutcome, MasterWarning, Notification, RepoId, RepoList, RepoRecord, SystemClock,
};
use crate::error::Result;
use crate::infrastructure::RepoStore;

/// Answer to the master-repository confirmation prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmationChoice {
    Continue,
    Cancel,
}

/// Result of [`RepoManager::delete`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteResult {
    Deleted(Notification),
    ConfirmationRequired(MasterWarning),
}

/// Owns the repository list and writes it to its store after every change
pub struct RepoManager<S: RepoStore, C: Clock = SystemClock> {
    store: S,
    clock: C,
    list: RepoList,
    pending_confirmation: Option<MasterWarning>,
}

impl<S: RepoStore> RepoManager<S, SystemClock> {
    /// Open a manager using wall-clock time
    pub fn open_with_system_clock(store: S) -> Result<Self> {
        RepoManager::open(store, SystemClock)
    }
}

impl<S: RepoStore, C: Clock> RepoManager<S, C> {
    /// Load the list from `store`
    pub fn open(store: S, clock: C) -> Result<Self> {
        let list = RepoList::from_records(store.load()?);
        Ok(RepoManager {
            store,
            clock,
            list,
            pending_confirmation: None,
        })
    }

    /// Replace the in-memory list with the store contents
    pub fn reload(&mut self) -> Result<()> {
        self.list = RepoList::from_records(self.store.load()?);
        Ok(())
    }

    /// Write the whole list to the store
    pub fn save(&self) -> Result<()> {
        self.store.save(self.list.records())
    }

    /// Append a record. The in-memory list changes only once the store accepted it.
    pub fn add(&mut self, url: &str, label: Option<&str>) -> Result<Notification> {
        let now = self.clock.now();
        let mut next = self.list.clone();
        let record = next
            .add(url, label, now)
            .inspect_err(|e| tracing::warn!(error = %e, "rejected repository"))?
            .clone();

        self.commit(next)?;
        tracing::info!(
            id = %record.id,
            url = %record.url,
            master = record.is_master,
            "added repository"
        );

        let shown = record.label.unwrap_or(record.url);
        Ok(Notification::success(format!("Repository added: {}", shown)))
    }

    /// Delete a record. The master record is never removed here; a
    /// confirmation prompt is raised instead.
    pub fn delete(&mut self, id: &RepoId) -> Result<DeleteResult> {
        let mut next = self.list.clone();
        match next.delete(id) {
            DeleteOutcome::ConfirmationRequired => {
                tracing::warn!(%id, "refusing to delete master repository");
                let warning = MasterWarning::default();
                self.pending_confirmation = Some(warning.clone());
                Ok(DeleteResult::ConfirmationRequired(warning))
            }
            DeleteOutcome::Deleted(removed) => {
                match removed {
                    Some(record) => {
                        self.commit(next)?;
                        tracing::info!(id = %record.id, url = %record.url, "deleted repository");
                    }
                    None => tracing::debug!(%id, "no repository to delete"),
                }
                Ok(DeleteResult::Deleted(Notification::success(
                    "Repository deleted successfully",
                )))
            }
        }
    }

    /// Refresh a record's last-synced time. Unknown ids are ignored.
    pub fn sync(&mut self, id: &RepoId) -> Result<Notification> {
        let now = self.clock.now();
        let mut next = self.list.clone();
        if next.sync(id, now) {
            self.commit(next)?;
            tracing::info!(%id, synced_at = %now, "synced repository");
        } else {
            tracing::debug!(%id, "no repository to sync");
        }
        Ok(Notification::success("Repository synced successfully"))
    }

    /// Save `next` and make it the current list
    fn commit(&mut self, next: RepoList) -> Result<()> {
        self.store.save(next.records())?;
        self.list = next;
        Ok(())
    }

    pub fn list(&self) -> &[RepoRecord] {
        self.list.records()
    }

    pub fn get(&self, id: &RepoId) -> Option<&RepoRecord> {
        self.list.get(id)
    }

    pub fn pending_confirmation(&self) -> Option<&MasterWarning> {
        self.pending_confirmation.as_ref()
    }

    /// Dismiss the master confirmation prompt.
    ///
    /// Both answers only close the prompt; the master record stays in the list.
    pub fn resolve_confirmation(&mut self, choice: ConfirmationChoice) -> Option<MasterWarning> {
        let pending = self.pending_confirmation.take();
        if pending.is_some() {
            tracing::debug!(?choice, "master confirmation dismissed");
        }
        pending
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
