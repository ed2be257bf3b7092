//! Ordered list of repository records and its invariants

use crate::domain::record::{RepoId, RepoRecord};
use crate::error::{RepodeckError, Result};
use chrono::{DateTime, Utc};

/// Result of a delete request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The record was removed (None if no record had that id)
    Deleted(Option<RepoRecord>),
    /// The target is the master repository; nothing was removed
    ConfirmationRequired,
}

/// Insertion-ordered list of repository records.
///
/// At most one record carries the master flag: the one added while the
/// list was empty. The flag is never handed to another record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepoList {
    records: Vec<RepoRecord>,
}

impl RepoList {
    pub fn new() -> Self {
        RepoList::default()
    }

    /// Wrap records read from a store.
    ///
    /// The single-master rule only covers records added through [`RepoList::add`];
    /// a hand-edited slot with several masters is kept as-is and reported.
    pub fn from_records(records: Vec<RepoRecord>) -> Self {
        let masters = records.iter().filter(|r| r.is_master).count();
        if masters > 1 {
            tracing::warn!(masters, "repository list has more than one master record");
        }
        RepoList { records }
    }

    /// Append a new record; the first record of an empty list becomes master
    pub fn add(
        &mut self,
        url: &str,
        label: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<&RepoRecord> {
        let url = url.trim();
        if url.is_empty() {
            return Err(RepodeckError::MissingUrl);
        }

        let label = label
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::to_string);

        let record = RepoRecord {
            id: RepoId::generate(),
            url: url.to_string(),
            label,
            is_master: self.records.is_empty(),
            last_synced: Some(now),
            last_commit: None,
        };

        self.records.push(record);
        Ok(&self.records[self.records.len() - 1])
    }

    /// Remove a non-master record
    pub fn delete(&mut self, id: &RepoId) -> DeleteOutcome {
        match self.records.iter().position(|r| &r.id == id) {
            Some(idx) if self.records[idx].is_master => DeleteOutcome::ConfirmationRequired,
            Some(idx) => DeleteOutcome::Deleted(Some(self.records.remove(idx))),
            None => DeleteOutcome::Deleted(None),
        }
    }

    /// Refresh the last-synced time of a record. Returns false if no record matched.
    pub fn sync(&mut self, id: &RepoId, now: DateTime<Utc>) -> bool {
        match self.records.iter_mut().find(|r| &r.id == id) {
            Some(record) => {
                record.last_synced = Some(now);
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: &RepoId) -> Option<&RepoRecord> {
        self.records.iter().find(|r| &r.id == id)
    }

    pub fn master(&self) -> Option<&RepoRecord> {
        self.records.iter().find(|r| r.is_master)
    }

    pub fn records(&self) -> &[RepoRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
