//! repodeck - Terminal Git repository registry
//!
//! Keeps an ordered list of repository records in a `.repodeck/` directory.
//! The first repository added becomes the master record and is protected
//! from deletion. Syncing refreshes a record's timestamp.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;

pub use error::RepodeckError;
