//! User-facing notifications produced by repository operations

use crate::error::RepodeckError;
use std::fmt;

const MASTER_WARNING_TITLE: &str = "Warning: Modifying Master Repository";
const MASTER_WARNING_DESCRIPTION: &str =
    "Are you sure you want to modify the master repository? This action cannot be undone.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Warning,
    Error,
}

/// A transient message describing the result of an operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub severity: Severity,
    pub title: String,
    pub description: String,
}

impl Notification {
    pub fn success(description: impl Into<String>) -> Self {
        Notification {
            severity: Severity::Success,
            title: "Success".to_string(),
            description: description.into(),
        }
    }

    pub fn error(description: impl Into<String>) -> Self {
        Notification {
            severity: Severity::Error,
            title: "Error".to_string(),
            description: description.into(),
        }
    }

    /// Error notification for a failed operation
    pub fn from_error(err: &RepodeckError) -> Self {
        Notification::error(err.to_string())
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title, self.description)
    }
}

/// Confirmation prompt raised when deleting the master repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MasterWarning {
    pub title: &'static str,
    pub description: &'static str,
}

impl Default for MasterWarning {
    fn default() -> Self {
        MasterWarning {
            title: MASTER_WARNING_TITLE,
            description: MASTER_WARNING_DESCRIPTION,
        }
    }
}

impl MasterWarning {
    pub fn to_notification(&self) -> Notification {
        Notification {
            severity: Severity::Warning,
            title: self.title.to_string(),
            description: self.description.to_string(),
        }
    }
}
