//! Repository record and identifier

use crate::error::{RepodeckError, Result};
use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Write};
use uuid::Uuid;

/// Opaque unique identifier of a repository record
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RepoId(String);

impl RepoId {
    /// Generate a fresh random identifier
    pub fn generate() -> Self {
        RepoId(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RepoId {
    fn from(value: &str) -> Self {
        RepoId(value.to_string())
    }
}

impl From<String> for RepoId {
    fn from(value: String) -> Self {
        RepoId(value)
    }
}

impl fmt::Display for RepoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A registered Git repository
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepoRecord {
    pub id: RepoId,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default)]
    pub is_master: bool,
    #[serde(default, alias = "lastPushed")]
    pub last_synced: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_commit: Option<String>,
}

impl RepoRecord {
    /// Name shown for the record: the label, or the last path segment of the URL
    pub fn display_name(&self) -> &str {
        if let Some(label) = self.label.as_deref() {
            return label;
        }

        self.url
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .filter(|segment| !segment.is_empty())
            .unwrap_or(self.url.as_str())
    }

    /// Render the last-synced time in local time, or "Never"
    pub fn last_synced_display(&self, date_format: &str) -> Result<String> {
        let Some(ts) = self.last_synced else {
            return Ok("Never".to_string());
        };

        let mut out = String::new();
        write!(out, "{}", ts.with_timezone(&Local).format(date_format)).map_err(|_| {
            RepodeckError::Config(format!("Invalid date_format: '{}'", date_format))
        })?;
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn record(url: &str, label: Option<&str>) -> RepoRecord {
        RepoRecord {
            id: RepoId::from("id-1"),
            url: url.to_string(),
            label: label.map(str::to_string),
            is_master: false,
            last_synced: None,
            last_commit: None,
        }
    }

    #[test]
    fn test_generated_ids_are_unique() {
        let a = RepoId::generate();
        let b = RepoId::generate();
        assert_ne!(a, b);
        assert_eq!(a.as_str().len(), 36);
    }

    #[test]
    fn test_display_name_prefers_label() {
        let r = record("https://github.com/user/repo-a", Some("Alpha"));
        assert_eq!(r.display_name(), "Alpha");
    }

    #[test]
    fn test_display_name_falls_back_to_last_segment() {
        let r = record("https://github.com/user/repo-a", None);
        assert_eq!(r.display_name(), "repo-a");

        let r = record("https://github.com/user/repo-b/", None);
        assert_eq!(r.display_name(), "repo-b");
    }

    #[test]
    fn test_display_name_plain_string() {
        let r = record("local", None);
        assert_eq!(r.display_name(), "local");
    }

    #[test]
    fn test_last_synced_never() {
        let r = record("https://x/y/z", None);
        assert_eq!(r.last_synced_display("%Y").unwrap(), "Never");
    }

    #[test]
    fn test_last_synced_formatted() {
        let mut r = record("https://x/y/z", None);
        r.last_synced = Some(Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap());
        assert_eq!(r.last_synced_display("%Y").unwrap(), "2025");
    }

    #[test]
    fn test_last_synced_bad_format_is_error() {
        let mut r = record("https://x/y/z", None);
        r.last_synced = Some(Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap());
        match r.last_synced_display("%Q") {
            Err(RepodeckError::Config(msg)) => assert!(msg.contains("%Q")),
            other => panic!("expected config error, got {:?}", other),
        }
        // Never-synced records don't touch the format
        assert_eq!(record("https://x/y/z", None).last_synced_display("%Q").unwrap(), "Never");
    }

    #[test]
    fn test_reads_last_pushed_from_dashboard_slot() {
        let r: RepoRecord = serde_json::from_str(
            r#"{"id":"1","url":"https://x/y/z","isMaster":true,
                "lastPushed":"2024-05-01T10:00:00.000Z"}"#,
        )
        .unwrap();
        assert_eq!(
            r.last_synced,
            Some(Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap())
        );

        let json = serde_json::to_value(&r).unwrap();
        assert!(json.get("lastPushed").is_none());
        assert!(json["lastSynced"].is_string());
    }

    #[test]
    fn test_serialized_shape() {
        let mut r = record("https://x/y/z", Some("Z"));
        r.is_master = true;
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json["id"], "id-1");
        assert_eq!(json["isMaster"], true);
        assert_eq!(json["label"], "Z");
        assert!(json["lastSynced"].is_null());
        assert!(json.get("lastCommit").is_none());
    }

    #[test]
    fn test_deserialize_without_optional_fields() {
        let r: RepoRecord =
            serde_json::from_str(r#"{"id":"abc","url":"https://x/y/z"}"#).unwrap();
        assert_eq!(r.id.as_str(), "abc");
        assert!(!r.is_master);
        assert!(r.label.is_none());
        assert!(r.last_synced.is_none());
    }
}
