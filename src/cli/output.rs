//! Output formatting utilities

use crate::domain::{Notification, RepoRecord, Severity};
use crate::error::Result;

/// Format the repository list for display
pub fn format_repo_list(records: &[RepoRecord], date_format: &str) -> Result<String> {
    if records.is_empty() {
        return Ok("No repositories found".to_string());
    }

    let mut output = format!("Repositories ({})\n", records.len());
    for record in records {
        output.push('\n');
        if record.is_master {
            output.push_str(&format!("{} [master]\n", record.display_name()));
        } else {
            output.push_str(&format!("{}\n", record.display_name()));
        }
        output.push_str(&format!("  url:  {}\n", record.url));
        output.push_str(&format!("  id:   {}\n", record.id));
        output.push_str(&format!(
            "  Last synced: {}\n",
            record.last_synced_display(date_format)?
        ));
    }
    Ok(output)
}

/// Print a notification; warnings and errors go to stderr
pub fn print_notification(notification: &Notification) {
    match notification.severity {
        Severity::Success => println!("{}", notification),
        Severity::Warning | Severity::Error => eprintln!("{}", notification),
    }
}
