//! JSON import and export of dive logs.

use chrono::NaiveDate;

use crate::error::DiveLogError;
use crate::models::{DiveEntry, User};

pub fn entries_from_json(json: &str) -> Result<Vec<DiveEntry>, DiveLogError> {
    let entries: Vec<DiveEntry> = serde_json::from_str(json)?;
    tracing::debug!(count = entries.len(), "imported dive entries");
    Ok(entries)
}

pub fn entries_to_json(entries: &[DiveEntry]) -> Result<String, DiveLogError> {
    Ok(serde_json::to_string_pretty(entries)?)
}

pub fn users_from_json(json: &str) -> Result<Vec<User>, DiveLogError> {
    let users: Vec<User> = serde_json::from_str(json)?;
    tracing::debug!(count = users.len(), "imported users");
    Ok(users)
}

/// Download name for an exported log.
pub fn export_file_name(today: NaiveDate) -> String {
    format!("orca-dive-log-{}.json", today.format("%Y-%m-%d"))
}
