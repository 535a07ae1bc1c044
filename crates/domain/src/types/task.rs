//! Task model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single entry in a task list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub list_id: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(default)]
    pub is_completed: bool,
    #[serde(default)]
    pub is_starred: bool,
    /// Position within the list when sorted by ordinal
    pub ordinal: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    pub date_created: DateTime<Utc>,
    pub last_modified: DateTime<Utc>,
}
