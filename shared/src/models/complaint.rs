//! Complaint Model
//!
//! `RawComplaint` is the list item exactly as the backend sends it (every
//! field optional so structurally broken items can still be inspected).
//! `ComplaintRecord` is the normalized row the query engine works on.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::status::ComplaintStatus;

/// Upstream id: numeric on most endpoints, a display string on some
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawId {
    Number(i64),
    Text(String),
}

impl fmt::Display for RawId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawId::Number(n) => write!(f, "{}", n),
            RawId::Text(s) => f.write_str(s),
        }
    }
}

/// Complaint list item as returned by the backend
///
/// Fields the list does not use are ignored. Some endpoints spell the body
/// `content` and the status `complaintStatus`; both spellings are read and
/// `body` / `status` win when an item carries both.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawComplaint {
    pub id: Option<RawId>,
    pub title: Option<String>,
    pub body: Option<String>,
    pub content: Option<String>,
    /// Status code in whatever casing the endpoint uses
    pub status: Option<String>,
    pub complaint_status: Option<String>,
    /// Creation timestamp (ISO 8601, e.g. `2026-01-14T09:30:00`)
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub category: Option<String>,
    pub department_name: Option<String>,
}

/// Normalized complaint row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplaintRecord {
    /// Display identifier, unique within a fetched collection
    pub id: String,
    pub title: String,
    /// Complaint body (upstream `body`)
    pub content: String,
    /// Category, or the uncategorized sentinel
    pub category: String,
    pub status: ComplaintStatus,
    /// Date portion of the upstream creation timestamp
    pub submitted_date: NaiveDate,
    /// Date of the last backend-side update, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_update: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
}

impl ComplaintRecord {
    /// Whether the complaint shows the "updated" badge
    pub fn has_update(&self) -> bool {
        self.last_update.is_some()
    }
}
