//! Ingestion of upstream complaint collections
//!
//! Upstream items are mapped onto [`ComplaintRecord`] once, when a collection
//! is fetched. Per-field fallbacks live here and nowhere else:
//!
//! - missing body becomes the empty string
//! - missing or blank category becomes [`UNCATEGORIZED`]
//! - status is matched case-insensitively
//!
//! Items that cannot be turned into a record (no id, title, status or
//! creation date, an unknown status, a duplicate id, or not an object at
//! all) are skipped and reported in the [`NormalizedBatch`]. One bad item
//! never fails the whole collection.

use chrono::NaiveDate;
use serde_json::Value;
use std::collections::HashSet;
use thiserror::Error;

use crate::error::ErrorCode;
use crate::models::{ComplaintRecord, ComplaintStatus, RawComplaint};

/// Category shown for complaints the classifier has not labelled yet
pub const UNCATEGORIZED: &str = "미분류";

/// Why an upstream item was left out of the collection
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SkipReason {
    #[error("item is not a JSON object")]
    NotAnObject,

    #[error("item has an unexpected shape: {0}")]
    Malformed(String),

    #[error("required field `{0}` is missing")]
    MissingField(&'static str),

    #[error("unknown status {0:?}")]
    UnknownStatus(String),

    #[error("unparsable creation date {0:?}")]
    InvalidDate(String),

    #[error("duplicate id {0:?}")]
    DuplicateId(String),
}

impl SkipReason {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            SkipReason::UnknownStatus(_) => ErrorCode::UnknownStatus,
            _ => ErrorCode::MalformedRecord,
        }
    }
}

/// An upstream item that was not ingested
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRecord {
    /// Position in the upstream array
    pub index: usize,
    /// Upstream id, when the item had one
    pub id: Option<String>,
    pub reason: SkipReason,
}

/// Result of normalizing a whole collection
#[derive(Debug, Clone, Default)]
pub struct NormalizedBatch {
    /// Valid records, in upstream order
    pub records: Vec<ComplaintRecord>,
    pub skipped: Vec<SkippedRecord>,
}

impl NormalizedBatch {
    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }
}

/// Date portion of an ISO-8601 timestamp (`2026-01-14T09:30:00` -> `2026-01-14`)
pub fn date_portion(timestamp: &str) -> &str {
    let trimmed = timestamp.trim();
    match trimmed.find(['T', ' ']) {
        Some(pos) => &trimmed[..pos],
        None => trimmed,
    }
}

/// Parse the date portion of a timestamp
pub fn parse_date(timestamp: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date_portion(timestamp), "%Y-%m-%d").ok()
}

/// Map one upstream item onto the canonical record shape
pub fn normalize(raw: RawComplaint) -> Result<ComplaintRecord, SkipReason> {
    let id = raw
        .id
        .map(|id| id.to_string().trim().to_string())
        .filter(|id| !id.is_empty())
        .ok_or(SkipReason::MissingField("id"))?;
    let title = raw.title.ok_or(SkipReason::MissingField("title"))?;

    let status_code = raw
        .status
        .or(raw.complaint_status)
        .ok_or(SkipReason::MissingField("status"))?;
    let status: ComplaintStatus = status_code
        .parse()
        .map_err(|_| SkipReason::UnknownStatus(status_code.clone()))?;

    let created_at = raw.created_at.ok_or(SkipReason::MissingField("createdAt"))?;
    let submitted_date =
        parse_date(&created_at).ok_or_else(|| SkipReason::InvalidDate(created_at.clone()))?;

    let category = match raw.category {
        Some(c) if !c.trim().is_empty() => c,
        _ => {
            tracing::debug!(id = %id, "No category, using sentinel");
            UNCATEGORIZED.to_string()
        }
    };

    Ok(ComplaintRecord {
        id,
        title,
        content: raw.body.or(raw.content).unwrap_or_default(),
        category,
        status,
        submitted_date,
        last_update: raw.updated_at.as_deref().and_then(parse_date),
        department: raw.department_name.filter(|d| !d.trim().is_empty()),
    })
}

/// Normalize an upstream JSON array, skipping items that cannot be ingested
pub fn normalize_all<I>(items: I) -> NormalizedBatch
where
    I: IntoIterator<Item = Value>,
{
    let mut batch = NormalizedBatch::default();
    let mut seen = HashSet::new();

    for (index, item) in items.into_iter().enumerate() {
        let upstream_id = item.get("id").and_then(id_hint);

        let result = if item.is_object() {
            serde_json::from_value::<RawComplaint>(item)
                .map_err(|e| SkipReason::Malformed(e.to_string()))
                .and_then(normalize)
        } else {
            Err(SkipReason::NotAnObject)
        };

        let outcome = result.and_then(|record| {
            if seen.insert(record.id.clone()) {
                Ok(record)
            } else {
                Err(SkipReason::DuplicateId(record.id))
            }
        });

        match outcome {
            Ok(record) => batch.records.push(record),
            Err(reason) => {
                tracing::warn!(
                    index,
                    id = ?upstream_id,
                    code = %reason.error_code(),
                    reason = %reason,
                    "Skipping complaint record"
                );
                batch.skipped.push(SkippedRecord {
                    index,
                    id: upstream_id,
                    reason,
                });
            }
        }
    }

    tracing::debug!(
        records = batch.records.len(),
        skipped = batch.skipped_count(),
        "Normalized complaint collection"
    );
    batch
}

fn id_hint(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
