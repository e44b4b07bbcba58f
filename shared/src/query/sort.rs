//! Stable ordering of filtered complaints

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::models::ComplaintRecord;

/// Sort criterion, spelled on the wire as `date-desc`, `date-asc`,
/// `status` or `title`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortKey {
    #[default]
    #[serde(rename = "date-desc")]
    DateDesc,
    #[serde(rename = "date-asc")]
    DateAsc,
    #[serde(rename = "status")]
    Status,
    #[serde(rename = "title")]
    Title,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [Self::DateDesc, Self::DateAsc, Self::Status, Self::Title];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DateDesc => "date-desc",
            Self::DateAsc => "date-asc",
            Self::Status => "status",
            Self::Title => "title",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::DateDesc => "최신순",
            Self::DateAsc => "오래된순",
            Self::Status => "상태별",
            Self::Title => "제목순",
        }
    }

    /// Ordering of two records under this key
    ///
    /// Titles compare by code point, without case folding.
    pub fn compare(&self, a: &ComplaintRecord, b: &ComplaintRecord) -> Ordering {
        match self {
            Self::DateDesc => b.submitted_date.cmp(&a.submitted_date),
            Self::DateAsc => a.submitted_date.cmp(&b.submitted_date),
            Self::Status => a.status.as_str().cmp(b.status.as_str()),
            Self::Title => a.title.cmp(&b.title),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown sort key: {0:?}")]
pub struct UnknownSortKey(pub String);

impl FromStr for SortKey {
    type Err = UnknownSortKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == s.trim())
            .ok_or_else(|| UnknownSortKey(s.to_string()))
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sort in place; ties keep their input order
pub fn sort(rows: &mut [&ComplaintRecord], key: SortKey) {
    rows.sort_by(|a, b| key.compare(a, b));
}

/// Sorted copy of `rows`
pub fn sorted<'r>(mut rows: Vec<&'r ComplaintRecord>, key: SortKey) -> Vec<&'r ComplaintRecord> {
    sort(&mut rows, key);
    rows
}
