//! Complaint Status

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Canonical complaint status
///
/// The backend sends upper-case codes (`RECEIVED`, `IN_PROGRESS`, ...) while
/// older endpoints use lower case. Both are parsed case-insensitively and
/// serialized in the canonical lowercase form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplaintStatus {
    Received,
    Categorizing,
    Recommended,
    InProgress,
    Assigned,
    Answered,
    Resolved,
    Closed,
    Canceled,
}

impl ComplaintStatus {
    pub const ALL: [ComplaintStatus; 9] = [
        Self::Received,
        Self::Categorizing,
        Self::Recommended,
        Self::InProgress,
        Self::Assigned,
        Self::Answered,
        Self::Resolved,
        Self::Closed,
        Self::Canceled,
    ];

    /// Canonical lowercase form, used for comparison and sorting
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Received => "received",
            Self::Categorizing => "categorizing",
            Self::Recommended => "recommended",
            Self::InProgress => "in_progress",
            Self::Assigned => "assigned",
            Self::Answered => "answered",
            Self::Resolved => "resolved",
            Self::Closed => "closed",
            Self::Canceled => "canceled",
        }
    }

    /// Display label shown to citizens and agents
    pub fn label(&self) -> &'static str {
        match self {
            Self::Received => "접수됨",
            Self::Categorizing => "분류중",
            Self::Recommended => "추천됨",
            Self::InProgress => "처리중",
            Self::Assigned => "담당자 배정",
            Self::Answered => "답변 완료",
            Self::Resolved => "해결됨",
            Self::Closed => "처리 완료",
            Self::Canceled => "취소됨",
        }
    }

    /// Whether no further action is expected on the complaint
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Resolved | Self::Closed | Self::Canceled)
    }
}

/// Status code outside the known vocabulary
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown complaint status: {0:?}")]
pub struct UnknownStatus(pub String);

impl FromStr for ComplaintStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let canonical = s.trim().to_ascii_lowercase();
        let status = match canonical.as_str() {
            "received" => Self::Received,
            "categorizing" => Self::Categorizing,
            "recommended" => Self::Recommended,
            "in_progress" => Self::InProgress,
            "assigned" => Self::Assigned,
            "answered" => Self::Answered,
            "resolved" => Self::Resolved,
            "closed" => Self::Closed,
            // The backend enum is spelled CANCLED
            "canceled" | "cancled" | "cancelled" => Self::Canceled,
            _ => return Err(UnknownStatus(s.to_string())),
        };
        Ok(status)
    }
}

impl<'de> Deserialize<'de> for ComplaintStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for ComplaintStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
