//! Display identifier -> backend key resolution
//!
//! Complaints are shown with display ids such as `C2026-0008`, while action
//! endpoints take the raw numeric key (`8`). The key is the integer after
//! the last `-`, or the whole string when there is no `-`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::error::{AppError, ErrorCode};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentifierError {
    #[error("malformed complaint identifier: {0:?}")]
    Malformed(String),
}

impl From<IdentifierError> for AppError {
    fn from(err: IdentifierError) -> Self {
        let IdentifierError::Malformed(input) = &err;
        AppError::with_message(ErrorCode::MalformedIdentifier, err.to_string())
            .with_detail("id", input.as_str())
    }
}

/// Numeric complaint key used in backend paths
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComplaintKey(i64);

impl ComplaintKey {
    /// Resolve a display identifier to its numeric key
    pub fn parse(display: &str) -> Result<Self, IdentifierError> {
        let tail = match display.rfind('-') {
            Some(pos) => &display[pos + 1..],
            None => display,
        };
        tail.trim()
            .parse::<i64>()
            .map(ComplaintKey)
            .map_err(|_| IdentifierError::Malformed(display.to_string()))
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl From<i64> for ComplaintKey {
    fn from(key: i64) -> Self {
        Self(key)
    }
}

impl FromStr for ComplaintKey {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ComplaintKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
