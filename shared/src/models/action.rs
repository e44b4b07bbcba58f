//! Agent action payloads

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult, ErrorCode};

/// Body of `POST /api/agent/complaints/{key}/answer`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerRequest {
    pub answer: String,
    /// Saved as a draft instead of completing the complaint
    pub is_temporary: bool,
}

impl AnswerRequest {
    /// Draft answer, the complaint stays open
    pub fn draft(answer: impl Into<String>) -> Self {
        Self {
            answer: answer.into(),
            is_temporary: true,
        }
    }

    /// Final answer, completes the complaint
    pub fn final_answer(answer: impl Into<String>) -> Self {
        Self {
            answer: answer.into(),
            is_temporary: false,
        }
    }

    pub fn validate(&self) -> AppResult<()> {
        if !self.is_temporary && self.answer.trim().is_empty() {
            return Err(AppError::required("answer"));
        }
        Ok(())
    }
}

/// Body of `POST /api/agent/complaints/{key}/reroute`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RerouteRequest {
    pub target_dept_id: i64,
    pub reason: String,
}

impl RerouteRequest {
    pub fn new(target_dept_id: i64, reason: impl Into<String>) -> Self {
        Self {
            target_dept_id,
            reason: reason.into(),
        }
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.target_dept_id <= 0 {
            return Err(AppError::new(ErrorCode::DepartmentNotFound)
                .with_detail("targetDeptId", self.target_dept_id));
        }
        if self.reason.trim().is_empty() {
            return Err(AppError::new(ErrorCode::RerouteReasonRequired).with_detail("field", "reason"));
        }
        Ok(())
    }
}
