//! Complaint detail and home-page summaries

use serde::{Deserialize, Serialize};

use super::status::ComplaintStatus;
use crate::identifier::ComplaintKey;
use crate::normalize::date_portion;

/// Urgency assigned by the routing backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UrgencyLevel {
    Low,
    #[default]
    Medium,
    High,
}

/// Status of the incident a complaint was clustered into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IncidentStatus {
    Open,
    InProgress,
    Resolved,
    Closed,
}

/// Complaint detail as served to agents
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplaintDetail {
    /// Display identifier (e.g. `C2026-0004`)
    pub id: String,
    /// Raw numeric key used by action endpoints
    pub original_id: i64,
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub address: String,
    pub received_at: String,
    pub status: ComplaintStatus,
    #[serde(default)]
    pub urgency: UrgencyLevel,
    pub department_name: Option<String>,
    pub category: Option<String>,

    // -- Normalization output --
    pub neutral_summary: Option<String>,
    pub core_request: Option<String>,
    pub core_cause: Option<String>,
    pub target_object: Option<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    pub location_hint: Option<String>,

    // -- Incident --
    pub incident_id: Option<String>,
    pub incident_title: Option<String>,
    pub incident_status: Option<IncidentStatus>,
    pub incident_complaint_count: Option<u32>,

    // -- Handling --
    /// Id of the agent handling the complaint
    pub answered_by: Option<i64>,
    pub manager_name: Option<String>,
    pub answer: Option<String>,
}

impl ComplaintDetail {
    /// Numeric key for action endpoints
    pub fn key(&self) -> ComplaintKey {
        ComplaintKey::from(self.original_id)
    }

    /// Whether `agent_id` is the agent currently handling the complaint
    pub fn is_managed_by(&self, agent_id: i64) -> bool {
        self.answered_by == Some(agent_id)
    }

    /// Whether any agent has taken the complaint
    pub fn is_assigned(&self) -> bool {
        self.answered_by.is_some()
    }
}

/// Entry of the applicant home page "recent complaints" widget
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentComplaint {
    pub id: i64,
    pub title: String,
    #[serde(rename = "complaintStatus", alias = "status")]
    pub status: ComplaintStatus,
    pub created_at: String,
}

impl RecentComplaint {
    /// Submission date as `YYYY-MM-DD`, falling back to the raw timestamp
    pub fn submitted_date(&self) -> &str {
        date_portion(&self.created_at)
    }
}
