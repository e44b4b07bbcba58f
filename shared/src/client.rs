//! Types shared between the backend API and its clients

use serde::{Deserialize, Serialize};

/// Current agent (`GET /api/agent/me`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentProfile {
    pub id: i64,
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department_name: Option<String>,
}

/// Which complaint collection a client works with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    /// Complaints filed by the signed-in citizen
    #[default]
    Applicant,
    /// Complaints visible to the signed-in agent
    Agent,
}

impl Scope {
    /// Collection endpoint for this scope
    pub fn collection_path(&self) -> &'static str {
        match self {
            Scope::Applicant => "/api/applicant/complaints",
            Scope::Agent => "/api/agent/complaints",
        }
    }
}

impl std::str::FromStr for Scope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "applicant" => Ok(Scope::Applicant),
            "agent" => Ok(Scope::Agent),
            other => Err(format!("unknown scope: {}", other)),
        }
    }
}
