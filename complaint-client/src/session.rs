//! Session context
//!
//! The bearer credential travels with an explicit [`Session`] value handed
//! to the API client. Nothing is read from globals.

use shared::client::AgentProfile;

use crate::{ClientError, ClientResult};

/// Credential and identity of the signed-in user
#[derive(Debug, Clone, Default)]
pub struct Session {
    token: Option<String>,
    agent: Option<AgentProfile>,
}

impl Session {
    /// Session without a credential
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Session carrying a bearer token
    pub fn with_token(token: impl Into<String>) -> Self {
        let token = token.into();
        Self {
            token: (!token.trim().is_empty()).then_some(token),
            agent: None,
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Token for an authenticated request
    pub fn bearer(&self) -> ClientResult<&str> {
        self.token().ok_or(ClientError::Unauthorized)
    }

    /// Remember the agent returned by `/api/agent/me`
    pub fn set_agent(&mut self, agent: AgentProfile) {
        self.agent = Some(agent);
    }

    pub fn agent(&self) -> Option<&AgentProfile> {
        self.agent.as_ref()
    }

    /// Drop credential and identity
    pub fn clear(&mut self) {
        self.token = None;
        self.agent = None;
    }
}
