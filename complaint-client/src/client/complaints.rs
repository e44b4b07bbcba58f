//! Typed complaint API

use serde::de::IgnoredAny;
use serde_json::Value;
use shared::client::{AgentProfile, Scope};
use shared::identifier::ComplaintKey;
use shared::models::{
    AnswerRequest, ComplaintDetail, ComplaintSubmission, RecentComplaint, RerouteRequest,
};
use shared::normalize::{NormalizedBatch, normalize_all};

use super::http::HttpClient;
use crate::ClientResult;
use crate::session::Session;

const AGENT_COMPLAINTS: &str = "/api/agent/complaints";

/// Complaint backend API bound to a session
///
/// Actions take the display id shown in the list (`C2026-0008`) and resolve
/// it to the numeric key before anything is sent. Every call needs a
/// credential in the session.
#[derive(Debug, Clone)]
pub struct ComplaintApi<C> {
    http: C,
    session: Session,
}

impl<C: HttpClient> ComplaintApi<C> {
    pub fn new(http: C, session: Session) -> Self {
        Self { http, session }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    pub fn http(&self) -> &C {
        &self.http
    }

    // ========== Collections ==========

    /// Fetch and normalize the collection for `scope`
    pub async fn fetch_collection(&self, scope: Scope) -> ClientResult<NormalizedBatch> {
        let token = self.session.bearer()?;
        let items: Vec<Value> = self.http.get(scope.collection_path(), token).await?;
        let batch = normalize_all(items);
        if batch.skipped_count() > 0 {
            tracing::warn!(
                scope = ?scope,
                skipped = batch.skipped_count(),
                "Some complaints could not be ingested"
            );
        }
        Ok(batch)
    }

    /// Recent complaints for the applicant home page (at most three)
    pub async fn recent_complaints(&self) -> ClientResult<Vec<RecentComplaint>> {
        let token = self.session.bearer()?;
        self.http.get("/api/applicant/complaints/top3", token).await
    }

    /// File a new complaint
    pub async fn submit(&self, submission: &ComplaintSubmission) -> ClientResult<()> {
        submission.validate()?;
        let token = self.session.bearer()?;
        let _: IgnoredAny = self
            .http
            .post("/api/applicant/complaint", token, submission)
            .await?;
        tracing::info!(title = %submission.title, "Complaint submitted");
        Ok(())
    }

    // ========== Agent ==========

    /// Current agent profile, remembered in the session
    pub async fn me(&mut self) -> ClientResult<AgentProfile> {
        let token = self.session.bearer()?;
        let profile: AgentProfile = self.http.get("/api/agent/me", token).await?;
        self.session.set_agent(profile.clone());
        Ok(profile)
    }

    pub async fn detail(&self, display_id: &str) -> ClientResult<ComplaintDetail> {
        let key = ComplaintKey::parse(display_id)?;
        let token = self.session.bearer()?;
        self.http
            .get(&format!("{}/{}", AGENT_COMPLAINTS, key), token)
            .await
    }

    /// Take the complaint as the handling agent
    pub async fn assign(&self, display_id: &str) -> ClientResult<()> {
        self.action(display_id, "assign").await
    }

    /// Give the complaint back
    pub async fn release(&self, display_id: &str) -> ClientResult<()> {
        self.action(display_id, "release").await
    }

    /// Save a draft answer or complete the complaint
    pub async fn answer(&self, display_id: &str, request: &AnswerRequest) -> ClientResult<()> {
        request.validate()?;
        self.action_with_body(display_id, "answer", request).await
    }

    /// Ask for the complaint to be moved to another department
    pub async fn reroute(&self, display_id: &str, request: &RerouteRequest) -> ClientResult<()> {
        request.validate()?;
        self.action_with_body(display_id, "reroute", request).await
    }

    async fn action(&self, display_id: &str, action: &str) -> ClientResult<()> {
        let key = ComplaintKey::parse(display_id)?;
        let token = self.session.bearer()?;
        let path = format!("{}/{}/{}", AGENT_COMPLAINTS, key, action);
        let _: IgnoredAny = self.http.post_empty(&path, token).await?;
        tracing::info!(key = %key, action, "Complaint action done");
        Ok(())
    }

    async fn action_with_body<B: serde::Serialize + Sync>(
        &self,
        display_id: &str,
        action: &str,
        body: &B,
    ) -> ClientResult<()> {
        let key = ComplaintKey::parse(display_id)?;
        let token = self.session.bearer()?;
        let path = format!("{}/{}/{}", AGENT_COMPLAINTS, key, action);
        let _: IgnoredAny = self.http.post(&path, token, body).await?;
        tracing::info!(key = %key, action, "Complaint action done");
        Ok(())
    }
}
