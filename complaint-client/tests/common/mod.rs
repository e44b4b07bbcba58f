// complaint-client/tests/common/mod.rs
// In-process fake backend

#![allow(dead_code)]

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{Value, json};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use complaint_client::{ComplaintApi, OneshotHttpClient, Session};

pub const TOKEN: &str = "secret";
pub const SLOW_DELAY: Duration = Duration::from_millis(200);

#[derive(Clone, Default)]
pub struct Backend {
    pub hits: Arc<AtomicUsize>,
    pub fail_collection: Arc<AtomicBool>,
    pub slow_collection: Arc<AtomicBool>,
    pub last_path: Arc<Mutex<Option<String>>>,
    pub last_body: Arc<Mutex<Option<Value>>>,
}

impl Backend {
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    pub fn set_failing(&self, failing: bool) {
        self.fail_collection.store(failing, Ordering::SeqCst);
    }

    /// Make the collection endpoints answer after `SLOW_DELAY`
    pub fn set_slow(&self, slow: bool) {
        self.slow_collection.store(slow, Ordering::SeqCst);
    }

    pub fn last_path(&self) -> Option<String> {
        self.last_path.lock().unwrap().clone()
    }

    pub fn last_body(&self) -> Option<Value> {
        self.last_body.lock().unwrap().clone()
    }

    fn record(&self, path: String, body: Option<Value>) {
        self.hits.fetch_add(1, Ordering::SeqCst);
        *self.last_path.lock().unwrap() = Some(path);
        *self.last_body.lock().unwrap() = body;
    }

    pub fn router(&self) -> Router {
        Router::new()
            .route("/api/applicant/complaints", get(applicant_complaints))
            .route("/api/applicant/complaints/top3", get(top3))
            .route("/api/applicant/complaint", post(submit))
            .route("/api/agent/me", get(me))
            .route("/api/agent/complaints", get(applicant_complaints))
            .route("/api/agent/complaints/{id}", get(detail))
            .route("/api/agent/complaints/{id}/{action}", post(action))
            .with_state(self.clone())
    }

    pub fn api(&self, session: Session) -> ComplaintApi<OneshotHttpClient> {
        ComplaintApi::new(OneshotHttpClient::new(self.router()), session)
    }
}

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        == Some("Bearer secret")
}

pub fn collection() -> Value {
    json!([
        {"id": 1, "title": "가로등 고장", "body": "골목이 어둡습니다", "status": "RECEIVED",
         "createdAt": "2026-01-10T09:00:00", "category": "도로"},
        {"id": 2, "title": "불법 주차", "body": "인도 주차", "status": "IN_PROGRESS",
         "createdAt": "2026-01-12T10:30:00"},
        {"id": 3, "title": "소음", "body": "밤마다 가로등 아래 소음", "status": "Answered",
         "createdAt": "2026-01-15T21:00:00", "updatedAt": "2026-01-16T08:00:00"},
        {"id": 4, "title": "broken", "status": "ESCALATED", "createdAt": "2026-01-16T08:00:00"}
    ])
}

async fn applicant_complaints(State(b): State<Backend>, headers: HeaderMap) -> Response {
    b.record("/api/applicant/complaints".into(), None);
    if !authorized(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    if b.slow_collection.load(Ordering::SeqCst) {
        tokio::time::sleep(SLOW_DELAY).await;
    }
    if b.fail_collection.load(Ordering::SeqCst) {
        return (StatusCode::INTERNAL_SERVER_ERROR, "database unavailable").into_response();
    }
    Json(collection()).into_response()
}

async fn top3(State(b): State<Backend>, headers: HeaderMap) -> Response {
    b.record("/api/applicant/complaints/top3".into(), None);
    if !authorized(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    Json(json!([
        {"id": 3, "title": "소음", "complaintStatus": "ANSWERED", "createdAt": "2026-01-15T21:00:00"},
        {"id": 2, "title": "불법 주차", "complaintStatus": "IN_PROGRESS", "createdAt": "2026-01-12T10:30:00"}
    ]))
    .into_response()
}

async fn submit(State(b): State<Backend>, headers: HeaderMap, Json(body): Json<Value>) -> Response {
    b.record("/api/applicant/complaint".into(), Some(body));
    if !authorized(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    StatusCode::OK.into_response()
}

async fn me(State(b): State<Backend>, headers: HeaderMap) -> Response {
    b.record("/api/agent/me".into(), None);
    if !authorized(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    Json(json!({"id": 17, "displayName": "김담당"})).into_response()
}

async fn detail(State(b): State<Backend>, headers: HeaderMap, Path(id): Path<i64>) -> Response {
    b.record(format!("/api/agent/complaints/{}", id), None);
    if !authorized(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    if id != 8 {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({"code": 4001, "message": "Complaint not found", "details": {"id": id}})),
        )
            .into_response();
    }
    Json(json!({
        "id": "C2026-0008",
        "originalId": 8,
        "title": "가로등 고장",
        "body": "골목이 어둡습니다",
        "address": "서울특별시 강동구 성내로 25",
        "receivedAt": "2026-01-10T09:00:00",
        "status": "ASSIGNED",
        "urgency": "MEDIUM",
        "answeredBy": 17,
        "managerName": "김담당"
    }))
    .into_response()
}

async fn action(
    State(b): State<Backend>,
    headers: HeaderMap,
    Path((id, action)): Path<(i64, String)>,
    body: Option<Json<Value>>,
) -> Response {
    b.record(
        format!("/api/agent/complaints/{}/{}", id, action),
        body.map(|Json(v)| v),
    );
    if !authorized(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    match action.as_str() {
        "assign" | "release" | "answer" | "reroute" => StatusCode::OK.into_response(),
        _ => StatusCode::NOT_FOUND.into_response(),
    }
}
