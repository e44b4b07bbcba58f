// complaint-client/tests/complaint_api.rs
// Typed API against the in-process backend

mod common;

use common::{Backend, TOKEN};
use complaint_client::{ClientError, Scope, Session};
use serde_json::json;
use shared::error::ErrorCode;
use shared::models::{AnswerRequest, ComplaintStatus, ComplaintSubmission, RerouteRequest};
use shared::normalize::SkipReason;

#[tokio::test]
async fn test_fetch_collection_normalizes_and_counts_skips() {
    let backend = Backend::default();
    let api = backend.api(Session::with_token(TOKEN));

    let batch = api.fetch_collection(Scope::Applicant).await.unwrap();
    assert_eq!(batch.records.len(), 3);
    assert_eq!(batch.skipped_count(), 1);
    assert_eq!(
        batch.skipped[0].reason,
        SkipReason::UnknownStatus("ESCALATED".into())
    );
    assert_eq!(batch.records[2].status, ComplaintStatus::Answered);
    assert!(batch.records[2].has_update());
    assert_eq!(backend.last_path().as_deref(), Some("/api/applicant/complaints"));
}

#[tokio::test]
async fn test_missing_credential_fails_before_io() {
    let backend = Backend::default();
    let api = backend.api(Session::anonymous());

    let err = api.fetch_collection(Scope::Agent).await.unwrap_err();
    assert!(matches!(err, ClientError::Unauthorized));
    assert!(matches!(api.assign("C2026-0008").await, Err(ClientError::Unauthorized)));
    assert_eq!(backend.hits(), 0);
}

#[tokio::test]
async fn test_wrong_credential_maps_to_unauthorized() {
    let backend = Backend::default();
    let api = backend.api(Session::with_token("stale"));

    let err = api.recent_complaints().await.unwrap_err();
    assert!(matches!(err, ClientError::Unauthorized));
    assert!(err.is_auth_error());
    assert_eq!(backend.hits(), 1);
}

#[tokio::test]
async fn test_recent_complaints() {
    let backend = Backend::default();
    let api = backend.api(Session::with_token(TOKEN));

    let recent = api.recent_complaints().await.unwrap();
    assert_eq!(recent.len(), 2);
    assert_eq!(recent[0].status, ComplaintStatus::Answered);
    assert_eq!(recent[0].submitted_date(), "2026-01-15");
}

#[tokio::test]
async fn test_me_is_remembered_in_session() {
    let backend = Backend::default();
    let mut api = backend.api(Session::with_token(TOKEN));

    let me = api.me().await.unwrap();
    assert_eq!(me.display_name, "김담당");
    assert_eq!(api.session().agent().map(|a| a.id), Some(17));
}

#[tokio::test]
async fn test_detail_resolves_display_id() {
    let backend = Backend::default();
    let api = backend.api(Session::with_token(TOKEN));

    let detail = api.detail("C2026-0008").await.unwrap();
    assert_eq!(backend.last_path().as_deref(), Some("/api/agent/complaints/8"));
    assert_eq!(detail.key().value(), 8);
    assert_eq!(detail.status, ComplaintStatus::Assigned);
    assert!(detail.is_managed_by(17));
}

#[tokio::test]
async fn test_structured_backend_error() {
    let backend = Backend::default();
    let api = backend.api(Session::with_token(TOKEN));

    let err = api.detail("42").await.unwrap_err();
    match &err {
        ClientError::Api { code, message, details } => {
            assert_eq!(*code, 4001);
            assert_eq!(message, "Complaint not found");
            assert_eq!(details.as_ref().unwrap()["id"], 42);
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert_eq!(err.error_code(), Some(ErrorCode::ComplaintNotFound));
}

#[tokio::test]
async fn test_malformed_identifier_aborts_action() {
    let backend = Backend::default();
    let api = backend.api(Session::with_token(TOKEN));

    let err = api.assign("bad-id-xx").await.unwrap_err();
    assert!(matches!(err, ClientError::MalformedIdentifier(_)));
    let err = api
        .answer("C2026-", &AnswerRequest::final_answer("done"))
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::MalformedIdentifier(_)));
    assert!(api.detail("").await.is_err());

    assert_eq!(backend.hits(), 0);
}

#[tokio::test]
async fn test_assign_and_release_use_numeric_key() {
    let backend = Backend::default();
    let api = backend.api(Session::with_token(TOKEN));

    api.assign("C2026-0008").await.unwrap();
    assert_eq!(backend.last_path().as_deref(), Some("/api/agent/complaints/8/assign"));

    api.release("C2026-0008").await.unwrap();
    assert_eq!(backend.last_path().as_deref(), Some("/api/agent/complaints/8/release"));
    assert_eq!(backend.last_body(), None);
}

#[tokio::test]
async fn test_answer_and_reroute_bodies() {
    let backend = Backend::default();
    let api = backend.api(Session::with_token(TOKEN));

    api.answer("C2026-0008", &AnswerRequest::draft("확인 중입니다"))
        .await
        .unwrap();
    assert_eq!(
        backend.last_body(),
        Some(json!({"answer": "확인 중입니다", "isTemporary": true}))
    );

    api.reroute("8", &RerouteRequest::new(3, "관할 아님")).await.unwrap();
    assert_eq!(backend.last_path().as_deref(), Some("/api/agent/complaints/8/reroute"));
    assert_eq!(
        backend.last_body(),
        Some(json!({"targetDeptId": 3, "reason": "관할 아님"}))
    );
}

#[tokio::test]
async fn test_invalid_payloads_never_sent() {
    let backend = Backend::default();
    let api = backend.api(Session::with_token(TOKEN));

    let err = api
        .reroute("C2026-0008", &RerouteRequest::new(3, " "))
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Rejected(_)));
    assert_eq!(err.error_code(), Some(ErrorCode::RerouteReasonRequired));

    let err = api
        .submit(&ComplaintSubmission::new("t".repeat(201), "body"))
        .await
        .unwrap_err();
    assert_eq!(err.error_code(), Some(ErrorCode::ComplaintTitleTooLong));
    let details = err.details().unwrap();
    assert_eq!(details.get("max").unwrap(), 200);
    assert_eq!(details.get("actual").unwrap(), 201);

    let err = api
        .answer("C2026-0008", &AnswerRequest::final_answer(" "))
        .await
        .unwrap_err();
    assert_eq!(err.error_code(), Some(ErrorCode::RequiredField));
    assert_eq!(backend.hits(), 0);
}

#[tokio::test]
async fn test_submit_complaint() {
    let backend = Backend::default();
    let api = backend.api(Session::with_token(TOKEN));

    let submission = ComplaintSubmission::new("가로등 고장", "골목이 어둡습니다")
        .with_location("서울특별시 강동구 성내로 25", 37.53, 127.12);
    api.submit(&submission).await.unwrap();

    let body = backend.last_body().unwrap();
    assert_eq!(body["title"], "가로등 고장");
    assert_eq!(body["addressText"], "서울특별시 강동구 성내로 25");
    assert_eq!(body["lon"], 127.12);
}
