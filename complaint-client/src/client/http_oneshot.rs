//! Oneshot HTTP client, in-memory transport
//!
//! Requires the "in-process" feature.

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use http::{Method, Request, header};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tower::ServiceExt;

use super::http::{HttpClient, decode_response};
use crate::{ClientError, ClientResult};

/// Oneshot HTTP client (in-memory calls)
///
/// Drives an axum [`Router`] through Tower's `oneshot`, with no socket in
/// between. Used for tests and for backends embedded in the same process.
///
/// # Example
///
/// ```ignore
/// use axum::{Router, routing::get};
/// use complaint_client::OneshotHttpClient;
///
/// let router = Router::new().route("/api/agent/me", get(me));
/// let client = OneshotHttpClient::new(router);
/// let profile: AgentProfile = client.get("/api/agent/me", "token").await?;
/// ```
#[derive(Debug, Clone)]
pub struct OneshotHttpClient {
    router: Router,
}

impl OneshotHttpClient {
    /// # Arguments
    /// * `router` - Router with its state already applied
    pub fn new(router: Router) -> Self {
        Self { router }
    }

    fn build_request(
        &self,
        method: Method,
        path: &str,
        token: &str,
        body: Option<Vec<u8>>,
    ) -> ClientResult<Request<Body>> {
        let mut builder = Request::builder()
            .method(method)
            .uri(path)
            .header(header::AUTHORIZATION, format!("Bearer {}", token));

        let body = match body {
            Some(bytes) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(bytes)
            }
            None => Body::empty(),
        };

        builder
            .body(body)
            .map_err(|e| ClientError::Internal(format!("Failed to build request: {}", e)))
    }

    async fn execute<T: DeserializeOwned>(&self, request: Request<Body>) -> ClientResult<T> {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .map_err(|e| ClientError::Internal(format!("Oneshot call failed: {}", e)))?;

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .map_err(|e| ClientError::Internal(format!("Failed to read body: {}", e)))?;

        decode_response(status, &body_bytes)
    }
}

#[async_trait]
impl HttpClient for OneshotHttpClient {
    async fn get<T: DeserializeOwned>(&self, path: &str, token: &str) -> ClientResult<T> {
        let request = self.build_request(Method::GET, path, token, None)?;
        self.execute(request).await
    }

    async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        token: &str,
        body: &B,
    ) -> ClientResult<T> {
        let bytes = serde_json::to_vec(body)?;
        let request = self.build_request(Method::POST, path, token, Some(bytes))?;
        self.execute(request).await
    }

    async fn post_empty<T: DeserializeOwned>(&self, path: &str, token: &str) -> ClientResult<T> {
        let request = self.build_request(Method::POST, path, token, None)?;
        self.execute(request).await
    }
}
