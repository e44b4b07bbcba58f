//! HTTP transport
//!
//! [`HttpClient`] is the seam between the typed API and the wire. The
//! network implementation uses reqwest; tests swap in
//! [`OneshotHttpClient`](super::OneshotHttpClient), which drives an axum
//! router in process.

use async_trait::async_trait;
use http::StatusCode;
use reqwest::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::{ClientError, ClientResult};

/// HTTP client trait
///
/// Every call is authenticated with the bearer `token` passed in.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn get<T: DeserializeOwned>(&self, path: &str, token: &str) -> ClientResult<T>;
    async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        token: &str,
        body: &B,
    ) -> ClientResult<T>;
    async fn post_empty<T: DeserializeOwned>(&self, path: &str, token: &str) -> ClientResult<T>;
}

/// Turn a response status and body into the decoded payload
///
/// An empty success body decodes as JSON `null`.
pub(crate) fn decode_response<T: DeserializeOwned>(
    status: StatusCode,
    body: &[u8],
) -> ClientResult<T> {
    if !status.is_success() {
        let text = String::from_utf8_lossy(body).to_string();
        return Err(ClientError::from_response(status, text));
    }

    let body = if body.iter().all(u8::is_ascii_whitespace) {
        b"null".as_slice()
    } else {
        body
    };
    serde_json::from_slice(body)
        .map_err(|e| ClientError::InvalidResponse(format!("JSON parse error: {}", e)))
}

/// Network HTTP client
#[derive(Debug, Clone)]
pub struct NetworkHttpClient {
    client: Client,
    base_url: String,
}

impl NetworkHttpClient {
    pub fn new(base_url: &str) -> ClientResult<Self> {
        Self::with_timeout(base_url, Duration::from_secs(30))
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> ClientResult<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Base URL without trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn send<T: DeserializeOwned>(&self, req: reqwest::RequestBuilder) -> ClientResult<T> {
        let response = req.send().await?;
        let status = response.status();
        let body = response.bytes().await?;
        decode_response(status, &body)
    }
}

#[async_trait]
impl HttpClient for NetworkHttpClient {
    async fn get<T: DeserializeOwned>(&self, path: &str, token: &str) -> ClientResult<T> {
        tracing::debug!(path, "GET");
        let req = self.client.get(self.url(path)).bearer_auth(token);
        self.send(req).await
    }

    async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        token: &str,
        body: &B,
    ) -> ClientResult<T> {
        tracing::debug!(path, "POST");
        let req = self.client.post(self.url(path)).bearer_auth(token).json(body);
        self.send(req).await
    }

    async fn post_empty<T: DeserializeOwned>(&self, path: &str, token: &str) -> ClientResult<T> {
        tracing::debug!(path, "POST");
        let req = self.client.post(self.url(path)).bearer_auth(token);
        self.send(req).await
    }
}
