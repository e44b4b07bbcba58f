//! Client configuration

use std::time::Duration;

use crate::client::NetworkHttpClient;
use crate::session::Session;
use crate::ClientResult;

/// Default backend address
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Client configuration for connecting to the complaint backend
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server base URL (e.g., "http://localhost:8080")
    pub base_url: String,

    /// Bearer token for authentication
    pub token: Option<String>,

    /// Request timeout in seconds
    pub timeout: u64,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            timeout: 30,
        }
    }

    /// Set the bearer token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    pub fn timeout_duration(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }

    /// Session holding the configured token
    pub fn session(&self) -> Session {
        match &self.token {
            Some(token) => Session::with_token(token.clone()),
            None => Session::anonymous(),
        }
    }

    /// Create a network HTTP client from this configuration
    pub fn build_http_client(&self) -> ClientResult<NetworkHttpClient> {
        NetworkHttpClient::with_timeout(&self.base_url, self.timeout_duration())
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.timeout, 30);
        assert!(!config.session().is_authenticated());
    }

    #[test]
    fn test_builder() {
        let config = ClientConfig::new("http://10.0.0.5:8080/")
            .with_token("t0ken")
            .with_timeout(5);
        assert_eq!(config.timeout_duration(), Duration::from_secs(5));
        assert_eq!(config.session().token(), Some("t0ken"));

        let http = config.build_http_client().unwrap();
        assert_eq!(http.base_url(), "http://10.0.0.5:8080");
    }
}
