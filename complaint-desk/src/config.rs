use chrono::NaiveDate;
use complaint_client::ClientConfig;
use shared::client::Scope;
use shared::query::{DEFAULT_PAGE_SIZE, QueryState, SortKey};

/// Desk configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | COMPLAINT_API_URL | http://localhost:8080 | backend base URL |
/// | COMPLAINT_API_TOKEN | - | bearer credential |
/// | REQUEST_TIMEOUT_SECS | 30 | HTTP timeout |
/// | PAGE_SIZE | 10 | rows per page |
/// | LOG_LEVEL | info | tracing level |
/// | LOG_JSON | false | JSON lines in the log file |
/// | LOG_DIR | - | daily rolling log directory |
/// | COMPLAINT_SCOPE | applicant | `applicant` or `agent` collection |
///
/// The query is read from `QUERY_KEYWORD`, `QUERY_START`, `QUERY_END`
/// (`YYYY-MM-DD`), `QUERY_SORT` (`date-desc`, `date-asc`, `status`,
/// `title`) and `QUERY_PAGE`. Values that do not parse are reported in
/// [`Config::warnings`] and ignored.
///
/// # Example
///
/// ```ignore
/// COMPLAINT_API_TOKEN=... QUERY_KEYWORD=가로등 cargo run -p complaint-desk
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    pub api_token: Option<String>,
    pub request_timeout_secs: u64,
    pub page_size: usize,
    pub log_level: String,
    pub log_json: bool,
    pub log_dir: Option<String>,
    pub scope: Scope,
    pub query: QueryState,
    /// Problems found while reading the environment
    pub warnings: Vec<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut warnings = Vec::new();
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let scope = match var("COMPLAINT_SCOPE") {
            Some(raw) => raw.parse().unwrap_or_else(|e: String| {
                warnings.push(e);
                Scope::default()
            }),
            None => Scope::default(),
        };

        let page_size = var("PAGE_SIZE")
            .and_then(|p| p.parse::<usize>().ok())
            .filter(|p| *p > 0)
            .unwrap_or(DEFAULT_PAGE_SIZE);

        let mut query = QueryState::default();
        if let Some(keyword) = lookup("QUERY_KEYWORD") {
            query.set_keyword(keyword);
        }
        if let Some(raw) = var("QUERY_START") {
            match raw.trim().parse::<NaiveDate>() {
                Ok(date) => query.set_start_date(Some(date)),
                Err(_) => warnings.push(format!("ignoring QUERY_START={:?}", raw)),
            }
        }
        if let Some(raw) = var("QUERY_END") {
            match raw.trim().parse::<NaiveDate>() {
                Ok(date) => query.set_end_date(Some(date)),
                Err(_) => warnings.push(format!("ignoring QUERY_END={:?}", raw)),
            }
        }
        if let Some(raw) = var("QUERY_SORT") {
            match raw.parse::<SortKey>() {
                Ok(key) => query.set_sort(key),
                Err(e) => warnings.push(e.to_string()),
            }
        }
        // Applied after the criteria, which reset the page; clamped once the
        // collection is known
        if let Some(raw) = var("QUERY_PAGE") {
            match raw.trim().parse::<usize>() {
                Ok(page) => query.go_to_page(page, usize::MAX),
                Err(_) => warnings.push(format!("ignoring QUERY_PAGE={:?}", raw)),
            }
        }

        Self {
            api_url: var("COMPLAINT_API_URL")
                .unwrap_or_else(|| complaint_client::config::DEFAULT_BASE_URL.into()),
            api_token: var("COMPLAINT_API_TOKEN"),
            request_timeout_secs: var("REQUEST_TIMEOUT_SECS")
                .and_then(|p| p.parse().ok())
                .unwrap_or(30),
            page_size,
            log_level: var("LOG_LEVEL").unwrap_or_else(|| "info".into()),
            log_json: var("LOG_JSON")
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            log_dir: var("LOG_DIR"),
            scope,
            query,
            warnings,
        }
    }

    /// Client configuration for the backend
    pub fn client_config(&self) -> ClientConfig {
        let config = ClientConfig::new(&self.api_url).with_timeout(self.request_timeout_secs);
        match &self.api_token {
            Some(token) => config.with_token(token.clone()),
            None => config,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Config {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config(&[]);
        assert_eq!(config.api_url, "http://localhost:8080");
        assert!(config.api_token.is_none());
        assert_eq!(config.request_timeout_secs, 30);
        assert_eq!(config.page_size, 10);
        assert_eq!(config.log_level, "info");
        assert!(config.log_dir.is_none());
        assert_eq!(config.scope, Scope::Applicant);
        assert_eq!(config.query, QueryState::default());
        assert!(config.warnings.is_empty());
    }

    #[test]
    fn test_overrides() {
        let config = config(&[
            ("COMPLAINT_API_URL", "http://backend:9000"),
            ("COMPLAINT_API_TOKEN", "abc"),
            ("REQUEST_TIMEOUT_SECS", "5"),
            ("PAGE_SIZE", "25"),
            ("COMPLAINT_SCOPE", "agent"),
            ("LOG_DIR", "/var/log/desk"),
        ]);
        assert_eq!(config.api_url, "http://backend:9000");
        assert_eq!(config.page_size, 25);
        assert_eq!(config.scope, Scope::Agent);
        assert_eq!(config.log_dir.as_deref(), Some("/var/log/desk"));

        let client = config.client_config();
        assert_eq!(client.timeout, 5);
        assert_eq!(client.session().token(), Some("abc"));
    }

    #[test]
    fn test_query_from_env() {
        let config = config(&[
            ("QUERY_KEYWORD", "가로등"),
            ("QUERY_START", "2026-01-01"),
            ("QUERY_END", "2026-01-31"),
            ("QUERY_SORT", "title"),
            ("QUERY_PAGE", "2"),
        ]);
        assert_eq!(config.query.keyword(), "가로등");
        assert_eq!(config.query.start_date(), NaiveDate::from_ymd_opt(2026, 1, 1));
        assert_eq!(config.query.end_date(), NaiveDate::from_ymd_opt(2026, 1, 31));
        assert_eq!(config.query.sort_by(), SortKey::Title);
        assert_eq!(config.query.page(), 2);
    }

    #[test]
    fn test_invalid_values_reported_and_ignored() {
        let config = config(&[
            ("QUERY_START", "01/01/2026"),
            ("QUERY_SORT", "newest"),
            ("QUERY_PAGE", "two"),
            ("COMPLAINT_SCOPE", "admin"),
            ("PAGE_SIZE", "0"),
        ]);
        assert_eq!(config.warnings.len(), 4);
        assert_eq!(config.query, QueryState::default());
        assert_eq!(config.scope, Scope::Applicant);
        assert_eq!(config.page_size, 10);
    }
}
