//! Client error types

use http::StatusCode;
use serde_json::Value;
use shared::error::{ApiErrorBody, AppError, ErrorCategory, ErrorCode};
use shared::identifier::IdentifierError;
use std::collections::HashMap;
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Structured error returned by the backend
    #[error("API error {code}: {message}")]
    Api {
        code: u16,
        message: String,
        details: Option<HashMap<String, Value>>,
    },

    /// Authentication required
    #[error("Authentication required")]
    Unauthorized,

    /// Permission denied
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Validation error reported by the backend without a structured body
    #[error("Validation error: {0}")]
    Validation(String),

    /// Payload rejected locally, nothing was sent
    #[error("Validation error: {0}")]
    Rejected(#[from] AppError),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Display id that does not resolve to a backend key
    #[error(transparent)]
    MalformedIdentifier(#[from] IdentifierError),
}

impl ClientError {
    /// Map a non-success response onto an error
    ///
    /// A structured `{code, message}` body wins; otherwise the status decides.
    pub fn from_response(status: StatusCode, text: String) -> Self {
        if let Ok(body) = serde_json::from_str::<ApiErrorBody>(&text) {
            return ClientError::Api {
                code: body.code,
                message: body.message,
                details: body.details,
            };
        }
        match ErrorCode::from_http_status(status) {
            ErrorCode::NotAuthenticated => ClientError::Unauthorized,
            ErrorCode::PermissionDenied => ClientError::Forbidden(text),
            ErrorCode::NotFound => ClientError::NotFound(text),
            ErrorCode::ValidationFailed => ClientError::Validation(text),
            _ => ClientError::Internal(format!("{}: {}", status, text)),
        }
    }

    /// Error code for this failure, when one applies
    pub fn error_code(&self) -> Option<ErrorCode> {
        match self {
            ClientError::Api { code, .. } => ErrorCode::try_from(*code).ok(),
            ClientError::Rejected(err) => Some(err.code),
            ClientError::Unauthorized => Some(ErrorCode::NotAuthenticated),
            ClientError::Forbidden(_) => Some(ErrorCode::PermissionDenied),
            ClientError::NotFound(_) => Some(ErrorCode::NotFound),
            ClientError::Validation(_) => Some(ErrorCode::ValidationFailed),
            ClientError::Http(e) if e.is_timeout() => Some(ErrorCode::TimeoutError),
            ClientError::Http(_) => Some(ErrorCode::NetworkError),
            ClientError::MalformedIdentifier(_) => Some(ErrorCode::MalformedIdentifier),
            _ => None,
        }
    }

    /// Structured details, for backend and locally rejected errors
    pub fn details(&self) -> Option<&HashMap<String, Value>> {
        match self {
            ClientError::Api { details, .. } => details.as_ref(),
            ClientError::Rejected(err) => err.details.as_ref(),
            _ => None,
        }
    }

    /// Whether signing in again could fix the error
    pub fn is_auth_error(&self) -> bool {
        self.error_code()
            .is_some_and(|c| c.category() == ErrorCategory::Auth)
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
