//! Unified error system for the complaint desk
//!
//! This module provides:
//! - [`ErrorCode`]: Standardized error codes for all error types
//! - [`ErrorCategory`]: Classification of errors by domain
//! - [`AppError`]: Rich error type with codes, messages, and details
//! - [`ApiErrorBody`]: Structured error body sent by the backend
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Permission errors
//! - 4xxx: Complaint errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{ApiErrorBody, AppError, ErrorCategory, ErrorCode};
//!
//! let err = AppError::new(ErrorCode::ComplaintNotFound);
//! assert_eq!(err.message, "Complaint not found");
//!
//! let body: ApiErrorBody =
//!     serde_json::from_str(r#"{"code":1003,"message":"Token expired"}"#).unwrap();
//! assert_eq!(body.error_code().map(|c| c.category()), Some(ErrorCategory::Auth));
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{ApiErrorBody, AppError, AppResult};
