//! Unified error codes for the complaint desk
//!
//! This module defines all error codes shared by the client and the desk.
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Permission errors
//! - 4xxx: Complaint errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values so they can travel in
/// JSON error bodies unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Invalid request
    InvalidRequest = 5,
    /// Invalid format
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 1xxx: Auth ====================
    /// User is not authenticated
    NotAuthenticated = 1001,
    /// Token has expired
    TokenExpired = 1003,
    /// Token is invalid
    TokenInvalid = 1004,

    // ==================== 2xxx: Permission ====================
    /// Permission denied
    PermissionDenied = 2001,
    /// Agent or admin role required
    AgentRequired = 2002,
    /// Caller is not the manager assigned to the complaint
    NotAssignedManager = 2003,

    // ==================== 4xxx: Complaint ====================
    /// Complaint not found
    ComplaintNotFound = 4001,
    /// Title exceeds the length limit
    ComplaintTitleTooLong = 4002,
    /// Body exceeds the length limit
    ComplaintBodyTooLong = 4003,
    /// Complaint already has a manager
    ComplaintAlreadyAssigned = 4004,
    /// Complaint is already closed
    ComplaintAlreadyClosed = 4005,
    /// Display identifier has no numeric key
    MalformedIdentifier = 4006,
    /// Upstream record could not be normalized
    MalformedRecord = 4007,
    /// Status code outside the known vocabulary
    UnknownStatus = 4008,
    /// Target department not found
    DepartmentNotFound = 4101,
    /// Reroute request without a reason
    RerouteReasonRequired = 4102,

    // ==================== 9xxx: System ====================
    /// Internal error
    InternalError = 9001,
    /// Network error
    NetworkError = 9003,
    /// Operation timed out
    TimeoutError = 9004,
}

impl ErrorCode {
    /// Get the numeric error code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the default message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::RequiredField => "Required field is missing",
            ErrorCode::ValueOutOfRange => "Value is out of range",

            // Auth
            ErrorCode::NotAuthenticated => "User is not authenticated",
            ErrorCode::TokenExpired => "Authentication token has expired",
            ErrorCode::TokenInvalid => "Authentication token is invalid",

            // Permission
            ErrorCode::PermissionDenied => "Permission denied",
            ErrorCode::AgentRequired => "Agent role is required",
            ErrorCode::NotAssignedManager => "Complaint is assigned to another manager",

            // Complaint
            ErrorCode::ComplaintNotFound => "Complaint not found",
            ErrorCode::ComplaintTitleTooLong => "Complaint title is too long",
            ErrorCode::ComplaintBodyTooLong => "Complaint body is too long",
            ErrorCode::ComplaintAlreadyAssigned => "Complaint already has a manager",
            ErrorCode::ComplaintAlreadyClosed => "Complaint is already closed",
            ErrorCode::MalformedIdentifier => "Complaint identifier is malformed",
            ErrorCode::MalformedRecord => "Complaint record is malformed",
            ErrorCode::UnknownStatus => "Unknown complaint status",
            ErrorCode::DepartmentNotFound => "Department not found",
            ErrorCode::RerouteReasonRequired => "Reroute reason is required",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::NetworkError => "Network error",
            ErrorCode::TimeoutError => "Operation timed out",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error returned when converting an unknown u16 into an [`ErrorCode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            5 => Ok(ErrorCode::InvalidRequest),
            6 => Ok(ErrorCode::InvalidFormat),
            7 => Ok(ErrorCode::RequiredField),
            8 => Ok(ErrorCode::ValueOutOfRange),

            // Auth
            1001 => Ok(ErrorCode::NotAuthenticated),
            1003 => Ok(ErrorCode::TokenExpired),
            1004 => Ok(ErrorCode::TokenInvalid),

            // Permission
            2001 => Ok(ErrorCode::PermissionDenied),
            2002 => Ok(ErrorCode::AgentRequired),
            2003 => Ok(ErrorCode::NotAssignedManager),

            // Complaint
            4001 => Ok(ErrorCode::ComplaintNotFound),
            4002 => Ok(ErrorCode::ComplaintTitleTooLong),
            4003 => Ok(ErrorCode::ComplaintBodyTooLong),
            4004 => Ok(ErrorCode::ComplaintAlreadyAssigned),
            4005 => Ok(ErrorCode::ComplaintAlreadyClosed),
            4006 => Ok(ErrorCode::MalformedIdentifier),
            4007 => Ok(ErrorCode::MalformedRecord),
            4008 => Ok(ErrorCode::UnknownStatus),
            4101 => Ok(ErrorCode::DepartmentNotFound),
            4102 => Ok(ErrorCode::RerouteReasonRequired),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9003 => Ok(ErrorCode::NetworkError),
            9004 => Ok(ErrorCode::TimeoutError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::Success.code(), 0);
        assert_eq!(ErrorCode::ValidationFailed.code(), 2);
        assert_eq!(ErrorCode::NotAuthenticated.code(), 1001);
        assert_eq!(ErrorCode::PermissionDenied.code(), 2001);
        assert_eq!(ErrorCode::ComplaintNotFound.code(), 4001);
        assert_eq!(ErrorCode::MalformedIdentifier.code(), 4006);
        assert_eq!(ErrorCode::RerouteReasonRequired.code(), 4102);
        assert_eq!(ErrorCode::InternalError.code(), 9001);
    }

    #[test]
    fn test_try_from() {
        assert_eq!(ErrorCode::try_from(0), Ok(ErrorCode::Success));
        assert_eq!(ErrorCode::try_from(4002), Ok(ErrorCode::ComplaintTitleTooLong));
        assert_eq!(ErrorCode::try_from(9004), Ok(ErrorCode::TimeoutError));
        assert_eq!(ErrorCode::try_from(1002), Err(InvalidErrorCode(1002)));
        assert_eq!(ErrorCode::try_from(4), Err(InvalidErrorCode(4)));
        assert_eq!(ErrorCode::try_from(10000), Err(InvalidErrorCode(10000)));
    }

    #[test]
    fn test_serde_as_number() {
        let json = serde_json::to_string(&ErrorCode::ComplaintNotFound).unwrap();
        assert_eq!(json, "4001");

        let code: ErrorCode = serde_json::from_str("1003").unwrap();
        assert_eq!(code, ErrorCode::TokenExpired);

        let result: Result<ErrorCode, _> = serde_json::from_str("999");
        assert!(result.is_err());
    }

    #[test]
    fn test_display_and_message() {
        assert_eq!(format!("{}", ErrorCode::MalformedIdentifier), "4006");
        assert_eq!(
            ErrorCode::MalformedIdentifier.message(),
            "Complaint identifier is malformed"
        );
        assert_eq!(
            format!("{}", InvalidErrorCode(999)),
            "invalid error code: 999"
        );
    }
}
