//! Complaint submission (applicant side)

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult, ErrorCode};

/// Maximum title length, in UTF-16 code units
pub const TITLE_MAX_LEN: usize = 200;
/// Maximum body length, in UTF-16 code units
pub const BODY_MAX_LEN: usize = 40_000;

/// Length as counted by the web form (UTF-16 code units)
pub fn utf16_len(s: &str) -> usize {
    s.encode_utf16().count()
}

/// New complaint payload for `POST /api/applicant/complaint`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplaintSubmission {
    pub title: String,
    pub body: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lon: Option<f64>,
}

impl ComplaintSubmission {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            address_text: None,
            lat: None,
            lon: None,
        }
    }

    /// Attach the picked map location
    pub fn with_location(mut self, address: impl Into<String>, lat: f64, lon: f64) -> Self {
        self.address_text = Some(address.into());
        self.lat = Some(lat);
        self.lon = Some(lon);
        self
    }

    /// Check the form constraints before sending
    pub fn validate(&self) -> AppResult<()> {
        if self.title.trim().is_empty() {
            return Err(AppError::required("title"));
        }
        if self.body.trim().is_empty() {
            return Err(AppError::required("body"));
        }

        let title_len = utf16_len(&self.title);
        if title_len > TITLE_MAX_LEN {
            return Err(AppError::with_message(
                ErrorCode::ComplaintTitleTooLong,
                format!("title must be at most {} characters", TITLE_MAX_LEN),
            )
            .with_detail("field", "title")
            .with_detail("max", TITLE_MAX_LEN)
            .with_detail("actual", title_len));
        }

        let body_len = utf16_len(&self.body);
        if body_len > BODY_MAX_LEN {
            return Err(AppError::with_message(
                ErrorCode::ComplaintBodyTooLong,
                format!("body must be at most {} characters", BODY_MAX_LEN),
            )
            .with_detail("field", "body")
            .with_detail("max", BODY_MAX_LEN)
            .with_detail("actual", body_len));
        }

        match (self.lat, self.lon) {
            (Some(lat), _) if !(-90.0..=90.0).contains(&lat) => Err(AppError::with_message(
                ErrorCode::ValueOutOfRange,
                "lat must be within [-90, 90]",
            )
            .with_detail("field", "lat")),
            (_, Some(lon)) if !(-180.0..=180.0).contains(&lon) => Err(AppError::with_message(
                ErrorCode::ValueOutOfRange,
                "lon must be within [-180, 180]",
            )
            .with_detail("field", "lon")),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_submission() {
        let s = ComplaintSubmission::new("가로등 고장", "골목 가로등이 꺼져 있습니다")
            .with_location("서울특별시 강동구 성내로 25", 37.53, 127.12);
        assert!(s.validate().is_ok());

        let json = serde_json::to_value(&s).unwrap();
        assert_eq!(json["addressText"], "서울특별시 강동구 성내로 25");
        assert_eq!(json["lat"], 37.53);
    }

    #[test]
    fn test_location_is_optional_on_the_wire() {
        let json = serde_json::to_string(&ComplaintSubmission::new("t", "b")).unwrap();
        assert_eq!(json, r#"{"title":"t","body":"b"}"#);
    }

    #[test]
    fn test_blank_fields_rejected() {
        let err = ComplaintSubmission::new("   ", "body").validate().unwrap_err();
        assert_eq!(err.code, ErrorCode::RequiredField);

        let err = ComplaintSubmission::new("title", "\n").validate().unwrap_err();
        assert_eq!(err.details.unwrap().get("field").unwrap(), "body");
    }

    #[test]
    fn test_title_limit_counts_utf16_units() {
        let at_limit = "가".repeat(TITLE_MAX_LEN);
        assert!(ComplaintSubmission::new(at_limit, "b").validate().is_ok());

        let over = "가".repeat(TITLE_MAX_LEN + 1);
        let err = ComplaintSubmission::new(over, "b").validate().unwrap_err();
        assert_eq!(err.code, ErrorCode::ComplaintTitleTooLong);

        // Astral characters count as two units
        assert_eq!(utf16_len("😀"), 2);
        let emoji = "😀".repeat(TITLE_MAX_LEN / 2 + 1);
        assert!(ComplaintSubmission::new(emoji, "b").validate().is_err());
    }

    #[test]
    fn test_body_limit() {
        let at_limit = "a".repeat(BODY_MAX_LEN);
        assert!(ComplaintSubmission::new("t", at_limit).validate().is_ok());

        let err = ComplaintSubmission::new("t", "a".repeat(BODY_MAX_LEN + 1))
            .validate()
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ComplaintBodyTooLong);
    }

    #[test]
    fn test_coordinates_range() {
        let s = ComplaintSubmission::new("t", "b").with_location("x", 91.0, 0.0);
        assert_eq!(s.validate().unwrap_err().code, ErrorCode::ValueOutOfRange);
    }
}
