//! Waiting-list domain models.
//!
//! Signups are append-only; entries are never mutated or deleted by this
//! service.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

lazy_static::lazy_static! {
    static ref PHONE_REGEX: regex::Regex =
        regex::Regex::new(r"^\+?[0-9]{7,15}$").unwrap();
}

/// Represents a waiting-list signup.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct WaitingListEntry {
    pub email: String,
    pub phone: String,
    pub user_id: Option<i64>,
    pub created_at: DateTime<Utc>,
}

/// Request to join the waiting list.
///
/// Accepted both as a JSON body (POST) and as query parameters (GET).
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct JoinQueueRequest {
    #[validate(email(message = "email must be a valid email address"))]
    pub email: String,

    /// E.164-style number, optional leading `+`.
    #[validate(regex(
        path = *PHONE_REGEX,
        message = "phone must be 7-15 digits with an optional leading +"
    ))]
    pub phone: String,

    #[validate(range(min = 1, message = "user_id must be a positive user id"))]
    pub user_id: Option<i64>,
}

/// Response after joining the waiting list.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct JoinQueueResponse {
    pub success: bool,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::faker::internet::en::SafeEmail;
    use fake::Fake;

    fn request(email: &str, phone: &str) -> JoinQueueRequest {
        JoinQueueRequest {
            email: email.to_string(),
            phone: phone.to_string(),
            user_id: None,
        }
    }

    #[test]
    fn test_join_queue_request_valid() {
        let email: String = SafeEmail().fake();
        assert!(request(&email, "+421900123456").validate().is_ok());
        assert!(request(&email, "0900123456").validate().is_ok());
    }

    #[test]
    fn test_join_queue_request_rejects_bad_email() {
        assert!(request("not-an-email", "+421900123456").validate().is_err());
        assert!(request("", "+421900123456").validate().is_err());
    }

    #[test]
    fn test_join_queue_request_rejects_bad_phone() {
        assert!(request("a@example.com", "12345").validate().is_err()); // Too short
        assert!(request("a@example.com", "call me maybe").validate().is_err());
        assert!(request("a@example.com", "+4219001234567890").validate().is_err()); // Too long
    }

    #[test]
    fn test_join_queue_request_optional_user_id() {
        let mut req = request("a@example.com", "+421900123456");
        req.user_id = Some(42);
        assert!(req.validate().is_ok());

        req.user_id = Some(0);
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_join_queue_request_deserializes_without_user_id() {
        let req: JoinQueueRequest =
            serde_json::from_str(r#"{"email": "a@example.com", "phone": "+421900123456"}"#)
                .unwrap();
        assert!(req.user_id.is_none());
    }
}
