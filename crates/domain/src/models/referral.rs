//! Referral domain models.
//!
//! A referral starts `available` with no redeeming user and transitions to
//! `used` exactly once, when a new user redeems the token.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Lifecycle status of a referral token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReferralStatus {
    Available,
    Used,
}

impl ReferralStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReferralStatus::Available => "available",
            ReferralStatus::Used => "used",
        }
    }
}

impl std::fmt::Display for ReferralStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a status filter string is not recognized.
#[derive(Debug, thiserror::Error)]
#[error("Invalid status filter '{0}'. Expected 'available', 'used' or 'all'")]
pub struct InvalidStatusFilter(pub String);

/// Token listing filter parsed from the `status` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    All,
    Only(ReferralStatus),
}

impl StatusFilter {
    /// Parses the optional `status` query parameter.
    ///
    /// An absent, empty or `"all"` value means no filtering.
    pub fn parse(raw: Option<&str>) -> Result<Self, InvalidStatusFilter> {
        match raw {
            None | Some("") | Some("all") => Ok(StatusFilter::All),
            Some("available") => Ok(StatusFilter::Only(ReferralStatus::Available)),
            Some("used") => Ok(StatusFilter::Only(ReferralStatus::Used)),
            Some(other) => Err(InvalidStatusFilter(other.to_string())),
        }
    }
}

/// Represents a referral token.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct Referral {
    pub token: Uuid,
    pub sponsor_id: i64,
    pub user_id: Option<i64>,
    pub status: ReferralStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request to grant a new referral token.
///
/// Accepted both as a JSON body (POST) and as query parameters (GET).
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct GrantRequest {
    /// The sponsoring user issuing the token.
    #[validate(range(min = 1, message = "sponsor_id must be a positive user id"))]
    pub sponsor_id: i64,

    /// Accepted and echoed back; not persisted or enforced.
    pub expiry: Option<String>,
}

/// Response after granting a referral token.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct GrantResponse {
    pub token: Uuid,
    pub status: ReferralStatus,
    pub expiry: Option<String>,
}

/// One token in a sponsor's listing.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct TokenSummary {
    pub token: Uuid,
    /// Creation date truncated to `YYYY-MM-DD`.
    pub created: String,
    /// Username of the redeeming user, if any.
    pub username: Option<String>,
    pub status: ReferralStatus,
}

/// Response for listing a sponsor's tokens.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct CheckTokensResponse {
    pub tokens: Vec<TokenSummary>,
}

/// Response after redeeming a referral token.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct VerifyResponse {
    pub verified: bool,
    pub sponsor_id: i64,
    pub updated: DateTime<Utc>,
}

/// Response for the referred-status lookup.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct IsReferredResponse {
    pub referred: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serde_lowercase() {
        assert_eq!(
            serde_json::to_string(&ReferralStatus::Available).unwrap(),
            "\"available\""
        );
        assert_eq!(
            serde_json::to_string(&ReferralStatus::Used).unwrap(),
            "\"used\""
        );
        let status: ReferralStatus = serde_json::from_str("\"used\"").unwrap();
        assert_eq!(status, ReferralStatus::Used);
    }

    #[test]
    fn test_status_display() {
        assert_eq!(ReferralStatus::Available.to_string(), "available");
        assert_eq!(ReferralStatus::Used.to_string(), "used");
    }

    #[test]
    fn test_status_filter_absent_means_all() {
        assert_eq!(StatusFilter::parse(None).unwrap(), StatusFilter::All);
        assert_eq!(StatusFilter::parse(Some("")).unwrap(), StatusFilter::All);
        assert_eq!(StatusFilter::parse(Some("all")).unwrap(), StatusFilter::All);
    }

    #[test]
    fn test_status_filter_specific() {
        assert_eq!(
            StatusFilter::parse(Some("available")).unwrap(),
            StatusFilter::Only(ReferralStatus::Available)
        );
        assert_eq!(
            StatusFilter::parse(Some("used")).unwrap(),
            StatusFilter::Only(ReferralStatus::Used)
        );
    }

    #[test]
    fn test_status_filter_rejects_unknown() {
        let err = StatusFilter::parse(Some("expired")).unwrap_err();
        assert!(err.to_string().contains("expired"));
    }

    #[test]
    fn test_grant_request_validation() {
        use validator::Validate;

        let valid = GrantRequest {
            sponsor_id: 7,
            expiry: None,
        };
        assert!(valid.validate().is_ok());

        let zero = GrantRequest {
            sponsor_id: 0,
            expiry: None,
        };
        assert!(zero.validate().is_err());

        let negative = GrantRequest {
            sponsor_id: -3,
            expiry: Some("30d".to_string()),
        };
        assert!(negative.validate().is_err());
    }

    #[test]
    fn test_grant_request_from_query_style_json() {
        // Same shape arrives via GET query deserialization.
        let request: GrantRequest =
            serde_json::from_str(r#"{"sponsor_id": 7, "expiry": "30d"}"#).unwrap();
        assert_eq!(request.sponsor_id, 7);
        assert_eq!(request.expiry.as_deref(), Some("30d"));
    }

    #[test]
    fn test_grant_response_echoes_expiry() {
        let response = GrantResponse {
            token: Uuid::new_v4(),
            status: ReferralStatus::Available,
            expiry: Some("14d".to_string()),
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["status"], "available");
        assert_eq!(json["expiry"], "14d");
    }

    #[test]
    fn test_token_summary_null_username_for_unredeemed() {
        let summary = TokenSummary {
            token: Uuid::new_v4(),
            created: "2026-08-26".to_string(),
            username: None,
            status: ReferralStatus::Available,
        };
        let json = serde_json::to_value(&summary).unwrap();
        assert!(json["username"].is_null());
    }
}
