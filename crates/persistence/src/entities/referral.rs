//! Referral entity (database row mapping).

use chrono::{DateTime, Utc};
use domain::models::referral::{Referral, ReferralStatus};
use sqlx::FromRow;
use uuid::Uuid;

/// Database enum for referral_status that maps to PostgreSQL enum type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "referral_status", rename_all = "lowercase")]
pub enum ReferralStatusDb {
    Available,
    Used,
}

impl From<ReferralStatusDb> for ReferralStatus {
    fn from(db_status: ReferralStatusDb) -> Self {
        match db_status {
            ReferralStatusDb::Available => ReferralStatus::Available,
            ReferralStatusDb::Used => ReferralStatus::Used,
        }
    }
}

impl From<ReferralStatus> for ReferralStatusDb {
    fn from(status: ReferralStatus) -> Self {
        match status {
            ReferralStatus::Available => ReferralStatusDb::Available,
            ReferralStatus::Used => ReferralStatusDb::Used,
        }
    }
}

/// Database row mapping for the referrals table.
#[derive(Debug, Clone, FromRow)]
pub struct ReferralEntity {
    pub id: i64,
    pub token: Uuid,
    pub sponsor_id: i64,
    pub user_id: Option<i64>,
    pub status: ReferralStatusDb,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ReferralEntity> for Referral {
    fn from(entity: ReferralEntity) -> Self {
        Self {
            token: entity.token,
            sponsor_id: entity.sponsor_id,
            user_id: entity.user_id,
            status: entity.status.into(),
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// Referral row joined with the redeeming user's username, for listing
/// a sponsor's tokens.
#[derive(Debug, Clone, FromRow)]
pub struct SponsorTokenEntity {
    pub token: Uuid,
    pub status: ReferralStatusDb,
    pub created_at: DateTime<Utc>,
    /// Null while the token is unredeemed (left join).
    pub username: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_db_round_trip() {
        let status: ReferralStatus = ReferralStatusDb::Available.into();
        assert_eq!(status, ReferralStatus::Available);
        let db: ReferralStatusDb = ReferralStatus::Used.into();
        assert_eq!(db, ReferralStatusDb::Used);
    }

    #[test]
    fn test_entity_to_domain() {
        let entity = ReferralEntity {
            id: 1,
            token: Uuid::new_v4(),
            sponsor_id: 7,
            user_id: Some(42),
            status: ReferralStatusDb::Used,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let referral: Referral = entity.clone().into();
        assert_eq!(referral.token, entity.token);
        assert_eq!(referral.sponsor_id, 7);
        assert_eq!(referral.user_id, Some(42));
        assert_eq!(referral.status, ReferralStatus::Used);
    }
}
