//! Referral repository for database operations.

use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::{ReferralEntity, ReferralStatusDb, SponsorTokenEntity};
use crate::metrics::QueryTimer;

/// Repository for referral-related database operations.
#[derive(Clone)]
pub struct ReferralRepository {
    pool: PgPool,
}

impl ReferralRepository {
    /// Creates a new ReferralRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Returns a reference to the connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Create a new referral in the `available` state.
    pub async fn create_referral(
        &self,
        sponsor_id: i64,
        token: Uuid,
    ) -> Result<ReferralEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_referral");
        let result = sqlx::query_as::<_, ReferralEntity>(
            r#"
            INSERT INTO referrals (token, sponsor_id)
            VALUES ($1, $2)
            RETURNING id, token, sponsor_id, user_id, status, created_at, updated_at
            "#,
        )
        .bind(token)
        .bind(sponsor_id)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Find a referral by its token.
    pub async fn find_by_token(
        &self,
        token: Uuid,
    ) -> Result<Option<ReferralEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_referral_by_token");
        let result = sqlx::query_as::<_, ReferralEntity>(
            r#"
            SELECT id, token, sponsor_id, user_id, status, created_at, updated_at
            FROM referrals
            WHERE token = $1
            "#,
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// List a sponsor's tokens, left-joined to the redeeming user's name.
    ///
    /// `status` of None means no filter.
    pub async fn list_sponsor_tokens(
        &self,
        sponsor_id: i64,
        status: Option<ReferralStatusDb>,
    ) -> Result<Vec<SponsorTokenEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_sponsor_tokens");
        let result = sqlx::query_as::<_, SponsorTokenEntity>(
            r#"
            SELECT r.token, r.status, r.created_at, u.username
            FROM referrals r
            LEFT JOIN users u ON r.user_id = u.id
            WHERE r.sponsor_id = $1
              AND ($2::referral_status IS NULL OR r.status = $2)
            ORDER BY r.created_at DESC
            "#,
        )
        .bind(sponsor_id)
        .bind(status)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Redeem a referral for the given user.
    ///
    /// The transition is a single conditional UPDATE so two concurrent
    /// redemption attempts for the same token cannot both succeed; the
    /// database's row-level atomicity is the only guard. Returns None when
    /// no row matched the guard (token absent or already redeemed).
    pub async fn redeem(
        &self,
        token: Uuid,
        user_id: i64,
    ) -> Result<Option<ReferralEntity>, sqlx::Error> {
        let timer = QueryTimer::new("redeem_referral");
        let result = sqlx::query_as::<_, ReferralEntity>(
            r#"
            UPDATE referrals
            SET status = 'used', user_id = $2, updated_at = now()
            WHERE token = $1 AND status = 'available' AND user_id IS NULL
            RETURNING id, token, sponsor_id, user_id, status, created_at, updated_at
            "#,
        )
        .bind(token)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Check whether the given user was redeemed into the system.
    pub async fn is_referred(&self, user_id: i64) -> Result<bool, sqlx::Error> {
        let timer = QueryTimer::new("is_user_referred");
        let result = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM referrals
                WHERE user_id = $1 AND status = 'used'
            )
            "#,
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }
}

#[cfg(test)]
mod tests {
    // Note: ReferralRepository tests require a database connection and are
    // covered by the integration tests in crates/api/tests.
}
