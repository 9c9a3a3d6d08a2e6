//! Waiting-list repository for database operations.

use sqlx::PgPool;

use crate::entities::WaitingListEntryEntity;
use crate::metrics::QueryTimer;

/// Repository for waiting-list database operations.
#[derive(Clone)]
pub struct WaitingListRepository {
    pool: PgPool,
}

impl WaitingListRepository {
    /// Creates a new WaitingListRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Append a signup to the waiting list.
    ///
    /// The table is append-only; duplicates are allowed.
    pub async fn create_entry(
        &self,
        email: &str,
        phone: &str,
        user_id: Option<i64>,
    ) -> Result<WaitingListEntryEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_waiting_list_entry");
        let result = sqlx::query_as::<_, WaitingListEntryEntity>(
            r#"
            INSERT INTO waiting_list (email, phone, user_id)
            VALUES ($1, $2, $3)
            RETURNING id, email, phone, user_id, created_at
            "#,
        )
        .bind(email)
        .bind(phone)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Count entries for the given email.
    pub async fn count_by_email(&self, email: &str) -> Result<i64, sqlx::Error> {
        let timer = QueryTimer::new("count_waiting_list_by_email");
        let result = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*) FROM waiting_list WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }
}

#[cfg(test)]
mod tests {
    // Note: WaitingListRepository tests require a database connection and are
    // covered by the integration tests in crates/api/tests.
}
