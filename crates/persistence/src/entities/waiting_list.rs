//! Waiting-list entity (database row mapping).

use chrono::{DateTime, Utc};
use domain::models::waiting_list::WaitingListEntry;
use sqlx::FromRow;

/// Database row mapping for the waiting_list table.
#[derive(Debug, Clone, FromRow)]
pub struct WaitingListEntryEntity {
    pub id: i64,
    pub email: String,
    pub phone: String,
    pub user_id: Option<i64>,
    pub created_at: DateTime<Utc>,
}

impl From<WaitingListEntryEntity> for WaitingListEntry {
    fn from(entity: WaitingListEntryEntity) -> Self {
        Self {
            email: entity.email,
            phone: entity.phone,
            user_id: entity.user_id,
            created_at: entity.created_at,
        }
    }
}
