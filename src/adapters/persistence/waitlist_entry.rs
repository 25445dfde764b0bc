use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{Postgres, pool::PoolConnection};
use uuid::Uuid;

use crate::{
    adapters::persistence::PostgresPersistence,
    app_error::{AppError, AppResult},
    domain::entities::waitlist_entry::WaitlistEntry,
    use_cases::waitlist::{WaitlistSession, WaitlistStore},
};

// Waitlist entry as stored in the db.
#[derive(sqlx::FromRow, Debug)]
struct WaitlistEntryDb {
    id: Uuid,
    name: String,
    email: String,
    created_at: DateTime<Utc>,
}

impl From<WaitlistEntryDb> for WaitlistEntry {
    fn from(row: WaitlistEntryDb) -> Self {
        WaitlistEntry {
            id: row.id,
            name: row.name,
            email: row.email,
            created_at: row.created_at,
        }
    }
}

/// One pooled connection. Returned to the pool when dropped.
pub struct PgWaitlistSession {
    conn: PoolConnection<Postgres>,
}

#[async_trait]
impl WaitlistStore for PostgresPersistence {
    async fn open(&self) -> AppResult<Box<dyn WaitlistSession>> {
        let conn = self.pool().acquire().await.map_err(AppError::from)?;
        Ok(Box::new(PgWaitlistSession { conn }))
    }
}

#[async_trait]
impl WaitlistSession for PgWaitlistSession {
    async fn find_by_email(&mut self, email: &str) -> AppResult<Option<WaitlistEntry>> {
        let row = sqlx::query_as::<_, WaitlistEntryDb>(
            r#"
            SELECT id, name, email, created_at
            FROM waitlist_entries
            WHERE email = $1
            LIMIT 1
            "#,
        )
        .bind(email)
        .fetch_optional(&mut *self.conn)
        .await
        .map_err(AppError::from)?;

        Ok(row.map(WaitlistEntry::from))
    }

    async fn insert(&mut self, entry: &WaitlistEntry) -> AppResult<()> {
        sqlx::query(
            r#"
            INSERT INTO waitlist_entries (id, name, email, created_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(entry.id)
        .bind(&entry.name)
        .bind(&entry.email)
        .bind(entry.created_at)
        .execute(&mut *self.conn)
        .await
        .map_err(AppError::from)?;

        Ok(())
    }
}
