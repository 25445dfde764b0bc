use sqlx::PgPool;

use crate::app_error::AppError;

pub mod waitlist_entry;

#[derive(Clone)]
pub struct PostgresPersistence {
    pool: PgPool,
}

impl PostgresPersistence {
    pub fn new(pool: PgPool) -> Self {
        PostgresPersistence { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            // A unique index on email is optional; when present, a lost race
            // surfaces here rather than at the existence check.
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                AppError::AlreadyRegistered
            }
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => {
                tracing::error!(error = ?err, "Database pool unavailable");
                AppError::StoreUnavailable("Connection pool unavailable".into())
            }
            _ => {
                // Log the actual error for debugging, but don't expose details
                tracing::error!(error = ?err, "Database error");
                AppError::StoreUnavailable("Database operation failed".into())
            }
        }
    }
}
