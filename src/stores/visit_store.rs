use async_trait::async_trait;
use chrono::NaiveDateTime;
use futures_util::TryStreamExt;
use sqlx::MySqlPool;

use crate::db::schema::{INSERT_VISIT_SQL, RECENT_VISITS_SQL, VISITS};
use crate::error::Result;
use crate::models::visit::Visit;

/// Append-only log of masked visitor addresses.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VisitStore: Send + Sync {
    /// Create the `visits` table if it does not exist yet. Idempotent.
    async fn ensure_table(&self) -> Result<()>;

    async fn insert(&self, user_ip: &str, timestamp: NaiveDateTime) -> Result<()>;

    /// Newest visits first, at most `limit` of them.
    async fn recent(&self, limit: u32) -> Result<Vec<Visit>>;

    async fn ping(&self) -> Result<()>;
}

pub struct MySqlVisitStore {
    pool: MySqlPool,
}

impl MySqlVisitStore {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VisitStore for MySqlVisitStore {
    async fn ensure_table(&self) -> Result<()> {
        sqlx::query(&VISITS.create_if_absent_sql())
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn insert(&self, user_ip: &str, timestamp: NaiveDateTime) -> Result<()> {
        sqlx::query(INSERT_VISIT_SQL)
            .bind(user_ip)
            .bind(timestamp)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn recent(&self, limit: u32) -> Result<Vec<Visit>> {
        let visits = sqlx::query_as::<_, Visit>(RECENT_VISITS_SQL)
            .bind(limit)
            .fetch(&self.pool)
            .try_collect::<Vec<Visit>>()
            .await?;
        Ok(visits)
    }

    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
