//! PostgreSQL repository for record collections.

use async_trait::async_trait;
use campus_core::types::DbId;
use sqlx::PgPool;

use super::{RecordRepository, StoreResult};
use crate::models::record::{NewRecord, Record, RecordMatcher};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, parent_id, scope_key, title, description, created_at, updated_at";

/// Provides CRUD operations against one table of records.
///
/// The table name comes from a resource kind's `COLLECTION` constant and is
/// interpolated into the SQL; it is never user input.
#[derive(Debug, Clone)]
pub struct PgRecordRepo {
    pool: PgPool,
    table: &'static str,
}

impl PgRecordRepo {
    pub fn new(pool: PgPool, table: &'static str) -> Self {
        Self { pool, table }
    }
}

#[async_trait]
impl RecordRepository for PgRecordRepo {
    async fn find_by_scope(&self, scope_key: &str) -> StoreResult<Vec<Record>> {
        let query = format!(
            "SELECT {COLUMNS} FROM {} WHERE scope_key = $1 ORDER BY id",
            self.table
        );
        let records = sqlx::query_as::<_, Record>(&query)
            .bind(scope_key)
            .fetch_all(&self.pool)
            .await?;
        Ok(records)
    }

    async fn find_by_id(&self, id: DbId) -> StoreResult<Option<Record>> {
        let query = format!("SELECT {COLUMNS} FROM {} WHERE id = $1", self.table);
        let record = sqlx::query_as::<_, Record>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(record)
    }

    async fn find_one(&self, matcher: &RecordMatcher) -> StoreResult<Option<Record>> {
        let query = format!(
            "SELECT {COLUMNS} FROM {}
             WHERE ($1::TEXT IS NULL OR scope_key = $1)
               AND ($2::TEXT IS NULL OR title = $2)
               AND ($3::TEXT IS NULL OR description = $3)
             ORDER BY id
             LIMIT 1",
            self.table
        );
        let record = sqlx::query_as::<_, Record>(&query)
            .bind(&matcher.scope_key)
            .bind(&matcher.title)
            .bind(&matcher.description)
            .fetch_optional(&self.pool)
            .await?;
        Ok(record)
    }

    async fn insert(&self, record: &NewRecord) -> StoreResult<Record> {
        let query = format!(
            "INSERT INTO {} (parent_id, scope_key, title, description)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}",
            self.table
        );
        let created = sqlx::query_as::<_, Record>(&query)
            .bind(record.parent_id)
            .bind(&record.scope_key)
            .bind(&record.title)
            .bind(&record.description)
            .fetch_one(&self.pool)
            .await?;
        Ok(created)
    }

    async fn save(&self, record: &Record) -> StoreResult<Option<Record>> {
        let query = format!(
            "UPDATE {} SET
                title = $2,
                description = $3,
                updated_at = GREATEST(NOW(), updated_at + INTERVAL '1 microsecond')
             WHERE id = $1
             RETURNING {COLUMNS}",
            self.table
        );
        let saved = sqlx::query_as::<_, Record>(&query)
            .bind(record.id)
            .bind(&record.title)
            .bind(&record.description)
            .fetch_optional(&self.pool)
            .await?;
        Ok(saved)
    }

    async fn remove(&self, id: DbId) -> StoreResult<bool> {
        let query = format!("DELETE FROM {} WHERE id = $1", self.table);
        let result = sqlx::query(&query).bind(id).execute(&self.pool).await?;
        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> StoreResult<()> {
        crate::health_check(&self.pool).await?;
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "postgres"
    }
}
