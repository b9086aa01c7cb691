//! Repository layer.
//!
//! [`RecordRepository`] is the persistence seam used by the CRUD service.
//! Each implementation is bound to a single collection at construction:
//!
//! - [`PgRecordRepo`]: PostgreSQL through `sqlx`.
//! - [`MemoryRecordRepo`]: in-process store for tests and database-less runs.

pub mod memory_repo;
pub mod record_repo;

use async_trait::async_trait;
use campus_core::types::DbId;

use crate::models::record::{NewRecord, Record, RecordMatcher};

pub use memory_repo::MemoryRecordRepo;
pub use record_repo::PgRecordRepo;

/// Errors raised by a record store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A write would break a unique index (constraint names start with `uq_`).
    #[error("Duplicate value violates unique constraint: {constraint}")]
    UniqueViolation { constraint: String },

    #[error("Database error: {0}")]
    Database(sqlx::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

impl From<sqlx::Error> for StoreError {
    /// PostgreSQL unique violations (SQLSTATE 23505) on `uq_` constraints
    /// become [`StoreError::UniqueViolation`]; everything else is passed on.
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.code().as_deref() == Some("23505") {
                if let Some(constraint) = db_err.constraint() {
                    if constraint.starts_with("uq_") {
                        return StoreError::UniqueViolation {
                            constraint: constraint.to_string(),
                        };
                    }
                }
            }
        }
        StoreError::Database(err)
    }
}

/// Persistence operations for one record collection.
#[async_trait]
pub trait RecordRepository: Send + Sync {
    /// All records whose `scope_key` equals `scope_key`, in id order.
    async fn find_by_scope(&self, scope_key: &str) -> StoreResult<Vec<Record>>;

    async fn find_by_id(&self, id: DbId) -> StoreResult<Option<Record>>;

    /// First record (lowest id) satisfying `matcher`.
    async fn find_one(&self, matcher: &RecordMatcher) -> StoreResult<Option<Record>>;

    /// Insert a record, assigning id and equal `created_at` / `updated_at`.
    async fn insert(&self, record: &NewRecord) -> StoreResult<Record>;

    /// Persist the mutable fields of `record` and refresh `updated_at`.
    ///
    /// Returns `None` if the record no longer exists.
    async fn save(&self, record: &Record) -> StoreResult<Option<Record>>;

    /// Permanently delete a record. Returns `true` if a row was removed.
    async fn remove(&self, id: DbId) -> StoreResult<bool>;

    /// Check that the store is reachable.
    async fn ping(&self) -> StoreResult<()>;

    /// Short backend name reported by the health endpoint.
    fn backend(&self) -> &'static str;
}
