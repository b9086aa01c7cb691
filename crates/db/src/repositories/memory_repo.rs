//! In-process record store.
//!
//! Mirrors the PostgreSQL schema closely enough for the service and HTTP
//! tests: sequential ids, equal timestamps on insert, a strictly increasing
//! `updated_at` on save, and the partial duplicate-key index that only
//! covers rows never saved since insert.

use std::collections::BTreeMap;

use async_trait::async_trait;
use campus_core::types::{DbId, Timestamp};
use chrono::{Duration, Utc};
use tokio::sync::RwLock;

use super::{RecordRepository, StoreError, StoreResult};
use crate::models::record::{NewRecord, Record, RecordMatcher};

#[derive(Debug, Default)]
struct Collection {
    last_id: DbId,
    rows: BTreeMap<DbId, Record>,
}

/// A record collection held in memory behind an async `RwLock`.
#[derive(Debug)]
pub struct MemoryRecordRepo {
    name: &'static str,
    inner: RwLock<Collection>,
}

impl MemoryRecordRepo {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            inner: RwLock::new(Collection::default()),
        }
    }

    fn unique_violation(&self) -> StoreError {
        StoreError::UniqueViolation {
            constraint: format!("uq_{}_scope_title_description", self.name),
        }
    }
}

/// Whether `row` still holds its insert-time claim on `record`'s key tuple.
fn claims(row: &Record, record: &NewRecord) -> bool {
    row.updated_at == row.created_at
        && row.scope_key == record.scope_key
        && row.title == record.title
        && row.description == record.description
}

/// `updated_at` always moves forward, even within one clock tick.
fn next_timestamp(previous: Timestamp) -> Timestamp {
    Utc::now().max(previous + Duration::microseconds(1))
}

#[async_trait]
impl RecordRepository for MemoryRecordRepo {
    async fn find_by_scope(&self, scope_key: &str) -> StoreResult<Vec<Record>> {
        let inner = self.inner.read().await;
        Ok(inner
            .rows
            .values()
            .filter(|r| r.scope_key == scope_key)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: DbId) -> StoreResult<Option<Record>> {
        Ok(self.inner.read().await.rows.get(&id).cloned())
    }

    async fn find_one(&self, matcher: &RecordMatcher) -> StoreResult<Option<Record>> {
        let inner = self.inner.read().await;
        Ok(inner.rows.values().find(|r| matcher.matches(r)).cloned())
    }

    async fn insert(&self, record: &NewRecord) -> StoreResult<Record> {
        let mut inner = self.inner.write().await;
        if inner.rows.values().any(|r| claims(r, record)) {
            return Err(self.unique_violation());
        }

        inner.last_id += 1;
        let now = Utc::now();
        let created = Record {
            id: inner.last_id,
            parent_id: record.parent_id,
            scope_key: record.scope_key.clone(),
            title: record.title.clone(),
            description: record.description.clone(),
            created_at: now,
            updated_at: now,
        };
        inner.rows.insert(created.id, created.clone());
        Ok(created)
    }

    async fn save(&self, record: &Record) -> StoreResult<Option<Record>> {
        let mut inner = self.inner.write().await;
        let Some(row) = inner.rows.get_mut(&record.id) else {
            return Ok(None);
        };
        row.title = record.title.clone();
        row.description = record.description.clone();
        row.updated_at = next_timestamp(row.updated_at);
        Ok(Some(row.clone()))
    }

    async fn remove(&self, id: DbId) -> StoreResult<bool> {
        Ok(self.inner.write().await.rows.remove(&id).is_some())
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}
