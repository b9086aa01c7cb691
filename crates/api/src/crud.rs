//! Generic CRUD service shared by every record resource.
//!
//! [`CrudService`] owns the lookup and mutation rules; handlers only adapt
//! HTTP extractors to it. All request-shape checks happen before the store is
//! touched.

use std::marker::PhantomData;
use std::sync::Arc;

use campus_core::error::CoreError;
use campus_core::resource::ResourceKind;
use campus_core::types::DbId;
use campus_core::validation::{parse_id, require_param, PARAMS_MISSING};
use campus_db::models::record::{CreateRecord, Record, RecordMatcher, UpdateRecord};
use campus_db::repositories::{RecordRepository, StoreError};

use crate::error::{AppError, AppResult};
use crate::response::MessageResponse;

/// CRUD operations for the resource kind `K`, backed by an injected store.
pub struct CrudService<K: ResourceKind> {
    repo: Arc<dyn RecordRepository>,
    kind: PhantomData<fn() -> K>,
}

impl<K: ResourceKind> CrudService<K> {
    pub fn new(repo: Arc<dyn RecordRepository>) -> Self {
        Self {
            repo,
            kind: PhantomData,
        }
    }

    /// All records in `scope_key`. An empty match is a not-found error.
    pub async fn list_by_scope(&self, scope_key: &str) -> AppResult<Vec<Record>> {
        let scope_key = require_param(scope_key, PARAMS_MISSING)?;

        let records = self.repo.find_by_scope(scope_key).await?;
        if records.is_empty() {
            return Err(CoreError::ScopeEmpty {
                entity: K::PLURAL,
                scope: scope_key.to_string(),
            }
            .into());
        }
        Ok(records)
    }

    pub async fn get_by_id(&self, raw_id: &str) -> AppResult<Record> {
        let id = parse_id(K::ENTITY, require_param(raw_id, PARAMS_MISSING)?)?;
        self.find_existing(id).await
    }

    /// Insert a new record unless an identical `(scope_key, title,
    /// description)` already exists. Acknowledges with the new id only.
    pub async fn create(&self, input: CreateRecord) -> AppResult<MessageResponse> {
        let new = input.validated()?;

        if self
            .repo
            .find_one(&RecordMatcher::duplicate_of(&new))
            .await?
            .is_some()
        {
            tracing::warn!(entity = K::ENTITY, scope_key = %new.scope_key, "Duplicate create rejected");
            return Err(CoreError::Conflict(K::duplicate_message()).into());
        }

        // A concurrent create can slip past the check above; the unique index
        // catches it.
        let record = match self.repo.insert(&new).await {
            Ok(record) => record,
            Err(StoreError::UniqueViolation { constraint }) => {
                tracing::warn!(entity = K::ENTITY, %constraint, "Duplicate insert rejected by store");
                return Err(CoreError::Conflict(K::duplicate_message()).into());
            }
            Err(err) => return Err(err.into()),
        };

        tracing::info!(
            entity = K::ENTITY,
            id = record.id,
            scope_key = %record.scope_key,
            "Record created"
        );
        Ok(MessageResponse::with_id(K::created_message(), record.id))
    }

    /// Replace title and description. The duplicate rule is not re-checked
    /// here.
    pub async fn update(&self, raw_id: &str, input: UpdateRecord) -> AppResult<MessageResponse> {
        let id = parse_id(K::ENTITY, require_param(raw_id, PARAMS_MISSING)?)?;
        let edit = input.validated()?;

        let mut record = self.find_existing(id).await?;
        record.apply(edit);

        let saved = self
            .repo
            .save(&record)
            .await?
            .ok_or_else(|| self.not_found(id))?;

        tracing::info!(entity = K::ENTITY, id = saved.id, "Record updated");
        Ok(MessageResponse::new(K::updated_message()))
    }

    /// Hard-delete a record. Records pointing at it through `parent_id` are
    /// left as they are.
    pub async fn delete(&self, raw_id: &str) -> AppResult<MessageResponse> {
        let required = format!("{} ID required", K::ENTITY);
        let id = parse_id(K::ENTITY, require_param(raw_id, &required)?)?;

        self.find_existing(id).await?;
        if !self.repo.remove(id).await? {
            return Err(self.not_found(id));
        }

        tracing::info!(entity = K::ENTITY, id, "Record deleted");
        Ok(MessageResponse::new(K::deleted_message()))
    }

    /// Whether the backing store answers.
    pub async fn ping(&self) -> bool {
        match self.repo.ping().await {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(entity = K::ENTITY, error = %err, "Record store ping failed");
                false
            }
        }
    }

    pub fn store_backend(&self) -> &'static str {
        self.repo.backend()
    }

    async fn find_existing(&self, id: DbId) -> AppResult<Record> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| self.not_found(id))
    }

    fn not_found(&self, id: DbId) -> AppError {
        AppError::Core(CoreError::NotFound {
            entity: K::ENTITY,
            id,
        })
    }
}
