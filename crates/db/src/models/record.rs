//! Record entity model and DTOs.
//!
//! Every resource collection (circulars and any future kind) stores rows of
//! this shape; the collection name comes from the resource kind.

use campus_core::error::CoreError;
use campus_core::types::{DbId, Timestamp};
use campus_core::validation::{missing_fields, ALL_FIELDS_REQUIRED, FIELDS_MISSING};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from a record collection (e.g. the `circulars` table).
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Record {
    pub id: DbId,
    pub parent_id: Option<DbId>,
    pub scope_key: String,
    pub title: String,
    pub description: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Record {
    /// Overwrite the mutable fields. `scope_key` and `parent_id` never change.
    pub fn apply(&mut self, edit: RecordEdit) {
        self.title = edit.title;
        self.description = edit.description;
    }
}

/// DTO for creating a record, as received over HTTP.
///
/// Every field is optional at the serde level so that a missing field is
/// reported as a bad request naming the field rather than a parse failure.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateRecord {
    #[serde(alias = "scopeKey")]
    #[validate(required, length(min = 1))]
    pub scope_key: Option<String>,
    #[validate(required, length(min = 1))]
    pub title: Option<String>,
    #[validate(required, length(min = 1))]
    pub description: Option<String>,
    #[serde(alias = "parentId")]
    pub parent_id: Option<DbId>,
}

impl CreateRecord {
    /// Check required fields and produce the insert payload.
    pub fn validated(self) -> Result<NewRecord, CoreError> {
        self.validate()
            .map_err(|e| missing_fields(FIELDS_MISSING, &e))?;
        match (self.scope_key, self.title, self.description) {
            (Some(scope_key), Some(title), Some(description)) => Ok(NewRecord {
                parent_id: self.parent_id,
                scope_key,
                title,
                description,
            }),
            _ => Err(CoreError::Validation(FIELDS_MISSING.to_string())),
        }
    }
}

/// DTO for updating a record. Title and description must be sent together.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateRecord {
    #[validate(required, length(min = 1))]
    pub title: Option<String>,
    #[validate(required, length(min = 1))]
    pub description: Option<String>,
}

impl UpdateRecord {
    /// Check required fields and produce the edit payload.
    pub fn validated(self) -> Result<RecordEdit, CoreError> {
        self.validate()
            .map_err(|e| missing_fields(ALL_FIELDS_REQUIRED, &e))?;
        match (self.title, self.description) {
            (Some(title), Some(description)) => Ok(RecordEdit { title, description }),
            _ => Err(CoreError::Validation(ALL_FIELDS_REQUIRED.to_string())),
        }
    }
}

/// Validated insert payload. Id and timestamps are assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRecord {
    pub parent_id: Option<DbId>,
    pub scope_key: String,
    pub title: String,
    pub description: String,
}

/// Validated replacement values for an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordEdit {
    pub title: String,
    pub description: String,
}

/// Field-equality filter for `find_one`. `None` fields match anything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordMatcher {
    pub scope_key: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
}

impl RecordMatcher {
    /// Matcher over the duplicate-key tuple `(scope_key, title, description)`.
    pub fn duplicate_of(record: &NewRecord) -> Self {
        Self {
            scope_key: Some(record.scope_key.clone()),
            title: Some(record.title.clone()),
            description: Some(record.description.clone()),
        }
    }

    pub fn matches(&self, record: &Record) -> bool {
        fn field(want: &Option<String>, have: &str) -> bool {
            want.as_deref().map_or(true, |w| w == have)
        }
        field(&self.scope_key, &record.scope_key)
            && field(&self.title, &record.title)
            && field(&self.description, &record.description)
    }
}
