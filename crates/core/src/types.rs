/// Record identifiers are PostgreSQL BIGSERIAL values.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
