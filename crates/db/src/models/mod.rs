//! Domain model structs and DTOs.
//!
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - `Deserialize` create / update DTOs as received over HTTP
//! - Validated inputs handed to the repositories

pub mod record;
