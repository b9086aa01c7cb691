//! Resource kinds served by the generic CRUD layer.
//!
//! Every resource in the system shares the same record shape (scope key,
//! title, description, optional parent). A [`ResourceKind`] only supplies the
//! names and user-facing messages that differ between resources, so one
//! service and one set of handlers can serve them all.

/// Static description of a resource collection.
pub trait ResourceKind: Send + Sync + 'static {
    /// Singular display name, e.g. `"Circular"`.
    const ENTITY: &'static str;

    /// Plural display name, e.g. `"Circulars"`.
    const PLURAL: &'static str;

    /// Table / collection name in the record store.
    const COLLECTION: &'static str;

    /// Acknowledgement returned after a successful create.
    fn created_message() -> String {
        format!("{} Added Successfully", Self::ENTITY)
    }

    /// Acknowledgement returned after a successful update.
    fn updated_message() -> String {
        format!("{} Updated", Self::ENTITY)
    }

    /// Acknowledgement returned after a successful delete.
    fn deleted_message() -> String {
        format!("{} Deleted", Self::ENTITY)
    }

    /// Conflict message for a rejected duplicate create.
    fn duplicate_message() -> String {
        format!("{} already exists", Self::ENTITY)
    }

    /// Name of the store-level unique index over the duplicate-key tuple.
    fn unique_constraint() -> String {
        format!("uq_{}_scope_title_description", Self::COLLECTION)
    }
}

/// Notices attached to an academic paper or department.
#[derive(Debug, Clone, Copy)]
pub struct Circular;

impl ResourceKind for Circular {
    const ENTITY: &'static str = "Circular";
    const PLURAL: &'static str = "Circulars";
    const COLLECTION: &'static str = "circulars";
}
