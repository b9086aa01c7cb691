//! Domain primitives shared by the store and HTTP layers.

pub mod error;
pub mod resource;
pub mod types;
pub mod validation;
