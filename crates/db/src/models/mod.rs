//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - `Deserialize` + `Validate` request bodies for create and partial update
//! - Normalized insert/change structs consumed by the repositories

pub mod actor;
pub mod movie;
