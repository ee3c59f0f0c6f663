//! Casting agency domain primitives.
//!
//! Everything here is pure logic with no database or HTTP dependencies:
//! identifiers, the error taxonomy, gender codes, the external release-date
//! format, pagination, and permission names.

pub mod error;
pub mod gender;
pub mod pagination;
pub mod permissions;
pub mod release_date;
pub mod types;
