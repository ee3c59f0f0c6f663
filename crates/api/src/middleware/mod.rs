//! Authentication and authorization extractors.
//!
//! - [`auth::AuthUser`] -- Verifies the bearer token and exposes its permissions.
//! - [`rbac::Authorized`] -- Requires one specific permission, named by a marker type.

pub mod auth;
pub mod rbac;
