//! Shared response envelope types for API handlers.
//!
//! Successful responses are `{ "success": true, ... }` with the
//! endpoint-specific fields flattened alongside the flag. Use [`Success`]
//! instead of ad-hoc `serde_json::json!` to keep the shape type-checked.

use casting_core::types::DbId;
use serde::Serialize;

/// Value of the `status` field in delete responses.
pub const DELETED: &str = "Deleted";

/// `{ "success": true, ...body }` envelope.
///
/// # Example
///
/// ```ignore
/// Ok(Json(Success::new(Created { id, identifier })))
/// ```
#[derive(Debug, Serialize)]
pub struct Success<T: Serialize> {
    pub success: bool,
    #[serde(flatten)]
    pub body: T,
}

impl<T: Serialize> Success<T> {
    pub fn new(body: T) -> Self {
        Self {
            success: true,
            body,
        }
    }
}

/// Body returned by create endpoints.
#[derive(Debug, Serialize)]
pub struct Created {
    pub id: DbId,
    pub identifier: String,
}
