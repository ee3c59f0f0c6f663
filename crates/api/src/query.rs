//! Shared query parameter types for API handlers.

use casting_core::pagination::Page;
use serde::Deserialize;

/// `?page=` for list endpoints.
///
/// Kept as a raw string so a non-integer value falls back to the first page
/// instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<String>,
}

impl PageParams {
    pub fn page(&self) -> Page {
        Page::parse(self.page.as_deref())
    }
}
