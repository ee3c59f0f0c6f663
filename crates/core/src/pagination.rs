//! Fixed-size, 1-indexed pagination over an in-memory result set.

/// Number of records returned per page by list endpoints.
pub const PAGE_SIZE: usize = 6;

/// A 1-based page number.
///
/// Page `n` covers items `[(n - 1) * PAGE_SIZE, n * PAGE_SIZE)`. Pages past
/// the end of the data, and page numbers below 1, select nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page(i64);

impl Page {
    pub fn new(number: i64) -> Self {
        Self(number)
    }

    /// Parse a raw `page` query value. Absent or non-integer input falls
    /// back to page 1.
    pub fn parse(raw: Option<&str>) -> Self {
        raw.and_then(|value| value.trim().parse::<i64>().ok())
            .map(Self)
            .unwrap_or_default()
    }

    pub fn number(self) -> i64 {
        self.0
    }

    /// The selected window of `items`.
    pub fn slice<T>(self, items: &[T]) -> &[T] {
        let Some(index) = self.0.checked_sub(1).and_then(|i| usize::try_from(i).ok()) else {
            return &[];
        };
        let start = index.saturating_mul(PAGE_SIZE).min(items.len());
        let end = start.saturating_add(PAGE_SIZE).min(items.len());
        &items[start..end]
    }
}

impl Default for Page {
    fn default() -> Self {
        Self(1)
    }
}
