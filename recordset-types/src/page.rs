use serde::{Deserialize, Serialize};

/// One page of a larger collection.
///
/// `current_page` echoes the requested page number and is not clamped, so a
/// request for page 0 or for a page past the end is reported as such with an
/// empty `items`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResult<T> {
    pub items: Vec<T>,
    pub total_items: usize,
    pub total_pages: usize,
    pub current_page: i64,
}

impl<T> PaginatedResult<T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether a page after this one exists.
    pub fn has_next(&self) -> bool {
        self.current_page >= 0 && (self.current_page as u64) < self.total_pages as u64
    }

    /// Whether a page before this one exists.
    pub fn has_previous(&self) -> bool {
        self.current_page > 1 && (self.current_page as u64) <= self.total_pages as u64 + 1
    }
}
