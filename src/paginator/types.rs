//! Pagination result types
//!
//! The nested record returned by page info calculations. The shape is part
//! of the public contract: consumers serialize it straight into API
//! responses, and absent links must appear as explicit nulls rather than
//! omitted keys.

use serde::{Deserialize, Serialize};

/// Pagination metadata for a requested page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    /// Collection-wide metadata, independent of the requested page
    pub overall: Overall,
    /// Metadata relative to the requested page
    pub page: Position,
}

/// Collection-wide pagination metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Overall {
    /// Index of the first page, always 1
    pub first_page: i64,
    /// Index of the last page, at least 1 even for an empty collection
    pub last_page: i64,
    /// Number of pages, 0 only when the collection is empty
    pub pages: u64,
    /// Count of items being paginated
    pub total: u64,
}

/// Metadata relative to the requested page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    /// The requested page, echoed back unclamped
    pub current_page: i64,
    /// Page before the current one, `None` on or before the first page
    pub previous_page: Option<i64>,
    /// Page after the current one, `None` on or past the last page
    pub next_page: Option<i64>,
}

impl Position {
    /// Check if a previous page link exists
    pub fn has_previous(&self) -> bool {
        self.previous_page.is_some()
    }

    /// Check if a next page link exists
    pub fn has_next(&self) -> bool {
        self.next_page.is_some()
    }
}
