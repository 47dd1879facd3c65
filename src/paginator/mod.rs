//! Pagination metadata calculations
//!
//! # Overview
//!
//! [`Paginator`] holds the two inputs that define a paginated collection:
//! the total item count and the page size. From those it answers
//! [`Paginator::page_count`] and [`Paginator::page_info`] for any requested
//! page, including pages outside the valid range. The [`page_info`] free
//! function is a one-call convenience for transient use.
//!
//! Pages are 1-indexed. The first page is always 1 and the last page is
//! always at least 1, even for an empty collection.

mod types;

pub use types::{Overall, PageInfo, Position};

use crate::error::{Error, Result};
use tracing::trace;

/// The fixed index of the first page
pub const FIRST_PAGE: i64 = 1;

/// Computes pagination metadata for a collection of `total` items split into
/// pages of `items_per_page`.
///
/// Immutable after construction; every call recomputes from the two stored
/// fields, so a shared instance is safe to use from any number of threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    /// Count of items being paginated
    pub total: u64,
    /// How many items to place on each page, must be positive
    pub items_per_page: u64,
}

impl Paginator {
    /// Create a new paginator
    ///
    /// Values are stored verbatim. A zero `items_per_page` is accepted here
    /// and rejected at calculation time.
    pub fn new(total: u64, items_per_page: u64) -> Self {
        Self {
            total,
            items_per_page,
        }
    }

    /// Calculate the number of pages that exist
    ///
    /// Partial pages count as whole pages: `total=45, items_per_page=10`
    /// yields 5 pages, and `total=1, items_per_page=5` still yields 1 page.
    /// Only `total == 0` yields 0 pages.
    pub fn page_count(&self) -> Result<u64> {
        if self.items_per_page == 0 {
            return Err(Error::ZeroItemsPerPage);
        }
        Ok(self.total.div_ceil(self.items_per_page))
    }

    /// Collect pagination metadata for a given page
    ///
    /// `page` may be any integer, including values outside
    /// `[1, last_page]`. Out-of-range pages are reported on, not rejected:
    /// past the last page the previous link is clamped to the last real
    /// page, and before the first page the next link is clamped to the
    /// first. `current_page` in the result is always the raw input.
    pub fn page_info(&self, page: i64) -> Result<PageInfo> {
        let pages = self.page_count()?;

        // An empty collection still reports one boundary page, so
        // last_page >= first_page holds unconditionally.
        let last_page = if pages > 0 {
            i64::try_from(pages).map_err(|_| Error::PageCountOverflow { pages })?
        } else {
            FIRST_PAGE
        };

        // Before the first page there is nothing to go back to; past the
        // last page the previous link points at the last real page.
        let previous_page = (page > FIRST_PAGE).then(|| (page - 1).min(last_page));

        // On or past the last page there is nothing ahead; before the first
        // page the next link points at the first real page.
        let next_page = (page < last_page).then(|| (page + 1).max(FIRST_PAGE));

        trace!(page, pages, last_page, "computed page info");

        Ok(PageInfo {
            overall: Overall {
                first_page: FIRST_PAGE,
                last_page,
                pages,
                total: self.total,
            },
            page: Position {
                current_page: page,
                previous_page,
                next_page,
            },
        })
    }
}

/// Retrieve pagination metadata for a single page in one call
///
/// Equivalent to `Paginator::new(total, items_per_page).page_info(page)`.
pub fn page_info(page: i64, total: u64, items_per_page: u64) -> Result<PageInfo> {
    Paginator::new(total, items_per_page).page_info(page)
}
