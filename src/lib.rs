//! # api-pagination
//!
//! Pagination metadata calculations for API layers.
//!
//! Given a total item count, a page size, and a requested page index, this
//! crate computes the page count, boundary pages, and previous/next links
//! needed to render pagination headers or link sections. It is a pure
//! calculation helper: no data retrieval, no storage, no HTTP.
//!
//! ## Quick Start
//!
//! ```rust
//! use api_pagination::Paginator;
//!
//! let paginator = Paginator::new(50, 10);
//! let info = paginator.page_info(2)?;
//!
//! assert_eq!(info.overall.pages, 5);
//! assert_eq!(info.overall.last_page, 5);
//! assert_eq!(info.page.previous_page, Some(1));
//! assert_eq!(info.page.next_page, Some(3));
//! # Ok::<(), api_pagination::Error>(())
//! ```
//!
//! Out-of-range pages are supported inputs, not errors: requesting page 6 of
//! a 5-page set reports `previous_page == Some(5)` and no next page, so an
//! API layer can always point the caller back into the valid range.
//!
//! All results serialize to the fixed nested shape
//! `{overall: {first_page, last_page, pages, total}, page: {current_page,
//! previous_page, next_page}}` with absent links rendered as explicit nulls.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the crate
pub mod error;

/// The paginator and its result types
pub mod paginator;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use paginator::{page_info, Overall, PageInfo, Paginator, Position, FIRST_PAGE};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
