//! Error types for api-pagination
//!
//! All public APIs return `Result<T, Error>` where Error is defined here.
//! The only runtime failure is a caller contract violation; the calculation
//! itself always produces a result for valid inputs.

use thiserror::Error;

/// The main error type for api-pagination
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A page size of zero makes the page count undefined. This is the
    /// caller's contract violation and is never caught internally.
    #[error("items_per_page must be positive, got 0")]
    ZeroItemsPerPage,

    /// The computed page count does not fit in a signed page index.
    #[error("page count {pages} exceeds the representable page index range")]
    PageCountOverflow {
        /// The page count that could not be converted
        pages: u64,
    },
}

/// Result type alias for api-pagination
pub type Result<T> = std::result::Result<T, Error>;
