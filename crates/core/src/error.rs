//! Domain error model.

use thiserror::Error;

use crate::id::BookId;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures. Expected
/// rejections (inactive borrower, no copies left) are not errors; they are
/// reported as `false` by the lending operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An argument was rejected at a function boundary.
    ///
    /// The message is surfaced verbatim to the caller.
    #[error("{0}")]
    InvalidArgument(String),

    /// A value failed validation (e.g. a malformed policy).
    #[error("validation failed: {0}")]
    Validation(String),

    /// The book is not present in the catalog.
    ///
    /// Distinct from a book that is present with zero available copies.
    #[error("book not found: {0}")]
    BookNotFound(BookId),
}

impl DomainError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn book_not_found(book_id: BookId) -> Self {
        Self::BookNotFound(book_id)
    }
}
