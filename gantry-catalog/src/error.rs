//! Catalog error types.

use thiserror::Error;

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors surfaced by catalog queries.
///
/// These are recoverable values, never faults: callers fall back to
/// explicit field specs when introspection is unavailable.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Establishing the catalog connection failed.
    #[error("catalog connection failed: {0}")]
    Connection(#[source] tokio_postgres::Error),

    /// A metadata query failed.
    #[error("catalog query failed: {0}")]
    Query(#[from] tokio_postgres::Error),

    /// A query returned a row the reader could not interpret.
    #[error("unexpected catalog row: {message}")]
    UnexpectedRow {
        /// What the reader expected and what it saw.
        message: String,
    },
}
