//! Error types for catalog operations.
//!
//! This module provides the [`CatalogError`] type for all catalog library
//! operations and the [`Result`] convenience type.

use thiserror::Error;

/// Error type for all catalog library operations.
///
/// Represents the error conditions that can occur while reading, validating,
/// or writing catalog records. Note that malformed dialect text is *not* an
/// error condition: the parser degrades to default field values or dropped
/// records, reporting problems through
/// [`ParseReport`](crate::reader::ParseReport) instead.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Error indicating a record that failed validation.
    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    /// Error indicating catalog-level input that cannot be interpreted.
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Error from the generic JSON loader.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// IO error from the underlying source/destination.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Convenience type alias for [`std::result::Result`] with [`CatalogError`].
pub type Result<T> = std::result::Result<T, CatalogError>;
