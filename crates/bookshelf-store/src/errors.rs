//! Error handling for bookshelf-store
//!
//! Wraps bookshelf-core ExError with store-specific helpers

use bookshelf_core::errors::{BookshelfError, ExError};
use std::path::Path;

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Catalogue file is absent and creation was not requested
pub fn not_found(path: &Path) -> ExError {
    BookshelfError::CatalogueNotFound {
        path: path.to_path_buf(),
    }
    .into()
}

/// Catalogue file could not be decoded into the books schema
pub fn corrupt_data(path: &Path, reason: impl std::fmt::Display) -> ExError {
    BookshelfError::CorruptCatalogue {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    }
    .into()
}

/// Encoding the catalogue failed
pub fn serialization(err: impl std::fmt::Display) -> ExError {
    BookshelfError::Serialization {
        message: err.to_string(),
    }
    .into()
}

/// Create an IO error
pub fn io_error(operation: &str, path: &Path, err: std::io::Error) -> ExError {
    BookshelfError::Io {
        op: operation.to_string(),
        path: path.to_path_buf(),
        message: err.to_string(),
    }
    .into()
}
