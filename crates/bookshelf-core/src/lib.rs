//! Bookshelf Core - in-memory catalogue kernel
//!
//! This crate provides:
//! - `Book` and `Catalogue` models with the `books` document shape
//! - Case-insensitive sort and title search operations
//! - The `BookManager` capability trait implemented by persistence backends
//! - The canonical error facility (`ExError`, `ExErrorKind`, `BookshelfError`)
//! - The structured logging facility and its macros

pub mod errors;
pub mod logging_facility;
pub mod manager;
pub mod model;
pub mod ops;

// Re-export commonly used types
pub use errors::{BookshelfError, ExError, ExErrorKind};
pub use manager::BookManager;
pub use model::{Book, Catalogue};
