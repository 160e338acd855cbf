//! Bookshelf Store - file-backed catalogue persistence
//!
//! Provides:
//! - JSON and YAML codecs for the `books` document
//! - Atomic temp→rename file writes
//! - `FileCatalogueManager`, the `BookManager` backed by a single file

pub mod codec;
pub mod errors;
pub mod fs;
pub mod manager;

// Re-export key types
pub use codec::CatalogueFormat;
pub use errors::Result;
pub use manager::{FileCatalogueManager, ManagerOptions};
