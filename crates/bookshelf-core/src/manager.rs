//! Catalogue manager capability
//!
//! Calling code drives a catalogue through this trait so that the
//! persistence backend (file format, storage engine) can be swapped without
//! touching callers.

use std::path::Path;

use crate::errors::ExError;
use crate::model::Book;

/// Load/mutate/query/save capability over a single catalogue
pub trait BookManager {
    /// Borrow the live collection
    fn books(&self) -> &[Book];

    /// Mutable view of the live collection
    ///
    /// This is not a copy: edits made through the returned vector change the
    /// manager's state and are written by the next `save`. Clone the slice
    /// first if independent data is needed.
    fn books_mut(&mut self) -> &mut Vec<Book>;

    /// Append a book. Never fails.
    fn add_book(&mut self, book: Book);

    /// Sort in place by author then title (case-insensitive) and return the
    /// reordered collection
    fn sort_alphabetically(&mut self) -> &[Book];

    /// Books whose title contains `needle`, ignoring case
    fn search_by_name(&self, needle: &str) -> Vec<Book>;

    /// Persist the full collection to `path`, or to the manager's own path
    /// when `None`
    ///
    /// # Errors
    ///
    /// Returns an `Io` error when the write fails and a `Serialization` error
    /// when the collection cannot be encoded.
    fn save(&self, path: Option<&Path>) -> Result<(), ExError>;
}
