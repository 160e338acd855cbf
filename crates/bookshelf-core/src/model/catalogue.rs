use serde::{Deserialize, Serialize};

use super::book::Book;
use crate::ops;

/// Catalogue - the ordered collection of books owned by one manager
///
/// Serializes as the `books` root document: `{"books": [ ... ]}`. Unknown
/// root keys and a missing `books` key are rejected so that a document with
/// the wrong shape never decodes into an empty catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Catalogue {
    books: Vec<Book>,
}

impl Catalogue {
    /// Create an empty Catalogue
    pub fn new() -> Self {
        Self { books: Vec::new() }
    }

    /// Wrap an existing list of books, keeping its order
    pub fn from_books(books: Vec<Book>) -> Self {
        Self { books }
    }

    /// Borrow the live collection
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Mutable view of the live collection
    ///
    /// Changes made through the returned vector are the catalogue's state.
    pub fn books_mut(&mut self) -> &mut Vec<Book> {
        &mut self.books
    }

    pub fn into_books(self) -> Vec<Book> {
        self.books
    }

    /// Append a book at the end. No duplicate checks.
    pub fn push(&mut self, book: Book) {
        self.books.push(book);
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Sort in place by author then title, ignoring case
    pub fn sort_alphabetically(&mut self) -> &[Book] {
        ops::sort_by_author_then_title(&mut self.books);
        &self.books
    }

    /// Books whose title contains `needle`, ignoring case
    pub fn search_by_title(&self, needle: &str) -> Vec<Book> {
        ops::search_by_title(&self.books, needle)
    }
}

impl From<Vec<Book>> for Catalogue {
    fn from(books: Vec<Book>) -> Self {
        Self::from_books(books)
    }
}
