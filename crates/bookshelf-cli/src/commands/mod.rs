pub mod mutate;
pub mod query;

use bookshelf_core::Book;
use bookshelf_store::{FileCatalogueManager, Result};
use std::path::PathBuf;

/// Catalogue file selected by the global flags
#[derive(Debug)]
pub struct Target {
    pub path: PathBuf,
    pub create_if_missing: bool,
}

impl Target {
    pub fn open(&self) -> Result<FileCatalogueManager> {
        FileCatalogueManager::open(&self.path, self.create_if_missing)
    }
}

/// One line per book: `author — title (pages)`
pub fn print_books(books: &[Book]) {
    for book in books {
        println!("{} — {} ({})", book.author, book.title, book.pages);
    }
}
