// Save → reopen through a fresh manager yields the same sequence.

use bookshelf_core::{Book, BookManager};
use bookshelf_store::FileCatalogueManager;
use proptest::prelude::*;
use tempfile::TempDir;

fn arb_book() -> impl Strategy<Value = Book> {
    ("[a-zA-Z0-9 .,:'#-]{0,16}", "[a-zA-Z0-9 .,:'#-]{0,16}", any::<i32>())
        .prop_map(|(title, author, pages)| Book::new(title, author, pages))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_save_reload_preserves_books(
        books in prop::collection::vec(arb_book(), 0..12),
        yaml in any::<bool>(),
    ) {
        let dir = TempDir::new().unwrap();
        let name = if yaml { "books.yaml" } else { "books.json" };
        let path = dir.path().join(name);

        let mut manager = FileCatalogueManager::open(&path, true).unwrap();
        for book in &books {
            manager.add_book(book.clone());
        }
        manager.save(None).unwrap();

        let reopened = FileCatalogueManager::open(&path, false).unwrap();
        prop_assert_eq!(reopened.books(), books.as_slice());
    }
}
