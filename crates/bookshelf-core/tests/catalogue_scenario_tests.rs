use bookshelf_core::{Book, Catalogue};

fn library() -> Catalogue {
    Catalogue::from_books(vec![
        Book::new("The Hobbit", "J.R.R. Tolkien", 310),
        Book::new("It", "Stephen King", 1138),
        Book::new("The Shining", "Stephen King", 447),
        Book::new("Dune", "Frank Herbert", 412),
    ])
}

#[test]
fn test_push_grows_by_exactly_one() {
    let mut catalogue = library();
    let before = catalogue.len();

    catalogue.push(Book::new("Test Book", "Test Author", 123));

    assert_eq!(catalogue.len(), before + 1);
    assert!(catalogue
        .books()
        .contains(&Book::new("The Hobbit", "J.R.R. Tolkien", 310)));
    assert_eq!(
        catalogue.books().last(),
        Some(&Book::new("Test Book", "Test Author", 123))
    );
}

#[test]
fn test_push_allows_duplicates() {
    let mut catalogue = Catalogue::new();
    catalogue.push(Book::new("Twin", "Same", 1));
    catalogue.push(Book::new("Twin", "Same", 1));
    assert_eq!(catalogue.len(), 2);
}

#[test]
fn test_sort_by_author_then_title() {
    let mut catalogue = library();
    let titles: Vec<String> = catalogue
        .sort_alphabetically()
        .iter()
        .map(|b| b.title.clone())
        .collect();

    assert_eq!(titles, vec!["Dune", "The Hobbit", "It", "The Shining"]);
}

#[test]
fn test_sort_returns_live_collection() {
    let mut catalogue = library();
    let returned = catalogue.sort_alphabetically().to_vec();
    assert_eq!(returned, catalogue.books());
}

#[test]
fn test_sort_mixed_case_scenario() {
    let mut catalogue = Catalogue::from_books(vec![
        Book::new("Btitle", "Btitle", 0),
        Book::new("aTitle", "aAuthor", 0),
    ]);

    let sorted = catalogue.sort_alphabetically();
    assert_eq!(sorted[0].author, "aAuthor");
}

#[test]
fn test_search_returns_independent_copies() {
    let mut catalogue = library();
    let mut results = catalogue.search_by_title("the");
    results[0].title = "Changed".to_string();

    assert_eq!(catalogue.books()[0].title, "The Hobbit");

    catalogue.books_mut().clear();
    assert_eq!(results.len(), 2);
}

#[test]
fn test_into_books_keeps_order() {
    let books = library().into_books();
    assert_eq!(books[0].title, "The Hobbit");
    assert_eq!(books[3].title, "Dune");
}
