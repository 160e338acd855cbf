//! Property tests for catalogue sort and search

use std::cmp::Ordering;

use bookshelf_core::ops::{compare_ignore_case, fold_case};
use bookshelf_core::{Book, Catalogue};
use proptest::prelude::*;

fn arb_book() -> impl Strategy<Value = Book> {
    ("[a-zA-ZΟοΔδΣσς ]{0,12}", "[a-zA-Z. ]{0,12}", 0i32..2000)
        .prop_map(|(title, author, pages)| Book::new(title, author, pages))
}

fn arb_catalogue() -> impl Strategy<Value = Catalogue> {
    prop::collection::vec(arb_book(), 0..24).prop_map(Catalogue::from_books)
}

proptest! {
    #[test]
    fn prop_sorted_pairs_are_ordered(mut catalogue in arb_catalogue()) {
        let sorted = catalogue.sort_alphabetically();
        for pair in sorted.windows(2) {
            let key = |b: &Book| (fold_case(&b.author), fold_case(&b.title));
            prop_assert!(key(&pair[0]) <= key(&pair[1]));
        }
    }

    #[test]
    fn prop_sort_keeps_every_book(catalogue in arb_catalogue()) {
        let mut sorted = catalogue.clone();
        sorted.sort_alphabetically();

        let canonical = |c: &Catalogue| {
            let mut books = c.books().to_vec();
            books.sort_by(|a, b| {
                a.title.cmp(&b.title)
                    .then_with(|| a.author.cmp(&b.author))
                    .then_with(|| a.pages.cmp(&b.pages))
            });
            books
        };
        prop_assert_eq!(canonical(&catalogue), canonical(&sorted));
    }

    #[test]
    fn prop_search_includes_iff_substring(catalogue in arb_catalogue(), needle in "[a-zA-ZΣσς]{0,3}") {
        let results = catalogue.search_by_title(&needle);
        let expected: Vec<Book> = catalogue
            .books()
            .iter()
            .filter(|b| fold_case(&b.title).contains(&fold_case(&needle)))
            .cloned()
            .collect();
        prop_assert_eq!(results, expected);
    }

    #[test]
    fn prop_literal_substring_always_matches(
        prefix in "[a-zA-ZΟοΔδΣσς ]{0,6}",
        middle in "[a-zA-ZΟοΔδΣσς]{1,4}",
        suffix in "[a-zA-ZΟοΔδΣσς ]{0,6}",
    ) {
        let title = format!("{prefix}{middle}{suffix}");
        let catalogue = Catalogue::from_books(vec![Book::new(title, "A", 1)]);
        prop_assert_eq!(catalogue.search_by_title(&middle).len(), 1);
    }

    #[test]
    fn prop_search_symmetric_under_case(catalogue in arb_catalogue(), needle in "[a-zA-Z]{0,3}") {
        prop_assert_eq!(
            catalogue.search_by_title(&needle.to_uppercase()),
            catalogue.search_by_title(&needle.to_lowercase())
        );
    }

    #[test]
    fn prop_compare_is_antisymmetric(a in "[a-zA-Z]{0,8}", b in "[a-zA-Z]{0,8}") {
        prop_assert_eq!(compare_ignore_case(&a, &b), compare_ignore_case(&b, &a).reverse());
        prop_assert_eq!(compare_ignore_case(&a, &a.to_uppercase()), Ordering::Equal);
    }
}
