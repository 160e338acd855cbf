//! Case-insensitive ordering for catalogue sorting
//!
//! Comparison is ordinal over the lowercase mapping of each `char`. No
//! locale-aware collation is involved, so results are identical on every
//! platform.

use std::cmp::Ordering;

use crate::model::Book;

/// Compare two strings ordinally, ignoring case
pub fn compare_ignore_case(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

/// Sort books in place by author, then title, both ignoring case
///
/// The sort is stable: books with equal keys keep their relative order.
pub fn sort_by_author_then_title(books: &mut [Book]) {
    books.sort_by(|a, b| {
        compare_ignore_case(&a.author, &b.author)
            .then_with(|| compare_ignore_case(&a.title, &b.title))
    });
}
