//! Title search
//!
//! Linear scan over the collection; matching is a case-insensitive
//! substring test on the title only.

use crate::model::Book;

/// Lowercase `s` one `char` at a time
///
/// Same mapping the sort comparator uses; no context-sensitive rules
/// such as Greek final sigma are applied.
pub fn fold_case(s: &str) -> String {
    s.chars().flat_map(char::to_lowercase).collect()
}

/// Check whether `haystack` contains `needle`, ignoring case
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    // Empty needle matches without folding the haystack
    if needle.is_empty() {
        return true;
    }
    fold_case(haystack).contains(&fold_case(needle))
}

/// Return copies of every book whose title contains `needle`
///
/// Order follows the collection. No match yields an empty vector.
pub fn search_by_title(books: &[Book], needle: &str) -> Vec<Book> {
    books
        .iter()
        .filter(|book| contains_ignore_case(&book.title, needle))
        .cloned()
        .collect()
}
