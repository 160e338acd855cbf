use serde::{Deserialize, Serialize};

/// Book - a single catalogue record
///
/// A title/author/page-count triple. Records have no identity of their own;
/// two books with the same fields are indistinguishable.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Book {
    /// Book title, matched by `search_by_name`
    #[serde(default)]
    pub title: String,

    /// Author name, primary sort key
    #[serde(default)]
    pub author: String,

    /// Page count (expected non-negative, not validated)
    #[serde(default)]
    pub pages: i32,
}

impl Book {
    /// Create a new Book
    ///
    /// # Arguments
    /// * `title` - Book title
    /// * `author` - Author name
    /// * `pages` - Page count
    pub fn new(title: impl Into<String>, author: impl Into<String>, pages: i32) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            pages,
        }
    }
}
