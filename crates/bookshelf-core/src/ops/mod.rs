pub mod ordering;
pub mod search;

pub use ordering::{compare_ignore_case, sort_by_author_then_title};
pub use search::{contains_ignore_case, fold_case, search_by_title};
