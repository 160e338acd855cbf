pub mod book;
pub mod catalogue;

pub use book::Book;
pub use catalogue::Catalogue;
