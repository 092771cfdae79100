pub mod domain;

pub use domain::BookId;
pub use domain::model::Book;
